/// Decimal precision for values and percentages exposed to reporting
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Hard cap on long-division iterations, guarding repeating decimals.
pub const DEFAULT_MAX_FRAC_DIGITS: usize = 200;

/// Display configuration shared by all formatters. Plain immutable value
/// record; named presets below are const bindings, not singletons.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormatOptions {
    /// Inserted every 3 integer digits from the right; empty disables grouping.
    pub group_sep: &'static str,
    /// Separates the integer and fractional parts.
    pub decimal_sep: &'static str,
    /// Unicode subscript digits for the zero-skip marker, ASCII `(n)` otherwise.
    pub use_subscript: bool,
    /// Fractional digits displayed after any skipped/leading zeros. Truncates
    /// the already-expanded digit string, never rounds.
    pub mantissa_digits: usize,
    /// Iteration budget for the decimal expansion.
    pub max_frac_digits: usize,
}

/// `1,234,567.89` style.
pub const EN_FORMAT: FormatOptions = FormatOptions {
    group_sep: ",",
    decimal_sep: ".",
    use_subscript: true,
    mantissa_digits: 6,
    max_frac_digits: DEFAULT_MAX_FRAC_DIGITS,
};

/// `1.234.567,89` style.
pub const EU_FORMAT: FormatOptions = FormatOptions {
    group_sep: ".",
    decimal_sep: ",",
    use_subscript: true,
    mantissa_digits: 6,
    max_frac_digits: DEFAULT_MAX_FRAC_DIGITS,
};

/// No grouping, ASCII zero-skip marker. Suited to logs and plain terminals.
pub const PLAIN_FORMAT: FormatOptions = FormatOptions {
    group_sep: "",
    decimal_sep: ".",
    use_subscript: false,
    mantissa_digits: 6,
    max_frac_digits: DEFAULT_MAX_FRAC_DIGITS,
};

impl Default for FormatOptions {
    fn default() -> FormatOptions { EN_FORMAT }
}

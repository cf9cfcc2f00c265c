//! Display formatting for probe values.
//!
//! Pure presentation helpers; the numeric values in the model are never
//! altered by them.

/// Format a KB quantity: `"1024 KB"`. Negative values are kept as-is.
pub fn format_kb(kb: i64) -> String {
    format!("{} KB", kb)
}

/// Format a cache size: `"512 KB"`.
pub fn format_cache(kb: u64) -> String {
    format!("{} KB", kb)
}

/// Format a clock speed with up to three decimals: `"1000 MHZ"`, `"2394.454 MHZ"`.
pub fn format_mhz(mhz: f64) -> String {
    let fixed = format!("{:.3}", mhz);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} MHZ", trimmed)
}

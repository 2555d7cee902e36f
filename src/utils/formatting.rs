//! Formatting utilities used for CLI outputs.

/// Compact decimal rendering: at most `decimals` digits, trailing zeros dropped.
pub fn trim_number(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

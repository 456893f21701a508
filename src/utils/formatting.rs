//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Worked minutes as `08h 25m`.
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };

    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

//! Status lines for CLI output.

use console::style;

/// Print a success message (green checkmark)
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an indented step under the current file
pub fn step(message: &str) {
    println!("  {} {}", style("✓").green(), message);
}

/// Print a warning message (yellow)
pub fn warning(message: &str) {
    println!("{} {}", style("⚠").yellow().bold(), message);
}

/// Human readable byte count with thousands separators, e.g. `12,345`.
pub fn format_bytes(bytes: usize) -> String {
    let digits = bytes.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0");
        assert_eq!(format_bytes(999), "999");
        assert_eq!(format_bytes(1000), "1,000");
        assert_eq!(format_bytes(1234567), "1,234,567");
    }
}

//! Currency formatting

/// Format a whole amount as `<symbol><digits>` with comma thousands
/// separators, e.g. `$12,345`. Negative amounts keep the sign after the
/// symbol: `$-1,234`.
pub fn format_currency(amount: i64, symbol: &str) -> String {
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}{}", symbol, sign, grouped)
}

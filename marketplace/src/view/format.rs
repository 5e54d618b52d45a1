//! Text formatting helpers shared by the page renderers

/// Format an amount as Brazilian reais, pt-BR style.
///
/// Thousands use `.`, decimals use `,`, and at most two fraction digits
/// are shown with trailing zeros dropped: `R$ 1.500`, `R$ 99,9`.
/// The symbol is followed by a no-break space.
pub fn format_brl(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut out = String::new();
    if amount < 0.0 && cents > 0 {
        out.push('-');
    }
    out.push_str("R$\u{a0}");
    out.push_str(&group_thousands(whole));

    if fraction != 0 {
        if fraction % 10 == 0 {
            out.push_str(&format!(",{}", fraction / 10));
        } else {
            out.push_str(&format!(",{:02}", fraction));
        }
    }

    out
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Format a number for an `<input type="number">` value
pub fn format_number_input(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brl_whole_amounts() {
        assert_eq!(format_brl(0.0), "R$\u{a0}0");
        assert_eq!(format_brl(500.0), "R$\u{a0}500");
        assert_eq!(format_brl(2000.0), "R$\u{a0}2.000");
        assert_eq!(format_brl(1_590_000.0), "R$\u{a0}1.590.000");
    }

    #[test]
    fn brl_fraction_digits() {
        assert_eq!(format_brl(99.9), "R$\u{a0}99,9");
        assert_eq!(format_brl(1234.56), "R$\u{a0}1.234,56");
        assert_eq!(format_brl(10.05), "R$\u{a0}10,05");
        assert_eq!(format_brl(1.999), "R$\u{a0}2");
    }

    #[test]
    fn brl_negative() {
        assert_eq!(format_brl(-1500.0), "-R$\u{a0}1.500");
    }

    #[test]
    fn escape_html_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">R&D's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("operação"), "operação");
    }

    #[test]
    fn number_input() {
        assert_eq!(format_number_input(100000.0), "100000");
        assert_eq!(format_number_input(99.5), "99.5");
    }
}

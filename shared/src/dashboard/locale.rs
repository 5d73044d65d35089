//! Brazilian Portuguese names used by the dashboard labels and the calendar.

use chrono::Weekday;

/// Single-letter weekday headers, Sunday first
pub const WEEKDAYS_SHORT: [&str; 7] = ["D", "S", "T", "Q", "Q", "S", "S"];

/// Lowercase month name, as it appears inside a sentence
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "janeiro",
        2 => "fevereiro",
        3 => "março",
        4 => "abril",
        5 => "maio",
        6 => "junho",
        7 => "julho",
        8 => "agosto",
        9 => "setembro",
        10 => "outubro",
        11 => "novembro",
        12 => "dezembro",
        _ => "janeiro",
    }
}

/// Capitalized month name for the calendar caption
pub fn month_title(month: u32) -> String {
    capitalize(month_name(month))
}

/// Standalone weekday name, without the "-feira" suffix
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "domingo",
        Weekday::Mon => "segunda",
        Weekday::Tue => "terça",
        Weekday::Wed => "quarta",
        Weekday::Thu => "quinta",
        Weekday::Fri => "sexta",
        Weekday::Sat => "sábado",
    }
}

/// Uppercase the first character; works on multi-byte letters
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(3), "março");
        assert_eq!(month_title(12), "Dezembro");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("sábado"), "Sábado");
        assert_eq!(capitalize("ébano"), "Ébano");
        assert_eq!(capitalize(""), "");
    }
}

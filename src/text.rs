//! String helpers for personal names and phone numbers.

use crate::config::DEFAULT_PHONE_COUNTRY_CODE;

/// Title-cases each whitespace-separated word and collapses the separators.
///
/// `"jOHN   doe"` becomes `"John Doe"`. Apostrophes and digits stay inside
/// their word, so `"o'CONNOR"` becomes `"O'connor"`.
#[must_use]
pub fn capitalize_name(name: &str) -> String {
    name.split_whitespace().map(capitalize_word).collect::<Vec<_>>().join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
}

/// Normalizes a phone number to the default `62` international prefix.
///
/// See [`normalize_phone_number_with`].
#[must_use]
pub fn normalize_phone_number(phone: &str) -> String {
    normalize_phone_number_with(phone, DEFAULT_PHONE_COUNTRY_CODE)
}

/// Strips everything but ASCII digits and rewrites the prefix:
///
/// - already starting with `country_code`: kept as is
/// - leading `0`: replaced by `country_code`
/// - leading `8`: `country_code` prepended
/// - anything else: returned digits-only
#[must_use]
pub fn normalize_phone_number_with(phone: &str, country_code: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    if digits.starts_with(country_code) {
        digits
    } else if let Some(rest) = digits.strip_prefix('0') {
        format!("{country_code}{rest}")
    } else if digits.starts_with('8') {
        format!("{country_code}{digits}")
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_names() {
        let cases = [
            ("jOHN doe", "John Doe"),
            ("ALICE", "Alice"),
            ("bob smith", "Bob Smith"),
            ("", ""),
            ("  john   doe  ", "John Doe"),
            ("éLÉOnore d'ARTAGNAN", "Éléonore D'artagnan"),
            ("mArY aNnE o'connor", "Mary Anne O'connor"),
            ("123 abc", "123 Abc"),
            ("a", "A"),
            ("A", "A"),
            ("  ", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(capitalize_name(input), expected, "capitalize_name({input:?})");
        }
    }

    #[test]
    fn tabs_and_newlines_separate_words() {
        assert_eq!(capitalize_name("ada\tLOVELACE\nbyron"), "Ada Lovelace Byron");
    }

    #[test]
    fn normalizes_indonesian_numbers() {
        let cases = [
            ("628123456789", "628123456789"),
            ("08123456789", "628123456789"),
            ("8123456789", "628123456789"),
            ("+62 812-3456-789", "628123456789"),
            ("(0812) 3456-789", "628123456789"),
            ("62-812-3456-789", "628123456789"),
            ("abc", ""),
            ("", ""),
            ("+0812-3456-789", "628123456789"),
            ("62 812 3456 789", "628123456789"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_phone_number(input), expected, "normalize_phone_number({input:?})");
        }
    }

    #[test]
    fn unknown_prefix_is_left_alone() {
        assert_eq!(normalize_phone_number("+1 (555) 010-0000"), "15550100000");
    }

    #[test]
    fn other_country_codes() {
        assert_eq!(normalize_phone_number_with("0812 3456", "65"), "658123456");
        assert_eq!(normalize_phone_number_with("+65 9123 4567", "65"), "6591234567");
        assert_eq!(normalize_phone_number_with("81234567", "65"), "6581234567");
    }
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Title case: a cased character directly after an uncased one (or at the
/// start) is uppercased, every other cased character is lowercased.
///
/// Word boundaries are not whitespace-based, so `"they're"` becomes
/// `"They'Re"` and `"x-ray"` becomes `"X-Ray"`.
pub fn title(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        if previous_cased {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_cased = is_cased(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_table_driven() {
        let test_cases = vec![
            ("", ""),
            ("hello", "Hello"),
            ("hELLO wORLD", "Hello world"),
            (" leading space", " leading space"),
            ("ärger", "Ärger"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(capitalize(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_title_table_driven() {
        let test_cases = vec![
            ("", ""),
            ("the quick brown fox", "The Quick Brown Fox"),
            ("HELLO wORLD", "Hello World"),
            ("they're x-ray", "They'Re X-Ray"),
            ("1st place", "1St Place"),
            ("  spaced   out ", "  Spaced   Out "),
        ];

        for (input, expected) in test_cases {
            assert_eq!(title(input), expected, "input: {:?}", input);
        }
    }
}

//! ASCII casing helpers used to derive naming variables.

/// Split an identifier into words.
///
/// Word boundaries are ASCII punctuation and whitespace, a lowercase letter
/// or digit followed by an uppercase letter, and the last capital of an
/// acronym followed by a lowercase letter (`HTMLParser` -> `HTML`, `Parser`).
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_punctuation() || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_ascii_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Uppercase the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}

/// Convert a string to StudlyCase (e.g., "ecommerce_order" -> "EcommerceOrder")
pub fn to_studly_case(s: &str) -> String {
    split_words(s).iter().map(|w| upper_first(w)).collect()
}

/// Convert a string to snake_case (e.g., "EcommerceOrder" -> "ecommerce_order")
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

//! English pluralization driven by a fixed rule table.
//!
//! Only the last word of an identifier is inflected, so
//! `ecommerce_order_creator` becomes `ecommerce_order_creators` and
//! `EcommerceOrder` becomes `EcommerceOrders`.

const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
];

/// (singular, plural)
const IRREGULAR: &[(&str, &str)] = &[
    ("alias", "aliases"),
    ("child", "children"),
    ("cookie", "cookies"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("half", "halves"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("man", "men"),
    ("mouse", "mice"),
    ("movie", "movies"),
    ("ox", "oxen"),
    ("person", "people"),
    ("quiz", "quizzes"),
    ("shelf", "shelves"),
    ("tooth", "teeth"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

/// Words ending in `us` whose plural adds `es`.
const US_WORDS: &[&str] = &[
    "bonus", "bus", "campus", "census", "focus", "status", "virus",
];

/// Pluralize the last word of `s`, preserving its casing.
pub fn pluralize(s: &str) -> String {
    inflect_last_word(s, plural_of)
}

/// Singularize the last word of `s`, preserving its casing.
pub fn singularize(s: &str) -> String {
    inflect_last_word(s, singular_of)
}

fn plural_of(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return plural.to_string();
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == word) {
        return word.to_string();
    }

    if word.ends_with("ss") || word.ends_with("us") {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix("is") {
        return format!("{stem}es");
    }
    if word.ends_with('s') {
        // already plural
        return word.to_string();
    }
    if word.ends_with('x') || word.ends_with('z') || word.ends_with("ch") || word.ends_with("sh") {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}

fn singular_of(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == word) {
        return singular.to_string();
    }
    if IRREGULAR.iter().any(|(singular, _)| *singular == word) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("es") {
        if US_WORDS.iter().any(|us| stem.ends_with(us)) || stem.ends_with("ss") {
            return stem.to_string();
        }
        if let Some(root) = stem.strip_suffix("ys") {
            return format!("{root}ysis");
        }
        if stem.ends_with('x') || stem.ends_with('z') || stem.ends_with("ch") || stem.ends_with("sh")
        {
            return stem.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('s') {
        if !stem.is_empty() {
            return stem.to_string();
        }
    }
    word.to_string()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Apply `rule` to the last word of `s`.
///
/// The last word starts after the final ASCII separator or at the final
/// lower-to-upper camel boundary.
fn inflect_last_word(s: &str, rule: fn(&str) -> String) -> String {
    let start = last_word_start(s);
    let (head, tail) = s.split_at(start);
    if tail.is_empty() {
        return s.to_string();
    }

    let inflected = rule(&tail.to_ascii_lowercase());
    format!("{head}{}", match_case(tail, &inflected))
}

fn last_word_start(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut start = 0;
    for i in 0..bytes.len() {
        let c = bytes[i];
        if !c.is_ascii_alphanumeric() && c.is_ascii() {
            start = i + 1;
        } else if i > 0
            && c.is_ascii_uppercase()
            && (bytes[i - 1].is_ascii_lowercase() || bytes[i - 1].is_ascii_digit())
        {
            start = i;
        }
    }
    start
}

fn match_case(original: &str, inflected: &str) -> String {
    let all_upper = original.len() > 1 && original.chars().all(|c| !c.is_ascii_lowercase());
    if all_upper {
        return inflected.to_ascii_uppercase();
    }
    if original.starts_with(|c: char| c.is_ascii_uppercase()) {
        return crate::case::upper_first(inflected);
    }
    inflected.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_regular() {
        assert_eq!(pluralize("order"), "orders");
        assert_eq!(pluralize("Order"), "Orders");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("match"), "matches");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("class"), "classes");
        assert_eq!(pluralize("status"), "statuses");
        assert_eq!(pluralize("analysis"), "analyses");
    }

    #[test]
    fn test_pluralize_is_idempotent_on_plurals() {
        assert_eq!(pluralize("orders"), "orders");
        assert_eq!(pluralize(&pluralize("order")), "orders");
        assert_eq!(pluralize("people"), "people");
    }

    #[test]
    fn test_pluralize_irregular_and_uncountable() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("sheep"), "sheep");
        assert_eq!(pluralize("news"), "news");
    }

    #[test]
    fn test_pluralize_last_word_only() {
        assert_eq!(pluralize("ecommerce_order_creator"), "ecommerce_order_creators");
        assert_eq!(pluralize("EcommerceOrderCreator"), "EcommerceOrderCreators");
        assert_eq!(pluralize("sales_person"), "sales_people");
        assert_eq!(pluralize("API"), "APIS");
        assert_eq!(pluralize(""), "");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("orders"), "order");
        assert_eq!(singularize("order"), "order");
        assert_eq!(singularize("Orders"), "Order");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("classes"), "class");
        assert_eq!(singularize("class"), "class");
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("analyses"), "analysis");
        assert_eq!(singularize("cases"), "case");
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("movies"), "movie");
        assert_eq!(singularize("ecommerce_order_creators"), "ecommerce_order_creator");
    }
}

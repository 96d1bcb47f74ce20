// Proper-case normalization for Spanish/Portuguese place names

/// Articles, prepositions and conjunctions kept lowercase unless they open the phrase.
pub const FUNCTION_WORDS: &[&str] = &[
    "de", "del", "la", "el", "los", "las", "y", "en", "con", "por", "para", "al", "da", "do",
    "dos", "das", "e", "o", "a", "ao", "aos", "as",
];

pub fn is_function_word(word: &str) -> bool {
    FUNCTION_WORDS.contains(&word)
}

/// Converts a raw name (usually upper case) into proper case
/// (e.g., "SAN FRANCISCO DE QUITO" -> "San Francisco de Quito").
///
/// The text is lowercased and split on single spaces, so runs of spaces
/// survive as empty tokens and come back out unchanged.
pub fn to_proper_case(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.to_lowercase()
        .split(' ')
        .enumerate()
        .map(|(index, word)| capitalize_word(word, index == 0))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalizes a single lowercased token.
///
/// A leading `(` is stripped and the rest is treated as the first word of a
/// phrase, so "(la" becomes "(La". Closing parentheses get no special treatment.
pub fn capitalize_word(word: &str, is_first_word: bool) -> String {
    if word.is_empty() {
        return String::new();
    }

    if let Some(inner) = word.strip_prefix('(') {
        return format!("({}", capitalize_word(inner, true));
    }

    if !is_first_word && is_function_word(word) {
        return word.to_string();
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(to_proper_case(""), "");
        assert_eq!(capitalize_word("", true), "");
    }

    #[test]
    fn function_words_are_lowercased_mid_phrase() {
        assert_eq!(to_proper_case("SAN FRANCISCO DE QUITO"), "San Francisco de Quito");
        assert_eq!(to_proper_case("SANTA ROSA DEL AGUA Y LA PAZ"), "Santa Rosa del Agua y la Paz");
    }

    #[test]
    fn leading_function_word_is_capitalized() {
        assert_eq!(to_proper_case("de los santos"), "De los Santos");
        assert_eq!(to_proper_case("EL EMPALME"), "El Empalme");
    }

    #[test]
    fn opening_parenthesis_starts_a_new_phrase() {
        assert_eq!(to_proper_case("(nueva) loja"), "(Nueva) Loja");
        assert_eq!(to_proper_case("SAN JOSE (DE CHAZO)"), "San Jose (De Chazo)");
        assert_eq!(capitalize_word("(", false), "(");
    }

    #[test]
    fn closing_parenthesis_is_left_alone() {
        assert_eq!(to_proper_case("PUERTO (EL) TRIUNFO"), "Puerto (El) Triunfo");
        assert_eq!(capitalize_word("de)", false), "De)");
    }

    #[test]
    fn repeated_spaces_are_preserved() {
        assert_eq!(to_proper_case("SAN  PEDRO"), "San  Pedro");
        assert_eq!(to_proper_case(" LOJA"), " Loja");
    }

    #[test]
    fn non_ascii_letters_are_cased() {
        assert_eq!(to_proper_case("BAÑOS DE AGUA SANTA"), "Baños de Agua Santa");
        assert_eq!(to_proper_case("ÑUÑO"), "Ñuño");
        assert_eq!(to_proper_case("ÁLAMOR"), "Álamor");
    }

    #[test]
    fn portuguese_function_words() {
        assert_eq!(to_proper_case("RIO DAS OSTRAS E DO MAR"), "Rio das Ostras e do Mar");
    }

    #[test]
    fn reapplying_to_lowercased_output_is_stable() {
        for raw in [
            "SAN FRANCISCO DE QUITO",
            "(NUEVA) LOJA",
            "DE LOS SANTOS",
            "LA CONCORDIA",
            "SAN  PEDRO DE LA BENDITA",
        ] {
            let once = to_proper_case(raw);
            assert_eq!(to_proper_case(&once.to_lowercase()), once, "input: {raw}");
        }
    }
}

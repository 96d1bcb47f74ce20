use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Strips diacritics and lowercases (e.g., "Baños" -> "banos").
pub fn fold_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

// Lowercase sorts before uppercase at the same position.
fn case_key(s: &str) -> Vec<bool> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

/// Compares two display names the way a locale-aware sort would:
/// base letters first, then accents, then case, then raw code points.
///
/// `"Ñ"` and `"Á"` therefore land next to `"N"` and `"A"` instead of after `"Z"`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold_key(a)
        .cmp(&fold_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(fold_key("Baños"), "banos");
        assert_eq!(fold_key("ÁLAMOR"), "alamor");
    }

    #[test]
    fn accented_initials_sort_with_their_base_letter() {
        let mut names = vec!["Zamora", "Álamor", "Bolívar", "Azogues"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(names, vec!["Álamor", "Azogues", "Bolívar", "Zamora"]);
    }

    #[test]
    fn enye_sorts_near_n() {
        let mut names = vec!["Zaruma", "Ñuño", "Nabón", "Olmedo"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(names, vec!["Nabón", "Ñuño", "Olmedo", "Zaruma"]);
    }

    #[test]
    fn plain_sorts_before_accented_when_letters_match() {
        assert_eq!(locale_cmp("Pelileo", "Pelíleo"), Ordering::Less);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_when_letters_match() {
        assert_eq!(locale_cmp("la Maná", "La Maná"), Ordering::Less);
    }

    #[test]
    fn identical_names_are_equal() {
        assert_eq!(locale_cmp("Quito", "Quito"), Ordering::Equal);
    }
}

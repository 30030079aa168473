use unicode_normalization::UnicodeNormalization;

use crate::romaji::kana_to_romaji;

/// Fold full-width input to its plain form, trim and lowercase
pub fn normalize_answer(text: &str) -> String {
    text.nfkc().collect::<String>().trim().to_lowercase()
}

/// Whether a typed answer matches a kun/on reading.
///
/// In romaji mode the reading is converted to romaji before comparing.
pub fn reading_matches(input: &str, correct: &str, romaji_mode: bool) -> bool {
    let input = normalize_answer(input);
    let correct = normalize_answer(correct);

    if romaji_mode {
        input == kana_to_romaji(&correct)
    } else {
        input == correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kana_answers_compare_directly() {
        assert!(reading_matches(" ひと ", "ひと", false));
        assert!(!reading_matches("hito", "ひと", false));
    }

    #[test]
    fn romaji_answers_are_converted() {
        assert!(reading_matches("Hito", "ひと", true));
        assert!(reading_matches("jin", "ジン", true));
        assert!(!reading_matches("nin", "ジン", true));
    }

    #[test]
    fn full_width_input_is_folded() {
        assert!(reading_matches("ｈｉｔｏ", "ひと", true));
    }
}

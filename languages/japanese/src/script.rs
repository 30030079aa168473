/// CJK Unified Ideographs plus extensions A and B
pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FAF}' | '\u{3400}'..='\u{4DBF}' | '\u{20000}'..='\u{2A6DF}')
}

pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309F}')
}

pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}')
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_scripts() {
        assert!(is_kanji('人'));
        assert!(is_kanji('㐀'));
        assert!(is_kanji('𠀀'));
        assert!(!is_kanji('ひ'));
        assert!(is_hiragana('ひ'));
        assert!(is_katakana('ジ'));
        assert!(is_kana('ー'));
        assert!(!is_kana('a'));
    }
}

use crate::script::is_kanji;

/// A run of example text and the reading shown above it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubySegment {
    pub base: String,
    /// Kanji always carry a reading, possibly empty; other characters none
    pub ruby: Option<String>,
}

impl RubySegment {
    fn plain(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ruby: None,
        }
    }
}

/// Spread `phonetic` over the kanji of `text`.
///
/// Each kanji takes an equal share (rounded up) of the phonetic characters
/// still unassigned. Without a phonetic the text is a single plain segment.
pub fn align_ruby(text: &str, phonetic: Option<&str>) -> Vec<RubySegment> {
    let Some(phonetic) = phonetic.filter(|p| !p.is_empty()) else {
        return vec![RubySegment::plain(text)];
    };

    let chars: Vec<char> = text.chars().collect();
    let reading: Vec<char> = phonetic.chars().collect();
    let mut used = 0;

    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if !is_kanji(c) {
                return RubySegment::plain(c);
            }

            let mut ruby = String::new();
            if used < reading.len() {
                let kanji_after = chars[i + 1..].iter().filter(|&&k| is_kanji(k)).count();
                let remaining = reading.len() - used;
                let share = remaining.div_ceil(kanji_after + 1);
                ruby = reading[used..used + share].iter().collect();
                used += share;
            }

            RubySegment {
                base: c.to_string(),
                ruby: Some(ruby),
            }
        })
        .collect()
}

/// `漢(かん)字(じ)` style rendering for plain-text output
pub fn render_ruby(segments: &[RubySegment]) -> String {
    segments
        .iter()
        .map(|segment| match &segment.ruby {
            Some(ruby) if !ruby.is_empty() => format!("{}({})", segment.base, ruby),
            _ => segment.base.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(text: &str, phonetic: Option<&str>) -> String {
        render_ruby(&align_ruby(text, phonetic))
    }

    #[test]
    fn splits_reading_evenly() {
        assert_eq!(rendered("人間", Some("にんげん")), "人(にん)間(げん)");
    }

    #[test]
    fn earlier_kanji_take_the_remainder() {
        assert_eq!(rendered("大人", Some("おとな")), "大(おと)人(な)");
    }

    #[test]
    fn kana_are_left_plain() {
        assert_eq!(rendered("食べる", Some("た")), "食(た)べる");
        let segments = align_ruby("食べる", Some("た"));
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].ruby, None);
    }

    #[test]
    fn exhausted_reading_leaves_empty_ruby() {
        let segments = align_ruby("日本語", Some("に"));
        assert_eq!(segments[0].ruby.as_deref(), Some("に"));
        assert_eq!(segments[1].ruby.as_deref(), Some(""));
        assert_eq!(segments[2].ruby.as_deref(), Some(""));
    }

    #[test]
    fn missing_phonetic_is_plain_text() {
        assert_eq!(align_ruby("人間", None), vec![RubySegment::plain("人間")]);
        assert_eq!(rendered("人間", Some("")), "人間");
    }
}

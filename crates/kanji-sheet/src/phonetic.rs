use std::sync::LazyLock;

use kanji_core::preprocess::{PhoneticPreprocessor, Preprocessor};
use regex::Regex;

use crate::types::{RichText, TextRun};

/// `<rPh ..><t ..>reading</t></rPh>`, namespace prefix optional
static PHONETIC_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(?:\w+:)?rPh(?:\s[^>]*)?>\s*<(?:\w+:)?t(?:\s[^>]*)?>(.*?)</(?:\w+:)?t>\s*</(?:\w+:)?rPh>")
        .expect("phonetic run pattern is valid")
});

impl RichText {
    /// Raw phonetic text before whitespace cleanup
    fn raw_phonetic(&self) -> Option<String> {
        match self {
            RichText::Markup(markup) => markup_phonetic(markup),
            RichText::Runs(runs) => runs.iter().find_map(run_phonetic),
            RichText::Run(run) => run_phonetic(run),
        }
    }
}

fn run_phonetic(run: &TextRun) -> Option<String> {
    run.phonetic.as_ref().map(|p| p.as_str().to_string())
}

/// Concatenate every phonetic run in document order
fn markup_phonetic(markup: &str) -> Option<String> {
    let mut found = false;
    let mut reading = String::new();

    for caps in PHONETIC_RUN.captures_iter(markup) {
        found = true;
        let raw = &caps[1];
        match quick_xml::escape::unescape(raw) {
            Ok(text) => reading.push_str(&text),
            Err(_) => reading.push_str(raw),
        }
    }

    found.then_some(reading)
}

/// Phonetic reading carried by a cell annotation.
///
/// Whitespace inside the reading is removed. Unknown shapes and empty
/// readings give None.
pub fn extract_phonetic(rich: Option<&RichText>) -> Option<String> {
    let raw = rich?.raw_phonetic()?;
    let reading = PhoneticPreprocessor.process(&raw);
    (!reading.is_empty()).then_some(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phonetic;

    #[test]
    fn markup_with_multiple_runs() {
        let markup = r#"<r><t>人間</t></r><rPh sb="0" eb="1"><t>にん</t></rPh><rPh sb="1" eb="2"><t xml:space="preserve"> げん
            </t></rPh><phoneticPr fontId="1"/>"#;
        let rich = RichText::Markup(markup.to_string());
        assert_eq!(extract_phonetic(Some(&rich)).as_deref(), Some("にんげん"));
    }

    #[test]
    fn markup_with_prefix_and_entities() {
        let markup = "<x:t>A&amp;B</x:t><x:rPh sb=\"0\" eb=\"3\"><x:t>えい&amp;びー</x:t></x:rPh>";
        let rich = RichText::Markup(markup.to_string());
        assert_eq!(extract_phonetic(Some(&rich)).as_deref(), Some("えい&びー"));
    }

    #[test]
    fn markup_without_phonetic_tag() {
        let rich = RichText::Markup("<span>人間</span>".to_string());
        assert_eq!(extract_phonetic(Some(&rich)), None);
    }

    #[test]
    fn first_run_with_phonetic_wins() {
        let rich = RichText::Runs(vec![
            TextRun {
                text: Some("人".to_string()),
                phonetic: None,
            },
            TextRun {
                text: Some("間".to_string()),
                phonetic: Some(Phonetic::Run {
                    text: " にんげん ".to_string(),
                }),
            },
            TextRun {
                text: None,
                phonetic: Some(Phonetic::Text("ignored".to_string())),
            },
        ]);
        assert_eq!(extract_phonetic(Some(&rich)).as_deref(), Some("にんげん"));
    }

    #[test]
    fn single_run_object() {
        let rich = RichText::Run(TextRun {
            text: None,
            phonetic: Some(Phonetic::Text("あい\n だ\tがら".to_string())),
        });
        assert_eq!(extract_phonetic(Some(&rich)).as_deref(), Some("あいだがら"));
    }

    #[test]
    fn blank_or_missing_is_none() {
        assert_eq!(extract_phonetic(None), None);
        let blank = RichText::Run(TextRun {
            text: None,
            phonetic: Some(Phonetic::Text("   ".to_string())),
        });
        assert_eq!(extract_phonetic(Some(&blank)), None);
        assert_eq!(extract_phonetic(Some(&RichText::Runs(vec![]))), None);
    }

    #[test]
    fn payload_shapes_from_json() {
        let runs: RichText =
            serde_json::from_str(r#"[{"text":"人"},{"text":"間","phonetic":{"text":"にんげん"}}]"#)
                .unwrap();
        assert!(matches!(runs, RichText::Runs(_)));
        assert_eq!(extract_phonetic(Some(&runs)).as_deref(), Some("にんげん"));

        let single: RichText = serde_json::from_str(r#"{"phonetic":"ひと"}"#).unwrap();
        assert!(matches!(single, RichText::Run(_)));
        assert_eq!(extract_phonetic(Some(&single)).as_deref(), Some("ひと"));

        let markup: RichText = serde_json::from_str(r#""<rPh><t>みず</t></rPh>""#).unwrap();
        assert_eq!(extract_phonetic(Some(&markup)).as_deref(), Some("みず"));
    }
}

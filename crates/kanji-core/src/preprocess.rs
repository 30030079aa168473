pub trait Preprocessor {
    // Default phonetic cleanup
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Line wraps and padding inside ruby markup are never part of the reading
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

pub struct PhoneticPreprocessor;
impl Preprocessor for PhoneticPreprocessor {}

/// True when the text holds nothing but whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

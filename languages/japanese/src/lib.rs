pub mod quiz;
pub mod romaji;
pub mod ruby;
pub mod script;

pub use quiz::{normalize_answer, reading_matches};
pub use romaji::kana_to_romaji;
pub use ruby::{RubySegment, align_ruby, render_ruby};
pub use script::{is_kana, is_kanji};

use std::collections::HashMap;
use std::sync::LazyLock;

// Yōon and loan-word pairs, matched before single kana
#[rustfmt::skip]
const COMBINED: [(&str, &str); 58] = [
    ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"),
    ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"),
    ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"),
    ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"),
    ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"),
    ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
    ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),
    ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"),
    ("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo"),
    ("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo"),
    ("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo"),
    ("ファ", "fa"), ("フィ", "fi"), ("フェ", "fe"), ("フォ", "fo"),
    ("ウィ", "wi"), ("ウェ", "we"), ("ウォ", "wo"),
    ("ヴァ", "va"), ("ヴィ", "vi"), ("ヴェ", "ve"), ("ヴォ", "vo"),
    ("シェ", "she"), ("ジェ", "je"), ("チェ", "che"),
    ("ツァ", "tsa"), ("ツィ", "tsi"), ("ツェ", "tse"), ("ツォ", "tso"),
    ("ティ", "ti"), ("トゥ", "tu"), ("ディ", "di"), ("ドゥ", "du"),
    ("テュ", "tyu"), ("デュ", "dyu"), ("イェ", "ye"),
];

// Hiragana; katakana are derived by shifting these
#[rustfmt::skip]
const SINGLE: [(char, &str); 75] = [
    ('あ', "a"), ('い', "i"), ('う', "u"), ('え', "e"), ('お', "o"),
    ('か', "ka"), ('き', "ki"), ('く', "ku"), ('け', "ke"), ('こ', "ko"),
    ('が', "ga"), ('ぎ', "gi"), ('ぐ', "gu"), ('げ', "ge"), ('ご', "go"),
    ('さ', "sa"), ('し', "shi"), ('す', "su"), ('せ', "se"), ('そ', "so"),
    ('ざ', "za"), ('じ', "ji"), ('ず', "zu"), ('ぜ', "ze"), ('ぞ', "zo"),
    ('た', "ta"), ('ち', "chi"), ('つ', "tsu"), ('て', "te"), ('と', "to"),
    ('だ', "da"), ('ぢ', "di"), ('づ', "du"), ('で', "de"), ('ど', "do"),
    ('な', "na"), ('に', "ni"), ('ぬ', "nu"), ('ね', "ne"), ('の', "no"),
    ('は', "ha"), ('ひ', "hi"), ('ふ', "fu"), ('へ', "he"), ('ほ', "ho"),
    ('ば', "ba"), ('び', "bi"), ('ぶ', "bu"), ('べ', "be"), ('ぼ', "bo"),
    ('ぱ', "pa"), ('ぴ', "pi"), ('ぷ', "pu"), ('ぺ', "pe"), ('ぽ', "po"),
    ('ま', "ma"), ('み', "mi"), ('む', "mu"), ('め', "me"), ('も', "mo"),
    ('や', "ya"), ('ゆ', "yu"), ('よ', "yo"),
    ('ら', "ra"), ('り', "ri"), ('る', "ru"), ('れ', "re"), ('ろ', "ro"),
    ('わ', "wa"), ('ゐ', "wi"), ('ゑ', "we"), ('を', "wo"), ('ん', "n"),
    ('っ', "tsu"), ('ゔ', "vu"),
];

/// Offset from a hiragana code point to its katakana counterpart
const KATAKANA_SHIFT: u32 = 0x60;

static COMBINED_MAP: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map: HashMap<String, &'static str> =
        COMBINED.iter().map(|(kana, romaji)| (kana.to_string(), *romaji)).collect();

    // Katakana yōon mirror the hiragana ones
    for (kana, romaji) in COMBINED.iter().take(33) {
        map.insert(kana.chars().filter_map(to_katakana).collect(), *romaji);
    }

    map
});

static SINGLE_MAP: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    for (kana, romaji) in SINGLE {
        map.insert(kana, romaji);
        if let Some(katakana) = to_katakana(kana) {
            map.insert(katakana, romaji);
        }
    }

    for (small, romaji) in [('ゃ', "ya"), ('ゅ', "yu"), ('ょ', "yo")] {
        map.insert(small, romaji);
        if let Some(katakana) = to_katakana(small) {
            map.insert(katakana, romaji);
        }
    }

    map.insert('ー', "-");
    map.insert('・', ".");
    map
});

fn to_katakana(c: char) -> Option<char> {
    char::from_u32(c as u32 + KATAKANA_SHIFT)
}

/// Convert hiragana and katakana to Hepburn-style romaji.
///
/// Two-kana combinations win over single kana. Characters without a
/// mapping are copied through unchanged.
pub fn kana_to_romaji(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some(romaji) = COMBINED_MAP.get(&pair) {
                result.push_str(romaji);
                i += 2;
                continue;
            }
        }

        match SINGLE_MAP.get(&chars[i]) {
            Some(romaji) => result.push_str(romaji),
            None => result.push(chars[i]),
        }
        i += 1;
    }

    result
}

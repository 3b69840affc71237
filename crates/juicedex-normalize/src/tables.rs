//! Immutable normalization tables. These are the curated word lists the
//! whole identity derivation depends on; they are passed into the
//! [`crate::Normalizer`] at construction so normalization stays a pure
//! function of `(raw_name, tables)` with no ambient process state.

use std::collections::HashMap;

/// Junk tokens removed from names before tokenization: scraper category
/// noise, promotional banners, hardware words, and symbol clutter.
const JUNK_WORDS: &[&str] = &[
    "입호흡", "폐호흡", "액상", "csv", "기성", "모드", "솔트", "nic", "s-nic", "rs-nic", "합성",
    "천연", "줄기", "특가", "이벤트", "재입고", "신규", "best", "new", "hot", "추천", "인기",
    "초특가", "할인", "품절", "임박", "한정", "증정", "사은품", "코일", "팟", "기기", "탱크",
    "[", "]", "(", ")", "{", "}", "★", "☆", "🚀", "🔥", "👍", "!", "?", "-", "/", "+", "=", "_",
    "@", "#", "$", "%", "^", "&", "*",
];

/// Token canonicalization map. Keys are post-cleanup tokens; values may
/// contain spaces, in which case the token expands into multiple sub-tokens.
const WORD_MAP: &[(&str, &str)] = &[
    ("flex", "플렉스"),
    ("flexx", "플렉스"),
    ("플렉스x", "플렉스"),
    ("nasty", "네스티"),
    ("vgod", "브이갓"),
    ("tokyo", "도쿄"),
    ("super", "슈퍼"),
    ("aloe", "알로에"),
    ("grape", "포도"),
    ("apple", "사과"),
    ("레몬", "레몬"),
    ("peach", "복숭아"),
    ("berry", "베리"),
    ("mint", "민트"),
    ("menthol", "멘솔"),
    ("슬로우블로우", "슬로우블로우"),
    ("블로우슬로우", "슬로우블로우"),
    ("더블슬로우블로우", "더블슬로우블로우"),
    ("더블블로우슬로우", "더블슬로우블로우"),
];

/// Keywords whose presence (as a substring) classifies a name as 연초.
const TOBACCO_KEYWORDS: &[&str] = &[
    "시가", "타바코", "말보로", "던힐", "카멜", "마일드", "세븐", "버지니아", "클래식", "토바코",
    "구수한", "누룽지", "트리베카",
];

/// Keywords whose presence (as a substring) classifies a name as 디저트.
const DESSERT_KEYWORDS: &[&str] = &[
    "치즈", "케이크", "케익", "크림", "커피", "바닐라", "초코", "초콜릿", "우유", "밀크", "카라멜",
    "팝콘", "쿠키", "버터", "빵", "도넛", "푸딩", "아이스크림", "빙수", "요거트", "타르트",
    "마카롱", "커스터드",
];

/// Brands promoted to the front of display names, scanned in this order;
/// only the first brand found in a name is promoted.
const PRIORITY_BRANDS: &[&str] = &[
    "펠릭스", "이그니스", "네스티", "세븐코리아", "타이타닉", "동경", "슈퍼쿨", "잽쥬스",
    "알케마스터", "테일러", "플렉스", "브이갓", "노보", "베라쥬스", "오르카", "오지구", "타노스",
    "와이키키",
];

/// The full table state a [`crate::Normalizer`] is built from.
#[derive(Debug, Clone)]
pub struct NormalizerTables {
    pub junk_words: Vec<String>,
    pub word_map: HashMap<String, String>,
    pub tobacco_keywords: Vec<String>,
    pub dessert_keywords: Vec<String>,
    pub priority_brands: Vec<String>,
    /// Whole-name overrides curated from audit output, keyed by the exact
    /// raw name as scraped.
    pub raw_aliases: HashMap<String, String>,
}

impl NormalizerTables {
    /// The built-in production tables, with no raw-name aliases.
    #[must_use]
    pub fn builtin() -> Self {
        NormalizerTables {
            junk_words: JUNK_WORDS.iter().map(ToString::to_string).collect(),
            word_map: WORD_MAP
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            tobacco_keywords: TOBACCO_KEYWORDS.iter().map(ToString::to_string).collect(),
            dessert_keywords: DESSERT_KEYWORDS.iter().map(ToString::to_string).collect(),
            priority_brands: PRIORITY_BRANDS.iter().map(ToString::to_string).collect(),
            raw_aliases: HashMap::new(),
        }
    }

    /// Attach a curated alias table (typically loaded from
    /// `custom_aliases.json`).
    #[must_use]
    pub fn with_raw_aliases(mut self, aliases: HashMap<String, String>) -> Self {
        self.raw_aliases = aliases;
        self
    }

    pub(crate) fn is_junk(&self, token: &str) -> bool {
        self.junk_words.iter().any(|j| j == token)
    }
}

impl Default for NormalizerTables {
    fn default() -> Self {
        Self::builtin()
    }
}

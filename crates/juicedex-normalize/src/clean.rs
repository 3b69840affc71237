//! Pattern-based junk removal from raw product titles. Order matters: the
//! unit-bearing numeric forms (`mg`, `%`) must be stripped before bare
//! standalone numbers, or the unit half would survive as a stray token.

use regex::Regex;

/// The cleaning passes, compiled once and reused for every listing.
pub struct CleanPatterns {
    review_count: Regex,
    rating: Regex,
    paren_digits: Regex,
    high_mint: Regex,
    mg_amount: Regex,
    percent_amount: Regex,
    bare_number: Regex,
}

impl CleanPatterns {
    #[must_use]
    pub fn new() -> Self {
        CleanPatterns {
            review_count: Regex::new(r"리뷰\s*\d+").expect("valid review-count regex"),
            rating: Regex::new(r"평점\s*\d+(\.\d+)?").expect("valid rating regex"),
            paren_digits: Regex::new(r"\(\d+\)").expect("valid paren-digits regex"),
            high_mint: Regex::new(r"(?i)하이민트|high\s*mint").expect("valid high-mint regex"),
            mg_amount: Regex::new(r"(?i)\d+(\.\d+)?\s*mg").expect("valid mg regex"),
            percent_amount: Regex::new(r"(?i)\d+(\.\d+)?\s*%").expect("valid percent regex"),
            bare_number: Regex::new(r"(^|\s)\d+(\.\d+)?(\s|$)").expect("valid bare-number regex"),
        }
    }

    /// Strip review markers, ratings, parenthesized counters, known noise
    /// phrases, strength annotations, and standalone numbers. Pure; accepts
    /// any input including the empty string.
    #[must_use]
    pub fn clean(&self, text: &str) -> String {
        let text = self.review_count.replace_all(text, " ");
        let text = self.rating.replace_all(&text, " ");
        let text = self.paren_digits.replace_all(&text, " ");
        let text = self.high_mint.replace_all(&text, " ");
        let text = self.mg_amount.replace_all(&text, " ");
        let text = self.percent_amount.replace_all(&text, " ");
        let text = self.bare_number.replace_all(&text, " ");
        text.trim().to_string()
    }
}

impl Default for CleanPatterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate everything glued after the first `<digits>ml` volume marker.
///
/// Scraped names sometimes carry stray suffixes after the volume ("이미지
/// 교체" notes, SKU fragments); the audit tool uses this to suggest
/// cleanups for the upstream store.
#[must_use]
pub fn trim_after_volume(name: &str) -> String {
    let re = Regex::new(r"(\d+\s*[mM][lL]).*$").expect("valid volume-suffix regex");
    re.replacen(name, 1, "$1").into_owned()
}

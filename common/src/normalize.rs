//! 行政単位名の正規化
//!
//! - 小文字化・前後空白の除去
//! - 行政単位の接頭辞（Tỉnh, Quận, Phường ...）の除去
//! - Bà Rịa - Vũng Tàu / Thừa Thiên Huế の表記揺れ統一
//!
//! 接頭辞は「より具体的なもの」から順に試し、適用できなくなるまで繰り返す。
//! そのため `normalize(normalize(x)) == normalize(x)` が成り立つ。

use crate::accent::fold_accents_opt;
use crate::types::SegmentedAddress;
use regex::Regex;

/// Bà Rịa - Vũng Tàu の正規化後の名称
pub const BRVT_NORMALIZED: &str = "bà rịa - vũng tàu";

/// Thừa Thiên Huế の正規化後の名称
pub const HUE_NORMALIZED: &str = "thừa thiên - huế";

/// Bà Rịa - Vũng Tàu の表記揺れ（部分一致）
const BRVT_VARIANTS: &[&str] = &[
    "tỉnh bà rịa - vũng tàu",
    "tỉnh bà rịa vũng tàu",
    "tỉnh br - vt",
    "bà rịa",
    "vũng tàu",
    "bà rịa vũng tàu",
    "bà rịa - vũng tàu",
    "vùng tàu",
    "ba ria",
    "vung tau",
    "ba ria vung tau",
    "ba ria - vung tau",
    "br - vt",
    "br-vt",
    "brvt",
];

const PROVINCE_PREFIXES: &[&str] = &["tỉnh ", "thành phố ", "tp. ", "tp "];

const DISTRICT_PREFIXES: &[&str] = &[
    "quận 0",
    "quận ",
    "huyện ",
    "thị xã ",
    "tx. ",
    "tx ",
    "t.p. ",
    "t.p.",
    "t.p ",
    "tp. ",
    "tp ",
    "thành phố ",
    "q. ",
    "q.",
    "h. ",
];

const WARD_PREFIXES: &[&str] = &[
    "phường ",
    "thị trấn ",
    "khu phố ",
    "p. ",
    "p.",
    "xã ",
    "tt. ",
    "tt ",
    "kp ",
    "ấp ",
    "thôn ",
    "tổ ",
    "p ",
];

/// Thừa Thiên Huế の表記揺れ
pub(crate) fn is_hue_variant(lower: &str) -> bool {
    lazy_static::lazy_static! {
        static ref HUE_RE: Regex = Regex::new(r"th[ưừ][aà]\s*thi[eê]n\s*hu[êếeé]").unwrap();
    }
    HUE_RE.is_match(lower)
}

/// Bà Rịa - Vũng Tàu の表記揺れか（小文字化済みの文字列）
pub fn is_brvt_variant(lower: &str) -> bool {
    BRVT_VARIANTS.iter().any(|v| lower.contains(v))
}

/// Tỉnh/Thành phố 名を正規化
pub fn normalize_province(province: Option<&str>) -> Option<String> {
    province.map(normalize_province_str)
}

pub fn normalize_province_str(province: &str) -> String {
    let lower = province.trim().to_lowercase();

    if is_brvt_variant(&lower) {
        return BRVT_NORMALIZED.to_string();
    }
    if is_hue_variant(&lower) {
        return HUE_NORMALIZED.to_string();
    }

    strip_repeatedly(&lower, |s| strip_listed(s, PROVINCE_PREFIXES))
}

/// Quận/Huyện 名を正規化
pub fn normalize_district(district: Option<&str>) -> Option<String> {
    district.map(normalize_district_str)
}

pub fn normalize_district_str(district: &str) -> String {
    let lower = district.trim().to_lowercase();
    strip_repeatedly(&lower, |s| {
        strip_listed(s, DISTRICT_PREFIXES).or_else(|| strip_letter_before_digit(s, 'q'))
    })
}

/// Phường/Xã 名を正規化
pub fn normalize_ward(ward: Option<&str>) -> Option<String> {
    ward.map(normalize_ward_str)
}

pub fn normalize_ward_str(ward: &str) -> String {
    let lower = ward.trim().to_lowercase();
    strip_repeatedly(&lower, |s| {
        strip_listed(s, WARD_PREFIXES).or_else(|| strip_letter_before_digit(s, 'p'))
    })
}

fn strip_listed<'a>(value: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|p| value.strip_prefix(p))
}

/// `p5` → `5`, `q10` → `10`
fn strip_letter_before_digit(value: &str, letter: char) -> Option<&str> {
    value
        .strip_prefix(letter)
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
}

fn strip_repeatedly<'a, F>(value: &'a str, strip_one: F) -> String
where
    F: Fn(&'a str) -> Option<&'a str>,
{
    let mut current = value.trim();
    while let Some(rest) = strip_one(current) {
        current = rest.trim();
    }
    current.to_string()
}

/// 1レベル分の照合キー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchKey {
    /// 正規化済みの名称
    pub normalized: Option<String>,
    /// 声調記号を除去した名称
    pub folded: Option<String>,
}

impl MatchKey {
    fn new(normalized: Option<String>) -> Self {
        let folded = fold_accents_opt(normalized.as_deref());
        Self { normalized, folded }
    }

    /// 正規化名または無声調名のどちらかが一致するか
    pub fn matches(&self, other: &MatchKey) -> bool {
        let same = |a: &Option<String>, b: &Option<String>| matches!((a, b), (Some(x), Some(y)) if x == y);
        same(&self.normalized, &other.normalized) || same(&self.folded, &other.folded)
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_none()
    }
}

/// 3レベル分の照合キー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedAddress {
    pub province: MatchKey,
    pub district: MatchKey,
    pub ward: MatchKey,
}

impl NormalizedAddress {
    pub fn from_levels(province: Option<&str>, district: Option<&str>, ward: Option<&str>) -> Self {
        Self {
            province: MatchKey::new(normalize_province(province)),
            district: MatchKey::new(normalize_district(district)),
            ward: MatchKey::new(normalize_ward(ward)),
        }
    }

    pub fn from_segmented(segmented: &SegmentedAddress) -> Self {
        Self::from_levels(
            segmented.province.as_deref(),
            segmented.district.as_deref(),
            segmented.ward.as_deref(),
        )
    }
}

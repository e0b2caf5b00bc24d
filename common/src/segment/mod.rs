//! 住所分割チェーン
//!
//! 前処理済みの住所を Tỉnh / Quận / Phường / 残り に分割する。
//!
//! ## 処理フロー
//! 優先順のルール列を先頭から評価し、最初に `Resolved` を返したルールを採用する。
//! 1. Bà Rịa - Vũng Tàu（構造一致）
//! 2. Bà Rịa - Vũng Tàu（「thành phố Vũng Tàu ... Bà Rịa」の句）
//! 3. Bà Rịa - Vũng Tàu（キーワード）
//! 4. 参照テーブルの Tỉnh 名を先に探す
//! 5. カンマ数による分割
//! 6. 行政単位キーワードによるタグ付け
//! 7. 単語数による分割（必ず結果を返す終端ルール）

mod brvt;
mod generic;
mod province;

pub use generic::{split_by_commas, tag_keywords, word_count, KeywordTags};
pub use province::{detect_province, HCMC_DISPLAY, HUE_DISPLAY};

use crate::preprocess::preprocess_address;
use crate::types::SegmentedAddress;

/// ルールの評価結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// 分割が確定した（以降のルールは評価しない）
    Resolved(SegmentedAddress),
    /// 次のルールへ
    Fallthrough,
}

/// 分割ルール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRule {
    BrvtStructured,
    BrvtCityPhrase,
    BrvtKeyword,
    ProvinceFirst,
    CommaCount,
    KeywordTag,
    WordCount,
}

impl std::fmt::Display for SegmentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentRule::BrvtStructured => write!(f, "brvt-structured"),
            SegmentRule::BrvtCityPhrase => write!(f, "brvt-city-phrase"),
            SegmentRule::BrvtKeyword => write!(f, "brvt-keyword"),
            SegmentRule::ProvinceFirst => write!(f, "province-first"),
            SegmentRule::CommaCount => write!(f, "comma-count"),
            SegmentRule::KeywordTag => write!(f, "keyword-tag"),
            SegmentRule::WordCount => write!(f, "word-count"),
        }
    }
}

/// ルールが参照する読み取り専用データ
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentContext<'a> {
    /// 参照テーブルの Tỉnh/Thành phố 名（出現順・重複なし）
    pub provinces: &'a [String],
}

type RuleFn = fn(&str, &SegmentContext<'_>) -> RuleOutcome;

/// 評価順のルール列（終端の WordCount は別扱い）
const RULES: &[(SegmentRule, RuleFn)] = &[
    (SegmentRule::BrvtStructured, brvt::structured),
    (SegmentRule::BrvtCityPhrase, brvt::city_phrase),
    (SegmentRule::BrvtKeyword, brvt::keyword),
    (SegmentRule::ProvinceFirst, province::province_first),
    (SegmentRule::CommaCount, generic::comma_count),
    (SegmentRule::KeywordTag, generic::keyword_tag),
];

/// 分割結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// 前処理後の住所
    pub preprocessed: String,
    /// 採用されたルール
    pub rule: SegmentRule,
    pub segmented: SegmentedAddress,
}

/// 住所を前処理してから分割する
pub fn segment_address(address: &str, ctx: &SegmentContext<'_>) -> Segmentation {
    let preprocessed = preprocess_address(address);
    let (rule, segmented) = run_chain(&preprocessed, ctx);
    log::debug!("分割ルール {}: {}", rule, preprocessed);
    Segmentation {
        preprocessed,
        rule,
        segmented,
    }
}

/// 前処理済みの住所にルール列を適用する
pub fn run_chain(text: &str, ctx: &SegmentContext<'_>) -> (SegmentRule, SegmentedAddress) {
    for (rule, apply) in RULES {
        if let RuleOutcome::Resolved(segmented) = apply(text, ctx) {
            return (*rule, segmented);
        }
    }
    (SegmentRule::WordCount, word_count(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provinces() -> Vec<String> {
        vec![
            "Hà Nội".to_string(),
            "Tỉnh Lào Cai".to_string(),
            "Thành phố Hồ Chí Minh".to_string(),
        ]
    }

    fn segment(address: &str) -> Segmentation {
        let provinces = provinces();
        let ctx = SegmentContext { provinces: &provinces };
        segment_address(address, &ctx)
    }

    #[test]
    fn test_hcmc_full_address() {
        let result = segment("123 Nguyễn Huệ, Phường Bến Nghé, Quận 1, TP Hồ Chí Minh");
        assert_eq!(result.rule, SegmentRule::ProvinceFirst);
        assert_eq!(result.segmented.province.as_deref(), Some(HCMC_DISPLAY));
        assert_eq!(result.segmented.district.as_deref(), Some("Quận 1"));
        assert_eq!(result.segmented.ward.as_deref(), Some("Phường Bến Nghé"));
        assert_eq!(result.segmented.detail.as_deref(), Some("123 Nguyễn Huệ"));
    }

    #[test]
    fn test_hcmc_abbreviation() {
        let result = segment("12 Lê Lợi, Quận 1, TPHCM");
        assert_eq!(result.preprocessed, "12 Lê Lợi, Quận 1, Hồ Chí Minh");
        assert_eq!(result.segmented.province.as_deref(), Some(HCMC_DISPLAY));
        assert_eq!(result.segmented.ward.as_deref(), Some("12 Lê Lợi"));
        assert_eq!(result.segmented.district.as_deref(), Some("Quận 1"));
    }

    #[test]
    fn test_brvt_structured_wins_first() {
        let result = segment("15 Trần Phú, Phường 1, TP Vũng Tàu, Bà Rịa");
        assert_eq!(result.rule, SegmentRule::BrvtStructured);
        assert_eq!(result.segmented.province.as_deref(), Some("Bà Rịa - Vũng Tàu"));
        assert_eq!(result.segmented.district.as_deref(), Some("TP Vũng Tàu"));
    }

    #[test]
    fn test_unknown_province_uses_comma_count() {
        let result = segment("Thôn 2, Xã Ea Tu, Buôn Ma Thuột, Đắk Lắk");
        assert_eq!(result.rule, SegmentRule::CommaCount);
        assert_eq!(result.segmented.province.as_deref(), Some("Đắk Lắk"));
        assert_eq!(result.segmented.district.as_deref(), Some("Buôn Ma Thuột"));
        assert_eq!(result.segmented.ward.as_deref(), Some("Xã Ea Tu"));
        assert_eq!(result.segmented.detail.as_deref(), Some("Thôn 2"));
    }

    #[test]
    fn test_keyword_tag_without_commas() {
        let result = segment("Phường Tân Định Quận Ba Tỉnh Long An");
        assert_eq!(result.rule, SegmentRule::KeywordTag);
        assert_eq!(result.segmented.ward.as_deref(), Some("Tân"));
        assert_eq!(result.segmented.district.as_deref(), Some("Ba"));
        assert_eq!(result.segmented.province.as_deref(), Some("Long"));
    }

    #[test]
    fn test_word_count_terminal() {
        let result = segment("Đông Hưng Thái Bình");
        assert_eq!(result.rule, SegmentRule::WordCount);
        assert_eq!(result.segmented.ward.as_deref(), Some("Đông Hưng"));
        assert_eq!(result.segmented.district.as_deref(), Some("Thái"));
        assert_eq!(result.segmented.province.as_deref(), Some("Bình"));
    }

    #[test]
    fn test_single_word_becomes_province() {
        let result = segment("Sapa");
        assert_eq!(result.rule, SegmentRule::WordCount);
        assert_eq!(result.segmented.province.as_deref(), Some("Sapa"));
        assert_eq!(result.segmented.district, None);
    }

    #[test]
    fn test_every_address_has_province() {
        let samples = [
            "",
            "x",
            "a b",
            "Bản Mường, Lào Cai",
            "P. 5 Bình Thạnh HCM",
            "Thôn 3 Xã Y Tý Huyện Bát Xát",
            "Xuyên Mộc",
            "số 1, ngõ 2, ngách 3, tổ 4, Phường Cống Vị, Quận Ba Đình, Hà Nội",
        ];
        for address in samples {
            let result = segment(address);
            assert!(result.segmented.province.is_some(), "Tỉnh なし: {:?}", address);
        }
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(SegmentRule::ProvinceFirst.to_string(), "province-first");
        assert_eq!(SegmentRule::WordCount.to_string(), "word-count");
    }
}

//! Tỉnh/Thành phố の先行検出
//!
//! カンマ構造に関係なく住所全体から Tỉnh 名を探す。

use super::generic::{split_by_commas, tag_keywords};
use super::{RuleOutcome, SegmentContext};
use crate::accent::fold_accents;
use crate::normalize::is_hue_variant;
use crate::types::SegmentedAddress;

/// Hồ Chí Minh の表示名
pub const HCMC_DISPLAY: &str = "TP Hồ Chí Minh";

/// Thừa Thiên Huế の表示名
pub const HUE_DISPLAY: &str = "Thừa Thiên - Huế";

/// Hồ Chí Minh の略記（無声調・小文字で部分一致）
const HCMC_ALIASES: &[&str] = &[
    "tp hcm",
    "tp.hcm",
    "tphcm",
    "tp. hcm",
    "hcm",
    "chm",
    "tpchm",
    "tp ho chi minh",
    "tp. ho chi minh",
    "ho chi minh",
];

/// 住所から Tỉnh/Thành phố を探す
///
/// 1. Thừa Thiên Huế の表記揺れ
/// 2. 参照テーブルの Tỉnh 名（出現順で最初に含まれるもの）
/// 3. Hồ Chí Minh の略記
pub fn detect_province(address: &str, provinces: &[String]) -> Option<String> {
    let lower = address.to_lowercase();

    if is_hue_variant(&lower) {
        return Some(HUE_DISPLAY.to_string());
    }

    if let Some(found) = provinces
        .iter()
        .find(|p| !p.trim().is_empty() && lower.contains(&p.to_lowercase()))
    {
        return Some(found.clone());
    }

    let folded = fold_accents(&lower);
    if HCMC_ALIASES.iter().any(|alias| folded.contains(alias)) {
        return Some(HCMC_DISPLAY.to_string());
    }

    None
}

/// Tỉnh が見つかればカンマ数（1区切りならキーワード）で残りを分ける
pub(super) fn province_first(text: &str, ctx: &SegmentContext<'_>) -> RuleOutcome {
    let Some(province) = detect_province(text, ctx.provinces) else {
        return RuleOutcome::Fallthrough;
    };

    if let Some(segmented) = split_by_commas(text, Some(&province)) {
        return RuleOutcome::Resolved(segmented);
    }

    let tags = tag_keywords(text);
    RuleOutcome::Resolved(SegmentedAddress::new(Some(province), tags.district, tags.ward, None))
}

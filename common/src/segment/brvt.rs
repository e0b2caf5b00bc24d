//! Bà Rịa - Vũng Tàu 専用ルール
//!
//! 前処理でダッシュがカンマになるため「Bà Rịa, Vũng Tàu」のように
//! 省名そのものがカンマ区切りになり、汎用のカンマ数ルールが使えない。

use super::{RuleOutcome, SegmentContext};
use crate::types::SegmentedAddress;
use regex::Regex;

/// Bà Rịa - Vũng Tàu の表示名
pub const BRVT_DISPLAY: &str = "Bà Rịa - Vũng Tàu";

/// Bà Rịa - Vũng Tàu 内の Quận/Huyện キーワード
const BRVT_DISTRICTS: &[&str] = &[
    "bà rịa",
    "vũng tàu",
    "châu đức",
    "đất đỏ",
    "long điền",
    "côn đảo",
    "xuyên mộc",
    "phú mỹ",
];

/// `..., <区分> <名前>, Bà Rịa` 形式（末尾一致）
pub(super) fn structured(text: &str, _ctx: &SegmentContext<'_>) -> RuleOutcome {
    lazy_static::lazy_static! {
        static ref STRUCTURED_RE: Regex = Regex::new(
            r"(?i)(.*?)(?:,\s*)?((?:Thành phố|TP\.?|T\.P\.?|Thị xã|TX\.?|Huyện)\s+[^,]+)(?:,\s*)?(?:Bà Rịa|Bà Rịa - Vũng Tàu|Vũng Tàu)$"
        ).unwrap();
    }

    let Some(caps) = STRUCTURED_RE.captures(text) else {
        return RuleOutcome::Fallthrough;
    };

    let district = caps[2].trim().to_string();
    let (ward, detail) = split_last_segment(caps[1].trim());

    RuleOutcome::Resolved(SegmentedAddress::new(
        Some(BRVT_DISPLAY.to_string()),
        Some(district),
        ward,
        detail,
    ))
}

/// `thành phố Vũng Tàu, tỉnh Bà Rịa` の句を含む
pub(super) fn city_phrase(text: &str, _ctx: &SegmentContext<'_>) -> RuleOutcome {
    lazy_static::lazy_static! {
        static ref CITY_PHRASE_RE: Regex = Regex::new(
            r"(?i)(.*?)(?:,\s*)?(?:thành phố|tp\.?)\s+vũng\s+tàu(?:,\s*)?(?:tỉnh)?\s+bà\s+rịa(?:\s*-\s*vũng\s+tàu)?"
        ).unwrap();
    }

    let Some(caps) = CITY_PHRASE_RE.captures(text) else {
        return RuleOutcome::Fallthrough;
    };

    let prefix = caps[1].trim();
    let (ward, detail) = match prefix.rsplit_once(',') {
        Some((before, last)) => {
            let before: Vec<&str> = before.split(',').map(str::trim).collect();
            (non_empty(last), non_empty(&before.join(", ")))
        }
        None => (non_empty(prefix), None),
    };

    RuleOutcome::Resolved(SegmentedAddress::new(
        Some(BRVT_DISPLAY.to_string()),
        Some("Vũng Tàu".to_string()),
        ward,
        detail,
    ))
}

/// 住所に Bà Rịa / Vũng Tàu が含まれ、Quận/Huyện キーワードを含む区切りがある
pub(super) fn keyword(text: &str, _ctx: &SegmentContext<'_>) -> RuleOutcome {
    lazy_static::lazy_static! {
        static ref BRVT_RE: Regex = Regex::new(r"bà\s*rịa|vũng\s*tàu").unwrap();
    }

    let lower = text.to_lowercase();
    if !BRVT_RE.is_match(&lower) {
        return RuleOutcome::Fallthrough;
    }

    let has_ba_ria = lower.contains("bà rịa");
    let has_vung_tau = lower.contains("vũng tàu");
    let parts: Vec<&str> = text.split(", ").collect();

    for (i, part) in parts.iter().enumerate() {
        let part_lower = part.to_lowercase();
        if !BRVT_DISTRICTS.iter().any(|d| part_lower.contains(d)) {
            continue;
        }
        // 省名の片割れは Quận/Huyện として扱わない
        if part_lower.contains("bà rịa") && has_vung_tau {
            continue;
        }
        if part_lower.contains("vũng tàu") && has_ba_ria {
            continue;
        }

        let ward = (i > 0).then(|| parts[i - 1].to_string());
        let detail = (i > 1).then(|| parts[..i - 1].join(", "));
        return RuleOutcome::Resolved(SegmentedAddress::new(
            Some(BRVT_DISPLAY.to_string()),
            Some(part.to_string()),
            ward,
            detail,
        ));
    }

    RuleOutcome::Fallthrough
}

/// 最後のカンマ区切りを Phường、それより前を残りとして分ける
fn split_last_segment(text: &str) -> (Option<String>, Option<String>) {
    if text.is_empty() {
        return (None, None);
    }
    match text.rsplit_once(',') {
        Some((before, last)) if !last.trim().is_empty() => {
            (non_empty(last), non_empty(before.trim_end_matches(|c: char| c == ',' || c.is_whitespace())))
        }
        _ => (Some(text.to_string()), None),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

//! 汎用の分割ルール（カンマ数 / キーワード / 単語数）
//!
//! カンマなしのルールは「Phường → Quận → Tỉnh」の順に並んでいる前提。

use super::{RuleOutcome, SegmentContext};
use crate::types::SegmentedAddress;

/// Tỉnh/Thành phố キーワード（小文字）
const PROVINCE_KEYWORDS: &[&str] = &["thành phố", "tỉnh", "tp.", "t.p", "tp"];

/// Quận/Huyện キーワード（小文字）
const DISTRICT_KEYWORDS: &[&str] = &["thị xã", "quận", "huyện", "tx.", "tx", "q.", "h."];

/// Phường/Xã キーワード（小文字）
const WARD_KEYWORDS: &[&str] = &[
    "thị trấn", "khu phố", "phường", "xã", "tt.", "tt", "p.", "x.", "kp", "ấp", "thôn", "tổ",
];

/// キーワードで見つけた各レベルの値
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTags {
    pub province: Option<String>,
    pub district: Option<String>,
    pub ward: Option<String>,
}

impl KeywordTags {
    pub fn is_empty(&self) -> bool {
        self.province.is_none() && self.district.is_none() && self.ward.is_none()
    }
}

/// `", "` で区切り、区切り数で各レベルに割り当てる
///
/// - 4以上: 末尾から Tỉnh, Quận, Phường、それより前は残り
/// - 3: Phường, Quận, Tỉnh
/// - 2: Quận, Tỉnh
/// - 1: `None`
///
/// `known_province` があれば Tỉnh はそれを使う。
pub fn split_by_commas(text: &str, known_province: Option<&str>) -> Option<SegmentedAddress> {
    let parts: Vec<&str> = text.split(", ").map(str::trim).collect();
    let n = parts.len();
    if n < 2 {
        return None;
    }

    let province = known_province
        .map(str::to_string)
        .or_else(|| non_empty(parts[n - 1]));

    let segmented = match n {
        2 => SegmentedAddress::new(province, non_empty(parts[0]), None, None),
        3 => SegmentedAddress::new(province, non_empty(parts[1]), non_empty(parts[0]), None),
        _ => SegmentedAddress::new(
            province,
            non_empty(parts[n - 2]),
            non_empty(parts[n - 3]),
            non_empty(&parts[..n - 3].join(", ")),
        ),
    };
    Some(segmented)
}

/// カンマ数ルール（Tỉnh は末尾の区切り）
pub(super) fn comma_count(text: &str, _ctx: &SegmentContext<'_>) -> RuleOutcome {
    match split_by_commas(text, None) {
        Some(segmented) => RuleOutcome::Resolved(segmented),
        None => RuleOutcome::Fallthrough,
    }
}

/// 行政単位キーワードの直後の単語を各レベルの値とする
///
/// カンマを含む住所、3単語未満の住所からは何も取り出さない。
/// 同じレベルのキーワードが複数あれば後のものを採用する。
pub fn tag_keywords(text: &str) -> KeywordTags {
    let mut tags = KeywordTags::default();
    let words: Vec<&str> = text.split_whitespace().collect();
    if text.contains(", ") || words.len() < 3 {
        return tags;
    }

    let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let mut i = 0;
    while i < words.len() {
        let found = [
            (PROVINCE_KEYWORDS, &mut tags.province),
            (DISTRICT_KEYWORDS, &mut tags.district),
            (WARD_KEYWORDS, &mut tags.ward),
        ]
        .into_iter()
        .find_map(|(keywords, slot)| keyword_len(&lower[i..], keywords).map(|len| (len, slot)));

        match found {
            Some((len, slot)) if i + len < words.len() => {
                *slot = Some(words[i + len].to_string());
                i += len;
            }
            _ => i += 1,
        }
    }
    tags
}

/// 先頭の単語列がキーワードに一致すれば、その単語数を返す
///
/// `.` を含む略記（`q.`, `p.`, `t.p` ...）は単語の先頭一致でよい（`Q.1`, `P.Bến`）。
/// それ以外は単語単位の完全一致。
fn keyword_len(words: &[String], keywords: &[&str]) -> Option<usize> {
    keywords.iter().find_map(|keyword| {
        if keyword.contains('.') {
            return words
                .first()
                .filter(|word| word.starts_with(keyword))
                .map(|_| 1);
        }
        let len = keyword.split(' ').count();
        let matched = words.len() >= len
            && words[..len]
                .iter()
                .map(String::as_str)
                .eq(keyword.split(' '));
        matched.then_some(len)
    })
}

/// キーワードルール（1レベルでも見つかれば確定）
pub(super) fn keyword_tag(text: &str, _ctx: &SegmentContext<'_>) -> RuleOutcome {
    let tags = tag_keywords(text);
    if tags.is_empty() {
        return RuleOutcome::Fallthrough;
    }

    // Tỉnh が見つからなければ住所全体を Tỉnh とする
    let province = tags.province.or_else(|| Some(text.to_string()));
    RuleOutcome::Resolved(SegmentedAddress::new(province, tags.district, tags.ward, None))
}

/// 単語数による分割（必ず Tỉnh を返す）
///
/// - 3単語以上: 末尾2語を Quận, Tỉnh、それより前を Phường
/// - 2単語: Quận, Tỉnh
/// - それ以外: 住所全体を Tỉnh
pub fn word_count(text: &str) -> SegmentedAddress {
    let words: Vec<&str> = text.split_whitespace().collect();
    let n = words.len();
    match n {
        2 => SegmentedAddress::new(
            Some(words[1].to_string()),
            Some(words[0].to_string()),
            None,
            None,
        ),
        n if n >= 3 => SegmentedAddress::new(
            Some(words[n - 1].to_string()),
            Some(words[n - 2].to_string()),
            Some(words[..n - 2].join(" ")),
            None,
        ),
        _ => SegmentedAddress::new(Some(text.to_string()), None, None, None),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_four_or_more_keeps_all_detail() {
        let s = split_by_commas("số 1, ngõ 2, ngách 3, Phường Cống Vị, Quận Ba Đình, Hà Nội", None)
            .unwrap();
        assert_eq!(s.province.as_deref(), Some("Hà Nội"));
        assert_eq!(s.district.as_deref(), Some("Quận Ba Đình"));
        assert_eq!(s.ward.as_deref(), Some("Phường Cống Vị"));
        assert_eq!(s.detail.as_deref(), Some("số 1, ngõ 2, ngách 3"));
    }

    #[test]
    fn test_split_three_parts() {
        let s = split_by_commas("Xã Bản Mường, Huyện Bát Xát, Lào Cai", None).unwrap();
        assert_eq!(s.ward.as_deref(), Some("Xã Bản Mường"));
        assert_eq!(s.district.as_deref(), Some("Huyện Bát Xát"));
        assert_eq!(s.province.as_deref(), Some("Lào Cai"));
        assert_eq!(s.detail, None);
    }

    #[test]
    fn test_split_two_parts() {
        let s = split_by_commas("Bản Mường, Lào Cai", Some("Tỉnh Lào Cai")).unwrap();
        assert_eq!(s.district.as_deref(), Some("Bản Mường"));
        assert_eq!(s.ward, None);
        assert_eq!(s.province.as_deref(), Some("Tỉnh Lào Cai"));
    }

    #[test]
    fn test_split_single_part_is_none() {
        assert_eq!(split_by_commas("Bản Mường Lào Cai", None), None);
    }

    #[test]
    fn test_tag_keywords_multi_word() {
        let tags = tag_keywords("Khu phố 3 Thị xã Dĩ An Tỉnh Bình Dương");
        assert_eq!(tags.ward.as_deref(), Some("3"));
        assert_eq!(tags.district.as_deref(), Some("Dĩ"));
        assert_eq!(tags.province.as_deref(), Some("Bình"));
    }

    #[test]
    fn test_tag_keywords_later_wins() {
        let tags = tag_keywords("Thôn 3 Xã Y Tý");
        assert_eq!(tags.ward.as_deref(), Some("Y"));
        assert_eq!(tags.district, None);
    }

    #[test]
    fn test_tag_keywords_ignores_last_token_and_commas() {
        assert!(tag_keywords("Bản Mường Xã").is_empty());
        assert!(tag_keywords("Phường 1, Quận 3").is_empty());
        assert!(tag_keywords("Phường 1").is_empty());
    }

    #[test]
    fn test_tag_keywords_dotted_prefix() {
        let tags = tag_keywords("Số 12 P.Bến Nghé Q.1 Sài Gòn");
        assert_eq!(tags.ward.as_deref(), Some("Nghé"));
        assert_eq!(tags.district.as_deref(), Some("Sài"));
        assert_eq!(tags.province, None);

        let tags = tag_keywords("Xóm 2 X.Yên Lạc T.P. Vĩnh Yên");
        assert_eq!(tags.ward.as_deref(), Some("Lạc"));
        assert_eq!(tags.province.as_deref(), Some("Vĩnh"));
    }

    #[test]
    fn test_tag_keywords_whole_token_for_plain_keywords() {
        // 略記でないキーワードは単語の一部には一致しない
        assert!(tag_keywords("Quậnh Tỉnhx Phườngy Xãz").is_empty());
        // 単独の文字（H, P, X, Q）はキーワードではない
        assert!(tag_keywords("H Bình P Thạnh").is_empty());
        // 都市名はキーワードではない
        assert!(tag_keywords("Ba Đình Hà Nội Việt").is_empty());
    }

    #[test]
    fn test_keyword_tag_without_province_uses_whole_text() {
        let ctx = SegmentContext::default();
        match keyword_tag("Phường Bến Nghé Sài Gòn", &ctx) {
            RuleOutcome::Resolved(s) => {
                assert_eq!(s.ward.as_deref(), Some("Bến"));
                assert_eq!(s.province.as_deref(), Some("Phường Bến Nghé Sài Gòn"));
            }
            RuleOutcome::Fallthrough => panic!("キーワードが見つからない"),
        }
        assert_eq!(keyword_tag("Đông Hưng Thái Bình", &ctx), RuleOutcome::Fallthrough);
    }

    #[test]
    fn test_word_count() {
        let s = word_count("Đông Hưng Thái Bình");
        assert_eq!(s.ward.as_deref(), Some("Đông Hưng"));
        assert_eq!(s.district.as_deref(), Some("Thái"));
        assert_eq!(s.province.as_deref(), Some("Bình"));

        let s = word_count("Hưng Yên");
        assert_eq!(s.district.as_deref(), Some("Hưng"));
        assert_eq!(s.province.as_deref(), Some("Yên"));
        assert_eq!(s.ward, None);

        let s = word_count("Sapa");
        assert_eq!(s.province.as_deref(), Some("Sapa"));
        assert!(s.district.is_none() && s.ward.is_none() && s.detail.is_none());
    }
}

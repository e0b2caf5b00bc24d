//! 参照テーブル（databaseシート）のインデックス
//!
//! 実行ごとに1回だけ構築する読み取り専用の索引。
//! 住所ごとのコード解決（resolver）はこれを共有参照する。

use crate::normalize::{MatchKey, NormalizedAddress};
use crate::segment::SegmentContext;
use crate::types::ReferenceRecord;
use std::collections::HashMap;

/// コードを整数文字列に揃える
///
/// Excelの数値セルは `79.0` のような浮動小数で読まれるため、
/// 小数部が0なら整数表記にする。数字のみの文字列はそのまま（先頭の0を残す）。
pub fn normalize_code(code: &str) -> Option<String> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    if code.chars().all(|c| c.is_ascii_digit()) {
        return Some(code.to_string());
    }
    match code.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 && value >= 0.0 => {
            Some(format!("{:.0}", value))
        }
        _ => Some(code.to_string()),
    }
}

/// 索引済みの1行
#[derive(Debug, Clone)]
pub(crate) struct IndexedRow {
    pub key: NormalizedAddress,
    pub province_code: Option<String>,
    pub district_code: Option<String>,
    pub ward_code: Option<String>,
}

/// 参照テーブルの索引
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    /// 参照順の全行
    rows: Vec<IndexedRow>,
    /// 正規化名 → Tỉnh コード
    province_by_name: HashMap<String, String>,
    /// 無声調名 → Tỉnh コード
    province_by_folded: HashMap<String, String>,
    /// コード → 参照テーブル上の表記
    province_names: HashMap<String, String>,
    district_names: HashMap<String, String>,
    ward_names: HashMap<String, String>,
    /// Tỉnh 名（出現順・重複なし）
    provinces: Vec<String>,
}

impl ReferenceIndex {
    /// 参照テーブルから索引を構築
    ///
    /// 同じ名前・コードが複数行にあれば最初の行を採用する。
    /// Tỉnh 行が1つもなくてもエラーにはしない（全住所が要確認になる）。
    pub fn build(records: &[ReferenceRecord]) -> Self {
        let mut index = Self::default();

        for record in records {
            let key = NormalizedAddress::from_levels(
                record.province_name.as_deref(),
                record.district_name.as_deref(),
                record.ward_name.as_deref(),
            );

            if let (Some(name), Some(code)) = (&record.province_name, &record.province_code) {
                if let Some(normalized) = &key.province.normalized {
                    index
                        .province_by_name
                        .entry(normalized.clone())
                        .or_insert_with(|| code.clone());
                }
                if let Some(folded) = &key.province.folded {
                    index
                        .province_by_folded
                        .entry(folded.clone())
                        .or_insert_with(|| code.clone());
                }
                if !index.provinces.contains(name) {
                    index.provinces.push(name.clone());
                }
            }

            insert_name(&mut index.province_names, &record.province_code, &record.province_name);
            insert_name(&mut index.district_names, &record.district_code, &record.district_name);
            insert_name(&mut index.ward_names, &record.ward_code, &record.ward_name);

            index.rows.push(IndexedRow {
                key,
                province_code: record.province_code.clone(),
                district_code: record.district_code.clone(),
                ward_code: record.ward_code.clone(),
            });
        }

        if index.province_by_name.is_empty() {
            log::warn!("参照テーブルに Tỉnh/Thành phố 名とコードを持つ行がありません");
        }

        log::debug!(
            "参照テーブル索引: {}行, Tỉnh {}件, Quận {}件, Phường {}件",
            index.rows.len(),
            index.province_names.len(),
            index.district_names.len(),
            index.ward_names.len()
        );

        index
    }

    /// 分割チェーン用のコンテキスト
    pub fn segment_context(&self) -> SegmentContext<'_> {
        SegmentContext {
            provinces: &self.provinces,
        }
    }

    /// Tỉnh/Thành phố 名（出現順）
    pub fn provinces(&self) -> &[String] {
        &self.provinces
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 正規化名、次に無声調名で Tỉnh コードを引く
    pub fn province_code(&self, key: &MatchKey) -> Option<&str> {
        key.normalized
            .as_ref()
            .and_then(|name| self.province_by_name.get(name))
            .or_else(|| key.folded.as_ref().and_then(|name| self.province_by_folded.get(name)))
            .map(String::as_str)
    }

    pub(crate) fn rows(&self) -> &[IndexedRow] {
        &self.rows
    }

    pub fn province_name(&self, code: &str) -> Option<&str> {
        self.province_names.get(code).map(String::as_str)
    }

    pub fn district_name(&self, code: &str) -> Option<&str> {
        self.district_names.get(code).map(String::as_str)
    }

    pub fn ward_name(&self, code: &str) -> Option<&str> {
        self.ward_names.get(code).map(String::as_str)
    }
}

fn insert_name(map: &mut HashMap<String, String>, code: &Option<String>, name: &Option<String>) {
    if let (Some(code), Some(name)) = (code, name) {
        map.entry(code.clone()).or_insert_with(|| name.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ReferenceRecord> {
        vec![
            ReferenceRecord::new(
                "Thành phố Hồ Chí Minh",
                "79",
                "Quận 1",
                "760",
                "Phường Bến Nghé",
                "26734",
            ),
            ReferenceRecord::new(
                "Thành phố Hồ Chí Minh",
                "79",
                "Quận 1",
                "760",
                "Phường Đa Kao",
                "26737",
            ),
            ReferenceRecord::new("Tỉnh Lào Cai", "10.0", "Huyện Bát Xát", "82.0", "Xã Y Tý", "2653.0"),
        ]
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("79.0"), Some("79".to_string()));
        assert_eq!(normalize_code(" 26734 "), Some("26734".to_string()));
        assert_eq!(normalize_code("00001"), Some("00001".to_string()));
        assert_eq!(normalize_code(""), None);
        assert_eq!(normalize_code("  "), None);
        assert_eq!(normalize_code("A12"), Some("A12".to_string()));
        assert_eq!(normalize_code("1.5"), Some("1.5".to_string()));
    }

    #[test]
    fn test_build_index() {
        let index = ReferenceIndex::build(&records());
        assert_eq!(index.len(), 3);
        assert_eq!(
            index.provinces(),
            &["Thành phố Hồ Chí Minh".to_string(), "Tỉnh Lào Cai".to_string()]
        );
        assert_eq!(index.province_name("10"), Some("Tỉnh Lào Cai"));
        assert_eq!(index.district_name("760"), Some("Quận 1"));
        assert_eq!(index.ward_name("26737"), Some("Phường Đa Kao"));
        assert_eq!(index.segment_context().provinces.len(), 2);
    }

    #[test]
    fn test_province_code_lookup() {
        let index = ReferenceIndex::build(&records());
        let exact = NormalizedAddress::from_levels(Some("TP Hồ Chí Minh"), None, None);
        assert_eq!(index.province_code(&exact.province), Some("79"));

        let folded = NormalizedAddress::from_levels(Some("lao cai"), None, None);
        assert_eq!(index.province_code(&folded.province), Some("10"));

        let unknown = NormalizedAddress::from_levels(Some("Đắk Lắk"), None, None);
        assert_eq!(index.province_code(&unknown.province), None);
        assert_eq!(index.province_code(&MatchKey::default()), None);
    }

    #[test]
    fn test_first_seen_name_wins() {
        let mut rows = records();
        rows.push(ReferenceRecord::new("TP HCM", "79", "Q1", "760", "P. Bến Nghé", "26734"));
        let index = ReferenceIndex::build(&rows);
        assert_eq!(index.province_name("79"), Some("Thành phố Hồ Chí Minh"));
        assert_eq!(index.ward_name("26734"), Some("Phường Bến Nghé"));
    }

    #[test]
    fn test_build_table_without_provinces() {
        let rows = vec![ReferenceRecord::new("", "", "Quận 1", "760", "", "")];
        let index = ReferenceIndex::build(&rows);
        assert_eq!(index.len(), 1);
        assert!(index.provinces().is_empty());
        assert_eq!(index.district_name("760"), Some("Quận 1"));
        let key = NormalizedAddress::from_levels(Some("Quận 1"), None, None);
        assert_eq!(index.province_code(&key.province), None);

        let empty = ReferenceIndex::build(&[]);
        assert!(empty.is_empty());
    }
}

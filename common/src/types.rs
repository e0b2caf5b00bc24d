//! 住所データの型定義
//!
//! CLIとエンジンで共有される型:
//! - RawAddress: 入力セル（rawシートのAddress列）
//! - ReferenceRecord: 参照テーブル（databaseシート）の1行
//! - SegmentedAddress: 分割チェーンの出力
//! - ResolvedRecord: コード解決後のレコード
//! - OutputRow: 最終出力（1住所につき1行）

use crate::reference::normalize_code;
use serde::{Deserialize, Serialize};

/// rawシートの住所列
pub const COL_ADDRESS: &str = "Address";

/// databaseシートの列名
pub const REF_PROVINCE_NAME: &str = "Tỉnh/Thành phố";
pub const REF_PROVINCE_CODE: &str = "Mã Tỉnh/Thành phố";
pub const REF_DISTRICT_NAME: &str = "Quận/Huyện";
pub const REF_DISTRICT_CODE: &str = "Mã Quận/Huyện";
pub const REF_WARD_NAME: &str = "Phường/Xã";
pub const REF_WARD_CODE: &str = "Mã Phường/Xã";

/// databaseシートの必須列（読み込み順）
pub const REFERENCE_COLUMNS: [&str; 6] = [
    REF_PROVINCE_NAME,
    REF_PROVINCE_CODE,
    REF_DISTRICT_NAME,
    REF_DISTRICT_CODE,
    REF_WARD_NAME,
    REF_WARD_CODE,
];

/// 出力列（この順で書き出す）
pub const OUTPUT_COLUMNS: [&str; 9] = [
    "Address",
    "Detail",
    "Ward Code",
    "Ward",
    "District Code",
    "District",
    "Province Code",
    "Province/City",
    "Check",
];

/// 要確認フラグの表示値
pub const CHECK_NEEDS_REVIEW: &str = "Cần kiểm tra";

/// 入力セル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawAddress {
    /// 文字列セル
    Text(String),
    /// 数値・真偽値など文字列以外のセル（表示用の文字列を保持）
    NonText(String),
    /// 空セル
    Missing,
}

impl RawAddress {
    /// 分割対象の文字列（文字列セルのみ）
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawAddress::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Address列に出力する値
    pub fn display(&self) -> Option<&str> {
        match self {
            RawAddress::Text(s) | RawAddress::NonText(s) => Some(s),
            RawAddress::Missing => None,
        }
    }
}

impl From<&str> for RawAddress {
    fn from(s: &str) -> Self {
        RawAddress::Text(s.to_string())
    }
}

impl From<String> for RawAddress {
    fn from(s: String) -> Self {
        RawAddress::Text(s)
    }
}

/// 参照テーブルの1行（1行＝1つの Phường/Xã）
///
/// コードは整数文字列に正規化済み（`79.0` → `79`）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceRecord {
    pub province_name: Option<String>,
    pub province_code: Option<String>,
    pub district_name: Option<String>,
    pub district_code: Option<String>,
    pub ward_name: Option<String>,
    pub ward_code: Option<String>,
}

impl ReferenceRecord {
    /// 全列が埋まった行を作成（コードは正規化する）
    pub fn new(
        province_name: &str,
        province_code: &str,
        district_name: &str,
        district_code: &str,
        ward_name: &str,
        ward_code: &str,
    ) -> Self {
        Self {
            province_name: non_empty(province_name),
            province_code: normalize_code(province_code),
            district_name: non_empty(district_name),
            district_code: normalize_code(district_code),
            ward_name: non_empty(ward_name),
            ward_code: normalize_code(ward_code),
        }
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

/// 分割結果（Tỉnh / Quận / Phường / 残り）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedAddress {
    pub province: Option<String>,
    pub district: Option<String>,
    pub ward: Option<String>,
    pub detail: Option<String>,
}

impl SegmentedAddress {
    pub fn new(
        province: Option<String>,
        district: Option<String>,
        ward: Option<String>,
        detail: Option<String>,
    ) -> Self {
        Self { province, district, ward, detail }
    }
}

/// コード解決後のレコード
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub segmented: SegmentedAddress,
    pub province_code: Option<String>,
    pub district_code: Option<String>,
    pub ward_code: Option<String>,
}

impl ResolvedRecord {
    /// 3つのコードのいずれかが未解決なら要確認
    pub fn needs_review(&self) -> bool {
        self.province_code.is_none() || self.district_code.is_none() || self.ward_code.is_none()
    }
}

/// 出力行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "Detail")]
    pub detail: Option<String>,
    #[serde(rename = "Ward Code")]
    pub ward_code: Option<String>,
    #[serde(rename = "Ward")]
    pub ward: Option<String>,
    #[serde(rename = "District Code")]
    pub district_code: Option<String>,
    #[serde(rename = "District")]
    pub district: Option<String>,
    #[serde(rename = "Province Code")]
    pub province_code: Option<String>,
    #[serde(rename = "Province/City")]
    pub province: Option<String>,
    #[serde(rename = "Check")]
    pub check: String,
}

impl OutputRow {
    pub fn needs_review(&self) -> bool {
        self.check == CHECK_NEEDS_REVIEW
    }

    /// OUTPUT_COLUMNS と同じ順で値を返す
    pub fn values(&self) -> [Option<&str>; 9] {
        [
            self.address.as_deref(),
            self.detail.as_deref(),
            self.ward_code.as_deref(),
            self.ward.as_deref(),
            self.district_code.as_deref(),
            self.district.as_deref(),
            self.province_code.as_deref(),
            self.province.as_deref(),
            Some(self.check.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_address_text() {
        let raw = RawAddress::from("12 Lê Lợi");
        assert_eq!(raw.as_text(), Some("12 Lê Lợi"));
        assert_eq!(raw.display(), Some("12 Lê Lợi"));
    }

    #[test]
    fn test_raw_address_non_text() {
        let raw = RawAddress::NonText("12345".to_string());
        assert_eq!(raw.as_text(), None);
        assert_eq!(raw.display(), Some("12345"));
        assert_eq!(RawAddress::Missing.display(), None);
    }

    #[test]
    fn test_reference_record_new_coerces_codes() {
        let record = ReferenceRecord::new("Tỉnh Lào Cai", "10.0", "Huyện Bát Xát", "82", "", "2683.0");
        assert_eq!(record.province_code.as_deref(), Some("10"));
        assert_eq!(record.district_code.as_deref(), Some("82"));
        assert_eq!(record.ward_name, None);
        assert_eq!(record.ward_code.as_deref(), Some("2683"));
    }

    #[test]
    fn test_resolved_record_needs_review() {
        let mut record = ResolvedRecord {
            province_code: Some("79".into()),
            district_code: Some("760".into()),
            ward_code: Some("26734".into()),
            ..Default::default()
        };
        assert!(!record.needs_review());

        record.ward_code = None;
        assert!(record.needs_review());
    }

    #[test]
    fn test_output_row_serializes_with_column_names() {
        let row = OutputRow {
            address: Some("Bản Mường, Lào Cai".into()),
            check: CHECK_NEEDS_REVIEW.into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&row).unwrap();
        for column in OUTPUT_COLUMNS {
            assert!(json.get(column).is_some(), "列がない: {}", column);
        }
        assert_eq!(json["Check"], "Cần kiểm tra");
        assert!(json["Ward Code"].is_null());
    }

    #[test]
    fn test_output_row_values_order() {
        let row = OutputRow {
            address: Some("a".into()),
            province: Some("p".into()),
            ..Default::default()
        };
        let values = row.values();
        assert_eq!(values[0], Some("a"));
        assert_eq!(values[7], Some("p"));
        assert_eq!(values[8], Some(""));
    }
}

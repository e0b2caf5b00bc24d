//! 住所文字列の前処理
//!
//! 分割前に略語（HCM, TPHCM ...）を展開し、区切り文字と空白を揃える。
//! ルールは順番に依存する（後のルールは前のルールの書き換え結果を前提とする）。

use regex::Regex;

/// 前処理で使う Hồ Chí Minh の表記
pub const HCMC: &str = "Hồ Chí Minh";

/// 住所を前処理する
///
/// 1. 末尾の `HCM` を展開
/// 2. `TP <名前> HCM` にカンマを補う
/// 3. Hồ Chí Minh 郊外区名の直後の `HCM` 類にカンマを補う
/// 4. `P. 5 Bình Thạnh` → `Phường 5, Bình Thạnh`
/// 5. 残りの `TP HCM` / `TPHCM` / `Thành phố Hồ Chí Minh` を `Hồ Chí Minh` に統一
/// 6. ダッシュをカンマに置換
/// 7. 空白・カンマ周りの整形
pub fn preprocess_address(address: &str) -> String {
    lazy_static::lazy_static! {
        static ref TRAILING_HCM: Regex = Regex::new(r"(?i)\bHCM\b$").unwrap();
        static ref CITY_NAME_HCM: Regex = Regex::new(
            r"(?i)(TP|Tp\.|T\.P\.|Thành phố)\s+([^\s,]+(?:\s+[^\s,]+)*)\s+HCM\b"
        ).unwrap();
        static ref SUBURB_HCM: Regex = Regex::new(
            r"(?i)(Bình Chánh|Củ Chi|Hóc Môn|Nhà Bè|Cần Giờ|Thủ Đức)\s+(?:Hồ Chí Minh|HCM|TPHCM|TP HCM)$"
        ).unwrap();
        static ref NUMERIC_WARD: Regex = Regex::new(
            r"(?i)\bP\.?\s*(\d+)\s+(Bình Thạnh|Quận \d+|Q\.?\s*\d+)"
        ).unwrap();
        static ref TP_HCM: Regex = Regex::new(r"(?i)\bTP\.?\s*HCM\b").unwrap();
        static ref TPHCM: Regex = Regex::new(r"(?i)\bTPHCM\b").unwrap();
        static ref TP_HO_CHI_MINH: Regex = Regex::new(r"(?i)\bTP\.?\s*Hồ\s*Chí\s*Minh\b").unwrap();
        static ref THANH_PHO_HO_CHI_MINH: Regex =
            Regex::new(r"\bThành\s*[Pp]hố\s*Hồ\s*Chí\s*Minh\b").unwrap();
        static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
        static ref COMMA: Regex = Regex::new(r"\s*,\s*").unwrap();
    }

    let mut text = TRAILING_HCM.replace(address, HCMC).into_owned();
    text = CITY_NAME_HCM
        .replace_all(&text, "${1} ${2}, Hồ Chí Minh")
        .into_owned();
    text = SUBURB_HCM.replace(&text, "${1}, Hồ Chí Minh").into_owned();
    text = NUMERIC_WARD.replace_all(&text, "Phường ${1}, ${2}").into_owned();

    for re in [&*TP_HCM, &*TPHCM, &*TP_HO_CHI_MINH, &*THANH_PHO_HO_CHI_MINH] {
        text = re.replace_all(&text, HCMC).into_owned();
    }

    text = text.replace(" - ", ", ").replace('-', ", ");

    text = WHITESPACE.replace_all(&text, " ").into_owned();
    text = COMMA.replace_all(&text, ", ").into_owned();
    text.trim().to_string()
}

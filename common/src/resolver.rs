//! 行政コードの解決と表記の統一
//!
//! Tỉnh → Quận → Phường の順に絞り込む。上位が解決できなければ下位は探さない。
//! Quận の候補は「コードが Tỉnh コードで始まる行」または「その Tỉnh に属する行」。
//! Phường も同様に Quận コードで絞り込む。

use crate::normalize::{MatchKey, NormalizedAddress};
use crate::reference::{IndexedRow, ReferenceIndex};
use crate::types::{ResolvedRecord, SegmentedAddress};

/// 解決できたコード
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCodes {
    pub province: Option<String>,
    pub district: Option<String>,
    pub ward: Option<String>,
}

/// 正規化済みの名前からコードを引く
pub fn resolve_codes(key: &NormalizedAddress, index: &ReferenceIndex) -> ResolvedCodes {
    let mut codes = ResolvedCodes::default();

    let Some(province_code) = index.province_code(&key.province) else {
        return codes;
    };
    codes.province = Some(province_code.to_string());

    codes.district = find_child(
        index.rows(),
        province_code,
        &key.district,
        |row| row.district_code.as_deref(),
        |row| row.province_code.as_deref(),
        |row| &row.key.district,
    );

    if let Some(district_code) = codes.district.as_deref() {
        codes.ward = find_child(
            index.rows(),
            district_code,
            &key.ward,
            |row| row.ward_code.as_deref(),
            |row| row.district_code.as_deref(),
            |row| &row.key.ward,
        );
    }

    codes
}

/// 親コードに属する行から名前が一致する最初の行のコードを返す
fn find_child<C, P, K>(
    rows: &[IndexedRow],
    parent_code: &str,
    wanted: &MatchKey,
    code_of: C,
    parent_of: P,
    key_of: K,
) -> Option<String>
where
    C: Fn(&IndexedRow) -> Option<&str>,
    P: Fn(&IndexedRow) -> Option<&str>,
    K: Fn(&IndexedRow) -> &MatchKey,
{
    if wanted.is_empty() {
        return None;
    }

    rows.iter()
        .filter_map(|row| {
            let code = code_of(row)?;
            let belongs = code.starts_with(parent_code) || parent_of(row) == Some(parent_code);
            belongs.then_some((row, code))
        })
        .find(|(row, _)| key_of(row).matches(wanted))
        .map(|(_, code)| code.to_string())
}

/// 解決できたレベルの名前を参照テーブルの表記に置き換える
pub fn canonicalize(segmented: &mut SegmentedAddress, codes: &ResolvedCodes, index: &ReferenceIndex) {
    if let Some(name) = codes.province.as_deref().and_then(|c| index.province_name(c)) {
        segmented.province = Some(name.to_string());
    }
    if let Some(name) = codes.district.as_deref().and_then(|c| index.district_name(c)) {
        segmented.district = Some(name.to_string());
    }
    if let Some(name) = codes.ward.as_deref().and_then(|c| index.ward_name(c)) {
        segmented.ward = Some(name.to_string());
    }
}

/// 分割結果を正規化・コード解決・表記統一する
pub fn resolve(segmented: SegmentedAddress, index: &ReferenceIndex) -> ResolvedRecord {
    let key = NormalizedAddress::from_segmented(&segmented);
    let codes = resolve_codes(&key, index);

    let mut segmented = segmented;
    canonicalize(&mut segmented, &codes, index);

    ResolvedRecord {
        segmented,
        province_code: codes.province,
        district_code: codes.district,
        ward_code: codes.ward,
    }
}

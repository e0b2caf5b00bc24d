//! 住所処理エンジン
//!
//! 1住所につき: 前処理 → 分割 → 正規化 → コード解決 → 表記統一 → 出力行。
//! 住所ごとの処理は純粋関数なので、呼び出し側で並列化してよい。

use crate::reference::ReferenceIndex;
use crate::resolver::resolve;
use crate::segment::segment_address;
use crate::types::{OutputRow, RawAddress, ReferenceRecord, ResolvedRecord, CHECK_NEEDS_REVIEW};

/// 1住所を処理して出力行を作る
///
/// 文字列以外のセルは分割せず、全列空の要確認行になる。
pub fn process_address(raw: &RawAddress, index: &ReferenceIndex) -> OutputRow {
    let record = match raw.as_text() {
        Some(text) => {
            let segmentation = segment_address(text, &index.segment_context());
            resolve(segmentation.segmented, index)
        }
        None => ResolvedRecord::default(),
    };
    build_output_row(raw, &record)
}

/// 入力の全住所を順番に処理する
///
/// 解決できなかった住所はエラーにせず Check 列で報告する。
pub fn process_addresses(addresses: &[RawAddress], reference: &[ReferenceRecord]) -> Vec<OutputRow> {
    let index = ReferenceIndex::build(reference);
    addresses
        .iter()
        .map(|raw| process_address(raw, &index))
        .collect()
}

/// 解決結果を出力列に並べる
pub fn build_output_row(raw: &RawAddress, record: &ResolvedRecord) -> OutputRow {
    let check = if record.needs_review() {
        CHECK_NEEDS_REVIEW.to_string()
    } else {
        String::new()
    };

    OutputRow {
        address: raw.display().map(str::to_string),
        detail: record.segmented.detail.clone(),
        ward_code: record.ward_code.clone(),
        ward: record.segmented.ward.clone(),
        district_code: record.district_code.clone(),
        district: record.segmented.district.clone(),
        province_code: record.province_code.clone(),
        province: record.segmented.province.clone(),
        check,
    }
}

//! 一括処理（索引構築 → 住所ごとの処理 → 集計）
//!
//! 索引は1回だけ構築し、住所ごとの処理で共有参照する。
//! 並列時も出力は入力順を保つ。

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use vn_address_common::{process_address, OutputRow, RawAddress, ReferenceIndex, ReferenceRecord};

/// 処理結果の集計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingSummary {
    pub total: usize,
    /// 3レベルともコードが付いた件数
    pub resolved: usize,
    /// 「Cần kiểm tra」の件数
    pub needs_review: usize,
    pub province_missing: usize,
    pub district_missing: usize,
    pub ward_missing: usize,
}

impl ProcessingSummary {
    pub fn from_rows(rows: &[OutputRow]) -> Self {
        let mut summary = Self {
            total: rows.len(),
            ..Default::default()
        };
        for row in rows {
            if row.needs_review() {
                summary.needs_review += 1;
            } else {
                summary.resolved += 1;
            }
            summary.province_missing += row.province_code.is_none() as usize;
            summary.district_missing += row.district_code.is_none() as usize;
            summary.ward_missing += row.ward_code.is_none() as usize;
        }
        summary
    }
}

/// 全住所を処理する
///
/// * `parallel` - rayon で並列処理する
/// * `show_progress` - 進捗バーを表示する
pub fn process_all(
    addresses: &[RawAddress],
    reference: &[ReferenceRecord],
    parallel: bool,
    show_progress: bool,
) -> Vec<OutputRow> {
    let index = ReferenceIndex::build(reference);
    log::info!(
        "参照テーブル索引: {}行, Tỉnh/Thành phố {}件",
        index.len(),
        index.provinces().len()
    );

    let pb = progress_bar(addresses.len() as u64, show_progress);
    let process = |raw: &RawAddress| {
        let row = process_address(raw, &index);
        pb.inc(1);
        row
    };

    let rows: Vec<OutputRow> = if parallel {
        addresses.par_iter().map(process).collect()
    } else {
        addresses.iter().map(process).collect()
    };
    pb.finish_and_clear();

    rows
}

fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("  {wide_bar:.cyan/dim} {pos}/{len} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb
}

/// 集計を表示
pub fn print_summary(summary: &ProcessingSummary) {
    println!("  処理件数: {}", summary.total);
    println!("  コード解決: {}", summary.resolved);
    println!("  要確認 (Cần kiểm tra): {}", summary.needs_review);
    if summary.needs_review > 0 {
        println!(
            "    未解決 - Tỉnh: {}, Quận: {}, Phường: {}",
            summary.province_missing, summary.district_missing, summary.ward_missing
        );
    }
}

/// 先頭 `limit` 行を表示
pub fn print_preview(rows: &[OutputRow], limit: usize) {
    if limit == 0 || rows.is_empty() {
        return;
    }
    println!("\nプレビュー（先頭{}件）:", limit.min(rows.len()));
    for (i, row) in rows.iter().take(limit).enumerate() {
        println!("{:>3}. {}", i + 1, preview_line(row));
    }
}

fn preview_line(row: &OutputRow) -> String {
    let level = |name: &Option<String>, code: &Option<String>| {
        format!(
            "{} ({})",
            name.as_deref().unwrap_or("-"),
            code.as_deref().unwrap_or("-")
        )
    };
    let mut line = format!(
        "{} | {} | {} | {}",
        row.address.as_deref().unwrap_or("-"),
        level(&row.ward, &row.ward_code),
        level(&row.district, &row.district_code),
        level(&row.province, &row.province_code),
    );
    if row.needs_review() {
        line.push_str(" | ");
        line.push_str(&row.check);
    }
    line
}

//! JSON出力
//!
//! 出力行は Excel と同じ列名をキーにする。

use crate::error::Result;
use crate::pipeline::ProcessingSummary;
use serde::Serialize;
use std::path::Path;
use vn_address_common::OutputRow;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    generated_at: String,
    summary: ProcessingSummary,
    rows: &'a [OutputRow],
}

pub fn generate_json(rows: &[OutputRow], output_path: &Path) -> Result<()> {
    let report = JsonReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        summary: ProcessingSummary::from_rows(rows),
        rows,
    };

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(output_path, json)?;
    Ok(())
}

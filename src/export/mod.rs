pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use std::path::{Path, PathBuf};
use vn_address_common::OutputRow;

/// 出力ファイル名（未指定時）
pub const DEFAULT_OUTPUT_NAME: &str = "processed_addresses";

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_OUTPUT_NAME, extension))
    } else {
        output.with_extension(extension)
    }
}

/// 出力先（ファイル、拡張子なしならディレクトリ）から形式ごとのパスを決める
pub fn output_paths(output: &Path, format: &ExportFormat) -> Vec<PathBuf> {
    match format {
        ExportFormat::Excel => vec![output_path_for_format(output, "xlsx")],
        ExportFormat::Json => vec![output_path_for_format(output, "json")],
        ExportFormat::Both => vec![
            output_path_for_format(output, "xlsx"),
            output_path_for_format(output, "json"),
        ],
    }
}

/// 処理結果を書き出し、書き出したパスを返す
pub fn export_results(
    rows: &[OutputRow],
    format: &ExportFormat,
    output: &Path,
    sheet_name: &str,
) -> Result<Vec<PathBuf>> {
    let paths = output_paths(output, format);

    for path in &paths {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {
                println!("- JSONを生成中...");
                json::generate_json(rows, path)?;
                println!("✔ JSON出力: {}", path.display());
            }
            _ => {
                println!("- Excelを生成中...");
                excel::generate_excel(rows, path, sheet_name)?;
                println!("✔ Excel出力: {}", path.display());
            }
        }
    }

    Ok(paths)
}

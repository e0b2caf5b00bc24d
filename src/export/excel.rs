//! Excel生成（CLI版）
//!
//! 共通ライブラリの generate_excel_buffer でバッファを作り、ファイルに書き出す

use crate::error::{AddressError, Result};
use std::path::Path;
use vn_address_common::export::excel_core::generate_excel_buffer;
use vn_address_common::OutputRow;

pub fn generate_excel(rows: &[OutputRow], output_path: &Path, sheet_name: &str) -> Result<()> {
    let buffer = generate_excel_buffer(rows, sheet_name).map_err(AddressError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}

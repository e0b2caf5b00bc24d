//! Excel生成（共通ライブラリ）
//!
//! layout.rs の定義を使用して処理結果シートを生成

use crate::layout::{
    excel_width_to_px, HEADER_BG, HEADER_FONT, HEADER_ROW_HEIGHT_PT, MISSING_CODE_FILL,
    OUTPUT_LAYOUT, PT_TO_PX, REVIEW_BG, REVIEW_FONT,
};
use crate::types::OutputRow;
use rust_xlsxwriter::*;

/// コードを数値セルとして書けるか（先頭0のない整数）
fn numeric_code(value: &str) -> Option<f64> {
    let plain = !value.is_empty()
        && value.len() <= 15
        && value.chars().all(|c| c.is_ascii_digit())
        && (value == "0" || !value.starts_with('0'));
    if plain {
        value.parse::<f64>().ok()
    } else {
        None
    }
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `rows` - 出力行（入力順）
/// * `sheet_name` - シート名
pub fn generate_excel_buffer(rows: &[OutputRow], sheet_name: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(HEADER_FONT))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let text_format = Format::new().set_align(FormatAlign::VerticalCenter);

    let missing_code_format = Format::new()
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::RGB(MISSING_CODE_FILL));

    let review_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(REVIEW_FONT))
        .set_background_color(Color::RGB(REVIEW_BG))
        .set_align(FormatAlign::Center);

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    // ヘッダー行
    let header_px = (HEADER_ROW_HEIGHT_PT * PT_TO_PX).round() as u32;
    worksheet
        .set_row_height_pixels(0, header_px)
        .map_err(|e| format!("行高さ設定エラー: {}", e))?;

    for (col, layout) in OUTPUT_LAYOUT.iter().enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width_pixels(col, excel_width_to_px(layout.width) as u32)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        worksheet
            .write_string_with_format(0, col, layout.header, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    }
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    // データ行（最終列が Check）
    let check_col = (OUTPUT_LAYOUT.len() - 1) as u16;
    for (i, row) in rows.iter().enumerate() {
        let excel_row = (i + 1) as u32;

        for (col, (layout, value)) in OUTPUT_LAYOUT.iter().zip(row.values()).enumerate() {
            let col = col as u16;
            let written = match value {
                None | Some("") if layout.is_code => {
                    worksheet.write_blank(excel_row, col, &missing_code_format)
                }
                None | Some("") => continue,
                Some(v) if layout.is_code => match numeric_code(v) {
                    Some(number) => worksheet.write_number(excel_row, col, number),
                    None => worksheet.write_string(excel_row, col, v),
                },
                Some(v) if col == check_col && row.needs_review() => {
                    worksheet.write_string_with_format(excel_row, col, v, &review_format)
                }
                Some(v) => worksheet.write_string_with_format(excel_row, col, v, &text_format),
            };
            written.map_err(|e| format!("セル書き込みエラー ({}, {}): {}", excel_row, col, e))?;
        }
    }

    if !rows.is_empty() {
        worksheet
            .autofilter(0, 0, rows.len() as u32, (OUTPUT_LAYOUT.len() - 1) as u16)
            .map_err(|e| format!("フィルター設定エラー: {}", e))?;
    }

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

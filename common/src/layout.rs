//! 出力シートのレイアウト定義
//!
//! 列の並びは `types::OUTPUT_COLUMNS` と一致させる。

use crate::types::OUTPUT_COLUMNS;

/// 1列分の設定
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    pub header: &'static str,
    /// Excelの列幅（文字数単位）
    pub width: f64,
    /// 行政コード列（空なら黄色で塗る）
    pub is_code: bool,
}

const fn column(header: &'static str, width: f64, is_code: bool) -> ColumnLayout {
    ColumnLayout { header, width, is_code }
}

/// 出力列のレイアウト
pub const OUTPUT_LAYOUT: [ColumnLayout; 9] = [
    column(OUTPUT_COLUMNS[0], 50.0, false),
    column(OUTPUT_COLUMNS[1], 30.0, false),
    column(OUTPUT_COLUMNS[2], 12.0, true),
    column(OUTPUT_COLUMNS[3], 22.0, false),
    column(OUTPUT_COLUMNS[4], 14.0, true),
    column(OUTPUT_COLUMNS[5], 22.0, false),
    column(OUTPUT_COLUMNS[6], 14.0, true),
    column(OUTPUT_COLUMNS[7], 22.0, false),
    column(OUTPUT_COLUMNS[8], 14.0, false),
];

/// ヘッダー背景色
pub const HEADER_BG: u32 = 0x4B6584;
/// ヘッダー文字色
pub const HEADER_FONT: u32 = 0xFFFFFF;
/// 未解決コードの塗りつぶし
pub const MISSING_CODE_FILL: u32 = 0xFFFF00;
/// 要確認セルの背景色
pub const REVIEW_BG: u32 = 0xFFEAA7;
/// 要確認セルの文字色
pub const REVIEW_FONT: u32 = 0xD35400;

/// ヘッダー行の高さ (pt)
pub const HEADER_ROW_HEIGHT_PT: f64 = 20.0;

/// ポイント→ピクセル変換係数（96dpi）
pub const PT_TO_PX: f64 = 96.0 / 72.0;

/// Excel列幅 → ピクセル
///
/// Calibri 11pt の最大桁幅 7px を基準にする。
pub fn excel_width_to_px(width: f64) -> f64 {
    (width * 7.0 + 5.0).round()
}

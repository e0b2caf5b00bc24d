//! 入力ブック（raw / database シート）の読み込み
//!
//! 1行目をヘッダーとして列名で列を探す。列の並び順には依存しない。

use crate::error::{AddressError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use vn_address_common::types::{COL_ADDRESS, REFERENCE_COLUMNS};
use vn_address_common::{normalize_code, RawAddress, ReferenceRecord};

/// 入力ブックの内容
#[derive(Debug, Clone, Default)]
pub struct InputTables {
    /// raw シートの Address 列（行順）
    pub addresses: Vec<RawAddress>,
    /// database シートの行
    pub reference: Vec<ReferenceRecord>,
}

/// 住所と参照テーブルを読み込む
pub fn read_input(path: &Path, raw_sheet: &str, database_sheet: &str) -> Result<InputTables> {
    let mut sheets = open(path)?;

    let raw = load_sheet(&mut sheets, raw_sheet)?;
    let database = load_sheet(&mut sheets, database_sheet)?;

    let addresses = read_addresses(&raw, raw_sheet)?;
    let reference = read_reference_range(&database, database_sheet)?;
    log::info!(
        "{}: 住所 {}件, 参照テーブル {}行",
        path.display(),
        addresses.len(),
        reference.len()
    );

    Ok(InputTables { addresses, reference })
}

/// 参照テーブルのみ読み込む
pub fn read_reference(path: &Path, database_sheet: &str) -> Result<Vec<ReferenceRecord>> {
    let mut sheets = open(path)?;
    let database = load_sheet(&mut sheets, database_sheet)?;
    read_reference_range(&database, database_sheet)
}

type Workbook = calamine::Sheets<std::io::BufReader<std::fs::File>>;

static EMPTY_CELL: Data = Data::Empty;

fn open(path: &Path) -> Result<Workbook> {
    if !path.exists() {
        return Err(AddressError::FileNotFound(path.display().to_string()));
    }
    Ok(open_workbook_auto(path)?)
}

fn load_sheet(sheets: &mut Workbook, name: &str) -> Result<Range<Data>> {
    let names = sheets.sheet_names();
    if !names.iter().any(|n| n == name) {
        return Err(AddressError::MissingSheet {
            sheet: name.to_string(),
            available: names.join(", "),
        });
    }
    Ok(sheets.worksheet_range(name)?)
}

/// ヘッダー行から列番号を探す
fn column_index(range: &Range<Data>, sheet: &str, column: &str) -> Result<usize> {
    range
        .rows()
        .next()
        .and_then(|header| {
            header
                .iter()
                .position(|cell| cell.to_string().trim() == column)
        })
        .ok_or_else(|| AddressError::MissingColumn {
            sheet: sheet.to_string(),
            column: column.to_string(),
        })
}

fn read_addresses(range: &Range<Data>, sheet: &str) -> Result<Vec<RawAddress>> {
    let col = column_index(range, sheet, COL_ADDRESS)?;
    Ok(range
        .rows()
        .skip(1)
        .map(|row| row.get(col).map(raw_address).unwrap_or(RawAddress::Missing))
        .collect())
}

fn read_reference_range(range: &Range<Data>, sheet: &str) -> Result<Vec<ReferenceRecord>> {
    let mut cols = [0usize; 6];
    for (slot, column) in cols.iter_mut().zip(REFERENCE_COLUMNS) {
        *slot = column_index(range, sheet, column)?;
    }

    let records = range
        .rows()
        .skip(1)
        .map(|row| {
            let cell = |i: usize| row.get(cols[i]).unwrap_or(&EMPTY_CELL);
            ReferenceRecord {
                province_name: cell_text(cell(0)),
                province_code: cell_code(cell(1)),
                district_name: cell_text(cell(2)),
                district_code: cell_code(cell(3)),
                ward_name: cell_text(cell(4)),
                ward_code: cell_code(cell(5)),
            }
        })
        .filter(|record| *record != ReferenceRecord::default())
        .collect();
    Ok(records)
}

/// Address セルを分類する
pub fn raw_address(cell: &Data) -> RawAddress {
    match cell {
        Data::Empty => RawAddress::Missing,
        Data::String(s) if s.trim().is_empty() => RawAddress::Missing,
        Data::String(s) => RawAddress::Text(s.clone()),
        Data::Float(f) => RawAddress::NonText(format_number(*f)),
        other => RawAddress::NonText(other.to_string()),
    }
}

fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::Float(f) => format_number(*f),
        other => other.to_string(),
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// コードセル（数値セルは整数文字列にする）
fn cell_code(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => normalize_code(&format_number(*f)),
        other => normalize_code(&other.to_string()),
    }
}

fn format_number(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}

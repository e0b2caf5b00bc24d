//! テスト用の入力ブック作成

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

pub const REFERENCE_HEADER: [&str; 6] = [
    "Tỉnh/Thành phố",
    "Mã Tỉnh/Thành phố",
    "Quận/Huyện",
    "Mã Quận/Huyện",
    "Phường/Xã",
    "Mã Phường/Xã",
];

/// 参照テーブルの行（名前とコード）
pub type RefRow = (&'static str, f64, &'static str, f64, &'static str, f64);

pub fn reference_rows() -> Vec<RefRow> {
    vec![
        ("Thành phố Hồ Chí Minh", 79.0, "Quận 1", 760.0, "Phường Bến Nghé", 26734.0),
        ("Thành phố Hồ Chí Minh", 79.0, "Quận 1", 760.0, "Phường Đa Kao", 26737.0),
        ("Thành phố Hồ Chí Minh", 79.0, "Quận 3", 770.0, "Phường 7", 27139.0),
        ("Tỉnh Lào Cai", 10.0, "Huyện Bát Xát", 82.0, "Xã Y Tý", 2653.0),
        ("Tỉnh Bà Rịa - Vũng Tàu", 77.0, "Thành phố Vũng Tàu", 747.0, "Phường 7", 26536.0),
    ]
}

/// raw / database シートを持つブックを書き出す
pub fn write_workbook(path: &Path, addresses: &[&str], reference: &[RefRow]) {
    let mut workbook = Workbook::new();

    let raw = workbook.add_worksheet();
    raw.set_name("raw").unwrap();
    raw.write_string(0, 0, "STT").unwrap();
    raw.write_string(0, 1, "Address").unwrap();
    for (i, address) in addresses.iter().enumerate() {
        let row = (i + 1) as u32;
        raw.write_number(row, 0, (i + 1) as f64).unwrap();
        if !address.is_empty() {
            raw.write_string(row, 1, *address).unwrap();
        }
    }

    let database = workbook.add_worksheet();
    database.set_name("database").unwrap();
    for (col, header) in REFERENCE_HEADER.iter().enumerate() {
        database.write_string(0, col as u16, *header).unwrap();
    }
    for (i, r) in reference.iter().enumerate() {
        let row = (i + 1) as u32;
        database.write_string(row, 0, r.0).unwrap();
        database.write_number(row, 1, r.1).unwrap();
        database.write_string(row, 2, r.2).unwrap();
        database.write_number(row, 3, r.3).unwrap();
        database.write_string(row, 4, r.4).unwrap();
        database.write_number(row, 5, r.5).unwrap();
    }

    workbook.save(path).unwrap();
}

//! Vietnamese Address Common Library
//!
//! 住所の分割・正規化・行政コード解決エンジン（ファイル入出力なし）
//!
//! ```
//! use vn_address_common::{process_addresses, RawAddress, ReferenceRecord};
//!
//! let reference = vec![ReferenceRecord::new(
//!     "Thành phố Hồ Chí Minh", "79", "Quận 1", "760", "Phường Bến Nghé", "26734",
//! )];
//! let rows = process_addresses(&[RawAddress::from("Phường Bến Nghé, Quận 1, TPHCM")], &reference);
//! assert_eq!(rows[0].ward_code.as_deref(), Some("26734"));
//! ```

pub mod accent;
pub mod engine;
pub mod export;
pub mod layout;
pub mod normalize;
pub mod preprocess;
pub mod reference;
pub mod resolver;
pub mod segment;
pub mod types;

pub use accent::fold_accents;
pub use engine::{build_output_row, process_address, process_addresses};
pub use normalize::{normalize_district, normalize_province, normalize_ward, MatchKey, NormalizedAddress};
pub use preprocess::preprocess_address;
pub use reference::{normalize_code, ReferenceIndex};
pub use resolver::{resolve, resolve_codes, ResolvedCodes};
pub use segment::{segment_address, SegmentContext, SegmentRule, Segmentation};
pub use types::{
    OutputRow, RawAddress, ReferenceRecord, ResolvedRecord, SegmentedAddress, CHECK_NEEDS_REVIEW,
    OUTPUT_COLUMNS, REFERENCE_COLUMNS,
};

//! Vietnamese Address CLI
//!
//! 入力ブック（raw / database シート）を読み、住所ごとに分割・コード付与して書き出す。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod reader;

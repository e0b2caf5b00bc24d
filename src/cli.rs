use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vn-address")]
#[command(about = "ベトナム住所の分割・行政コード付与ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 入力ブックの住所を分割してコードを付与
    Process {
        /// 入力Excelファイル（raw / database シート）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル（デフォルト: 入力と同じフォルダの processed_addresses.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (excel/json/both)
        #[arg(short, long, default_value = "excel")]
        format: ExportFormat,

        /// 住所シート名（設定より優先）
        #[arg(long)]
        raw_sheet: Option<String>,

        /// 参照テーブルシート名（設定より優先）
        #[arg(long)]
        database_sheet: Option<String>,

        /// プレビュー行数（設定より優先）
        #[arg(long)]
        preview: Option<usize>,

        /// 並列処理を無効化
        #[arg(long)]
        sequential: bool,
    },

    /// 1件の住所を分割して途中結果を表示
    Split {
        /// 住所
        #[arg(required = true)]
        address: String,

        /// 参照テーブルを読む入力Excelファイル（指定時はコードも解決）
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 住所シート名を設定
        #[arg(long)]
        set_raw_sheet: Option<String>,

        /// 参照テーブルシート名を設定
        #[arg(long)]
        set_database_sheet: Option<String>,

        /// 並列処理の有効/無効を設定
        #[arg(long)]
        set_parallel: Option<bool>,

        /// プレビュー行数を設定
        #[arg(long)]
        set_preview_rows: Option<usize>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Excel,
    Json,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "json" => Ok(ExportFormat::Json),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use excel, json, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}

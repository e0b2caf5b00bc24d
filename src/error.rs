use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("シートが見つかりません: {sheet}（存在するシート: {available}）")]
    MissingSheet { sheet: String, available: String },

    #[error("シート {sheet} に列 {column} がありません")]
    MissingColumn { sheet: String, column: String },

    #[error("ブック読み込みエラー: {0}")]
    Workbook(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),
}

impl From<calamine::Error> for AddressError {
    fn from(e: calamine::Error) -> Self {
        AddressError::Workbook(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AddressError>;

use crate::error::{AddressError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 住所シート名
    pub raw_sheet: String,
    /// 参照テーブルシート名
    pub database_sheet: String,
    /// 出力シート名
    pub output_sheet: String,
    /// 住所を並列処理する
    pub parallel: bool,
    /// 処理後に表示するプレビュー行数
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            raw_sheet: "raw".into(),
            database_sheet: "database".into(),
            output_sheet: "Processed Data".into(),
            parallel: true,
            preview_rows: 10,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AddressError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("vn-address").join("config.json"))
    }
}

use clap::Parser;
use std::path::{Path, PathBuf};
use vn_address::{cli, config, error, export, pipeline, reader};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use vn_address_common::{resolve, segment_address, NormalizedAddress, ReferenceIndex};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Process { input, output, format, raw_sheet, database_sheet, preview, sequential } => {
            println!("🗺  vn-address - 住所処理\n");

            let raw_sheet = raw_sheet.unwrap_or_else(|| config.raw_sheet.clone());
            let database_sheet = database_sheet.unwrap_or_else(|| config.database_sheet.clone());
            let parallel = config.parallel && !sequential;

            // 1. 読み込み
            println!("[1/3] 入力ブックを読み込み中...");
            let tables = reader::read_input(&input, &raw_sheet, &database_sheet)?;
            println!(
                "✔ 住所 {}件 / 参照テーブル {}行\n",
                tables.addresses.len(),
                tables.reference.len()
            );
            if tables.addresses.is_empty() {
                log::warn!("{} シートに住所がありません", raw_sheet);
            }

            // 2. 分割・コード付与
            println!("[2/3] 住所を処理中...{}", if parallel { " (並列)" } else { "" });
            let rows = pipeline::process_all(&tables.addresses, &tables.reference, parallel, !cli.verbose);
            let summary = pipeline::ProcessingSummary::from_rows(&rows);
            println!("✔ 処理完了");
            pipeline::print_summary(&summary);
            println!();

            // 3. 書き出し
            println!("[3/3] 結果を保存中...");
            let output = output.unwrap_or_else(|| default_output(&input));
            export::export_results(&rows, &format, &output, &config.output_sheet)?;

            pipeline::print_preview(&rows, preview.unwrap_or(config.preview_rows));

            println!("\n✅ 完了");
        }

        Commands::Split { address, input } => {
            let reference = match &input {
                Some(path) => Some(ReferenceIndex::build(&reader::read_reference(path, &config.database_sheet)?)),
                None => None,
            };
            let ctx = reference
                .as_ref()
                .map(ReferenceIndex::segment_context)
                .unwrap_or_default();

            let segmentation = segment_address(&address, &ctx);
            let segmented = &segmentation.segmented;
            println!("入力:     {}", address);
            println!("前処理:   {}", segmentation.preprocessed);
            println!("ルール:   {}", segmentation.rule);
            println!("Tỉnh:     {}", segmented.province.as_deref().unwrap_or("-"));
            println!("Quận:     {}", segmented.district.as_deref().unwrap_or("-"));
            println!("Phường:   {}", segmented.ward.as_deref().unwrap_or("-"));
            println!("残り:     {}", segmented.detail.as_deref().unwrap_or("-"));

            let key = NormalizedAddress::from_segmented(segmented);
            println!(
                "正規化:   {} / {} / {}",
                key.province.normalized.as_deref().unwrap_or("-"),
                key.district.normalized.as_deref().unwrap_or("-"),
                key.ward.normalized.as_deref().unwrap_or("-"),
            );

            if let Some(index) = &reference {
                let record = resolve(segmentation.segmented.clone(), index);
                println!(
                    "コード:   {} / {} / {}",
                    record.province_code.as_deref().unwrap_or("-"),
                    record.district_code.as_deref().unwrap_or("-"),
                    record.ward_code.as_deref().unwrap_or("-"),
                );
                if record.needs_review() {
                    println!("⚠ Cần kiểm tra");
                }
            }
        }

        Commands::Config { show, set_raw_sheet, set_database_sheet, set_parallel, set_preview_rows } => {
            let mut config = config;
            let mut changed = false;

            if let Some(sheet) = set_raw_sheet {
                config.raw_sheet = sheet;
                changed = true;
            }
            if let Some(sheet) = set_database_sheet {
                config.database_sheet = sheet;
                changed = true;
            }
            if let Some(parallel) = set_parallel {
                config.parallel = parallel;
                changed = true;
            }
            if let Some(rows) = set_preview_rows {
                config.preview_rows = rows;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  住所シート: {}", config.raw_sheet);
                println!("  参照テーブルシート: {}", config.database_sheet);
                println!("  出力シート: {}", config.output_sheet);
                println!("  並列処理: {}", if config.parallel { "有効" } else { "無効" });
                println!("  プレビュー行数: {}", config.preview_rows);
            }
        }
    }

    Ok(())
}

/// `-v` で debug、RUST_LOG があればそちらを優先
fn init_logger(verbose: bool) {
    let filters = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| if verbose { "debug".into() } else { "warn".into() });
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();
}

/// 入力ファイルと同じフォルダの processed_addresses.xlsx
fn default_output(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!("{}.xlsx", export::DEFAULT_OUTPUT_NAME))
}

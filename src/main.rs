//! fincorpus 命令行入口
//!
//! ```bash
//! fincorpus clean --data-dir data            # 原地清洗语料
//! fincorpus parse                            # 解析语料 -> parsed_corpus.json
//! fincorpus generate                         # 生成训练样本 -> training_dataset.json/.jsonl
//! fincorpus progress                         # 查看样本统计
//! fincorpus run                              # clean -> parse -> generate
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fincorpus::{
    BatchCleaner, ConfigManager, CorpusParser, DatasetWriter, GlobalConfig, ProgressReport, SampleBuilder,
};

/// 财经语料清洗、解析与训练样本生成
#[derive(Parser, Debug)]
#[command(name = "fincorpus", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// 语料目录
    #[arg(long, global = true, value_name = "PATH", default_value = "data")]
    data_dir: PathBuf,

    /// 解析结果输出目录
    #[arg(long, global = true, value_name = "PATH", default_value = "outputs/processed_data")]
    processed_dir: PathBuf,

    /// 训练数据输出目录
    #[arg(long, global = true, value_name = "PATH", default_value = "outputs/training_data")]
    training_dir: PathBuf,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 原地清洗语料目录下的文章
    Clean(CleanArgs),
    /// 解析语料，提取章节与关键信息
    Parse,
    /// 由解析结果生成训练样本
    Generate,
    /// 查看训练样本统计
    Progress,
    /// 依次执行 clean、parse、generate
    Run(CleanArgs),
}

#[derive(Args, Debug)]
struct CleanArgs {
    /// 跳过的索引文件名（大小写不敏感）
    #[arg(long, default_value = "readme.md")]
    skip: String,

    /// 参与清洗的文件扩展名
    #[arg(long, default_value = "md")]
    extension: String,

    /// 来源标记行的字面量
    #[arg(long, default_value = "四川")]
    marker: String,

    /// 额外清洗规则（JSON数组）
    #[arg(long, value_name = "PATH")]
    rules: Option<PathBuf>,

    /// 只统计不回写
    #[arg(long)]
    dry_run: bool,

    /// 任一文件失败即中止
    #[arg(long)]
    fail_fast: bool,
}

fn build_config(common: &CommonArgs, clean: Option<&CleanArgs>) -> GlobalConfig {
    let mut builder = ConfigManager::custom()
        .data_dir(common.data_dir.clone())
        .processed_dir(common.processed_dir.clone())
        .training_dir(common.training_dir.clone())
        .verbose(common.verbose);

    if let Some(args) = clean {
        builder = builder
            .skip_file_name(args.skip.clone())
            .file_extension(args.extension.clone())
            .region_marker(args.marker.clone())
            .extra_rules_path(args.rules.clone())
            .dry_run(args.dry_run)
            .fail_fast(args.fail_fast);
    }

    builder.build()
}

fn init_logging(config: &GlobalConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn step_clean(config: &GlobalConfig) -> Result<()> {
    info!("步骤1: 清洗语料文件 {}", config.data_dir.display());
    let cleaner = BatchCleaner::from_config(config.clone())
        .await
        .context("加载清洗规则失败")?;
    let report = cleaner.run().await.context("批量清洗失败")?;
    if report.has_failures() {
        bail!("{} 个文件清洗失败", report.failed());
    }
    Ok(())
}

async fn step_parse(config: &GlobalConfig) -> Result<()> {
    info!("步骤2: 解析语料文件");
    let docs = CorpusParser::new(config.clone())
        .parse_all()
        .await
        .context("解析语料失败")?;
    CorpusParser::save(&docs, &config.parsed_corpus_path())
        .await
        .context("保存解析结果失败")?;
    info!("✓ 成功解析 {} 个语料文件", docs.len());
    Ok(())
}

async fn step_generate(config: &GlobalConfig) -> Result<()> {
    info!("步骤3: 生成训练数据");
    let parsed_path = config.parsed_corpus_path();
    let docs = CorpusParser::load(&parsed_path)
        .await
        .with_context(|| format!("未找到解析后的语料文件 {}，请先运行 parse", parsed_path.display()))?;
    let samples = SampleBuilder::build(&docs);
    DatasetWriter::save(&samples, &config.training_dataset_path())
        .await
        .context("保存训练数据失败")?;
    info!("✓ 成功生成 {} 个训练样本", samples.len());
    Ok(())
}

async fn show_progress(config: &GlobalConfig) -> Result<()> {
    match ProgressReport::load(&config.training_dataset_path()).await? {
        Some(report) => println!("{}", report),
        None => println!("⏳ 训练数据文件尚未生成..."),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let clean_args = match &cli.command {
        Command::Clean(args) | Command::Run(args) => Some(args),
        _ => None,
    };
    let config = build_config(&cli.common, clean_args);
    init_logging(&config);

    match &cli.command {
        Command::Clean(_) => step_clean(&config).await?,
        Command::Parse => step_parse(&config).await?,
        Command::Generate => step_generate(&config).await?,
        Command::Progress => show_progress(&config).await?,
        Command::Run(_) => {
            step_clean(&config).await?;
            step_parse(&config).await?;
            step_generate(&config).await?;
            info!("流程完成！");
        }
    }

    Ok(())
}

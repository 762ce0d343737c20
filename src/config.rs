//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 语料目录（批量清洗与解析的输入）
    pub data_dir: PathBuf,
    // 跳过的索引文件名（大小写不敏感的完整匹配）
    pub skip_file_name: String,
    // 参与处理的文件扩展名（不含点）
    pub file_extension: String,
    // 来源标记行的字面量
    pub region_marker: String,
    // 额外清洗规则（JSON数组）路径
    pub extra_rules_path: Option<PathBuf>,
    // 解析结果输出目录
    pub processed_dir: PathBuf,
    // 训练数据输出目录
    pub training_dir: PathBuf,
    // 只统计不回写
    pub dry_run: bool,
    // 单个文件失败即中止整个批次
    pub fail_fast: bool,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            skip_file_name: "readme.md".to_string(),
            file_extension: "md".to_string(),
            region_marker: "四川".to_string(),
            extra_rules_path: None,
            processed_dir: PathBuf::from("outputs/processed_data"),
            training_dir: PathBuf::from("outputs/training_data"),
            dry_run: false,
            fail_fast: false,
            verbose: false,
        }
    }
}

impl GlobalConfig {
    /// 文件名是否为需要跳过的索引文件
    pub fn is_skipped(&self, file_name: &str) -> bool {
        file_name.eq_ignore_ascii_case(&self.skip_file_name)
    }

    /// 文件名是否带有目标扩展名
    pub fn has_target_extension(&self, file_name: &str) -> bool {
        file_name.ends_with(&format!(".{}", self.file_extension))
    }

    /// 解析结果文件路径
    pub fn parsed_corpus_path(&self) -> PathBuf {
        self.processed_dir.join("parsed_corpus.json")
    }

    /// 训练数据文件路径
    pub fn training_dataset_path(&self) -> PathBuf {
        self.training_dir.join("training_dataset.json")
    }

    /// 未设置 RUST_LOG 时的默认日志级别
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn data_dir(mut self, path: PathBuf) -> Self {
        self.config.data_dir = path;
        self
    }

    pub fn skip_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.skip_file_name = name.into();
        self
    }

    pub fn file_extension(mut self, ext: impl Into<String>) -> Self {
        self.config.file_extension = ext.into().trim_start_matches('.').to_string();
        self
    }

    pub fn region_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.region_marker = marker.into();
        self
    }

    pub fn extra_rules_path(mut self, path: Option<PathBuf>) -> Self {
        self.config.extra_rules_path = path;
        self
    }

    pub fn processed_dir(mut self, path: PathBuf) -> Self {
        self.config.processed_dir = path;
        self
    }

    pub fn training_dir(mut self, path: PathBuf) -> Self {
        self.config.training_dir = path;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.config.dry_run = dry_run;
        self
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.config.fail_fast = fail_fast;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

//! 批量清洗报告

use std::fmt;

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// 已清洗并回写
    Cleaned {
        file_name: String,
        original_chars: usize,
        cleaned_chars: usize,
    },
    /// 内容已是清洗后的形式，未回写
    Unchanged { file_name: String },
    /// 保护触发，文件保持原样
    Reverted {
        file_name: String,
        original_chars: usize,
        cleaned_chars: usize,
    },
    /// 索引文件，未读写
    Skipped { file_name: String },
    /// 读写失败
    Failed { file_name: String, reason: String },
}

impl FileOutcome {
    pub fn file_name(&self) -> &str {
        match self {
            FileOutcome::Cleaned { file_name, .. }
            | FileOutcome::Unchanged { file_name }
            | FileOutcome::Reverted { file_name, .. }
            | FileOutcome::Skipped { file_name }
            | FileOutcome::Failed { file_name, .. } => file_name,
        }
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Cleaned { file_name, original_chars, cleaned_chars } => {
                write!(f, "✓ 已清洗：{}（有效字符 {} -> {}）", file_name, original_chars, cleaned_chars)
            }
            FileOutcome::Unchanged { file_name } => write!(f, "= 无需清洗：{}", file_name),
            FileOutcome::Reverted { file_name, original_chars, cleaned_chars } => write!(
                f,
                "↺ 已回退：{}（清洗后有效字符 {} 不足原文 {} 的一半）",
                file_name, cleaned_chars, original_chars
            ),
            FileOutcome::Skipped { file_name } => write!(f, "跳过文件（已忽略）：{}", file_name),
            FileOutcome::Failed { file_name, reason } => write!(f, "✗ 清洗失败：{}：{}", file_name, reason),
        }
    }
}

/// 批量清洗汇总
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
    pub dry_run: bool,
}

impl BatchReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }

    pub fn cleaned(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Cleaned { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Unchanged { .. }))
    }

    pub fn reverted(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Reverted { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}清洗完成：已清洗 {}，无需清洗 {}，回退 {}，跳过 {}，失败 {}",
            if self.dry_run { "[演练] " } else { "" },
            self.cleaned(),
            self.unchanged(),
            self.reverted(),
            self.skipped(),
            self.failed()
        )
    }
}

//! 训练数据模块：样本生成、保存与进度统计
pub mod sample;
pub mod writer;
pub mod progress;

pub use self::sample::{SampleBuilder, TrainingSample, MAX_OUTPUT_CHARS};
pub use self::writer::DatasetWriter;
pub use self::progress::ProgressReport;

//! 内容损失保护
//! 清洗后有效字符不足原文一半时回退原文

/// 清洗后至少保留的有效字符比例
pub const MIN_RETAINED_RATIO: f64 = 0.5;

/// 有效字符数：去掉空格、制表符、回车、换行后的码点数
pub fn real_chars(s: &str) -> usize {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
        .count()
}

/// 内容损失保护
pub struct ContentGuard;

impl ContentGuard {
    /// 清洗结果是否可以接受
    pub fn accepts(original_chars: usize, cleaned_chars: usize) -> bool {
        !((cleaned_chars as f64) < (original_chars as f64) * MIN_RETAINED_RATIO)
    }
}

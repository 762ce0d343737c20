//! 关键信息提取：指数点位、板块、个股、预测、资金流向
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 单个章节的关键信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    pub date: String,
    /// 指数点位
    pub indices: Vec<String>,
    /// 板块
    pub sectors: Vec<String>,
    /// 个股
    pub stocks: Vec<String>,
    /// 预测
    pub predictions: Vec<String>,
    /// 资金流向
    pub fund_flow: Vec<String>,
    /// 情绪判断（暂无提取规则）
    pub sentiments: Vec<String>,
}

const SECTOR_KEYWORDS: &[&str] = &[
    "半导体", "芯片", "AI", "人工智能", "军工", "新能源", "光伏",
    "储能", "锂电", "医药", "创新药", "消费", "零售", "券商",
    "稀土", "有色", "煤炭", "航天", "机器人", "传媒", "游戏",
    "CPO", "PCB", "算力", "大模型", "存储", "光刻胶", "福建",
    "海南", "两岸", "航母", "海防", "固态电池", "电池", "白酒",
    "短剧", "影视", "跨境电商", "冰雪", "造纸", "有机硅",
];

const PREDICTION_KEYWORDS: &[&str] = &["看涨", "看跌", "震荡", "反弹", "分化", "承压", "企稳", "冲高回落"];

/// 指数点位（取第1个分组）
static INDEX_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d{4})点",
        r"上证.*?(\d{4})",
        r"沪指.*?(\d{4})",
        r"深成指.*?(\d{4})",
        r"创业板.*?(\d{4})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// 个股简称（取第1个分组；后缀只作定界，不计入已扫描位置）
static STOCK_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"([东西南北中][\x{4e00}-\x{9fa5}]{1,3})[\s、，。！]",
        r"([\x{4e00}-\x{9fa5}]{2,4})(?:涨停|跌停|上涨|下跌)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static FUND_FLOW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(净流入|净流出).*?(\d+\.?\d*)亿").unwrap()
});

/// 保序去重
fn dedup_keep_first(items: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

fn collect_first_groups(patterns: &[Regex], content: &str) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|re| {
            re.captures_iter(content)
                .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// 每次命中后从第1个分组末尾继续搜索，后缀可参与下一次匹配
fn collect_groups_before_suffix(patterns: &[Regex], content: &str) -> Vec<String> {
    let mut found = Vec::new();
    for re in patterns {
        let mut start = 0;
        while let Some(group) = re.captures_at(content, start).and_then(|cap| cap.get(1)) {
            found.push(group.as_str().to_string());
            start = group.end();
        }
    }
    found
}

fn collect_keywords(keywords: &[&str], content: &str) -> Vec<String> {
    keywords
        .iter()
        .filter(|kw| content.contains(*kw))
        .map(|kw| kw.to_string())
        .collect()
}

/// 从章节文本提取关键信息
pub fn extract_key_info(content: &str, date: &str) -> KeyInfo {
    let fund_flow = FUND_FLOW_REGEX
        .captures_iter(content)
        .map(|cap| format!("{}{}亿", &cap[1], &cap[2]))
        .collect();

    KeyInfo {
        date: date.to_string(),
        indices: dedup_keep_first(collect_first_groups(&INDEX_PATTERNS, content)),
        sectors: dedup_keep_first(collect_keywords(SECTOR_KEYWORDS, content)),
        stocks: dedup_keep_first(collect_groups_before_suffix(&STOCK_PATTERNS, content)),
        predictions: dedup_keep_first(collect_keywords(PREDICTION_KEYWORDS, content)),
        fund_flow,
        sentiments: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_indices_and_keywords() {
        let content = "今日沪指收于3350点，上证指数震荡。创业板指2100附近企稳，半导体、券商领涨，AI分化。";
        let info = extract_key_info(content, "2025-03-05");

        assert_eq!(info.date, "2025-03-05");
        assert_eq!(info.indices, vec!["3350".to_string(), "2100".to_string()]);
        assert_eq!(info.sectors, vec!["半导体", "AI", "券商"]);
        assert_eq!(info.predictions, vec!["震荡", "分化", "企稳"]);
        assert!(info.sentiments.is_empty());
    }

    #[test]
    fn test_extract_stocks() {
        let content = "东方财富，中信证券涨停，西部材料。";
        let info = extract_key_info(content, "2025-03-05");
        assert_eq!(info.stocks, vec!["东方财富", "西部材料", "中信证券"]);
    }

    #[test]
    fn test_stock_suffix_is_not_consumed() {
        // “上涨”既是“券商”的后缀，也是下一个简称的开头
        let info = extract_key_info("券商上涨医药下跌", "2025-03-05");
        assert_eq!(info.stocks, vec!["券商", "上涨医药"]);
    }

    #[test]
    fn test_extract_fund_flow_keeps_duplicates() {
        let content = "主力净流入12.5亿，北向净流出3亿；主力净流入12.5亿";
        let info = extract_key_info(content, "2025-03-05");
        assert_eq!(info.fund_flow, vec!["净流入12.5亿", "净流出3亿", "净流入12.5亿"]);
    }

    #[test]
    fn test_empty_content() {
        let info = extract_key_info("", "2025-03-05");
        assert_eq!(info, KeyInfo { date: "2025-03-05".to_string(), ..Default::default() });
    }
}

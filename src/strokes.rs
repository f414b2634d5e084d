//! 内置笔顺数据：
//! - 常用汉字的笔画数与笔画名称序列（静态表，进程内只构建一次）
//! - 未收录的字返回“未知”占位结果，并附带提示

use once_cell::sync::Lazy;
use std::{collections::HashMap, fmt};

/// 笔画数：已知或未知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StrokeCount {
    Known(u32),
    Unknown,
}

impl fmt::Display for StrokeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrokeCount::Known(n) => write!(f, "{}", n),
            StrokeCount::Unknown => f.write_str("未知"),
        }
    }
}

/// 单个汉字的笔顺条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StrokeEntry {
    pub(crate) count: StrokeCount,
    pub(crate) names: &'static [&'static str],
    /// 仅未收录时存在
    pub(crate) note: Option<&'static str>,
}

impl StrokeEntry {
    /// 以 “ → ” 连接的笔顺文本
    pub(crate) fn sequence(&self) -> String {
        self.names.join(" → ")
    }
}

pub(crate) const UNKNOWN_PLACEHOLDER: &str = "请查询专业笔顺数据库";
pub(crate) const UNKNOWN_NOTE: &str = "基础笔顺数据有限，建议使用 hanzi-writer 在线查询";

// 数据按原样收录；个别条目的笔画数与名称序列长度不一致，保持不变
const STROKE_DATA: &[(&str, u32, &[&str])] = &[
    ("一", 1, &["横"]),
    ("二", 2, &["横", "横"]),
    ("三", 3, &["横", "横", "横"]),
    ("十", 2, &["横", "竖"]),
    ("人", 2, &["撇", "捺"]),
    ("大", 3, &["横", "撇", "捺"]),
    ("小", 3, &["竖钩", "撇", "点"]),
    ("山", 3, &["竖", "竖折", "竖"]),
    ("水", 4, &["竖钩", "横撇", "撇", "捺"]),
    ("火", 4, &["点", "点", "撇", "捺"]),
    ("木", 4, &["横", "竖", "撇", "捺"]),
    ("土", 3, &["横", "竖", "横"]),
    ("日", 4, &["竖", "横折", "横", "横", "竖"]),
    ("月", 4, &["撇", "横折钩", "横", "横", "横"]),
    ("口", 3, &["竖", "横折", "横", "竖", "横"]),
    ("中", 4, &["竖", "横折", "横", "横", "竖"]),
    ("国", 8, &["竖", "横折", "横", "竖", "横折", "横", "横", "横"]),
    ("爱", 10, &["撇", "点", "横撇", "横", "横撇", "捺", "点", "斜钩", "点", "点"]),
    ("学", 8, &["点", "点", "撇", "横", "竖钩", "点", "撇", "点"]),
    ("我", 7, &["撇", "横", "竖钩", "横", "竖", "撇", "捺"]),
    ("你", 7, &["撇", "竖", "横", "竖钩", "点", "斜钩", "点"]),
    ("他", 5, &["撇", "竖", "横折钩", "横", "竖弯钩"]),
    ("她", 6, &["撇点", "撇", "横", "竖折钩", "横", "竖弯钩"]),
    ("们", 5, &["撇", "竖", "横折钩", "横", "竖弯钩"]),
    ("的", 8, &["撇", "横", "横折钩", "横", "竖", "横折", "横", "横"]),
    ("了", 2, &["横折钩", "竖弯钩"]),
    ("在", 6, &["横", "竖", "横折钩", "横", "点", "横"]),
    ("有", 6, &["横", "撇", "横折钩", "横", "竖", "横"]),
    ("和", 8, &["撇", "横", "竖", "横折钩", "横", "竖弯钩", "点", "点"]),
    ("是", 9, &["竖", "横折", "横", "竖", "横折钩", "横", "竖", "点", "横"]),
    ("来", 7, &["横", "竖", "横折钩", "横", "竖", "撇", "捺"]),
    ("不", 4, &["横", "竖", "点", "捺"]),
    (
        "就",
        12,
        &["点", "横", "竖", "横折钩", "横", "竖", "横折", "横", "横折钩", "点", "斜钩", "点"],
    ),
    ("这", 7, &["点", "横折", "横", "撇", "点", "捺", "点"]),
    ("个", 3, &["撇", "横", "竖"]),
    ("上", 3, &["竖", "横", "横"]),
    ("下", 3, &["横", "竖", "点"]),
    ("多", 6, &["撇", "点", "撇", "横折钩", "点", "点"]),
    ("少", 4, &["竖", "撇", "点", "撇"]),
    ("吗", 6, &["竖", "横折钩", "横", "横", "斜钩", "点"]),
    ("呢", 8, &["竖", "横折钩", "横", "横", "斜钩", "点", "撇", "点"]),
    ("吧", 7, &["竖", "横折钩", "横", "横", "斜钩", "点", "捺"]),
    ("啊", 10, &["横", "竖折", "竖", "横折钩", "横", "竖", "横折", "横", "竖", "点"]),
    ("谁", 10, &["点", "横折钩", "横", "横", "点", "横", "竖", "横", "竖弯钩", "点"]),
];

static STROKE_TABLE: Lazy<HashMap<&'static str, StrokeEntry>> = Lazy::new(|| {
    STROKE_DATA
        .iter()
        .map(|&(ch, count, names)| {
            (
                ch,
                StrokeEntry { count: StrokeCount::Known(count), names, note: None },
            )
        })
        .collect()
});

/// 按整串精确匹配查询笔顺；未收录时返回“未知”占位条目
pub(crate) fn lookup_strokes(query: &str) -> StrokeEntry {
    match STROKE_TABLE.get(query) {
        Some(entry) => entry.clone(),
        None => StrokeEntry {
            count: StrokeCount::Unknown,
            names: &[UNKNOWN_PLACEHOLDER],
            note: Some(UNKNOWN_NOTE),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_characters() {
        let yi = lookup_strokes("一");
        assert_eq!(yi.count, StrokeCount::Known(1));
        assert_eq!(yi.names, &["横"]);
        assert!(yi.note.is_none());

        let guo = lookup_strokes("国");
        assert_eq!(guo.count, StrokeCount::Known(8));
        assert_eq!(guo.names.len(), 8);
        assert_eq!(guo.names[0], "竖");
    }

    #[test]
    fn test_every_table_row_is_returned_verbatim() {
        for &(ch, count, names) in STROKE_DATA {
            let entry = lookup_strokes(ch);
            assert_eq!(entry.count, StrokeCount::Known(count), "{}", ch);
            assert_eq!(entry.names, names, "{}", ch);
            assert!(entry.note.is_none());
        }
        assert_eq!(STROKE_TABLE.len(), STROKE_DATA.len());
    }

    #[test]
    fn test_unknown_fallback() {
        for q in ["龘", "中国", "", "a", " 一"] {
            let entry = lookup_strokes(q);
            assert_eq!(entry.count, StrokeCount::Unknown);
            assert_eq!(entry.names, &[UNKNOWN_PLACEHOLDER]);
            assert!(entry.note.is_some_and(|n| !n.is_empty()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(lookup_strokes("爱").count.to_string(), "10");
        assert_eq!(lookup_strokes("龘").count.to_string(), "未知");
        assert_eq!(lookup_strokes("人").sequence(), "撇 → 捺");
    }
}

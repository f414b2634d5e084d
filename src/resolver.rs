//! 拼音解析模块：
//! - 通过 `RomanizationLookup` 接入外部拼音库（默认 `pinyin` crate，带声调、不取多音）
//! - 只取输入的第一个字；任何失败都归一为占位符 `?`
//! - 开头为非汉字时，原样返回开头连续的非汉字片段

use anyhow::Result;
use pinyin::ToPinyin;
use std::fmt;

/// 查询失败时输出的占位符
pub(crate) const SENTINEL: &str = "?";

/// 拼音查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reading {
    Found(String),
    Unavailable,
}

impl Reading {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Reading::Found(s) => s,
            Reading::Unavailable => SENTINEL,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单字到拼音的查询接口
pub(crate) trait RomanizationLookup {
    /// 返回该字的首个（默认）读音；无结果时返回 `Ok(None)`
    fn first_reading(&self, ch: char) -> Result<Option<String>>;
}

/// 基于 `pinyin` crate 的带声调查询
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ToneMarked;

impl RomanizationLookup for ToneMarked {
    fn first_reading(&self, ch: char) -> Result<Option<String>> {
        Ok(ch.to_pinyin().map(|p| p.with_tone().to_string()))
    }
}

/// 是否为 CJK 统一汉字（含扩展区与兼容汉字）
pub(crate) fn is_han(ch: char) -> bool {
    matches!(
        ch as u32,
        0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF | 0x20000..=0x323AF
    )
}

/// 使用默认查询器解析拼音
pub(crate) fn resolve(text: &str) -> Reading {
    resolve_with(&ToneMarked, text)
}

/// 使用指定查询器解析拼音（只看第一个字，其余字符忽略）
pub(crate) fn resolve_with<L: RomanizationLookup + ?Sized>(lookup: &L, text: &str) -> Reading {
    let Some(first) = text.chars().next() else {
        tracing::debug!("输入为空，无可查询的字");
        return Reading::Unavailable;
    };
    match lookup.first_reading(first) {
        Ok(Some(r)) if !r.is_empty() => {
            tracing::debug!(ch = %first, reading = %r, "拼音查询成功");
            Reading::Found(r)
        }
        Ok(None) if !is_han(first) => {
            let run: String = text.chars().take_while(|c| !is_han(*c)).collect();
            tracing::debug!(run = %run, "非汉字片段原样返回");
            Reading::Found(run)
        }
        Ok(_) => {
            tracing::debug!(ch = %first, "拼音库无结果");
            Reading::Unavailable
        }
        Err(err) => {
            tracing::warn!(ch = %first, "拼音获取失败: {:#}", err);
            Reading::Unavailable
        }
    }
}

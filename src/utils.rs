//! 通用辅助函数：
//! - 环境变量读取与解析
//! - 输出文件名校验
//! - 内联脚本字面量编码

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::{env, path::PathBuf};

/// 可选读取 PATH 环境变量为 PathBuf。
pub(crate) fn env_opt_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// 可选读取 String 环境变量。
pub(crate) fn env_opt_string(key: &str) -> Option<String> {
    env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// 读取布尔环境变量的真值（1/true/on/yes/y）。
pub(crate) fn env_bool_truthy(key: &str) -> Option<bool> {
    env::var(key).ok().map(|v| parse_truthy(&v))
}

fn parse_truthy(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "on" | "yes" | "y")
}

/// 由查询串得到页面文件名 `<query>.html`；拒绝无法作为单个文件名的输入。
pub(crate) fn page_file_name(query: &str) -> Result<String> {
    if query.is_empty() || query == "." || query == ".." {
        bail!("无法用 {:?} 作为文件名", query);
    }
    if query.contains(['/', '\\', '\0']) {
        bail!("文件名不能包含路径分隔符: {:?}", query);
    }
    Ok(format!("{}.html", query))
}

/// 将值编码为可安全嵌入内联 `<script>` 的 JSON 字面量。
pub(crate) fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).context("序列化脚本参数失败")?;
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    Ok(out)
}

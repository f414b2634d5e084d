//! 配置与加载模块：
//! - 定义 `Config`/`OutputSettings`/`PageSettings` 数据结构
//! - 提供 `load_config`：显式路径 > 自动发现 hanzi.yaml/hanzi.yml > 内置默认
//! - 暴露配置来源信息，便于日志打印

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// hanzi-writer 默认 CDN 地址
pub(crate) const DEFAULT_CDN_URL: &str =
    "https://cdn.jsdelivr.net/npm/hanzi-writer@3.5/dist/hanzi-writer.min.js";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) output: OutputSettings,
    pub(crate) page: PageSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct OutputSettings {
    /// 页面输出目录，缺省为当前目录
    pub(crate) dir: Option<PathBuf>,
}

/// 笔顺动画页面的外观与节奏参数（直接传给 hanzi-writer）
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct PageSettings {
    pub(crate) cdn_url: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) padding: u32,
    pub(crate) show_outline: bool,
    pub(crate) stroke_color: String,
    pub(crate) radical_color: String,
    pub(crate) outline_color: String,
    pub(crate) drawing_width: u32,
    pub(crate) stroke_animation_speed: f64,
    /// 毫秒
    pub(crate) delay_between_strokes: u32,
    pub(crate) slow_animation_speed: f64,
    pub(crate) slow_delay_between_strokes: u32,
    pub(crate) quiz_animation_speed: f64,
    pub(crate) quiz_delay_between_strokes: u32,
    /// 页面加载后自动演示前的等待（毫秒）
    pub(crate) autoplay_delay_ms: u32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            cdn_url: DEFAULT_CDN_URL.to_string(),
            width: 300,
            height: 300,
            padding: 20,
            show_outline: true,
            stroke_color: "#2c3e50".to_string(),
            radical_color: "#667eea".to_string(),
            outline_color: "#bdc3c7".to_string(),
            drawing_width: 20,
            stroke_animation_speed: 1.0,
            delay_between_strokes: 300,
            slow_animation_speed: 0.5,
            slow_delay_between_strokes: 500,
            quiz_animation_speed: 0.5,
            quiz_delay_between_strokes: 200,
            autoplay_delay_ms: 800,
        }
    }
}

/// 配置来源（用于打印和调试）
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigSource {
    LocalExplicit(String),
    LocalAuto(String),
    Builtin,
}

/// 加载后的配置及其来源
#[derive(Debug)]
pub(crate) struct LoadedConfig {
    pub(crate) config: Config,
    pub(crate) source: ConfigSource,
}

/// 人类可读的来源描述
pub(crate) fn describe_source(src: &ConfigSource) -> String {
    match src {
        ConfigSource::LocalExplicit(p) => format!("本地文件: {}", p),
        ConfigSource::LocalAuto(p) => format!("本地文件(自动发现): {}", p),
        ConfigSource::Builtin => "内置默认值".to_string(),
    }
}

// 自动发现本地配置：hanzi.yaml / hanzi.yml
fn resolve_local_config_path(base: &Path) -> Option<PathBuf> {
    ["hanzi.yaml", "hanzi.yml"]
        .into_iter()
        .map(|cand| base.join(cand))
        .find(|p| p.is_file())
}

/// 解析 YAML 文本；空文件视为全部默认
pub(crate) fn parse_config(text: &str) -> Result<Config> {
    if text.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(text).context("解析 YAML 失败")
}

fn read_config(path: &Path) -> Result<Config> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("读取配置失败: {}", path.display()))?;
    parse_config(&raw).with_context(|| format!("配置文件无效: {}", path.display()))
}

/// 加载配置：显式路径必须存在；否则在 `base` 下自动发现；都没有则使用内置默认值
pub(crate) fn load_config(explicit: Option<&Path>, base: &Path) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("配置文件不存在: {}", path.display());
        }
        return Ok(LoadedConfig {
            config: read_config(path)?,
            source: ConfigSource::LocalExplicit(path.display().to_string()),
        });
    }
    if let Some(path) = resolve_local_config_path(base) {
        return Ok(LoadedConfig {
            config: read_config(&path)?,
            source: ConfigSource::LocalAuto(path.display().to_string()),
        });
    }
    Ok(LoadedConfig { config: Config::default(), source: ConfigSource::Builtin })
}

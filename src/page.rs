//! 笔顺动画页面生成模块：
//! - 内置 Tera 模板，渲染引用 hanzi-writer 的单文件 HTML
//! - 文本插值走 HTML 自动转义，脚本内插值走 JSON 编码
//! - 写出 `<字>.html` 并返回绝对路径（不解析符号链接）

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tera::{Context as TContext, Tera};

use crate::{
    config::PageSettings,
    utils::{page_file_name, script_json},
};

// 模板名以 .html 结尾，Tera 会对其启用自动转义
const TEMPLATE_NAME: &str = "hanzi.html";
const TEMPLATE_SOURCE: &str = include_str!("../templates/hanzi.html.tera");

/// `HanziWriter.create` 的选项
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WriterOptions<'a> {
    width: u32,
    height: u32,
    padding: u32,
    show_outline: bool,
    stroke_animation_speed: f64,
    delay_between_strokes: u32,
    stroke_color: &'a str,
    radical_color: &'a str,
    outline_color: &'a str,
    drawing_width: u32,
}

impl<'a> From<&'a PageSettings> for WriterOptions<'a> {
    fn from(s: &'a PageSettings) -> Self {
        Self {
            width: s.width,
            height: s.height,
            padding: s.padding,
            show_outline: s.show_outline,
            stroke_animation_speed: s.stroke_animation_speed,
            delay_between_strokes: s.delay_between_strokes,
            stroke_color: &s.stroke_color,
            radical_color: &s.radical_color,
            outline_color: &s.outline_color,
            drawing_width: s.drawing_width,
        }
    }
}

pub(crate) struct PageGenerator {
    tera: Tera,
    settings: PageSettings,
}

impl PageGenerator {
    pub(crate) fn new(settings: PageSettings) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE_SOURCE)
            .context("加载内置页面模板失败")?;
        Ok(Self { tera, settings })
    }

    /// 渲染完整 HTML 文档；相同输入总是得到相同输出
    pub(crate) fn render(&self, character: &str, pinyin: &str) -> Result<String> {
        let mut ctx = TContext::new();
        ctx.insert("character", character);
        ctx.insert("pinyin", pinyin);
        ctx.insert("char_js", &script_json(character)?);
        ctx.insert("writer_options", &script_json(&WriterOptions::from(&self.settings))?);
        ctx.insert("page", &self.settings);
        self.tera
            .render(TEMPLATE_NAME, &ctx)
            .with_context(|| format!("渲染模板 {} 失败", TEMPLATE_NAME))
    }

    /// 渲染并写出到 `out_dir/<character>.html`（已存在则覆盖），返回绝对路径
    pub(crate) fn write(&self, out_dir: &Path, character: &str, pinyin: &str) -> Result<PathBuf> {
        let file_name = page_file_name(character)?;
        let html = self.render(character, pinyin)?;
        if !out_dir.as_os_str().is_empty() && !out_dir.exists() {
            fs::create_dir_all(out_dir)
                .with_context(|| format!("创建输出目录失败: {}", out_dir.display()))?;
        }
        let target = out_dir.join(&file_name);
        fs::write(&target, &html).with_context(|| format!("写入 {} 失败", target.display()))?;
        tracing::debug!(path = %target.display(), bytes = html.len(), "页面已写出");
        // 不解析符号链接，与按工作目录拼接的路径一致
        std::path::absolute(&target)
            .with_context(|| format!("解析绝对路径失败: {}", target.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> PageGenerator {
        PageGenerator::new(PageSettings::default()).unwrap()
    }

    fn between<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
        let start = html.find(open).unwrap() + open.len();
        let end = start + html[start..].find(close).unwrap();
        &html[start..end]
    }

    #[test]
    fn test_render_embeds_character_and_pinyin() {
        let html = generator().render("爱", "ài").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert_eq!(between(&html, "<title>", "</title>"), "汉字 \"爱\" - 拼音: ài");
        assert_eq!(between(&html, "<div class=\"char-display\">", "</div>"), "爱");
        assert_eq!(between(&html, "<div class=\"pinyin\">", "</div>"), "ài");
        assert!(html.contains("const TARGET_CHAR = \"爱\";"));
        assert!(html.contains("hanzi-writer.min.js"));
    }

    #[test]
    fn test_render_writer_options() {
        let html = generator().render("中", "zhōng").unwrap();
        assert!(html.contains("\"width\":300"));
        assert!(html.contains("\"padding\":20"));
        assert!(html.contains("\"showOutline\":true"));
        assert!(html.contains("\"delayBetweenStrokes\":300"));
        assert!(html.contains("\"strokeColor\":\"#2c3e50\""));
        assert!(html.contains("}, 800);"));
        for handler in ["animateStroke()", "quizMode()", "slowAnimate()", "reset()"] {
            assert!(html.contains(&format!("onclick=\"{}\"", handler)), "{}", handler);
        }
    }

    #[test]
    fn test_render_uses_settings() {
        let settings = PageSettings {
            width: 420,
            stroke_color: "#123456".to_string(),
            autoplay_delay_ms: 1500,
            ..PageSettings::default()
        };
        let html = PageGenerator::new(settings).unwrap().render("人", "rén").unwrap();
        assert!(html.contains("width: 420px;"));
        assert!(html.contains("\"width\":420"));
        assert!(html.contains("\"strokeColor\":\"#123456\""));
        assert!(html.contains("}, 1500);"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let g = generator();
        assert_eq!(g.render("国", "guó").unwrap(), g.render("国", "guó").unwrap());
    }

    #[test]
    fn test_render_escapes_markup_and_script() {
        let payload = "<script>alert('x')</script>";
        let html = generator().render(payload, "\"?\"").unwrap();
        assert!(!html.contains(payload));
        assert!(html.contains("<div class=\"char-display\">&lt;script&gt;"));
        assert!(html.contains("<div class=\"pinyin\">&quot;?&quot;</div>"));
        assert!(html.contains("const TARGET_CHAR = \"\\u003cscript\\u003e"));
    }

    #[test]
    fn test_write_overwrites_and_returns_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let g = generator();

        let first = g.write(dir.path(), "爱", "ài").unwrap();
        assert!(first.is_absolute());
        assert_eq!(first.file_name().unwrap(), "爱.html");
        let before = fs::read_to_string(&first).unwrap();

        let second = g.write(dir.path(), "爱", "ài").unwrap();
        assert_eq!(first, second);
        assert_eq!(before, fs::read_to_string(&second).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_symlinked_dir_in_path() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        fs::create_dir(&real).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let path = generator().write(&link, "爱", "ài").unwrap();
        assert_eq!(path, link.join("爱.html"));
        assert!(real.join("爱.html").exists());
    }

    #[test]
    fn test_write_creates_out_dir_and_rejects_bad_names() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("pages").join("hanzi");
        let path = generator().write(&nested, "水", "shuǐ").unwrap();
        assert!(path.exists());

        assert!(generator().write(dir.path(), "../evil", "?").is_err());
        assert!(!dir.path().join("..").join("evil.html").exists());
    }
}

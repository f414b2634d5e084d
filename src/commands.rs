//! 命令调度模块：
//! - 接收解析好的 CLI 参数，计算“有效参数”（CLI > 环境变量 > 配置文件 > 默认）
//! - 依次调用拼音解析、笔顺查询与页面生成，并输出结果

use anyhow::Result;
use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    cli::Cli,
    config::{self, PageSettings},
    page::PageGenerator,
    resolver,
    strokes::lookup_strokes,
    utils::{env_bool_truthy, env_opt_path, env_opt_string},
};

const USAGE: &str = "\
🔤 汉字拼音和笔顺工具

使用方法:
  hanzi \"汉字\"                - 获取拼音
  hanzi \"汉字\" --pinyin-only  - 仅获取拼音
  hanzi \"汉字\" --stroke       - 获取拼音+内置笔顺信息
  hanzi \"汉字\" --html         - 生成笔顺动画 HTML 页面
  hanzi \"汉字\" --all          - 获取拼音+笔顺信息+动画页面

示例:
  hanzi \"爱\"
  hanzi \"中国\" --all

更多选项见 hanzi --help
";

/// 来自环境变量的覆盖项
#[derive(Debug, Default, Clone)]
pub(crate) struct EnvOverrides {
    pub(crate) config: Option<PathBuf>,
    pub(crate) out_dir: Option<PathBuf>,
    pub(crate) cdn_url: Option<String>,
    pub(crate) open: Option<bool>,
}

impl EnvOverrides {
    /// 读取 HANZI_CONFIG / HANZI_OUT_DIR / HANZI_CDN_URL / HANZI_OPEN
    pub(crate) fn from_env() -> Self {
        Self {
            config: env_opt_path("HANZI_CONFIG"),
            out_dir: env_opt_path("HANZI_OUT_DIR"),
            cdn_url: env_opt_string("HANZI_CDN_URL"),
            open: env_bool_truthy("HANZI_OPEN"),
        }
    }
}

/// 合并后的有效设置
#[derive(Debug)]
pub(crate) struct Settings {
    pub(crate) out_dir: PathBuf,
    pub(crate) page: PageSettings,
    pub(crate) open: bool,
}

/// 计算有效设置（CLI > 环境变量 > 配置文件 > 默认）；相对输出目录以 `cwd` 为基准
pub(crate) fn effective_settings(cli: &Cli, env: &EnvOverrides, cwd: &Path) -> Result<Settings> {
    let config_path = cli.config.clone().or_else(|| env.config.clone()).map(|p| cwd.join(p));
    let loaded = config::load_config(config_path.as_deref(), cwd)?;
    tracing::debug!("配置来源: {}", config::describe_source(&loaded.source));
    let cfg = loaded.config;

    let out_dir = cli
        .out_dir
        .clone()
        .or_else(|| env.out_dir.clone())
        .or(cfg.output.dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut page = cfg.page;
    if let Some(url) = cli.cdn_url.clone().or_else(|| env.cdn_url.clone()) {
        page.cdn_url = url;
    }
    let open = cli.open || env.open.unwrap_or(false);

    Ok(Settings { out_dir: cwd.join(out_dir), page, open })
}

/// 执行一次查询；生成了页面时返回其绝对路径
pub(crate) fn execute(
    cli: &Cli,
    env: &EnvOverrides,
    cwd: &Path,
    out: &mut dyn Write,
) -> Result<Option<PathBuf>> {
    let Some(query) = cli.query.as_deref() else {
        writeln!(out)?;
        write!(out, "{}", USAGE)?;
        return Ok(None);
    };

    let reading = resolver::resolve(query);
    writeln!(out)?;
    writeln!(out, "🔤 汉字: {}", query)?;
    writeln!(out, "📝 拼音: {}", reading)?;

    if cli.wants_strokes() {
        let entry = lookup_strokes(query);
        writeln!(out)?;
        writeln!(out, "🖊️ 笔顺信息:")?;
        writeln!(out, "   总笔画: {}", entry.count)?;
        writeln!(out, "   笔顺: {}", entry.sequence())?;
        if let Some(note) = entry.note {
            writeln!(out, "   ⚠️ {}", note)?;
        }
    }

    let mut written = None;
    if cli.wants_page() {
        let settings = effective_settings(cli, env, cwd)?;
        tracing::debug!(out_dir = %settings.out_dir.display(), "生成笔顺动画页面");
        let generator = PageGenerator::new(settings.page)?;
        let path = generator.write(&settings.out_dir, query, reading.as_str())?;

        writeln!(out)?;
        writeln!(
            out,
            "✅ 已生成笔顺动画页面: {}",
            path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
        )?;
        writeln!(out, "   用浏览器打开即可查看动画和练习书写！")?;
        writeln!(out)?;
        writeln!(out, "📂 文件路径: {}", path.display())?;

        if settings.open {
            if let Err(err) = webbrowser::open(&path.to_string_lossy()) {
                tracing::warn!("无法在浏览器中打开页面: {}", err);
            }
        }
        written = Some(path);
    }

    writeln!(out)?;
    Ok(written)
}

/// 以当前目录与标准输出运行
pub(crate) fn run(cli: Cli) -> Result<()> {
    let cwd = env::current_dir()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &EnvOverrides::from_env(), &cwd, &mut out)?;
    out.flush()?;
    Ok(())
}

//! CLI 定义模块：仅负责命令行参数结构体与解析
//! 将 clap 的声明与业务逻辑解耦，便于在其它模块中复用参数。

use clap::Parser;
use std::path::PathBuf;

/// 顶层 CLI 入口
#[derive(Parser, Debug, Default)]
#[command(name = "hanzi", about = "汉字拼音和笔顺工具", version)]
pub(crate) struct Cli {
    /// 要查询的汉字（多字时拼音只取第一个字）
    #[arg(value_name = "汉字")]
    pub(crate) query: Option<String>,
    /// 仅输出拼音（忽略 --html/--stroke/--all）
    #[arg(long)]
    pub(crate) pinyin_only: bool,
    /// 生成笔顺动画 HTML 页面
    #[arg(long)]
    pub(crate) html: bool,
    /// 输出内置笔顺信息
    #[arg(long)]
    pub(crate) stroke: bool,
    /// 拼音 + 笔顺信息 + 动画页面
    #[arg(long)]
    pub(crate) all: bool,
    /// 生成页面后在浏览器中打开（环境变量 HANZI_OPEN）
    #[arg(long)]
    pub(crate) open: bool,
    /// 页面输出目录，默认当前目录（环境变量 HANZI_OUT_DIR）
    #[arg(short, long, value_name = "DIR")]
    pub(crate) out_dir: Option<PathBuf>,
    /// 配置文件路径，默认：hanzi.yaml / hanzi.yml（环境变量 HANZI_CONFIG）
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,
    /// hanzi-writer 脚本地址，覆盖配置中的 page.cdn_url（环境变量 HANZI_CDN_URL）
    #[arg(long, value_name = "URL")]
    pub(crate) cdn_url: Option<String>,
    /// 输出调试日志
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl Cli {
    pub(crate) fn wants_page(&self) -> bool {
        !self.pinyin_only && (self.html || self.all)
    }

    pub(crate) fn wants_strokes(&self) -> bool {
        !self.pinyin_only && (self.stroke || self.all)
    }
}

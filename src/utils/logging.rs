//! 日志工具模块
//!
//! 提供 tracing 初始化、事件日志文件和统计输出的辅助函数

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::orchestrator::JobSummary;

/// 初始化 tracing
///
/// `RUST_LOG` 优先；未设置时按 `verbose` 选择 debug 或 info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 事件日志文件
///
/// 每次任务开始时重写文件头，之后逐行追加
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    /// 创建日志文件并写入带时间的文件头
    pub fn create(path: &Path) -> Result<Self> {
        let log_header = format!(
            "{}\nArticle generation log - {}\n{}\n\n",
            "=".repeat(60),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(60)
        );
        fs::write(path, log_header)
            .with_context(|| format!("无法创建日志文件: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn append(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 记录程序启动信息
pub fn log_startup(model: &str, count: usize, output_dir: &Path) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 文章生成模式");
    info!("🤖 模型: {}", model);
    info!("📊 文章数量: {}", count);
    info!("📁 输出目录: {}", output_dir.display());
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(summary: &JobSummary, log_file: Option<&Path>) {
    info!("\n{}", "=".repeat(60));
    info!("📊 生成完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", summary.succeeded, summary.requested);
    info!("❌ 失败: {}", summary.failed);
    if summary.cancelled {
        info!("⏹️ 已取消，共尝试 {} 篇", summary.attempted);
    }
    info!("{}", "=".repeat(60));
    if let Some(path) = log_file {
        info!("\n日志已保存至: {}", path.display());
    }
}

//! 文章写入服务 - 业务能力层
//!
//! 只负责"把一篇文章写成文件"能力，不关心流程

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 第 `number` 篇（从 1 开始）文章的文件名
pub fn article_file_name(number: usize) -> String {
    format!("article_{}.txt", number)
}

/// 文章写入服务
///
/// 职责：
/// - 每篇文章一个 UTF-8 文件
/// - 同名文件直接覆盖
/// - 不保证整批写入的原子性
pub struct ArticleWriter {
    output_dir: PathBuf,
}

impl ArticleWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 写入第 `number` 篇文章，返回文件名
    pub async fn write(&self, number: usize, content: &str) -> Result<String> {
        let file_name = article_file_name(number);
        let path = self.output_dir.join(&file_name);

        debug!("写入文章: {} ({} 字节)", path.display(), content.len());

        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;

        Ok(file_name)
    }
}

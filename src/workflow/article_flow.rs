//! 文章生成流程 - 流程层
//!
//! 核心职责：定义"一篇文章"的完整处理流程
//!
//! 流程顺序：
//! 1. 构建提示词
//! 2. 调用 LLM
//! 3. 去除首尾空白后写入文件

use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::models::ArticleSpec;
use crate::services::{ArticleWriter, TextGenerator};
use crate::workflow::article_ctx::ArticleCtx;
use crate::workflow::prompt::build_prompt;

/// 文章生成流程
///
/// - 不持有任务状态
/// - 不判断取消
/// - 任何一步失败都直接返回错误，由调用方决定是否继续
pub struct ArticleFlow {
    generator: Arc<dyn TextGenerator>,
    writer: ArticleWriter,
    system_message: String,
}

impl ArticleFlow {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        writer: ArticleWriter,
        system_message: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            writer,
            system_message: system_message.into(),
        }
    }

    /// 生成并保存一篇文章，返回写入的文件名
    pub async fn run(&self, spec: &ArticleSpec, ctx: &ArticleCtx) -> Result<String> {
        let prompt = build_prompt(spec);
        debug!("{} 提示词:\n{}", ctx, prompt);

        let content = self
            .generator
            .generate(&self.system_message, &prompt)
            .await?;

        self.writer.write(ctx.number, content.trim()).await
    }
}

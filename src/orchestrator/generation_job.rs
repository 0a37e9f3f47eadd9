//! 文章生成任务 - 编排层
//!
//! ## 职责
//!
//! 按顺序生成 `count` 篇文章，是整个系统唯一的后台工作者。
//!
//! ## 核心功能
//!
//! 1. **循环调度**：第 i 篇按取模规则选择标题/主题/锚文本
//! 2. **协作式取消**：每轮开始前检查一次取消标记，正在进行的请求不会被打断
//! 3. **失败隔离**：单篇失败只记录日志，任务继续
//! 4. **事件输出**：通过 channel 发送进度和日志，不持有任何界面对象
//!
//! ## 设计特点
//!
//! - 事件 channel 无界，工作者从不等待消费者
//! - 消费者被丢弃时事件直接丢弃，任务照常完成

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{error, info, warn};

use crate::models::GenerationRequest;
use crate::services::{ArticleWriter, TextGenerator};
use crate::workflow::{ArticleCtx, ArticleFlow};

/// 任务对外发出的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    /// 进度百分比 0-100
    Progress(u8),
    /// 一行日志
    Log(String),
}

/// 取消标记
///
/// 控制方写，工作者每轮读一次。
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// 任务统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSummary {
    pub requested: usize,
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub cancelled: bool,
}

/// 一次生成任务
pub struct GenerationJob {
    request: GenerationRequest,
    flow: ArticleFlow,
}

impl GenerationJob {
    pub fn new(
        request: GenerationRequest,
        generator: Arc<dyn TextGenerator>,
        system_message: impl Into<String>,
    ) -> Self {
        let writer = ArticleWriter::new(request.output_dir());
        Self {
            flow: ArticleFlow::new(generator, writer, system_message),
            request,
        }
    }

    /// 运行任务直到完成或被取消
    pub async fn run(self, events: UnboundedSender<JobEvent>, cancel: CancelFlag) -> JobSummary {
        let total = self.request.count();
        let emit = |event: JobEvent| {
            // 接收端已关闭时忽略
            let _ = events.send(event);
        };

        let mut summary = JobSummary {
            requested: total,
            ..Default::default()
        };

        info!(
            "🚀 开始生成 {} 篇文章，输出目录: {}",
            total,
            self.request.output_dir().display()
        );

        for index in 0..total {
            if cancel.is_cancelled() {
                warn!("⏹️ 用户取消，已尝试 {}/{} 篇", summary.attempted, total);
                emit(JobEvent::Log("Article generation stopped by user.".to_string()));
                summary.cancelled = true;
                break;
            }

            let ctx = ArticleCtx::new(index, total);
            let spec = self.request.article_spec(index);

            emit(JobEvent::Log(format!(
                "Generating article {} of {}...",
                ctx.number, total
            )));
            summary.attempted += 1;

            match self.flow.run(&spec, &ctx).await {
                Ok(file_name) => {
                    info!("{} ✓ 已保存: {}", ctx, file_name);
                    emit(JobEvent::Log(format!(
                        "Article {} saved as {}.",
                        ctx.number, file_name
                    )));
                    summary.succeeded += 1;
                }
                Err(e) => {
                    error!("{} ❌ 生成失败: {:#}", ctx, e);
                    emit(JobEvent::Log(format!(
                        "Error generating article {}: {:#}",
                        ctx.number, e
                    )));
                    summary.failed += 1;
                }
            }

            emit(JobEvent::Progress(ctx.progress()));
        }

        summary
    }
}

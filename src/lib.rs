//! # Article Generator
//!
//! 根据标题、主题和锚文本关键词，调用兼容 OpenAI 的 LLM 接口批量生成短文，每篇保存为一个文件
//!
//! ## 架构设计
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单篇文章
//! - `LlmService` - 文本生成能力（实现 `TextGenerator`）
//! - `ArticleWriter` - 写 `article_<n>.txt` 能力
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一篇文章"的完整处理流程
//! - `ArticleCtx` - 上下文封装（序号 + 总数）
//! - `ArticleFlow` - 流程编排（prompt → LLM → 写文件）
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/generation_job` - 后台生成任务，循环、取消、事件
//! - `orchestrator/job_controller` - 启动前校验，单任务控制
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{ConfigError, JobError, ValidationError};
pub use models::{ArticleSpec, GenerationRequest, RequestForm};
pub use orchestrator::{CancelFlag, GenerationJob, JobController, JobEvent, JobSummary};
pub use services::{ArticleWriter, LlmService, TextGenerator};
pub use workflow::{ArticleCtx, ArticleFlow};

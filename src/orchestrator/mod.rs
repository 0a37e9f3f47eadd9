//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `generation_job` - 文章生成任务
//! - 遍历 `0..count`，每轮委托 `ArticleFlow` 生成一篇
//! - 每轮开始前检查取消标记
//! - 通过 channel 输出进度和日志
//!
//! ### `job_controller` - 任务控制器
//! - 校验输入后才启动后台任务
//! - 同一时间只运行一个任务
//! - 提供停止与等待
//!
//! ## 层次关系
//!
//! ```text
//! job_controller (启动 / 停止 / 等待)
//!     ↓
//! generation_job (处理 0..count)
//!     ↓
//! workflow::ArticleFlow (处理单篇文章)
//!     ↓
//! services (能力层：llm / article writer)
//! ```

pub mod generation_job;
pub mod job_controller;

pub use generation_job::{CancelFlag, GenerationJob, JobEvent, JobSummary};
pub use job_controller::JobController;

//! 任务控制器 - 编排层
//!
//! 表现层（CLI）只和这里打交道：启动、停止、等待。
//! 同一时间只允许一个任务，上一个任务未结束时再次启动会被拒绝。

use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::JobError;
use crate::models::{GenerationRequest, RequestForm};
use crate::orchestrator::generation_job::{CancelFlag, GenerationJob, JobEvent, JobSummary};
use crate::services::{LlmService, TextGenerator};

struct RunningJob {
    cancel: CancelFlag,
    task: JoinHandle<JobSummary>,
}

/// 任务控制器
pub struct JobController {
    config: Config,
    current: Option<RunningJob>,
}

impl JobController {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// 是否有任务正在运行
    pub fn is_running(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|job| !job.task.is_finished())
    }

    /// 校验输入并启动任务，返回事件接收端
    ///
    /// 校验失败时不会启动任何后台任务。
    pub fn start(&mut self, form: RequestForm) -> Result<UnboundedReceiver<JobEvent>, JobError> {
        self.ensure_idle()?;
        let request = form.validate()?;
        let generator = Arc::new(LlmService::new(&self.config, request.api_key()));
        self.spawn(request, generator)
    }

    /// 使用指定的生成器启动已校验的请求
    pub fn start_with(
        &mut self,
        request: GenerationRequest,
        generator: Arc<dyn TextGenerator>,
    ) -> Result<UnboundedReceiver<JobEvent>, JobError> {
        self.ensure_idle()?;
        self.spawn(request, generator)
    }

    /// 请求取消当前任务
    ///
    /// 只设置标记，立即返回；返回是否有任务收到了取消请求
    pub fn stop(&self) -> bool {
        match &self.current {
            Some(job) if !job.task.is_finished() => {
                info!("⏹️ 已请求停止生成");
                job.cancel.cancel();
                true
            }
            _ => false,
        }
    }

    /// 等待当前任务结束并取回统计
    pub async fn wait(&mut self) -> Result<Option<JobSummary>, JobError> {
        match self.current.take() {
            Some(job) => Ok(Some(job.task.await?)),
            None => Ok(None),
        }
    }

    fn ensure_idle(&self) -> Result<(), JobError> {
        if self.is_running() {
            warn!("⚠️ 已有任务在运行，拒绝再次启动");
            return Err(JobError::AlreadyRunning);
        }
        Ok(())
    }

    fn spawn(
        &mut self,
        request: GenerationRequest,
        generator: Arc<dyn TextGenerator>,
    ) -> Result<UnboundedReceiver<JobEvent>, JobError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancelFlag::new();
        let job = GenerationJob::new(request, generator, self.config.system_message.clone());

        let task = tokio::spawn(job.run(tx, cancel.clone()));
        self.current = Some(RunningJob { cancel, task });

        Ok(rx)
    }
}

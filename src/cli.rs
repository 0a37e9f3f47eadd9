//! 命令行参数
//!
//! 命令行就是表现层：收集输入，交给 `JobController`，显示事件。

use anyhow::Result;
use clap::Parser;
use std::future::Future;
use std::path::PathBuf;
use tracing::warn;

use crate::config::Config;
use crate::models::{load_lines_file, load_request_form, RequestForm};
use crate::orchestrator::{JobController, JobEvent, JobSummary};
use crate::utils::logging::{self, EventLog};

#[derive(Debug, Parser)]
#[command(
    name = "article-generator",
    version,
    about = "Generate short articles from titles, topics and anchor keywords with a hosted LLM"
)]
pub struct Args {
    /// API key (falls back to the request file, then LLM_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// File with one title per line
    #[arg(long, value_name = "FILE")]
    pub titles: Option<PathBuf>,

    /// A single title; may be repeated
    #[arg(long = "title", value_name = "TEXT")]
    pub title: Vec<String>,

    /// File with one topic per line (optional)
    #[arg(long, value_name = "FILE")]
    pub topics: Option<PathBuf>,

    /// File with one anchor text keyword phrase per line (optional)
    #[arg(long, value_name = "FILE")]
    pub anchors: Option<PathBuf>,

    /// Number of articles to generate (1-100)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Existing directory that receives article_<n>.txt files
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// TOML request file; command-line values take precedence
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// TOML settings file (endpoint, model, max tokens, ...)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 加载配置：有 `--config` 时读文件，否则只读环境变量
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::from_env()?,
        };
        config.verbose_logging |= self.verbose;
        Ok(config)
    }

    /// 合并请求文件、命令行和配置，得到未校验的表单
    pub async fn to_form(&self, config: &Config) -> Result<RequestForm> {
        let mut form = match &self.request {
            Some(path) => load_request_form(path).await?,
            None => RequestForm::default(),
        };

        if let Some(key) = &self.api_key {
            form.api_key = key.clone();
        }
        if form.api_key.trim().is_empty() {
            form.api_key = config.llm_api_key.clone();
        }

        let mut titles = match &self.titles {
            Some(path) => load_lines_file(path).await?,
            None => Vec::new(),
        };
        titles.extend(self.title.iter().cloned());
        if !titles.is_empty() {
            form.titles = titles;
        }

        if let Some(path) = &self.topics {
            form.topics = load_lines_file(path).await?;
        }
        if let Some(path) = &self.anchors {
            form.anchor_texts = load_lines_file(path).await?;
        }
        if let Some(count) = self.count {
            form.count = count;
        }
        if let Some(dir) = &self.output_dir {
            form.output_dir = dir.clone();
        }

        Ok(form)
    }
}

/// 运行一次生成任务：打印事件，`shutdown` 完成时请求停止
///
/// 日志文件在任务启动前创建，创建失败时不会启动任务。
/// `shutdown` 只生效一次；返回错误时只记录日志，不会停止任务。
pub async fn execute<S, Fut>(
    config: &Config,
    form: RequestForm,
    mut shutdown: S,
) -> Result<Option<JobSummary>>
where
    S: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    let event_log = match &config.output_log_file {
        Some(path) => Some(EventLog::create(path)?),
        None => None,
    };

    let output_dir = PathBuf::from(form.output_dir.trim());
    let count = form.count;

    let mut controller = JobController::new(config.clone());
    let mut events = controller.start(form)?;

    logging::log_startup(&config.llm_model_name, count, &output_dir);

    let mut progress = 0u8;
    let mut listening = true;
    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };
                match event {
                    JobEvent::Progress(p) => progress = p,
                    JobEvent::Log(line) => {
                        println!("[{:>3}%] {}", progress, line);
                        if let Some(log) = &event_log {
                            if let Err(e) = log.append(&line) {
                                warn!("写入日志文件失败: {}", e);
                            }
                        }
                    }
                }
            }
            signal = shutdown(), if listening => {
                listening = false;
                match signal {
                    Ok(()) => {
                        controller.stop();
                    }
                    Err(e) => warn!("⚠️ 无法监听停止信号: {}", e),
                }
            }
        }
    }

    let summary = controller.wait().await?;
    if let Some(summary) = &summary {
        logging::print_final_stats(summary, event_log.as_ref().map(|l| l.path()));
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "article-generator",
            "--api-key",
            "sk",
            "--title",
            "One",
            "--title",
            "Two",
            "-n",
            "7",
            "-o",
            "out",
        ]);
        assert_eq!(args.api_key.as_deref(), Some("sk"));
        assert_eq!(args.title, vec!["One", "Two"]);
        assert_eq!(args.count, Some(7));
        assert_eq!(args.output_dir.as_deref(), Some("out"));
        assert!(!args.verbose);
    }

    #[tokio::test]
    async fn test_form_defaults_count_and_key_from_config() {
        let args = Args::parse_from(["article-generator", "--title", "T", "-o", "/tmp"]);
        let config = Config {
            llm_api_key: "sk-config".to_string(),
            ..Config::default()
        };

        let form = args.to_form(&config).await.unwrap();
        assert_eq!(form.api_key, "sk-config");
        assert_eq!(form.count, 1);
        assert_eq!(form.titles, vec!["T"]);
    }

    #[tokio::test]
    async fn test_request_file_without_count_generates_one() {
        let dir = tempfile::tempdir().unwrap();
        let request = dir.path().join("request.toml");
        std::fs::write(
            &request,
            format!(
                "api_key = \"sk-file\"\ntitles = [\"Only\"]\noutput_dir = {:?}\n",
                dir.path().to_str().unwrap()
            ),
        )
        .unwrap();

        let args = Args::parse_from(["article-generator", "--request", request.to_str().unwrap()]);
        let form = args.to_form(&Config::default()).await.unwrap();

        assert_eq!(form.count, 1);
        let validated = form.validate().unwrap();
        assert_eq!(validated.count(), 1);
    }

    #[tokio::test]
    async fn test_flags_override_request_file() {
        let dir = tempfile::tempdir().unwrap();
        let request = dir.path().join("request.toml");
        std::fs::write(
            &request,
            "api_key = \"sk-file\"\ncount = 9\ntitles = [\"From file\"]\ntopics = \"a\\nb\"\noutput_dir = \"x\"\n",
        )
        .unwrap();
        let titles = dir.path().join("titles.txt");
        std::fs::write(&titles, "Line one\n\nLine two\n").unwrap();

        let args = Args::parse_from([
            "article-generator",
            "--request",
            request.to_str().unwrap(),
            "--titles",
            titles.to_str().unwrap(),
            "--title",
            "Extra",
            "-n",
            "2",
        ]);
        let form = args.to_form(&Config::default()).await.unwrap();

        assert_eq!(form.api_key, "sk-file");
        assert_eq!(form.titles, vec!["Line one", "Line two", "Extra"]);
        assert_eq!(form.topics, vec!["a", "b"]);
        assert_eq!(form.count, 2);
        assert_eq!(form.output_dir, "x");
    }
}

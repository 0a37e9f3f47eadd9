use anyhow::Result;
use article_generator::cli::{self, Args};
use article_generator::utils::logging;
use article_generator::JobError;
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置
    let config = args.load_config()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    let form = args.to_form(&config).await?;

    match cli::execute(&config, form, tokio::signal::ctrl_c).await {
        Ok(_) => Ok(()),
        // 校验失败直接退出，不会启动任务
        Err(e) if e.downcast_ref::<JobError>().is_some() => {
            error!("❌ {}", e);
            std::process::exit(2);
        }
        Err(e) => Err(e),
    }
}

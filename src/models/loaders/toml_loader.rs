use crate::models::request::RequestForm;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 请求文件加载 RequestForm（未校验）
///
/// 文件示例：
/// ```toml
/// api_key = "sk-..."
/// count = 3
/// output_dir = "out"
/// titles = """
/// First title
/// Second title
/// """
/// topics = ["rust", "tokio"]
/// ```
pub async fn load_request_form(toml_file_path: &Path) -> Result<RequestForm> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取请求文件: {}", toml_file_path.display()))?;

    let form: RequestForm = toml::from_str(&content)
        .with_context(|| format!("无法解析请求文件: {}", toml_file_path.display()))?;

    tracing::info!(
        "已加载请求文件 {}: {} 个标题, {} 个主题, {} 个锚文本",
        toml_file_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy(),
        form.titles.len(),
        form.topics.len(),
        form.anchor_texts.len()
    );

    Ok(form)
}

/// 读取“一行一个”的纯文本列表文件
pub async fn load_lines_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取列表文件: {}", path.display()))?;
    Ok(crate::models::request::parse_lines(&content))
}

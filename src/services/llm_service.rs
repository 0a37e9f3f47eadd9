//! LLM 服务 - 业务能力层
//!
//! 只负责"生成一段文本"能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（如 Novita 等）

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;

/// 文本生成能力
///
/// 生成任务只依赖这个 trait，测试时可以替换成假的实现。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 发送一次 system + user 的对话，返回模型的回复
    async fn generate(&self, system_message: &str, user_message: &str) -> Result<String>;
}

/// LLM 服务
///
/// 职责：
/// - 调用 chat completion 接口
/// - 固定模型与最大输出长度
/// - 不关心文章序号和文件
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
    max_tokens: u32,
}

impl LlmService {
    /// 创建新的 LLM 服务
    ///
    /// `api_key` 来自操作者输入，其他参数来自配置
    pub fn new(config: &Config, api_key: &str) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config).with_backoff(single_attempt());

        Self {
            client,
            model_name: config.llm_model_name.clone(),
            max_tokens: config.max_tokens,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// 每篇文章只请求一次：第一次失败（包括 5xx / 429）即返回，不重试
fn single_attempt() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

#[async_trait]
impl TextGenerator for LlmService {
    async fn generate(&self, system_message: &str, user_message: &str) -> Result<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(system_message)
            .build()?;
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_msg),
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .max_tokens(self.max_tokens)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            anyhow::anyhow!("LLM API call failed: {}", e)
        })?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow::anyhow!("LLM returned an empty completion"))?;

        Ok(content)
    }
}

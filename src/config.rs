use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://api.novita.ai/v3/openai";
pub const DEFAULT_MODEL_NAME: &str = "meta-llama/llama-3.1-8b-instruct";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful assistant.";

/// 程序配置
///
/// 优先级：环境变量 > 配置文件 > 默认值
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 单篇文章的最大输出 token 数
    pub max_tokens: u32,
    /// 固定的系统提示词
    pub system_message: String,
    // --- 日志配置 ---
    /// 事件日志文件（可选）
    pub output_log_file: Option<PathBuf>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: String::new(),
            llm_api_base_url: DEFAULT_API_BASE_URL.to_string(),
            llm_model_name: DEFAULT_MODEL_NAME.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_message: DEFAULT_SYSTEM_MESSAGE.to_string(),
            output_log_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    /// 读取 TOML 配置文件，然后叠加环境变量
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.with_env_overrides(|name| std::env::var(name).ok())
    }

    fn with_env_overrides<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            llm_api_key: lookup("LLM_API_KEY").unwrap_or(self.llm_api_key),
            llm_api_base_url: lookup("LLM_API_BASE_URL").unwrap_or(self.llm_api_base_url),
            llm_model_name: lookup("LLM_MODEL_NAME").unwrap_or(self.llm_model_name),
            max_tokens: match lookup("LLM_MAX_TOKENS") {
                Some(v) => v.parse().map_err(|_| ConfigError::EnvVarParseFailed {
                    var_name: "LLM_MAX_TOKENS",
                    value: v,
                    expected_type: "u32",
                })?,
                None => self.max_tokens,
            },
            system_message: lookup("LLM_SYSTEM_MESSAGE").unwrap_or(self.system_message),
            output_log_file: lookup("OUTPUT_LOG_FILE")
                .map(PathBuf::from)
                .or(self.output_log_file),
            verbose_logging: match lookup("VERBOSE_LOGGING") {
                Some(v) => v.parse().map_err(|_| ConfigError::EnvVarParseFailed {
                    var_name: "VERBOSE_LOGGING",
                    value: v,
                    expected_type: "bool",
                })?,
                None => self.verbose_logging,
            },
        })
    }
}

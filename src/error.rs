use std::path::PathBuf;
use thiserror::Error;

/// 启动前校验错误
///
/// 任何一个校验失败都不会启动生成任务。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// 必填项缺失（API Key / 标题 / 输出目录）
    #[error("Please fill in all required fields (missing: {})", .0.join(", "))]
    MissingField(Vec<&'static str>),

    /// 文章数量超出允许范围
    #[error("Number of articles must be between {min} and {max}, got {value}")]
    CountOutOfRange { value: usize, min: usize, max: usize },

    /// 输出目录不存在或不是目录
    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirNotFound(PathBuf),
}

/// 任务控制错误
#[derive(Debug, Error)]
pub enum JobError {
    /// 已有任务正在运行
    #[error("a generation job is already running")]
    AlreadyRunning,

    /// 请求未通过校验
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// 后台任务异常退出
    #[error("generation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取文件失败
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML 解析失败
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 环境变量解析失败
    #[error("environment variable {var_name}: '{value}' is not a valid {expected_type}")]
    EnvVarParseFailed {
        var_name: &'static str,
        value: String,
        expected_type: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_lists_every_field() {
        let err = ValidationError::MissingField(vec!["api key", "titles"]);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields (missing: api key, titles)"
        );
    }

    #[test]
    fn test_validation_error_converts_into_job_error() {
        let err: JobError = ValidationError::OutputDirNotFound(PathBuf::from("/nope")).into();
        assert_eq!(err.to_string(), "Output directory does not exist: /nope");
    }
}

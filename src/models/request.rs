//! 生成请求模型
//!
//! `RequestForm` 是操作者原样填写的内容，`GenerationRequest` 是校验通过后的不可变请求。

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// 允许的文章数量范围
pub const MIN_ARTICLE_COUNT: usize = 1;
pub const MAX_ARTICLE_COUNT: usize = 100;

/// 把多行文本拆成条目：逐行去除首尾空白，丢弃空行，保持顺序
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 未校验的输入
///
/// 未填写数量时默认生成 1 篇
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RequestForm {
    pub api_key: String,
    #[serde(deserialize_with = "lines_or_list")]
    pub topics: Vec<String>,
    #[serde(deserialize_with = "lines_or_list")]
    pub titles: Vec<String>,
    #[serde(deserialize_with = "lines_or_list")]
    pub anchor_texts: Vec<String>,
    pub count: usize,
    pub output_dir: String,
}

impl Default for RequestForm {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            topics: Vec::new(),
            titles: Vec::new(),
            anchor_texts: Vec::new(),
            count: MIN_ARTICLE_COUNT,
            output_dir: String::new(),
        }
    }
}

impl RequestForm {
    /// 从多行文本框内容构建
    pub fn from_text(
        api_key: &str,
        topics: &str,
        titles: &str,
        anchor_texts: &str,
        count: usize,
        output_dir: &str,
    ) -> Self {
        Self {
            api_key: api_key.to_string(),
            topics: parse_lines(topics),
            titles: parse_lines(titles),
            anchor_texts: parse_lines(anchor_texts),
            count,
            output_dir: output_dir.to_string(),
        }
    }

    /// 校验并生成不可变请求
    ///
    /// 顺序：必填项 → 数量范围 → 目录是否存在
    pub fn validate(self) -> Result<GenerationRequest, ValidationError> {
        let api_key = self.api_key.trim().to_string();
        let output_dir = self.output_dir.trim().to_string();
        // 列表可能来自 TOML 文件，这里再清理一次
        let clean = |items: Vec<String>| -> Vec<String> {
            items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };
        let titles = clean(self.titles);
        let topics = clean(self.topics);
        let anchor_texts = clean(self.anchor_texts);

        let mut missing = Vec::new();
        if api_key.is_empty() {
            missing.push("api key");
        }
        if titles.is_empty() {
            missing.push("titles");
        }
        if output_dir.is_empty() {
            missing.push("output directory");
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingField(missing));
        }

        if !(MIN_ARTICLE_COUNT..=MAX_ARTICLE_COUNT).contains(&self.count) {
            return Err(ValidationError::CountOutOfRange {
                value: self.count,
                min: MIN_ARTICLE_COUNT,
                max: MAX_ARTICLE_COUNT,
            });
        }

        let output_dir = PathBuf::from(output_dir);
        if !output_dir.is_dir() {
            return Err(ValidationError::OutputDirNotFound(output_dir));
        }

        Ok(GenerationRequest {
            api_key,
            topics,
            titles,
            anchor_texts,
            count: self.count,
            output_dir,
        })
    }
}

/// 已校验的生成请求
///
/// 只能通过 [`RequestForm::validate`] 构造，持有它即说明校验已通过。
#[derive(Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    api_key: String,
    topics: Vec<String>,
    titles: Vec<String>,
    anchor_texts: Vec<String>,
    count: usize,
    output_dir: PathBuf,
}

impl GenerationRequest {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn anchor_texts(&self) -> &[String] {
        &self.anchor_texts
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 第 `index` 篇（从 0 开始）文章使用的标题/主题/锚文本
    ///
    /// 较短的列表循环使用，空列表对应 `None`。
    pub fn article_spec(&self, index: usize) -> ArticleSpec {
        ArticleSpec {
            index,
            title: self.titles[index % self.titles.len()].clone(),
            topic: pick(&self.topics, index),
            anchor_text: pick(&self.anchor_texts, index),
        }
    }
}

impl std::fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("api_key", &"<redacted>")
            .field("topics", &self.topics)
            .field("titles", &self.titles)
            .field("anchor_texts", &self.anchor_texts)
            .field("count", &self.count)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

fn pick(items: &[String], index: usize) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items[index % items.len()].clone())
    }
}

/// 单篇文章的输入组合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSpec {
    /// 从 0 开始的序号
    pub index: usize,
    pub title: String,
    pub topic: Option<String>,
    pub anchor_text: Option<String>,
}

/// TOML 中列表既可以写成数组，也可以写成多行字符串
fn lines_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LinesOrList {
        Lines(String),
        List(Vec<String>),
    }

    Ok(match LinesOrList::deserialize(deserializer)? {
        LinesOrList::Lines(text) => parse_lines(&text),
        LinesOrList::List(items) => items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(dir: &Path) -> RequestForm {
        RequestForm::from_text(
            "  sk-test  ",
            "rust\n\n  async  \n",
            "First\nSecond\nThird\n",
            "fast code",
            5,
            dir.to_str().unwrap(),
        )
    }

    #[test]
    fn test_parse_lines_trims_and_drops_blank_lines() {
        assert_eq!(
            parse_lines("  a \n\n\t\nb\r\n   c"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert!(parse_lines("   \n \n").is_empty());
    }

    #[test]
    fn test_default_count_is_one() {
        assert_eq!(RequestForm::default().count, 1);
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        let dir = tempfile::tempdir().unwrap();
        let request = form(dir.path()).validate().unwrap();
        assert_eq!(request.api_key(), "sk-test");
        assert_eq!(request.topics(), ["rust", "async"]);
        assert_eq!(request.titles().len(), 3);
        assert_eq!(request.count(), 5);
        assert_eq!(request.output_dir(), dir.path());
    }

    #[test]
    fn test_validate_rejects_missing_required_fields() {
        let err = RequestForm::default().validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField(vec!["api key", "titles", "output directory"])
        );

        let dir = tempfile::tempdir().unwrap();
        let mut no_titles = form(dir.path());
        no_titles.titles = vec!["   ".to_string()];
        assert_eq!(
            no_titles.validate().unwrap_err(),
            ValidationError::MissingField(vec!["titles"])
        );
    }

    #[test]
    fn test_validate_rejects_count_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        for count in [0, 101] {
            let mut f = form(dir.path());
            f.count = count;
            assert!(matches!(
                f.validate(),
                Err(ValidationError::CountOutOfRange { value, .. }) if value == count
            ));
        }
    }

    #[test]
    fn test_validate_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-created");
        let f = RequestForm::from_text("k", "", "t", "", 1, missing.to_str().unwrap());
        assert_eq!(
            f.validate().unwrap_err(),
            ValidationError::OutputDirNotFound(missing)
        );
    }

    #[test]
    fn test_validate_rejects_file_as_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let f = RequestForm::from_text("k", "", "t", "", 1, file.path().to_str().unwrap());
        assert!(matches!(
            f.validate(),
            Err(ValidationError::OutputDirNotFound(_))
        ));
    }

    #[test]
    fn test_article_spec_cycles_shorter_lists() {
        let dir = tempfile::tempdir().unwrap();
        let request = form(dir.path()).validate().unwrap();

        for i in 0..7 {
            let spec = request.article_spec(i);
            assert_eq!(spec.index, i);
            assert_eq!(spec.title, request.titles()[i % 3]);
            assert_eq!(spec.topic.as_deref(), Some(request.topics()[i % 2].as_str()));
            assert_eq!(spec.anchor_text.as_deref(), Some("fast code"));
        }
    }

    #[test]
    fn test_article_spec_without_optional_lists() {
        let dir = tempfile::tempdir().unwrap();
        let request = RequestForm::from_text("k", "", "only", "\n", 3, dir.path().to_str().unwrap())
            .validate()
            .unwrap();
        let spec = request.article_spec(2);
        assert_eq!(spec.title, "only");
        assert_eq!(spec.topic, None);
        assert_eq!(spec.anchor_text, None);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let request = form(dir.path()).validate().unwrap();
        let shown = format!("{:?}", request);
        assert!(!shown.contains("sk-test"));
        assert!(shown.contains("<redacted>"));
    }
}

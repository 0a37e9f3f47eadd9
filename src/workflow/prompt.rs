use crate::models::ArticleSpec;

/// 构建单篇文章的用户提示词
///
/// 标题总是出现；主题和锚文本只在有值时各占一行。
pub fn build_prompt(spec: &ArticleSpec) -> String {
    let mut prompt = format!("Title: {}\n", spec.title);
    if let Some(topic) = spec.topic.as_deref().filter(|t| !t.is_empty()) {
        prompt.push_str(&format!("Topic: {}\n", topic));
    }
    if let Some(anchor) = spec.anchor_text.as_deref().filter(|a| !a.is_empty()) {
        prompt.push_str(&format!("Anchor Text Keywords: {}\n", anchor));
    }
    prompt.push_str("\nPlease generate an article based on the above information.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(topic: Option<&str>, anchor: Option<&str>) -> ArticleSpec {
        ArticleSpec {
            index: 0,
            title: "Why Rust".to_string(),
            topic: topic.map(str::to_string),
            anchor_text: anchor.map(str::to_string),
        }
    }

    #[test]
    fn test_prompt_with_all_fields() {
        assert_eq!(
            build_prompt(&spec(Some("systems"), Some("memory safety"))),
            "Title: Why Rust\nTopic: systems\nAnchor Text Keywords: memory safety\n\n\
             Please generate an article based on the above information."
        );
    }

    #[test]
    fn test_prompt_title_only() {
        let prompt = build_prompt(&spec(None, None));
        assert_eq!(
            prompt,
            "Title: Why Rust\n\nPlease generate an article based on the above information."
        );
        assert!(!prompt.contains("Topic:"));
        assert!(!prompt.contains("Anchor Text Keywords:"));
    }

    #[test]
    fn test_prompt_skips_empty_topic() {
        let prompt = build_prompt(&spec(Some(""), Some("kw")));
        assert!(!prompt.contains("Topic:"));
        assert!(prompt.contains("Anchor Text Keywords: kw\n"));
    }
}

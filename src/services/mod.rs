pub mod article_writer;
pub mod llm_service;

pub use article_writer::{article_file_name, ArticleWriter};
pub use llm_service::{LlmService, TextGenerator};

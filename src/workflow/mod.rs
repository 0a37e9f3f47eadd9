pub mod article_ctx;
pub mod article_flow;
pub mod prompt;

pub use article_ctx::ArticleCtx;
pub use article_flow::ArticleFlow;
pub use prompt::build_prompt;

pub mod loaders;
pub mod request;

pub use loaders::{load_lines_file, load_request_form};
pub use request::{parse_lines, ArticleSpec, GenerationRequest, RequestForm};

pub mod toml_loader;

pub use toml_loader::{load_lines_file, load_request_form};

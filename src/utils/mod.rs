pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::default_claude_dir;
pub use paths::{format_path_with_tilde, project_display_name};
pub use terminal::snippet;

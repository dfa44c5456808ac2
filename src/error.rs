use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Menu config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Menu entry {index} has no name")]
    MissingName { index: usize },

    #[error("Menu entry '{name}' has neither a path nor sub-items")]
    MissingTarget { name: String },

    #[error("Menu entry '{name}' declares an empty sub-item list")]
    EmptySubmenu { name: String },

    #[error("Sub-item '{sub_item}' of '{name}' has an empty path")]
    EmptySubItemPath { name: String, sub_item: String },
}

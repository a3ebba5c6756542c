pub mod config;
pub mod emitters;
pub mod error;
pub mod generator;
pub mod name;
pub mod pattern;
pub mod templates;

/// A generated file with a path (relative to the component folder) and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

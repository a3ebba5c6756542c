use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template {name} not found (tried: {})", .tried.join(", "))]
    NotFound { name: String, tried: Vec<String> },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("component name must not be empty")]
    EmptyName,

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),
}

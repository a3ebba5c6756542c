pub mod component;
pub mod controller;
pub mod data_binding;
pub mod index;
pub mod stories;
pub mod style;

use minijinja::Environment;

use crate::config::GeneratorConfig;
use crate::error::GenerateError;

/// Render template text against a context. Rendering errors (malformed
/// template, bad placeholder) propagate verbatim.
pub(crate) fn render(source: &str, ctx: minijinja::Value) -> Result<String, GenerateError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    Ok(env.render_str(source, ctx)?)
}

/// Stylesheet extension implied by the style flags.
pub fn css_extension(config: &GeneratorConfig) -> &'static str {
    if config.has_flag("scss") {
        "scss"
    } else if config.has_flag("less") {
        "less"
    } else {
        "css"
    }
}

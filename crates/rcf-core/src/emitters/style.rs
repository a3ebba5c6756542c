use minijinja::context;

use crate::config::GeneratorConfig;
use crate::emitters::render;
use crate::error::GenerateError;
use crate::name::ComponentName;
use crate::templates::{TemplateId, TemplateLocator};

/// Render the stylesheet.
pub fn create_style(
    name: &ComponentName,
    config: &GeneratorConfig,
    locator: &TemplateLocator,
) -> Result<String, GenerateError> {
    let source = locator.resolve(TemplateId::Style, config.has_flag("functional"))?;

    render(
        &source,
        context! {
            name => name.pascal(),
            scss => config.has_flag("scss"),
            hyphenated_css => config.has_flag("hyphenatedcss"),
            hyphenated_name => name.slug(),
            scss_include_paths => config.get_list("scssinclude"),
        },
    )
}

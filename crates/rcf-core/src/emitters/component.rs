use minijinja::context;

use crate::config::GeneratorConfig;
use crate::emitters::{css_extension, render};
use crate::error::GenerateError;
use crate::name::ComponentName;
use crate::templates::{TemplateId, TemplateLocator};

/// Render the component view file.
pub fn create_component(
    name: &ComponentName,
    config: &GeneratorConfig,
    locator: &TemplateLocator,
) -> Result<String, GenerateError> {
    let source = locator.resolve(TemplateId::Component, config.has_flag("functional"))?;

    render(
        &source,
        context! {
            name => name.pascal(),
            css_modules => config.has_flag("cssmodules"),
            css_extension => css_extension(config),
            typescript => config.has_flag("typescript"),
            native_target => config.has_flag("reactnative"),
            prop_types => config.has_flag("proptypes"),
            named_exports => config.has_flag("namedexports"),
        },
    )
}

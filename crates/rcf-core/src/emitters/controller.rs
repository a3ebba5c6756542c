use minijinja::context;

use crate::config::GeneratorConfig;
use crate::emitters::render;
use crate::error::GenerateError;
use crate::name::ComponentName;
use crate::templates::{TemplateId, TemplateLocator};

/// Render the controller file wrapping the view.
pub fn create_controller(
    name: &ComponentName,
    config: &GeneratorConfig,
    locator: &TemplateLocator,
) -> Result<String, GenerateError> {
    let source = locator.resolve(TemplateId::Controller, config.has_flag("functional"))?;

    render(
        &source,
        context! {
            name => name.pascal(),
            typescript => config.has_flag("typescript"),
            prop_types => config.has_flag("proptypes"),
            named_exports => config.has_flag("namedexports"),
        },
    )
}

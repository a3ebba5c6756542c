use minijinja::context;

use crate::config::GeneratorConfig;
use crate::emitters::render;
use crate::error::GenerateError;
use crate::name::ComponentName;
use crate::templates::{TemplateId, TemplateLocator};

/// Render the Apollo-style data-binding module. `types_definition_path` is
/// only present in the context when the `graphqldefs` option is configured.
pub fn create_data_binding(
    name: &ComponentName,
    config: &GeneratorConfig,
    locator: &TemplateLocator,
) -> Result<String, GenerateError> {
    let source = locator.resolve(TemplateId::DataBinding, config.has_flag("functional"))?;

    render(
        &source,
        context! {
            name => name.pascal(),
            name_upper => name.upper(),
            name_lower => name.lower(),
            types_definition_path => config.get_opt("graphqldefs"),
            typescript => config.has_flag("typescript"),
            prop_types => config.has_flag("proptypes"),
            named_exports => config.has_flag("namedexports"),
        },
    )
}

use minijinja::context;

use crate::config::GeneratorConfig;
use crate::emitters::render;
use crate::error::GenerateError;
use crate::name::ComponentName;
use crate::pattern::PatternKind;
use crate::templates::{TemplateId, TemplateLocator};

/// Render the storybook stories file. The pattern suffix comes from the
/// shared `PatternKind::resolve`, so the stories import always matches the
/// file the index generator points at.
pub fn create_stories(
    name: &ComponentName,
    component_path: Option<&str>,
    config: &GeneratorConfig,
    locator: &TemplateLocator,
) -> Result<String, GenerateError> {
    let source = locator.resolve(TemplateId::Stories, config.has_flag("functional"))?;
    let pattern = PatternKind::resolve(config);

    render(
        &source,
        context! {
            name => name.pascal(),
            name_lowercase => name.lower(),
            name_uppercase => name.upper(),
            pattern_file => format!(".{}", pattern.file_suffix()),
            pattern_name => pattern.as_str(),
            component_path => component_path,
            no_test => config.has_flag("notest"),
            has_data_binding => config.has_flag("graphql"),
            uppercase => config.has_flag("uppercase"),
            typescript => config.has_flag("typescript"),
            native_target => config.has_flag("reactnative"),
            prop_types => config.has_flag("proptypes"),
            named_exports => config.has_flag("namedexports"),
        },
    )
}

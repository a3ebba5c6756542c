use log::debug;

use crate::GeneratedFile;
use crate::config::GeneratorConfig;
use crate::emitters::{
    component, controller, css_extension, data_binding, index, stories, style, test,
};
use crate::error::GenerateError;
use crate::name::ComponentName;
use crate::pattern::PatternKind;
use crate::templates::TemplateLocator;

/// Produces the full file set for one component folder. Paths are relative
/// to the folder; writing them to disk is the caller's job.
pub struct FolderGenerator<'a> {
    config: &'a GeneratorConfig,
    locator: &'a TemplateLocator,
}

impl<'a> FolderGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig, locator: &'a TemplateLocator) -> Self {
        Self { config, locator }
    }

    /// Folder (and file stem) for a component: normalized when the
    /// `uppercase` flag is set, the raw name otherwise.
    pub fn folder_name(&self, name: &ComponentName) -> String {
        if self.config.has_flag("uppercase") {
            name.pascal().to_string()
        } else {
            name.raw().to_string()
        }
    }

    pub fn generate(&self, raw_name: &str) -> Result<Vec<GeneratedFile>, GenerateError> {
        let name = ComponentName::parse(raw_name)?;
        let cfg = self.config;
        let pattern = PatternKind::resolve(cfg);
        let stem = self.folder_name(&name);
        let jsx_ext = jsx_extension(cfg);
        let script_ext = script_extension(cfg);

        debug!("generating {} with {} pattern", name, pattern);

        let mut files = Vec::new();

        let view_path = if cfg.has_flag("flatindex") {
            format!("{stem}.{jsx_ext}")
        } else {
            format!("{stem}.view.{jsx_ext}")
        };
        files.push(GeneratedFile {
            path: view_path,
            content: component::create_component(&name, cfg, self.locator)?,
        });

        if matches!(pattern, PatternKind::Controller | PatternKind::Apollo) {
            files.push(GeneratedFile {
                path: format!("{stem}.controller.{jsx_ext}"),
                content: controller::create_controller(&name, cfg, self.locator)?,
            });
        }

        if pattern == PatternKind::Apollo {
            files.push(GeneratedFile {
                path: format!("{stem}.apollo.{jsx_ext}"),
                content: data_binding::create_data_binding(&name, cfg, self.locator)?,
            });
        }

        if !cfg.has_flag("notest") {
            files.push(GeneratedFile {
                path: format!("{stem}.test.{jsx_ext}"),
                content: test::create_test(&name, cfg, self.locator)?,
            });
        }

        if cfg.has_flag("stories") {
            let component_path = cfg.get_opt("storiescontext");
            files.push(GeneratedFile {
                path: format!("{stem}.stories.{jsx_ext}"),
                content: stories::create_stories(
                    &name,
                    component_path.as_deref(),
                    cfg,
                    self.locator,
                )?,
            });
        }

        if !cfg.has_flag("nocss") {
            let css_ext = css_extension(cfg);
            let style_path = if cfg.has_flag("cssmodules") {
                format!("{stem}.module.{css_ext}")
            } else {
                format!("{stem}.{css_ext}")
            };
            files.push(GeneratedFile {
                path: style_path,
                content: style::create_style(&name, cfg, self.locator)?,
            });
        }

        files.push(GeneratedFile {
            path: format!("index.{script_ext}"),
            content: index::create_index(&name, cfg),
        });

        Ok(files)
    }
}

/// Extension for files containing JSX.
fn jsx_extension(config: &GeneratorConfig) -> &'static str {
    if config.has_flag("typescript") {
        "tsx"
    } else if config.has_flag("jsx") {
        "jsx"
    } else {
        "js"
    }
}

/// Extension for plain script files (the barrel index).
fn script_extension(config: &GeneratorConfig) -> &'static str {
    if config.has_flag("typescript") { "ts" } else { "js" }
}

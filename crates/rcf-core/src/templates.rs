use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::error::TemplateError;

/// Logical template identifiers. The component, controller, and data-binding
/// templates come in functional and class variants; test, style, and stories
/// have a single body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    Component,
    Controller,
    DataBinding,
    Test,
    Style,
    Stories,
}

impl TemplateId {
    /// Concrete file name for this logical id under the current
    /// functional/class selection.
    pub fn file_name(&self, functional: bool) -> &'static str {
        match (self, functional) {
            (TemplateId::Component, true) => "fnComponent.j2",
            (TemplateId::Component, false) => "classComponent.j2",
            (TemplateId::Controller, true) => "fnController.j2",
            (TemplateId::Controller, false) => "classController.j2",
            (TemplateId::DataBinding, true) => "fnApollo.j2",
            (TemplateId::DataBinding, false) => "classApollo.j2",
            (TemplateId::Test, _) => "test.j2",
            (TemplateId::Style, _) => "cssComponent.j2",
            (TemplateId::Stories, _) => "stories.j2",
        }
    }
}

/// A place template text can come from. Sources are tried in order; the
/// bundled set ships inside the binary so the tool works with no setup.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Dir(PathBuf),
    Builtin,
}

/// Resolves logical template ids to template text through an ordered list
/// of sources. A project override directory, when configured, is consulted
/// before the bundled defaults, so users can replace any single template
/// without copying the whole set.
#[derive(Debug, Clone)]
pub struct TemplateLocator {
    sources: Vec<TemplateSource>,
}

impl TemplateLocator {
    /// Standard chain: optional project directory, then bundled defaults.
    pub fn new(project_dir: Option<PathBuf>) -> Self {
        let mut sources = Vec::new();
        if let Some(dir) = project_dir {
            sources.push(TemplateSource::Dir(dir));
        }
        sources.push(TemplateSource::Builtin);
        Self { sources }
    }

    /// Custom chain, used by tests and embedders.
    pub fn with_sources(sources: Vec<TemplateSource>) -> Self {
        Self { sources }
    }

    /// Return the first source's template text for the given id. Any read
    /// failure (missing file, unreadable file) falls through to the next
    /// source; once every source has failed the error lists each attempted
    /// location.
    pub fn resolve(&self, id: TemplateId, functional: bool) -> Result<String, TemplateError> {
        let file_name = id.file_name(functional);
        let mut tried = Vec::new();

        for source in &self.sources {
            match source {
                TemplateSource::Dir(dir) => {
                    let path = dir.join(file_name);
                    match fs::read_to_string(&path) {
                        Ok(text) => return Ok(text),
                        Err(e) => {
                            debug!("template {} not usable: {}", path.display(), e);
                            tried.push(path.display().to_string());
                        }
                    }
                }
                TemplateSource::Builtin => match builtin(file_name) {
                    Some(text) => return Ok(text.to_string()),
                    None => tried.push(format!("builtin:{file_name}")),
                },
            }
        }

        Err(TemplateError::NotFound {
            name: file_name.to_string(),
            tried,
        })
    }
}

impl Default for TemplateLocator {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Bundled default templates, embedded at compile time.
fn builtin(file_name: &str) -> Option<&'static str> {
    match file_name {
        "fnComponent.j2" => Some(include_str!("../templates/fnComponent.j2")),
        "classComponent.j2" => Some(include_str!("../templates/classComponent.j2")),
        "fnController.j2" => Some(include_str!("../templates/fnController.j2")),
        "classController.j2" => Some(include_str!("../templates/classController.j2")),
        "fnApollo.j2" => Some(include_str!("../templates/fnApollo.j2")),
        "classApollo.j2" => Some(include_str!("../templates/classApollo.j2")),
        "test.j2" => Some(include_str!("../templates/test.j2")),
        "cssComponent.j2" => Some(include_str!("../templates/cssComponent.j2")),
        "stories.j2" => Some(include_str!("../templates/stories.j2")),
        _ => None,
    }
}

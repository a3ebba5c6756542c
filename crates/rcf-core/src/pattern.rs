use std::fmt;

use crate::config::GeneratorConfig;

/// Naming/export convention for the generated folder. The same resolution
/// is used by the stories emitter and both index generators so the two can
/// never disagree on the pattern suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    View,
    Controller,
    Apollo,
}

impl PatternKind {
    /// Three-way resolution: `graphql` wins over `controller`, which wins
    /// over the plain view pattern.
    pub fn resolve(config: &GeneratorConfig) -> Self {
        if config.has_flag("graphql") {
            PatternKind::Apollo
        } else if config.has_flag("controller") {
            PatternKind::Controller
        } else {
            PatternKind::View
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::View => "View",
            PatternKind::Controller => "Controller",
            PatternKind::Apollo => "Apollo",
        }
    }

    /// Lowercased form used in generated file names, e.g. `Button.view.js`.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            PatternKind::View => "view",
            PatternKind::Controller => "controller",
            PatternKind::Apollo => "apollo",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Conversion options.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::plugin::RenderRule;

/// Options for the HTML backend.
#[derive(Clone, Default)]
pub struct Options {
    /// Pass raw HTML from the source through to the output. When off (the
    /// default), HTML block and inline values are escaped.
    pub allow_dangerous_html: bool,
    overrides: HashMap<String, Arc<dyn RenderRule>>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    pub(crate) fn override_rule(&self, name: &str) -> Option<&Arc<dyn RenderRule>> {
        self.overrides.get(name)
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("allow_dangerous_html", &self.allow_dangerous_html)
            .field("overrides", &self.overrides.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`Options`].
#[derive(Default)]
pub struct OptionsBuilder {
    allow_dangerous_html: bool,
    overrides: HashMap<String, Arc<dyn RenderRule>>,
}

impl OptionsBuilder {
    pub fn allow_dangerous_html(mut self, allow: bool) -> Self {
        self.allow_dangerous_html = allow;
        self
    }

    /// Replace the built-in rendering of one node type. The rule receives
    /// the node and its already-rendered children.
    pub fn element(mut self, name: impl Into<String>, rule: impl RenderRule + 'static) -> Self {
        self.overrides.insert(name.into(), Arc::new(rule));
        self
    }

    pub fn build(self) -> Options {
        Options {
            allow_dangerous_html: self.allow_dangerous_html,
            overrides: self.overrides,
        }
    }
}

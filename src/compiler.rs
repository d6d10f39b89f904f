//! Pattern compilation into per-component sub-templates.
//!
//! # Design
//!
//! - Substitute every slug with an alphabetic token ([`SlugTable`])
//! - Decompose the substituted pattern with [`UriParts::parse`]
//! - Restore each non-empty component to template text and compile it
//! - Components the pattern leaves empty get no sub-template and are not
//!   constrained at match time

use crate::error::MatcherError;
use crate::slug::SlugTable;
use crate::template::UriTemplate;
use crate::uri::{Component, UriParts};
use crate::{debug_log, warn_log};

/// Compiled sub-templates of one pattern, indexed by [`Component`].
#[derive(Debug, Clone)]
pub struct ComponentTemplates {
    templates: [Option<UriTemplate>; 8],
}

impl ComponentTemplates {
    /// Compile `pattern`.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_template_matcher::{Component, ComponentTemplates};
    ///
    /// let templates = ComponentTemplates::compile("https://{sub}.example.com/users/{id}").unwrap();
    /// assert_eq!(templates.get(Component::Host).unwrap().source(), "{sub}.example.com");
    /// assert_eq!(templates.get(Component::Path).unwrap().source(), "/users/{id}");
    /// assert!(templates.get(Component::Query).is_none());
    /// ```
    pub fn compile(pattern: &str) -> Result<Self, MatcherError> {
        let slugs = SlugTable::scan(pattern);
        let substituted = slugs.substitute(pattern);

        let parts = UriParts::parse(&substituted).map_err(|err| {
            warn_log!("Invalid URL pattern '{}': {}", pattern, err);
            MatcherError::invalid_pattern(pattern, err)
        })?;

        let mut templates: [Option<UriTemplate>; 8] = Default::default();
        for component in Component::ALL {
            let value = parts.component(component);
            if value.is_empty() {
                continue;
            }
            let source = slugs.restore(value);
            let template = UriTemplate::new(&source)
                .map_err(|err| MatcherError::invalid_pattern(pattern, err))?;
            templates[component.index()] = Some(template);
        }

        let compiled = templates.iter().flatten().count();
        debug_log!(
            "Compiled pattern '{}' ({} placeholders) into {} component templates",
            pattern,
            slugs.len(),
            compiled
        );

        Ok(Self { templates })
    }

    /// Sub-template for `component`, or `None` if the pattern leaves it open.
    pub fn get(&self, component: Component) -> Option<&UriTemplate> {
        self.templates[component.index()].as_ref()
    }

    /// Iterate over constrained components in decomposition order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, &UriTemplate)> {
        Component::ALL
            .into_iter()
            .filter_map(|component| self.get(component).map(|t| (component, t)))
    }

    /// Number of constrained components.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Literal placeholder template.
//!
//! There is no template language here: placeholders are fixed strings that
//! are replaced verbatim, and the two conditional markers are plain text
//! that is deleted. Content between the markers is always kept.

/// Markers stripped from every rendered page.
pub const CONDITIONAL_MARKERS: [&str; 2] = ["{% if image %}", "{% endif %}"];

/// Page placeholders in substitution order.
pub const PLACEHOLDERS: [&str; 8] = [
    "{{title}}",
    "{{date}}",
    "{{author}}",
    "{{image}}",
    "{{image_alt}}",
    "{{intro_html}}",
    "{{body_html}}",
    "{{steps_html}}",
];

/// Ordered placeholder values for one render.
///
/// Substitution runs in insertion order, so a value that itself contains a
/// later placeholder is expanded by that later replacement.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: Vec<(String, String)>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of `token`. Re-inserting a token keeps its original
    /// position and replaces the value.
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        let token = token.into();
        let value = value.into();
        match self.variables.iter_mut().find(|(t, _)| *t == token) {
            Some(slot) => slot.1 = value,
            None => self.variables.push((token, value)),
        }
    }

    /// Builder form of [`TemplateContext::insert`].
    pub fn with_var(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }
}

/// A template consumed verbatim from disk.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// Create a new template with the given name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace every occurrence of each context token with its value, then
    /// delete the conditional markers.
    #[must_use]
    pub fn render(&self, context: &TemplateContext) -> String {
        let mut out = self.content.clone();
        for (token, value) in context.iter() {
            if !token.is_empty() {
                out = out.replace(token, value);
            }
        }
        strip_markers(&out)
    }
}

/// Delete both conditional markers, leaving whatever they enclosed.
#[must_use]
pub fn strip_markers(text: &str) -> String {
    CONDITIONAL_MARKERS
        .iter()
        .fold(text.to_string(), |acc, marker| acc.replace(marker, ""))
}

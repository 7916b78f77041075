//! HTML fragments inserted into the page template.
//!
//! Fragment text is emitted unescaped.

use tipsite_core::Step;

/// Wrap each paragraph in `<p>`, one per line. Empty input gives an empty
/// fragment with no wrapper at all.
#[must_use]
pub fn paragraphs_html<S: AsRef<str>>(paragraphs: &[S]) -> String {
    paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", p.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render steps as a single ordered list, or nothing when there are none.
#[must_use]
pub fn steps_html(steps: &[Step]) -> String {
    if steps.is_empty() {
        return String::new();
    }

    let mut parts = Vec::with_capacity(steps.len() + 2);
    parts.push("<ol class=\"steps\">".to_string());
    for step in steps {
        parts.push(format!(
            "<li class=\"step\">\n    <h3>{}</h3>\n    <p>{}</p>\n</li>",
            step.title, step.text
        ));
    }
    parts.push("</ol>".to_string());
    parts.join("\n")
}

//! tipsite Generator Library
//!
//! Renders page data into HTML through a single shared template.
//!
//! # Modules
//!
//! - [`template`] - Literal placeholder substitution and marker stripping
//! - [`html`] - Paragraph and step fragments
//! - [`image`] - Fixed image placeholder table
//! - [`render`] - Page rendering to disk

pub mod html;
pub mod image;
pub mod render;
pub mod template;

pub use html::{paragraphs_html, steps_html};
pub use image::{GENERIC_PLACEHOLDER, placeholder_url};
pub use render::{PageRenderer, RenderError, RenderedPage, page_context, render_page};
pub use template::{PLACEHOLDERS, Template, TemplateContext};

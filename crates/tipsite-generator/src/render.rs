//! Page rendering.
//!
//! Turns one page-data file into one HTML file next to the template.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tipsite_core::{CoreError, PageData, SitePaths};
use tracing::{debug, info};

use crate::{
    html::{paragraphs_html, steps_html},
    image::placeholder_url,
    template::{Template, TemplateContext},
};

/// Fatal page rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The page-data file does not exist.
    #[error("Data file not found: {}", .0.display())]
    DataNotFound(PathBuf),

    /// The page data has no (or an empty) slug.
    #[error("slug is required in data: {}", .0.display())]
    MissingSlug(PathBuf),

    /// The shared template does not exist.
    #[error("template not found at {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Page data could not be read or parsed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Template read or page write failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

/// A page written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub slug: String,
    pub output: PathBuf,
}

/// Renders page data through the site's shared template.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    paths: SitePaths,
}

impl PageRenderer {
    #[must_use]
    pub fn new(paths: SitePaths) -> Self {
        Self { paths }
    }

    /// Read the shared template.
    pub fn load_template(&self) -> Result<Template> {
        let path = &self.paths.template;
        if !path.is_file() {
            return Err(RenderError::TemplateNotFound(path.clone()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Template::new(name, fs::read_to_string(path)?))
    }

    /// Render `data_path` and write `<slug>.html` into the template's
    /// directory, overwriting any previous output.
    pub fn render_file(&self, data_path: &Path) -> Result<RenderedPage> {
        if !data_path.exists() {
            return Err(RenderError::DataNotFound(data_path.to_path_buf()));
        }

        let page = PageData::read(data_path)?;
        let slug = page
            .slug()
            .ok_or_else(|| RenderError::MissingSlug(data_path.to_path_buf()))?
            .to_string();

        let template = self.load_template()?;
        let html = render_page(&template, &page);

        let output = self.paths.output_dir().join(format!("{slug}.html"));
        fs::write(&output, html)?;
        info!(slug = %slug, output = %output.display(), "rendered page");

        Ok(RenderedPage { slug, output })
    }
}

/// Placeholder values for one page, in substitution order.
#[must_use]
pub fn page_context(page: &PageData) -> TemplateContext {
    TemplateContext::new()
        .with_var("{{title}}", page.display_title())
        .with_var("{{date}}", page.date.as_deref().unwrap_or_default())
        .with_var("{{author}}", page.author.as_deref().unwrap_or_default())
        .with_var("{{image}}", placeholder_url(page.image_path()))
        .with_var("{{image_alt}}", page.image_alt.as_deref().unwrap_or_default())
        .with_var("{{intro_html}}", paragraphs_html(&page.intro))
        .with_var("{{body_html}}", paragraphs_html(&page.body))
        .with_var("{{steps_html}}", steps_html(&page.steps))
}

/// Render a page through `template` without touching the filesystem.
#[must_use]
pub fn render_page(template: &Template, page: &PageData) -> String {
    debug!(template = template.name(), slug = ?page.slug(), "rendering page");
    template.render(&page_context(page))
}

//! The end-to-end label pipeline.

use std::path::Path;

use chrono::Utc;

use crate::error::Result;
use crate::model::{LabelDocument, Metadata, Table};
use crate::normalize::{NormalizeOptions, NormalizedTable, Normalizer};
use crate::output::{write_temp_pdf_in, GeneratedFile};
use crate::paginate::Paginator;
use crate::render::{PdfRenderer, RenderOptions, RenderedPdf};
use crate::template::{Template, Variant};

/// Runs normalize → paginate → render → write for one template.
///
/// # Example
///
/// ```no_run
/// use labelgen::{LabelGenerator, NormalizeOptions, Variant};
///
/// let table = labelgen::load_file("participants.xlsx")?;
/// let generator = LabelGenerator::new(Variant::Contact)
///     .with_normalize_options(NormalizeOptions::new().sanitized());
/// let file = generator.generate(&table)?;
/// println!("{} labels in {}", file.label_count, file.path.display());
/// # Ok::<(), labelgen::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LabelGenerator {
    template: Template,
    normalize_options: NormalizeOptions,
    render_options: RenderOptions,
}

impl LabelGenerator {
    /// Create a generator for a template or built-in variant.
    pub fn new(template: impl Into<Template>) -> Self {
        Self {
            template: template.into(),
            normalize_options: NormalizeOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set normalization options.
    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize_options = options;
        self
    }

    /// Set PDF rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// The template in use.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Validate (and optionally sanitize) a table.
    pub fn normalize(&self, table: &Table) -> Result<NormalizedTable> {
        Normalizer::new(self.template.clone(), self.normalize_options.clone()).normalize(table)
    }

    /// Lay the normalized rows out into pages.
    pub fn paginate(&self, table: &NormalizedTable) -> LabelDocument {
        let metadata = Metadata {
            title: self.render_options.title.clone(),
            author: self.render_options.author.clone(),
            created: Some(Utc::now()),
            ..Default::default()
        };
        Paginator::new().with_metadata(metadata).paginate(table)
    }

    /// Serialize a document to PDF bytes.
    pub fn render(&self, doc: &LabelDocument) -> Result<RenderedPdf> {
        PdfRenderer::new(self.render_options.clone()).render(doc)
    }

    /// Run every step in memory and return the document with its PDF.
    pub fn build(&self, table: &Table) -> Result<(LabelDocument, RenderedPdf)> {
        let normalized = self.normalize(table)?;
        let doc = self.paginate(&normalized);
        let pdf = self.render(&doc)?;
        Ok((doc, pdf))
    }

    /// Run the whole pipeline and write the PDF to a temporary file.
    ///
    /// The file is only created once rendering has succeeded, so a failed
    /// call leaves nothing behind.
    pub fn generate(&self, table: &Table) -> Result<GeneratedFile> {
        self.generate_in(std::env::temp_dir(), table)
    }

    /// Like [`generate`](Self::generate), writing into `dir`.
    pub fn generate_in<P: AsRef<Path>>(&self, dir: P, table: &Table) -> Result<GeneratedFile> {
        let (doc, pdf) = self.build(table)?;
        let path = write_temp_pdf_in(dir, &pdf.bytes)?;

        log::info!(
            "generated {} label(s) on {} page(s) at {}",
            doc.block_count(),
            doc.page_count(),
            path.display()
        );

        Ok(GeneratedFile::new(
            path,
            doc.page_count(),
            pdf.sheet_count,
            doc.block_count(),
        ))
    }
}

impl Default for LabelGenerator {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

/*!
 * PDF document handling.
 *
 * Thin wrapper around the lopdf crate exposing the one capability the
 * pipeline needs: ordered per-page text extraction. The document is a
 * transient, request-scoped value; it is dropped once the pipeline has
 * consumed its pages.
 */

use std::path::Path;

use log::{debug, warn};
use lopdf::Document;

use crate::errors::DocumentError;

/// A loaded PDF document with ordered page access
pub struct PdfDocument {
    doc: Document,
    /// Page numbers in document order
    pages: Vec<u32>,
}

impl PdfDocument {
    /// Open a PDF from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let doc = Document::load(path)
            .map_err(|e| DocumentError::Open(format!("{:?}: {}", path, e)))?;

        if doc.is_encrypted() {
            return Err(DocumentError::Open(format!(
                "{:?}: document is encrypted", path
            )));
        }

        // get_pages returns a BTreeMap keyed by page number, already ordered
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        debug!("Opened PDF {:?} with {} page(s)", path, pages.len());

        Ok(Self { doc, pages })
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Extract the text of a single page by zero-based index.
    ///
    /// A page without a decodable text layer yields an empty string rather
    /// than failing the whole document.
    pub fn extract_page_text(&self, page_index: usize) -> Result<String, DocumentError> {
        let page_number = *self.pages.get(page_index).ok_or(DocumentError::Extract {
            page: page_index as u32 + 1,
            message: "page index out of range".to_string(),
        })?;

        match self.doc.extract_text(&[page_number]) {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!("No text extracted from page {}: {}", page_number, e);
                Ok(String::new())
            }
        }
    }

    /// Extract the text of every page, in document order
    pub fn extract_all_pages(&self) -> Result<Vec<String>, DocumentError> {
        (0..self.page_count())
            .map(|i| self.extract_page_text(i))
            .collect()
    }
}

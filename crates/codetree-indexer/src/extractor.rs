//! Language extractor trait definition

use crate::parser::ExtractMode;
use codetree_core::Result;
use std::path::Path;

/// Declarations pulled out of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Import paths without quotes, in file order.
    pub imports: Vec<String>,
    /// Rendered signatures in document order. Empty in imports-only mode.
    pub functions: Vec<String>,
}

pub trait LanguageExtractor {
    /// Extract declarations from `source`. A syntax error fails the whole file.
    fn extract(&mut self, path: &Path, source: &str, mode: ExtractMode) -> Result<ExtractionResult>;
}

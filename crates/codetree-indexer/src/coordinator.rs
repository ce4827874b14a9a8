//! Runs discovery and extraction over a whole tree

use crate::discovery::{ScanOptions, SourceFile, discover};
use crate::extractor::{ExtractionResult, LanguageExtractor};
use crate::languages::GoExtractor;
use crate::parser::ExtractMode;
use codetree_core::{Error, Relation, Result};
use std::path::PathBuf;

/// Builds per-file relations for one project root.
///
/// Files are processed one at a time in key order; the first failure stops
/// the run.
pub struct Coordinator<E = GoExtractor> {
    root: PathBuf,
    options: ScanOptions,
    extractor: E,
}

impl Coordinator<GoExtractor> {
    pub fn new(root: impl Into<PathBuf>, options: ScanOptions) -> Result<Self> {
        Ok(Self::with_extractor(root, options, GoExtractor::new()?))
    }
}

impl<E: LanguageExtractor> Coordinator<E> {
    pub fn with_extractor(root: impl Into<PathBuf>, options: ScanOptions, extractor: E) -> Self {
        Coordinator {
            root: root.into(),
            options,
            extractor,
        }
    }

    #[cfg(test)]
    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// File → import paths, parsing only up to the import declarations.
    pub fn collect_imports(&mut self) -> Result<Relation> {
        self.collect(ExtractMode::ImportsOnly, |result| result.imports)
    }

    /// File → rendered function signatures.
    pub fn collect_functions(&mut self) -> Result<Relation> {
        self.collect(ExtractMode::Full, |result| result.functions)
    }

    fn collect(
        &mut self,
        mode: ExtractMode,
        pick: fn(ExtractionResult) -> Vec<String>,
    ) -> Result<Relation> {
        let files = discover(&self.root, self.options)?;
        let mut relation = Relation::new();
        for file in &files {
            let result = self.extract_file(file, mode)?;
            relation.insert(file.key.clone(), pick(result));
        }
        tracing::info!("Extracted declarations from {} files", relation.len());
        Ok(relation)
    }

    fn extract_file(&mut self, file: &SourceFile, mode: ExtractMode) -> Result<ExtractionResult> {
        tracing::debug!("Parsing {}", file.key);
        let source = std::fs::read_to_string(&file.path).map_err(|e| Error::io(&file.path, e))?;
        self.extractor.extract(&file.path, &source, mode)
    }
}

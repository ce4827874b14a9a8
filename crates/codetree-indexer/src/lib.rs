//! Go source indexing: module identity, file discovery and declaration extraction

pub mod coordinator;
pub mod discovery;
pub mod extractor;
pub mod languages;
pub mod manifest;
pub mod parser;
pub mod signature;

#[cfg(test)]
mod test_utils;


pub use coordinator::Coordinator;
pub use discovery::{ScanOptions, SourceFile, discover};
pub use extractor::{ExtractionResult, LanguageExtractor};
pub use languages::GoExtractor;
pub use manifest::{MANIFEST_FILE, read_module};
pub use parser::{ExtractMode, GoParser};
pub use signature::{ChanDir, Field, FieldList, FunctionDecl, TypeExpr};

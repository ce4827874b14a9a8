//! Language extractors

pub mod go;

pub use go::GoExtractor;

//! go-code-tree: import and function containment graphs for Go modules

pub mod cli;
pub mod commands;

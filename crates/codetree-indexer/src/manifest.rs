//! Module identity from `go.mod`

use codetree_core::{Error, Module, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const MANIFEST_FILE: &str = "go.mod";

static MODULE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^module\b\s*(.*)$").expect("static regex"));

static MODULE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:"([^"\s]+)"|`([^`\s]+)`|([^\s"`()]+))$"#).expect("static regex")
});

/// Read the module path from `<dir>/go.mod`.
pub fn read_module(dir: &Path) -> Result<Module> {
    let path = dir.join(MANIFEST_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::ManifestNotFound { path });
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    let module = parse_module(&path, &content)?;
    tracing::info!("Module: {}", module);
    Ok(module)
}

/// Find the single `module` directive in manifest text.
pub fn parse_module(path: &Path, content: &str) -> Result<Module> {
    let invalid = |line: Option<usize>, reason: &str| Error::ManifestParse {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    };

    let mut found: Option<String> = None;
    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split("//").next().unwrap_or_default().trim();
        let Some(directive) = MODULE_DIRECTIVE.captures(line) else {
            continue;
        };
        if found.is_some() {
            return Err(invalid(Some(line_no), "repeated module directive"));
        }

        let argument = directive.get(1).map_or("", |m| m.as_str()).trim();
        if argument.is_empty() {
            return Err(invalid(Some(line_no), "missing module path"));
        }
        let Some(captures) = MODULE_PATH.captures(argument) else {
            return Err(invalid(Some(line_no), "malformed module path"));
        };
        let module_path = (1..=3)
            .find_map(|group| captures.get(group))
            .map_or("", |m| m.as_str());
        found = Some(module_path.to_string());
    }

    found
        .map(Module::new)
        .ok_or_else(|| invalid(None, "no module directive"))
}

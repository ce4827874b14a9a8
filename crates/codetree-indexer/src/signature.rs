//! Canonical text for Go type expressions and function signatures

use std::fmt;

/// Direction of a channel type.
///
/// The marker and the element type are separated by a space: `<-chan int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

impl ChanDir {
    pub fn marker(&self) -> &'static str {
        match self {
            ChanDir::Both => "chan",
            ChanDir::Send => "chan<-",
            ChanDir::Recv => "<-chan",
        }
    }
}

/// The type expressions a signature can render.
///
/// Anything else lowers to [`TypeExpr::Unsupported`] and renders empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Ident(String),
    Pointer(Box<TypeExpr>),
    Slice(Box<TypeExpr>),
    Array { len: String, elem: Box<TypeExpr> },
    Map { key: Box<TypeExpr>, value: Box<TypeExpr> },
    /// Rendered as `marker elem`, with a space so the text stays valid Go.
    Chan { dir: ChanDir, elem: Box<TypeExpr> },
    /// `package.Type`
    Qualified { package: String, name: String },
    /// `...T`, only valid as the last parameter.
    Variadic(Box<TypeExpr>),
    Unsupported,
}

#[cfg(test)]
impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident(name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }

    pub fn slice(elem: TypeExpr) -> Self {
        TypeExpr::Slice(Box::new(elem))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Ident(name) => f.write_str(name),
            TypeExpr::Pointer(inner) => write!(f, "*{inner}"),
            TypeExpr::Slice(elem) => write!(f, "[]{elem}"),
            TypeExpr::Array { len, elem } => write!(f, "[{len}]{elem}"),
            TypeExpr::Map { key, value } => write!(f, "map[{key}]{value}"),
            TypeExpr::Chan { dir, elem } => write!(f, "{} {elem}", dir.marker()),
            TypeExpr::Qualified { package, name } => write!(f, "{package}.{name}"),
            TypeExpr::Variadic(elem) => write!(f, "...{elem}"),
            TypeExpr::Unsupported => Ok(()),
        }
    }
}

/// One parameter, result or receiver entry: `a,b T` or just `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl Field {
    pub fn unnamed(ty: TypeExpr) -> Self {
        Field {
            names: Vec::new(),
            ty,
        }
    }

    #[cfg(test)]
    pub fn named(names: &[&str], ty: TypeExpr) -> Self {
        Field {
            names: names.iter().map(|n| n.to_string()).collect(),
            ty,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.names.is_empty() {
            write!(f, "{}", self.ty)
        } else {
            write!(f, "{} {}", self.names.join(","), self.ty)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList(pub Vec<Field>);

impl fmt::Display for FieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// A top-level function or method declaration.
///
/// Its `Display` output is the signature used as a graph node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub receiver: Option<FieldList>,
    pub name: String,
    pub params: FieldList,
    pub results: Option<FieldList>,
}

impl fmt::Display for FunctionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("func ")?;
        if let Some(receiver) = &self.receiver {
            write!(f, "({receiver}) ")?;
        }
        write!(f, "{}({})", self.name, self.params)?;
        if let Some(results) = &self.results {
            write!(f, " ({results})")?;
        }
        Ok(())
    }
}

use std::fmt;

use serde::Serialize;

/// Storage kind of an [`IdVector`], named after the host's `typeof()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorKind {
    Integer,
    Real,
    Text,
    Logical,
    Complex,
    List,
}

impl VectorKind {
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Real => "double",
            Self::Text => "character",
            Self::Logical => "logical",
            Self::Complex => "complex",
            Self::List => "list",
        }
    }
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Complex number element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

/// Element storage of a vector. `None` is the null marker for every kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum Values {
    Integer(Vec<Option<i64>>),
    Real(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
    Logical(Vec<Option<bool>>),
    Complex(Vec<Option<Complex>>),
    List(Vec<Values>),
}

impl Values {
    #[must_use]
    pub const fn kind(&self) -> VectorKind {
        match self {
            Self::Integer(_) => VectorKind::Integer,
            Self::Real(_) => VectorKind::Real,
            Self::Text(_) => VectorKind::Text,
            Self::Logical(_) => VectorKind::Logical,
            Self::Complex(_) => VectorKind::Complex,
            Self::List(_) => VectorKind::List,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Integer(v) => v.len(),
            Self::Real(v) => v.len(),
            Self::Text(v) => v.len(),
            Self::Logical(v) => v.len(),
            Self::Complex(v) => v.len(),
            Self::List(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Attributes carried alongside the storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<String>>,
}

/// A vector of ids together with its attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdVector {
    pub values: Values,
    #[serde(skip_serializing_if = "is_plain")]
    pub attributes: Attributes,
}

fn is_plain(attributes: &Attributes) -> bool {
    *attributes == Attributes::default()
}

impl IdVector {
    #[must_use]
    pub fn new(values: Values) -> Self {
        Self {
            values,
            attributes: Attributes::default(),
        }
    }

    pub fn integer<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<i64>>,
    {
        Self::new(Values::Integer(values.into_iter().collect()))
    }

    pub fn real<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        Self::new(Values::Real(values.into_iter().collect()))
    }

    pub fn text<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self::new(Values::Text(
            values.into_iter().map(|v| v.map(Into::into)).collect(),
        ))
    }

    pub fn logical<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<bool>>,
    {
        Self::new(Values::Logical(values.into_iter().collect()))
    }

    /// Factor with 1-based integer codes into `levels`.
    pub fn factor<I, L, S>(codes: I, levels: L) -> Self
    where
        I: IntoIterator<Item = Option<i64>>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vector = Self::integer(codes).with_class(["factor"]);
        vector.attributes.levels = Some(levels.into_iter().map(Into::into).collect());
        vector
    }

    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_class<I, S>(mut self, class: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.class = class.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub const fn kind(&self) -> VectorKind {
        self.values.kind()
    }

    #[must_use]
    pub fn inherits(&self, class: &str) -> bool {
        self.attributes.class.iter().any(|c| c == class)
    }

    /// Ordered factors inherit `factor` too.
    #[must_use]
    pub fn is_factor(&self) -> bool {
        self.inherits("factor")
    }
}

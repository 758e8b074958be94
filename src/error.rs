use std::borrow::Cow;

use crate::vector::VectorKind;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type surfaced by [`crate::frenum_miss`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is a factor, or its storage is not integer, real or text.
    ///
    /// `found` names what was rejected (`"factor"`, `"logical"`, ...).
    #[error("Only numeric, integer and character vectors are supported")]
    UnsupportedType { found: Cow<'static, str> },
}

impl Error {
    /// Rejection of a labeled factor, whatever its storage.
    #[must_use]
    pub const fn factor() -> Self {
        Self::UnsupportedType {
            found: Cow::Borrowed("factor"),
        }
    }

    /// Rejection of anything else the host hands over.
    #[must_use]
    pub fn unsupported(found: impl Into<Cow<'static, str>>) -> Self {
        Self::UnsupportedType {
            found: found.into(),
        }
    }

    /// Rejection of an unsupported storage kind.
    #[must_use]
    pub const fn unsupported_kind(kind: VectorKind) -> Self {
        Self::UnsupportedType {
            found: Cow::Borrowed(kind.type_name()),
        }
    }
}

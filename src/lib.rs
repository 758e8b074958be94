//! Replace ad-hoc missing-value sentinels in id vectors with a proper null.
//!
//! [`frenum_miss`] takes an integer, real or text [`IdVector`] and returns a
//! new vector of the same kind and length in which every missing code is
//! replaced by `None`:
//!
//! | kind | missing codes |
//! |---|---|
//! | integer | `0`, `-99` |
//! | real | `0`, `-99` |
//! | text | `"."`, `"*"`, `"NA"`, `" "`, `"0"`, `"-99"` |
//!
//! ```
//! use frenum::{IdVector, frenum_miss};
//!
//! let ids = IdVector::integer([Some(100), Some(0), Some(97), Some(-99), Some(5)]);
//! let out = frenum_miss(&ids)?;
//! assert_eq!(out, IdVector::integer([Some(100), None, Some(97), None, Some(5)]));
//! # Ok::<(), frenum::Error>(())
//! ```
pub mod error;
pub mod missing;
pub mod normalize;
pub mod vector;

pub use crate::error::{Error, Result};
pub use missing::{MissingCode, mask_missing, mask_missing_in_place};
pub use normalize::{frenum_miss, frenum_miss_values};
pub use vector::{Attributes, Complex, IdVector, Values, VectorKind};

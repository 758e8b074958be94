//! Kind dispatch for [`frenum_miss`].
//!
//! The input is validated before anything is copied: a factor class is
//! rejected first (factors have integer storage, so the storage check alone
//! would let them through), then any storage other than integer, real or
//! text. Supported storage is copied and masked; the input is never touched.

use crate::error::{Error, Result};
use crate::missing::mask_missing_in_place;
use crate::vector::{Attributes, IdVector, Values};

/// Returns a copy of `id` with every missing code replaced by `None`.
///
/// `names` and `class` are carried over unchanged. Classed vectors such as
/// `Date` are matched on their underlying storage.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for factors and for logical, complex
/// or list storage.
pub fn frenum_miss(id: &IdVector) -> Result<IdVector> {
    if id.is_factor() {
        return Err(Error::factor());
    }
    let values = mask_values(&id.values)?;

    Ok(IdVector {
        values,
        attributes: Attributes {
            names: id.attributes.names.clone(),
            class: id.attributes.class.clone(),
            levels: None,
        },
    })
}

/// [`frenum_miss`] on bare storage.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for logical, complex or list storage.
pub fn frenum_miss_values(values: &Values) -> Result<Values> {
    mask_values(values)
}

fn mask_values(values: &Values) -> Result<Values> {
    match values {
        Values::Integer(v) => {
            let mut out = v.clone();
            mask_missing_in_place(&mut out);
            Ok(Values::Integer(out))
        }
        Values::Real(v) => {
            let mut out = v.clone();
            mask_missing_in_place(&mut out);
            Ok(Values::Real(out))
        }
        Values::Text(v) => {
            let mut out = v.clone();
            mask_missing_in_place(&mut out);
            Ok(Values::Text(out))
        }
        Values::Logical(_) | Values::Complex(_) | Values::List(_) => {
            Err(Error::unsupported_kind(values.kind()))
        }
    }
}

use savvy::NotAvailableValue;
use savvy::savvy;
use savvy::{
    IntegerSexp, OwnedIntegerSexp, OwnedRealSexp, OwnedStringSexp, RealSexp, Sexp, StringSexp,
};

use frenum::{Attributes, Error, IdVector, Values, VectorKind};

fn map_core_err<E>(e: E) -> savvy::Error
where
    E: std::fmt::Display,
{
    savvy::Error::new(e.to_string())
}

fn unsupported_error(x: &Sexp) -> Error {
    if x.is_logical() {
        Error::unsupported_kind(VectorKind::Logical)
    } else if x.is_complex() {
        Error::unsupported_kind(VectorKind::Complex)
    } else if x.is_list() {
        Error::unsupported_kind(VectorKind::List)
    } else if x.is_null() {
        Error::unsupported("NULL")
    } else {
        Error::unsupported("other")
    }
}

fn owned_strings(values: Option<Vec<&'static str>>) -> Option<Vec<String>> {
    values.map(|v| v.into_iter().map(str::to_string).collect())
}

fn id_vector_from_sexp(id: Sexp) -> savvy::Result<IdVector> {
    let attributes = Attributes {
        names: owned_strings(id.get_names()),
        class: owned_strings(id.get_class()).unwrap_or_default(),
        levels: None,
    };

    let values = if id.is_integer() {
        let x = IntegerSexp::try_from(id)?;
        Values::Integer(
            x.iter()
                .map(|e| if e.is_na() { None } else { Some(i64::from(*e)) })
                .collect(),
        )
    } else if id.is_real() {
        let x = RealSexp::try_from(id)?;
        Values::Real(
            x.iter()
                .map(|e| if e.is_na() { None } else { Some(*e) })
                .collect(),
        )
    } else if id.is_string() {
        let x = StringSexp::try_from(id)?;
        Values::Text(
            x.iter()
                .map(|e| if e.is_na() { None } else { Some(e.to_string()) })
                .collect(),
        )
    } else {
        return Err(map_core_err(unsupported_error(&id)));
    };

    Ok(IdVector { values, attributes })
}

// The owned SEXP types share no trait for attribute setters.
macro_rules! set_attributes {
    ($out:ident, $attributes:expr) => {{
        if let Some(names) = &$attributes.names {
            $out.set_names(names.as_slice())?;
        }
        if !$attributes.class.is_empty() {
            $out.set_class($attributes.class.as_slice())?;
        }
    }};
}

fn id_vector_into_sexp(id: IdVector) -> savvy::Result<Sexp> {
    let IdVector { values, attributes } = id;
    match values {
        Values::Integer(values) => {
            let mut out = OwnedIntegerSexp::new(values.len())?;
            for (i, e) in values.into_iter().enumerate() {
                match e {
                    Some(v) => out[i] = i32::try_from(v)?,
                    None => out.set_na(i)?,
                }
            }
            set_attributes!(out, attributes);
            Ok(out.into())
        }
        Values::Real(values) => {
            let mut out = OwnedRealSexp::new(values.len())?;
            for (i, e) in values.into_iter().enumerate() {
                match e {
                    Some(v) => out[i] = v,
                    None => out.set_na(i)?,
                }
            }
            set_attributes!(out, attributes);
            Ok(out.into())
        }
        Values::Text(values) => {
            let mut out = OwnedStringSexp::new(values.len())?;
            for (i, e) in values.iter().enumerate() {
                match e {
                    Some(text) => out.set_elt(i, text)?,
                    None => out.set_na(i)?,
                }
            }
            set_attributes!(out, attributes);
            Ok(out.into())
        }
        other => Err(map_core_err(Error::unsupported_kind(other.kind()))),
    }
}

/// Fast renumbering of missing id
///
/// `frenum_miss()` replaces missing-id codes with `NA`. For integer and
/// numeric vectors the codes are `0` and `-99`. For character vectors the
/// codes are `'.'`, `'*'`, `'NA'`, `' '`, `'0'` and `'-99'`.
///
/// @param id An integer, numeric or character vector. Factors are rejected.
/// @returns A vector of the same type and length as `id`, with its names and
///   class kept.
/// @export
#[savvy]
fn frenum_miss(id: Sexp) -> savvy::Result<Sexp> {
    let ids = id_vector_from_sexp(id)?;
    let out = frenum::frenum_miss(&ids).map_err(map_core_err)?;
    id_vector_into_sexp(out)
}

// This test is run by `cargo test`. You can put tests that don't need a real
// R session here.
#[cfg(test)]
mod test1 {
    #[test]
    fn core_error_message_is_passed_through() {
        let err = super::map_core_err(frenum::Error::factor());
        assert_eq!(
            err.to_string(),
            "Only numeric, integer and character vectors are supported"
        );
    }

    #[test]
    fn owned_strings_keeps_order() {
        let out = super::owned_strings(Some(vec!["b", "a"]));
        assert_eq!(out, Some(vec!["b".to_string(), "a".to_string()]));
        assert_eq!(super::owned_strings(None), None);
    }
}

// Tests marked under `#[cfg(feature = "savvy-test")]` are run by `savvy-cli test`, which
// executes the Rust code on a real R session so that you can use R things for
// testing.
#[cfg(feature = "savvy-test")]
mod test2 {
    use frenum::{Error, VectorKind};
    use savvy::{
        OwnedComplexSexp, OwnedIntegerSexp, OwnedLogicalSexp, OwnedRealSexp, OwnedStringSexp,
    };

    #[test]
    fn test_frenum_miss_integer() -> savvy::Result<()> {
        let x: savvy::Sexp = OwnedIntegerSexp::try_from_slice([100, 0, 97, -99, 5])?.into();
        let result = super::frenum_miss(x)?;
        savvy::assert_eq_r_code(result, r#"c(100L, NA, 97L, NA, 5L)"#);
        Ok(())
    }

    #[test]
    fn test_frenum_miss_real() -> savvy::Result<()> {
        let x: savvy::Sexp = OwnedRealSexp::try_from_slice([1.5, 0.0, -99.0, 3.2])?.into();
        let result = super::frenum_miss(x)?;
        savvy::assert_eq_r_code(result, r#"c(1.5, NA, NA, 3.2)"#);
        Ok(())
    }

    #[test]
    fn test_frenum_miss_character() -> savvy::Result<()> {
        let x: savvy::Sexp = OwnedStringSexp::try_from_slice([
            "A", "B", ".", "D", "*", "NA", " ", "  ", "K",
        ])?
        .into();
        let result = super::frenum_miss(x)?;
        savvy::assert_eq_r_code(
            result,
            r#"c("A", "B", NA, "D", NA, NA, NA, "  ", "K")"#,
        );
        Ok(())
    }

    #[test]
    fn test_frenum_miss_factor() -> savvy::Result<()> {
        let mut x = OwnedIntegerSexp::try_from_slice([1, 2, 1])?;
        x.set_class(&["factor"])?;
        let levels: savvy::Sexp = OwnedStringSexp::try_from_slice(["low", "high"])?.into();
        x.set_attrib("levels", levels)?;
        assert!(super::frenum_miss(x.into()).is_err());
        Ok(())
    }

    #[test]
    fn test_frenum_miss_logical() -> savvy::Result<()> {
        let x: savvy::Sexp = OwnedLogicalSexp::try_from_slice([true, false])?.into();
        assert!(super::frenum_miss(x).is_err());
        Ok(())
    }

    #[test]
    fn test_frenum_miss_keeps_names_and_class() -> savvy::Result<()> {
        let mut x = OwnedRealSexp::try_from_slice([0.0, 18_000.0, -99.0])?;
        x.set_names(&["a", "b", "c"])?;
        x.set_class(&["Date"])?;
        let result = super::frenum_miss(x.into())?;
        savvy::assert_eq_r_code(
            result,
            r#"structure(c(a = NA, b = 18000, c = NA), class = "Date")"#,
        );
        Ok(())
    }

    #[test]
    fn test_frenum_miss_complex_reports_kind() -> savvy::Result<()> {
        let x: savvy::Sexp = OwnedComplexSexp::new(2)?.into();
        assert_eq!(
            super::unsupported_error(&x),
            Error::unsupported_kind(VectorKind::Complex)
        );
        assert!(super::frenum_miss(x).is_err());
        Ok(())
    }
}

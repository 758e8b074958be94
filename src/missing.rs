//! Fixed missing-code sets and the masking routine shared by every kind.

/// Codes treated as missing in integer vectors.
pub const INTEGER_MISSING_CODES: [i64; 2] = [0, -99];

/// Codes treated as missing in real vectors.
pub const REAL_MISSING_CODES: [f64; 2] = [0.0, -99.0];

/// Codes treated as missing in text vectors. Only the single space is a
/// code; longer blank strings are kept.
pub const TEXT_MISSING_CODES: [&str; 6] = [".", "*", "NA", " ", "0", "-99"];

/// Membership in the missing-code set of the element's kind.
pub trait MissingCode {
    fn is_missing_code(&self) -> bool;
}

impl MissingCode for i64 {
    fn is_missing_code(&self) -> bool {
        INTEGER_MISSING_CODES.contains(self)
    }
}

impl MissingCode for i32 {
    fn is_missing_code(&self) -> bool {
        i64::from(*self).is_missing_code()
    }
}

// IEEE equality: -0.0 matches 0, NaN matches nothing.
impl MissingCode for f64 {
    fn is_missing_code(&self) -> bool {
        REAL_MISSING_CODES.contains(self)
    }
}

impl MissingCode for str {
    fn is_missing_code(&self) -> bool {
        TEXT_MISSING_CODES.contains(&self)
    }
}

impl MissingCode for String {
    fn is_missing_code(&self) -> bool {
        self.as_str().is_missing_code()
    }
}

/// Replaces every missing code in `values` with `None`.
///
/// Returns the number of slots that were masked; slots that were already
/// `None` are not counted.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn mask_missing_in_place<T: MissingCode>(values: &mut [Option<T>]) -> usize {
    let mut masked = 0;
    for slot in values.iter_mut() {
        if slot.as_ref().is_some_and(MissingCode::is_missing_code) {
            *slot = None;
            masked += 1;
        }
    }
    masked
}

/// Copies `values` and masks the copy. The input is left untouched.
#[must_use]
pub fn mask_missing<T: MissingCode + Clone>(values: &[Option<T>]) -> Vec<Option<T>> {
    let mut out = values.to_vec();
    mask_missing_in_place(&mut out);
    out
}

use crate::PvError;

/// Floating point type used for canvas coordinates
pub type Real = f64;

/// Reject NaN and infinities before they reach coordinate equality checks.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PvError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PvError::NonFinite { what, value: v })
    }
}

/// Exact coordinate identity.
///
/// Points are identified by bitwise-equal coordinates, not by a tolerance:
/// two clicks one pixel apart are two distinct points. `-0.0` and `0.0`
/// compare equal.
pub fn same_coordinate(a: Real, b: Real) -> bool {
    a == b
}

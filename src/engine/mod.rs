//! Footprint estimation and scoring engine.
//!
//! Pure, deterministic, no I/O. The remote collaborators in
//! `crate::remote` fall back to this engine on any failure.

pub mod estimator;
pub mod factors;
pub mod models;
mod routes;
pub mod scorer;

pub use routes::router;

/// Round half away from zero to 2 decimal places.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Clamp a quantity to non-negative, mapping NaN to 0.
pub(crate) fn non_neg(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 {
        x
    } else {
        0.0
    }
}

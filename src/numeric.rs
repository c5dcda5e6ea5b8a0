//! Numeric conversion helpers used when turning projections into pixels.
//!
//! These utilities keep float-to-integer conversions in one place so the
//! saturating behaviour is explicit at the call-sites.

/// Truncate a pixel coordinate towards zero and clamp it into the `i32` domain.
///
/// NaN maps to `0`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn trunc_to_i32(value: f32) -> i32 {
    if value.is_nan() {
        return 0;
    }
    // i32::MAX is not representable in f32; the saturating cast covers the top end.
    value.trunc().max(i32::MIN as f32) as i32
}

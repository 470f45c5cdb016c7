pub mod fast_math;
pub mod int_vector_2d;
pub mod matrix;
pub mod vector_2d;
pub mod vector_3d;

use std::hash::Hasher;

pub use fast_math::{compute_normal_unnormalized, cross_product_3d, triangle_area};
pub use int_vector_2d::{IntVector2, UIntVector2, Vector2UI};
pub use matrix::{Matrix, TransposedMatrix};
pub use vector_2d::Vector2;
pub use vector_3d::Vector3;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f32 = 1e-5;

/// Feeds one float component to `state` so that values comparing equal
/// hash equal (`0.0` and `-0.0` share a hash).
fn hash_f32<H: Hasher>(value: f32, state: &mut H) {
    let bits = if value == 0.0 { 0 } else { value.to_bits() };
    state.write_u32(bits);
}

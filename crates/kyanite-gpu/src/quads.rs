//! Quad-list → triangle-list index expansion.
//!
//! The hardware rasterizes quad lists directly; wgpu does not, so quad draws
//! are re-emitted as triangle lists before submission. Each quad (v0..v3)
//! becomes the two triangles (v0, v1, v2) and (v0, v2, v3).
//!
//! Both helpers require the vertex count to be a multiple of 4. The hardware
//! draw packet guarantees it, so the invariant is asserted in debug builds
//! only; the output for a trailing partial quad is unspecified.

/// Generate 16-bit triangle-list indices for a non-indexed quad draw.
///
/// `vertex_count` must be a multiple of 4.
pub fn quad_list_indices_u16(vertex_count: u32) -> Vec<u16> {
    debug_assert_eq!(vertex_count % 4, 0);
    let mut out = Vec::with_capacity(vertex_count as usize / 4 * 6);
    for quad in (0..vertex_count).step_by(4) {
        let q = quad as u16;
        out.extend_from_slice(&[q, q + 1, q + 2, q, q + 2, q + 3]);
    }
    out
}

/// Re-index an existing quad-list index buffer as a triangle list.
///
/// Works for any index width (`u8`/`u16`/`u32`); `indices.len()` must be a
/// multiple of 4.
pub fn quad_to_triangle_list<T: Copy>(indices: &[T]) -> Vec<T> {
    debug_assert_eq!(indices.len() % 4, 0);
    let mut out = Vec::with_capacity(indices.len() / 4 * 6);
    for quad in indices.chunks_exact(4) {
        out.extend_from_slice(&[quad[0], quad[1], quad[2], quad[0], quad[2], quad[3]]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_indices_for_two_quads() {
        assert_eq!(
            quad_list_indices_u16(8),
            vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]
        );
        assert!(quad_list_indices_u16(0).is_empty());
    }

    #[test]
    fn reindexing_preserves_source_indices() {
        let src = [10u32, 11, 12, 13, 20, 21, 22, 23];
        assert_eq!(
            quad_to_triangle_list(&src),
            vec![10, 11, 12, 10, 12, 13, 20, 21, 22, 20, 22, 23]
        );
    }

    #[test]
    fn reindexing_is_width_agnostic() {
        let narrow = [3u8, 2, 1, 0];
        assert_eq!(quad_to_triangle_list(&narrow), vec![3, 2, 1, 3, 1, 0]);
    }
}

//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in window pixels. Outlines grow
//! outward from the shape edge, so a rectangle outline never covers the
//! area it frames.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Two triangles covering a quad given in winding order
///
/// `uv` holds the texture coordinate for each corner in the same order.
pub fn quad(corners: [Vec2; 4], uv: [Vec2; 4], color: [f32; 4]) -> Vec<Vertex> {
    let v = |i: usize| Vertex::new(corners[i].x, corners[i].y, uv[i].x, uv[i].y, color);
    vec![v(0), v(1), v(2), v(2), v(3), v(0)]
}

/// Textured quad sampling the rectangle `uv_min..uv_max`
pub fn textured_quad(corners: [Vec2; 4], uv_min: Vec2, uv_max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    quad(
        corners,
        [
            uv_min,
            Vec2::new(uv_max.x, uv_min.y),
            uv_max,
            Vec2::new(uv_min.x, uv_max.y),
        ],
        color,
    )
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::solid(center.x, center.y, color));
        vertices.push(Vertex::solid(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::solid(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::solid(inner1.x, inner1.y, color));
        vertices.push(Vertex::solid(outer1.x, outer1.y, color));
        vertices.push(Vertex::solid(inner2.x, inner2.y, color));

        vertices.push(Vertex::solid(inner2.x, inner2.y, color));
        vertices.push(Vertex::solid(outer1.x, outer1.y, color));
        vertices.push(Vertex::solid(outer2.x, outer2.y, color));
    }

    vertices
}

/// Outline of a circle, `thickness` pixels wide outside `radius`
pub fn circle_outline(
    center: Vec2,
    radius: f32,
    thickness: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    ring(center, radius, radius + thickness, color, segments)
}

/// Corners of a rectangle centred on `center`, rotated by `degrees`
pub fn rect_corners(center: Vec2, half_size: Vec2, degrees: f32) -> [Vec2; 4] {
    let rotation = Vec2::from_angle(degrees.to_radians());
    [
        Vec2::new(-half_size.x, -half_size.y),
        Vec2::new(half_size.x, -half_size.y),
        Vec2::new(half_size.x, half_size.y),
        Vec2::new(-half_size.x, half_size.y),
    ]
    .map(|corner| center + rotation.rotate(corner))
}

/// Outline of a (possibly rotated) rectangle, `thickness` pixels wide outside its edge
pub fn rect_outline(
    center: Vec2,
    half_size: Vec2,
    degrees: f32,
    thickness: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let inner = rect_corners(center, half_size, degrees);
    let outer = rect_corners(center, half_size + Vec2::splat(thickness), degrees);

    let mut vertices = Vec::with_capacity(24);
    for i in 0..4 {
        let j = (i + 1) % 4;
        vertices.push(Vertex::solid(inner[i].x, inner[i].y, color));
        vertices.push(Vertex::solid(outer[i].x, outer[i].y, color));
        vertices.push(Vertex::solid(inner[j].x, inner[j].y, color));

        vertices.push(Vertex::solid(inner[j].x, inner[j].y, color));
        vertices.push(Vertex::solid(outer[i].x, outer[i].y, color));
        vertices.push(Vertex::solid(outer[j].x, outer[j].y, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_textured_quad_uvs() {
        let corners = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let verts = textured_quad(corners, Vec2::new(0.25, 0.5), Vec2::new(0.75, 1.0), WHITE);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].uv, [0.25, 0.5]);
        assert_eq!(verts[1].uv, [0.75, 0.5]);
        assert_eq!(verts[2].uv, [0.75, 1.0]);
        assert_eq!(verts[4].uv, [0.25, 1.0]);
        assert_eq!(verts[4].position, [0.0, 10.0]);
    }

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::new(5.0, 5.0), 4.0, WHITE, 16);
        assert_eq!(verts.len(), 48);
        // Every fan starts at the centre
        assert!(verts.iter().step_by(3).all(|v| v.position == [5.0, 5.0]));
    }

    #[test]
    fn test_circle_outline_lies_outside_radius() {
        let center = Vec2::new(100.0, 100.0);
        let verts = circle_outline(center, 20.0, 2.0, WHITE, 32);
        assert_eq!(verts.len(), 32 * 6);
        for v in &verts {
            let d = (Vec2::from(v.position) - center).length();
            assert!(d > 19.99 && d < 22.01);
        }
    }

    #[test]
    fn test_rect_corners_rotation() {
        let corners = rect_corners(Vec2::new(50.0, 50.0), Vec2::new(10.0, 5.0), 90.0);
        // Top-left (-10, -5) rotated 90° clockwise on screen lands at (5, -10)
        assert!((corners[0] - Vec2::new(55.0, 40.0)).length() < 1e-4);
    }

    #[test]
    fn test_rect_outline_band() {
        let verts = rect_outline(Vec2::ZERO, Vec2::new(10.0, 5.0), 0.0, 2.0, WHITE);
        assert_eq!(verts.len(), 24);
        for v in &verts {
            let p = Vec2::from(v.position);
            // On or outside the inner rect, inside the outer one
            assert!(p.x.abs() <= 12.0 + 1e-4 && p.y.abs() <= 7.0 + 1e-4);
            assert!(p.x.abs() >= 10.0 - 1e-4 || p.y.abs() >= 5.0 - 1e-4);
        }
    }
}

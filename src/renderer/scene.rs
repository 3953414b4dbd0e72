//! Scene construction
//!
//! Turns a [`GameState`] into draw batches. Pure: no GPU, no side effects on
//! the state, so a frame can be inspected in tests.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{DEBUG_DOT_RADIUS, DEBUG_OUTLINE_THICKNESS};
use crate::sim::{Entity, GameState, sprite_corners, world_bounds};

/// Segments used for debug circles
const CIRCLE_SEGMENTS: u32 = 48;

/// Texture a batch samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// 1×1 white, for untextured shapes
    White,
    Sky,
    Planes,
}

/// Vertices drawn with one texture binding
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub texture: TextureSlot,
    pub vertices: Vec<Vertex>,
}

/// A complete frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub clear_color: [f32; 4],
    pub batches: Vec<DrawBatch>,
}

impl Scene {
    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }
}

/// Pixel sizes of the loaded textures, for UV mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub sky_size: Vec2,
    pub planes_size: Vec2,
}

/// Build the frame for `state`
pub fn build_scene(state: &GameState, layout: &SceneLayout) -> Scene {
    let mut batches = vec![
        DrawBatch {
            texture: TextureSlot::Sky,
            vertices: sky(state.bounds, layout.sky_size),
        },
        DrawBatch {
            texture: TextureSlot::Planes,
            vertices: state
                .planes()
                .into_iter()
                .flat_map(|plane| plane_sprite(plane, layout.planes_size))
                .collect(),
        },
    ];

    if state.debug {
        batches.push(DrawBatch {
            texture: TextureSlot::White,
            vertices: state.planes().into_iter().flat_map(debug_overlay).collect(),
        });
    }

    Scene {
        clear_color: colors::BACKGROUND,
        batches,
    }
}

/// Background covering the whole window, the texture repeated across it
fn sky(bounds: Vec2, texture_size: Vec2) -> Vec<Vertex> {
    let corners = [
        Vec2::ZERO,
        Vec2::new(bounds.x, 0.0),
        bounds,
        Vec2::new(0.0, bounds.y),
    ];
    let uv_max = bounds / texture_size.max(Vec2::ONE);
    shapes::textured_quad(corners, Vec2::ZERO, uv_max, colors::SPRITE_TINT)
}

/// Plane sprite cropped from the shared texture, rotated about its centre
fn plane_sprite(plane: &Entity, texture_size: Vec2) -> Vec<Vertex> {
    let texture_size = texture_size.max(Vec2::ONE);
    let source = plane.sprite.source;
    let uv_min = Vec2::new(source.x as f32, source.y as f32) / texture_size;
    let uv_max = uv_min + source.size() / texture_size;
    shapes::textured_quad(sprite_corners(plane), uv_min, uv_max, colors::SPRITE_TINT)
}

/// Anchor dot, world bounds, local bounds and collision ring
fn debug_overlay(plane: &Entity) -> Vec<Vertex> {
    let mut vertices = shapes::circle(plane.pos, DEBUG_DOT_RADIUS, colors::ANCHOR_DOT, 16);

    let world = world_bounds(plane);
    vertices.extend(shapes::rect_outline(
        world.center(),
        world.size() / 2.0,
        0.0,
        DEBUG_OUTLINE_THICKNESS,
        colors::WORLD_BOUNDS,
    ));

    vertices.extend(shapes::rect_outline(
        plane.pos,
        plane.sprite.size() / 2.0,
        plane.heading,
        DEBUG_OUTLINE_THICKNESS,
        colors::LOCAL_BOUNDS,
    ));

    vertices.extend(shapes::circle_outline(
        plane.pos,
        plane.radius,
        DEBUG_OUTLINE_THICKNESS,
        colors::COLLISION_RING,
        CIRCLE_SEGMENTS,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SceneLayout {
        SceneLayout {
            sky_size: Vec2::new(250.0, 200.0),
            planes_size: Vec2::new(512.0, 256.0),
        }
    }

    #[test]
    fn test_scene_without_debug() {
        let state = GameState::default();
        let scene = build_scene(&state, &layout());
        assert_eq!(scene.clear_color, colors::BACKGROUND);
        assert_eq!(scene.batches.len(), 2);
        assert_eq!(scene.batches[0].texture, TextureSlot::Sky);
        assert_eq!(scene.batches[1].texture, TextureSlot::Planes);
        assert_eq!(scene.batches[1].vertices.len(), 12);
    }

    #[test]
    fn test_sky_repeats_over_window() {
        let state = GameState::default();
        let scene = build_scene(&state, &layout());
        let sky = &scene.batches[0].vertices;
        // 1000x800 window over a 250x200 texture tiles 4x4
        assert_eq!(sky[2].position, [1000.0, 800.0]);
        assert_eq!(sky[2].uv, [4.0, 4.0]);
    }

    #[test]
    fn test_plane_uvs_crop_source_rect() {
        let state = GameState::default();
        let scene = build_scene(&state, &layout());
        let big = &scene.batches[1].vertices[..6];
        assert_eq!(big[0].uv, [3.0 / 512.0, 11.0 / 256.0]);
        assert_eq!(big[2].uv, [107.0 / 512.0, 104.0 / 256.0]);
    }

    #[test]
    fn test_debug_adds_overlay_batch() {
        let mut state = GameState::default();
        state.debug = true;
        let scene = build_scene(&state, &layout());
        assert_eq!(scene.batches.len(), 3);
        let overlay = &scene.batches[2];
        assert_eq!(overlay.texture, TextureSlot::White);
        // Per plane: dot (16 * 3) + two outlines (24 each) + ring (48 * 6)
        assert_eq!(overlay.vertices.len(), 2 * (48 + 24 + 24 + 288));
    }

    #[test]
    fn test_build_scene_is_pure() {
        let mut state = GameState::default();
        state.debug = true;
        let before = state.clone();
        let a = build_scene(&state, &layout());
        let b = build_scene(&state, &layout());
        assert_eq!(a, b);
        assert_eq!(state.big, before.big);
        assert_eq!(state.small, before.small);
    }

    #[test]
    fn test_placeholder_textures_do_not_divide_by_zero() {
        let state = GameState::default();
        let layout = SceneLayout {
            sky_size: Vec2::ZERO,
            planes_size: Vec2::ZERO,
        };
        let scene = build_scene(&state, &layout);
        assert!(
            scene
                .batches
                .iter()
                .flat_map(|b| &b.vertices)
                .all(|v| v.uv.iter().all(|c| c.is_finite()))
        );
    }
}

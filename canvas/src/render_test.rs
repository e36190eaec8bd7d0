#![allow(clippy::float_cmp)]

use super::*;
use crate::test_support::{Op, RecordingSurface, room};

fn viewport() -> Viewport {
    Viewport::new(200.0, 100.0)
}

fn scene() -> Scene {
    Scene::new(vec![room(0.0, 0.0, 16.0, 8.0, "01"), room(16.0, 8.0, 8.0, 8.0, "1")])
}

fn layer_of(op: &Op) -> u8 {
    match op {
        Op::Resize(_) => 0,
        Op::Clear(_) => 1,
        Op::Fill { fill: Fill::Background, .. } => 2,
        Op::Fill { fill: Fill::Room, .. } => 3,
        Op::Fill { fill: Fill::Tile, .. } => 4,
    }
}

#[test]
fn fill_colors() {
    assert_eq!(Fill::Background.css(), "rgb(230, 230, 230)");
    assert_eq!(Fill::Room.css(), "rgb(200, 200, 200)");
    assert_eq!(Fill::Tile.css(), "black");
}

#[test]
fn draw_clears_first_then_layers_in_order() {
    let mut surface = RecordingSurface::default();
    draw(&mut surface, &scene(), &Camera::default(), viewport());

    assert_eq!(surface.ops.first(), Some(&Op::Clear(viewport())));
    let layers: Vec<u8> = surface.ops.iter().map(layer_of).collect();
    let mut sorted = layers.clone();
    sorted.sort_unstable();
    assert_eq!(layers, sorted);
    assert_eq!(surface.fills(Fill::Background).len(), 1);
    assert_eq!(surface.fills(Fill::Room).len(), 2);
    assert_eq!(surface.fills(Fill::Tile).len(), 2);
}

#[test]
fn draw_at_identity_camera_centers_world_origin() {
    let mut surface = RecordingSurface::default();
    draw(&mut surface, &scene(), &Camera::default(), viewport());

    // Bounds are (0,0)-(24,16); one extra pixel of bleed.
    assert_eq!(surface.fills(Fill::Background), vec![(100.0, 50.0, 25.5, 17.5)]);
    assert_eq!(
        surface.fills(Fill::Room),
        vec![(100.0, 50.0, 16.5, 8.5), (116.0, 58.0, 8.5, 8.5)]
    );
    assert_eq!(
        surface.fills(Fill::Tile),
        vec![(108.0, 50.0, 8.5, 8.5), (116.0, 58.0, 8.5, 8.5)]
    );
}

#[test]
fn draw_applies_camera_transform() {
    let mut surface = RecordingSurface::default();
    let camera = Camera { position: Point::new(8.0, 4.0), zoom: 2.0 };
    draw(&mut surface, &scene(), &camera, viewport());

    let tiles = surface.fills(Fill::Tile);
    // 100 + 2*(8-8) = 100, 50 + 2*(0-4) = 42
    assert_eq!(tiles[0], (100.0, 42.0, 17.0, 17.0));
    let background = surface.fills(Fill::Background);
    assert_eq!(background, vec![(84.0, 42.0, 50.0, 34.0)]);
}

#[test]
fn empty_scene_only_clears() {
    let mut surface = RecordingSurface::default();
    draw(&mut surface, &Scene::default(), &Camera::default(), viewport());
    assert_eq!(surface.ops, vec![Op::Clear(viewport())]);
}

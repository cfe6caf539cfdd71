mod common;

use common::*;
use sdf_contour::{
    to_lines, Box2, ConfigError, FnSdf, MarchingSquaresQuadtree, MarchingSquaresUniform, Render2,
};

use glam::Vec2;
use std::f32::consts::PI;

#[test]
fn circle_is_a_closed_clockwise_loop() {
    let radius = 1.0;
    let sdf = circle(Vec2::new(0.5, -0.25), radius);
    let renderers: [(&str, Box<dyn Render2>); 2] = [
        ("uniform", Box::new(MarchingSquaresUniform::new(64).unwrap())),
        ("quadtree", Box::new(MarchingSquaresQuadtree::new(64).unwrap())),
    ];

    for (name, renderer) in renderers {
        let lines = to_lines(renderer.as_ref(), &sdf).unwrap();
        assert!(lines_are_closed(&lines), "{name}");
        assert!(
            relative_error(total_length(&lines), 2.0 * PI * radius) < 0.01,
            "{name}: perimeter {}",
            total_length(&lines)
        );
        assert!(
            relative_error(enclosed_area(&lines), PI * radius * radius) < 0.01,
            "{name}: area {}",
            enclosed_area(&lines)
        );
    }
}

#[test]
fn quadtree_matches_uniform() {
    let sdf = rectangle(Vec2::new(1.3, 0.45));
    let uniform = to_lines(&MarchingSquaresUniform::new(50).unwrap(), &sdf).unwrap();
    let quadtree = to_lines(&MarchingSquaresQuadtree::new(50).unwrap(), &sdf).unwrap();
    assert_eq!(uniform.len(), quadtree.len());
    assert!(relative_error(total_length(&quadtree), total_length(&uniform)) < 1e-5);
    assert!(lines_are_closed(&quadtree));
}

#[test]
fn emitted_lines_are_not_degenerate() {
    // Sides on lattice lines, so corners sample exactly zero.
    let half_extents = Vec2::new(0.4375, 0.5625);
    let sdf = FnSdf::new(
        Box2::from_min_and_shape(Vec2::splat(-1.0), Vec2::splat(2.0)),
        move |p: Vec2| (p.abs() - half_extents).max_element(),
    );
    for renderer in [
        Box::new(MarchingSquaresUniform::new(16).unwrap()) as Box<dyn Render2>,
        Box::new(MarchingSquaresQuadtree::new(16).unwrap()),
    ] {
        let lines = to_lines(renderer.as_ref(), &sdf).unwrap();
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|l| !l.is_degenerate(0.0)));
    }
}

#[test]
fn info_and_validation() {
    assert_eq!(
        MarchingSquaresUniform::new(0).unwrap_err(),
        ConfigError::ZeroMeshCells
    );
    assert_eq!(
        MarchingSquaresQuadtree::new(0).unwrap_err(),
        ConfigError::ZeroMeshCells
    );
    let sdf = circle(Vec2::ZERO, 1.0);
    let renderer = MarchingSquaresQuadtree::new(64).unwrap();
    assert_eq!(renderer.info(&sdf).unwrap(), "65x65, resolution 0.03");
}

use std::f32::consts::{FRAC_PI_2, PI};

use super::polygon::*;
use super::*;
use crate::error::ShadowError;
use crate::settings::ShadowSizing;
use bevy::prelude::{Vec2, Vec3};
use rs_entity::{BIPED_MODEL, CREEPER_MODEL, ModelDef, ModelPose, PartDef, PartMotion};

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

fn bone(position: Vec3, size: Vec3) -> (&'static str, BoneDescriptor) {
    ("bone", BoneDescriptor::new(position, EulerAngles::default(), size))
}

fn snapshot(bones: Vec<(&'static str, BoneDescriptor)>) -> ModelSnapshot {
    ModelSnapshot { bones }
}

#[test]
fn hull_drops_interior_points_and_winds_ccw() {
    let points = [
        v(0.0, 0.0),
        v(2.0, 0.0),
        v(2.0, 2.0),
        v(0.0, 2.0),
        v(1.0, 1.0),
        v(0.5, 1.5),
    ];
    let hull = convex_hull(&points);
    assert_eq!(hull, vec![v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)]);
    assert!(!is_clockwise(&hull));
}

#[test]
fn hull_drops_points_on_edges() {
    let points = [v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)];
    let hull = convex_hull(&points);
    assert_eq!(hull.len(), 4);
    assert!(!hull.contains(&v(1.0, 0.0)));
}

#[test]
fn hull_is_idempotent() {
    let points = [
        v(1.0, 0.0),
        v(3.0, 0.0),
        v(4.0, 1.0),
        v(4.0, 3.0),
        v(3.0, 4.0),
        v(1.0, 4.0),
        v(0.0, 3.0),
        v(0.0, 1.0),
        v(2.0, 3.0),
        v(1.0, 1.0),
    ];
    let hull = convex_hull(&points);
    assert_eq!(hull.len(), 8);
    assert_eq!(convex_hull(&hull), hull);
}

#[test]
fn hull_contains_every_input_point() {
    let points: Vec<Vec2> = (0..40)
        .map(|i| {
            let t = i as f32 * 0.7;
            v(t.sin() * 3.0 + (t * 0.3).cos(), (t * 1.3).cos() * 2.0)
        })
        .collect();
    let hull = convex_hull(&points);
    assert!(!is_clockwise(&hull));
    for p in &points {
        for i in 0..hull.len() as isize {
            let a = *get_circular(&hull, i);
            let b = *get_circular(&hull, i + 1);
            assert!(cross_product(a, b, *p) >= -1e-4);
        }
    }
    for corner in &hull {
        assert!(points.contains(corner));
    }
}

#[test]
fn hull_leaves_three_points_alone() {
    let points = [v(0.0, 0.0), v(0.0, 1.0), v(1.0, 0.0)];
    assert_eq!(convex_hull(&points), points.to_vec());
}

#[test]
fn ear_clipping_a_hexagon_preserves_area() {
    let hexagon: Vec<Vec2> = (0..6)
        .map(|i| {
            let a = i as f32 * PI / 3.0;
            v(a.cos(), a.sin())
        })
        .collect();
    let triangles = ear_clip_polygon(&hexagon);
    assert_eq!(triangles.len(), 4);
    let area: f32 = triangles.iter().map(|t| triangle_area(t[0], t[1], t[2])).sum();
    assert!((area - polygon_area(&hexagon)).abs() < 1e-4);
}

#[test]
fn ear_clipping_handles_concave_outline() {
    let l_shape = [
        v(0.0, 0.0),
        v(2.0, 0.0),
        v(2.0, 1.0),
        v(1.0, 1.0),
        v(1.0, 2.0),
        v(0.0, 2.0),
    ];
    let triangles = ear_clip_polygon(&l_shape);
    assert_eq!(triangles.len(), 4);
    let area: f32 = triangles.iter().map(|t| triangle_area(t[0], t[1], t[2])).sum();
    assert!((area - 3.0).abs() < 1e-5);
}

#[test]
fn ear_clipping_stops_on_clockwise_input() {
    let clockwise = [v(0.0, 0.0), v(0.0, 1.0), v(1.0, 1.0), v(1.0, 0.0)];
    assert!(is_clockwise(&clockwise));
    assert!(ear_clip_polygon(&clockwise).is_empty());
}

#[test]
fn colinear_and_duplicate_points_are_removed() {
    let square_with_midpoint = [v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)];
    assert_eq!(
        remove_colinear_points(&square_with_midpoint, 1e-4),
        vec![v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)]
    );

    let noisy = [v(0.0, 0.0), v(0.005, 0.003), v(1.0, 0.0), v(1.0, 0.02)];
    assert_eq!(
        remove_near_duplicates(&noisy, 0.01),
        vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 0.02)]
    );
}

#[test]
fn small_helpers() {
    let items = [1, 2, 3];
    assert_eq!(*get_circular(&items, -1), 3);
    assert_eq!(*get_circular(&items, 3), 1);
    assert_eq!(*get_circular(&items, 7), 2);

    let (a, b, c) = (v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0));
    assert!(is_point_in_triangle(v(0.5, 0.0), a, b, c));
    assert!(is_point_in_triangle(v(0.2, 0.2), a, b, c));
    assert!(!is_point_in_triangle(v(1.0, 1.0), a, b, c));
    assert!(cross_product(a, b, c) > 0.0);
    assert!(are_close(v(1.0, 1.0), v(1.009, 0.991), 0.01));
    let square = [v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)];
    assert_eq!(compute_center(&square), Some(v(1.0, 1.0)));
    assert!(compute_center(&[]).is_none());
}

#[test]
fn templates_fold_child_parts_into_their_root() {
    let templates = bone_templates(&BIPED_MODEL);
    assert_eq!(templates.len(), 6);
    let head = templates.iter().find(|t| t.name == "head").unwrap();
    assert!((head.size_px - Vec3::splat(9.0)).length() < 1e-5);
    assert!((head.center_px - Vec3::new(0.0, -4.0, 0.0)).length() < 1e-5);
    assert!(templates.iter().all(|t| t.name != "headwear"));
}

#[test]
fn extraction_converts_to_world_units_and_adds_pose() {
    let mut extractor = BoneDataExtractor::new();
    let rest = extractor.extract(&CREEPER_MODEL, None).unwrap();
    assert_eq!(rest.len(), 6);
    let body = rest.get("body").unwrap();
    assert!((body.position - Vec3::new(0.0, 0.75, 0.0)).length() < 1e-5);
    assert!((body.size - Vec3::new(0.5, 0.75, 0.25)).length() < 1e-5);

    let mut pose = ModelPose::rest(&CREEPER_MODEL);
    pose.parts[2].rotation = [0.3, 0.0, 0.0];
    let posed = extractor.extract(&CREEPER_MODEL, Some(&pose)).unwrap();
    assert!((posed.get("leg_front_right").unwrap().rotation.pitch - 0.3).abs() < 1e-6);
    assert_eq!(extractor.cached_models(), 1);
}

static HOLLOW_MODEL: ModelDef = ModelDef {
    name: "hollow",
    parts: &[PartDef {
        name: "root",
        parent: None,
        pivot: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0],
        motion: PartMotion::Rigid,
        cubes: &[],
    }],
};

#[test]
fn model_without_cubes_is_an_error() {
    let mut extractor = BoneDataExtractor::new();
    assert!(matches!(
        extractor.extract(&HOLLOW_MODEL, None),
        Err(ShadowError::EmptyModel("hollow"))
    ));
}

#[test]
fn flat_bones_keep_a_minimum_thickness() {
    let flat = BoneDescriptor::new(Vec3::ZERO, EulerAngles::default(), Vec3::new(1.0, 0.0, 1.0));
    assert!(flat.size.y > 0.0);
}

#[test]
fn unrotated_cube_corners() {
    let vertices = get_vertices(&snapshot(vec![bone(Vec3::ZERO, Vec3::ONE)]), 0.0);
    assert_eq!(vertices.len(), 1);
    assert_eq!(vertices[0].len(), 8);
    for corner in &vertices[0] {
        assert!((corner.abs() - Vec3::splat(0.5)).length() < 1e-5);
    }
}

#[test]
fn bones_pivot_about_their_top_face() {
    let mut limb = BoneDescriptor::new(
        Vec3::new(0.0, 0.5, 0.0),
        EulerAngles::default(),
        Vec3::new(0.25, 1.0, 0.25),
    );
    limb.rotation.pitch = FRAC_PI_2;
    let vertices = get_vertices(&snapshot(vec![("limb", limb)]), 0.0);
    let max_z = vertices[0].iter().fold(f32::MIN, |m, c| m.max(c.z));
    for corner in &vertices[0] {
        assert!(corner.y.abs() <= 0.125 + 1e-5);
        assert!(corner.z >= -1e-5 && corner.z <= 1.0 + 1e-5);
    }
    assert!((max_z - 1.0).abs() < 1e-5);
}

#[test]
fn body_yaw_turns_the_whole_skeleton() {
    let vertices = get_vertices(
        &snapshot(vec![bone(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(0.1))]),
        90.0,
    );
    let center = vertices[0].iter().copied().sum::<Vec3>() / 8.0;
    assert!((center - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-4);
}

#[test]
fn opposite_light_mirrors_the_projection() {
    let vertices = get_vertices(
        &snapshot(vec![bone(Vec3::new(0.7, 0.2, 0.3), Vec3::ONE)]),
        0.0,
    );
    let front = flatten_vertices(&vertices, 0.0, 1e-2);
    let back = flatten_vertices(&vertices, 180.0, 1e-2);
    for (a, b) in front[0].iter().zip(&back[0]) {
        assert!((a.x + b.x).abs() < 1e-4);
        assert!((a.y - b.y).abs() < 1e-6);
    }
}

#[test]
fn flatten_pushes_points_off_the_axis() {
    let vertices = vec![vec![
        Vec3::new(0.0, 0.0, -0.001),
        Vec3::new(0.0, 0.0, 0.005),
        Vec3::new(0.0, 0.0, 0.0005),
        Vec3::new(0.0, 0.0, -0.5),
    ]];
    let flat = flatten_vertices(&vertices, 90.0, 1e-2);
    assert!((flat[0][0].x - 0.01).abs() < 1e-6);
    assert!((flat[0][1].x + 0.01).abs() < 1e-6);
    assert!((flat[0][2].x - 0.01).abs() < 1e-6);
    assert!((flat[0][3].x - 0.5).abs() < 1e-5);

    let straight_on = flatten_vertices(&[vec![Vec3::new(0.001, 0.2, 0.0)]], 0.0, 1e-2);
    assert_eq!(straight_on[0][0], Vec2::new(0.001, 0.2));
}

#[test]
fn pruning_reduces_a_cube_to_a_square() {
    let vertices = get_vertices(&snapshot(vec![bone(Vec3::ZERO, Vec3::ONE)]), 0.0);
    let flat = flatten_vertices(&vertices, 0.0, 1e-2);
    let polygons = prune_vertices(&flat, 1e-2, 1e-4);
    assert_eq!(polygons.len(), 1);
    assert_eq!(polygons[0].len(), 4);
    assert!(!is_clockwise(polygons[0].points()));
    assert!((polygon_area(polygons[0].points()) - 1.0).abs() < 1e-4);
    assert_eq!(polygons[0].triangulate().len(), 2);
}

#[test]
fn pruning_discards_degenerate_bones() {
    let flat = vec![
        vec![v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 0.0)],
        vec![v(0.0, 0.0), v(0.001, 0.001)],
    ];
    assert!(prune_vertices(&flat, 1e-2, 1e-4).is_empty());
}

#[test]
fn rotation_moves_feet_to_the_origin_and_turns_away_from_light() {
    let triangle = ShadowPolygon::new(vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0)]).unwrap();
    let rotated = rotate_shadow(&[triangle], 0.0, 1.0, 1e-2);
    let points = rotated[0].points();
    assert!(close(points[0], v(0.01, 1.0)));
    assert!(close(points[1], v(-1.0, 1.0)));
    assert!(close(points[2], v(-1.0, 0.01)));
}

#[test]
fn sizing_follows_light_elevation() {
    assert_eq!(morph_shadow_size(2.0, 10.0, ShadowSizing::Fixed), 1.0);
    let sizing = ShadowSizing::ELEVATION;
    assert!((morph_shadow_size(2.0, 0.0, sizing) - 1.5).abs() < 1e-4);
    assert!((morph_shadow_size(2.0, 90.0, sizing) - 0.2).abs() < 1e-4);
    assert!(morph_shadow_size(2.0, 30.0, sizing) > morph_shadow_size(2.0, 60.0, sizing));
    assert_eq!(morph_shadow_size(0.0, 30.0, sizing), 1.0);
}

#[test]
fn squish_scales_about_the_anchor() {
    let polygon = ShadowPolygon::new(vec![v(0.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)]).unwrap();
    let squished = squish_shadow(&[polygon.clone()], 2.0, 1.0);
    assert_eq!(squished[0].points(), &[v(0.0, -1.0), v(1.0, 1.0), v(0.0, 1.0)]);
    assert_eq!(squish_shadow(&[polygon.clone()], 1.0, 1.0), vec![polygon]);
}

#[test]
fn body_yaw_estimation() {
    assert_eq!(estimate_body_yaw(0.0, Vec3::ZERO, None), 90.0);
    assert_eq!(estimate_body_yaw(20.0, Vec3::ZERO, Some(90.0)), 90.0);
    assert!((estimate_body_yaw(90.0, Vec3::ZERO, Some(90.0)) - 94.5).abs() < 1e-4);
    assert!((estimate_body_yaw(0.0, Vec3::new(0.0, 0.0, 0.2), Some(0.0)) - 45.0).abs() < 1e-3);

    let heading = (-170f32).to_radians();
    let velocity = Vec3::new(heading.cos(), 0.0, heading.sin()) * 0.2;
    let blended = estimate_body_yaw(0.0, velocity, Some(170.0));
    assert!((blended - 180.0).abs() < 1e-2);
}

#[test]
fn shadow_height_and_feet_offset() {
    let vertices = vec![vec![Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 0.5, 0.0)]];
    assert!((base_shadow_height(&vertices) - 1.5).abs() < 1e-6);
    assert!((center_bottom_offset(&vertices) - 0.5).abs() < 1e-6);

    let above = vec![vec![Vec3::new(0.0, -2.0, 0.0), Vec3::new(0.0, -1.0, 0.0)]];
    assert!((base_shadow_height(&above) - 2.0).abs() < 1e-6);
    assert_eq!(center_bottom_offset(&above), 0.0);
}

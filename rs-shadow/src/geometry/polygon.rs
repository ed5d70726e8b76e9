//! 2D polygon helpers for shadow silhouettes.
//!
//! Everything here works on small, entity-scale coordinates (roughly ±5 units), so plain `f32`
//! arithmetic with fixed epsilons is good enough.

use bevy::prelude::Vec2;

/// Ear clipping gives up after this many passes, even if vertices remain.
pub const EAR_CLIP_PASS_LIMIT: usize = 100;

pub type Triangle = [Vec2; 3];

/// Graham scan. Output starts at the lowest (then leftmost) point and winds counter-clockwise.
/// Three or fewer points are returned untouched.
pub fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    if points.len() <= 3 {
        return points.to_vec();
    }

    let Some(anchor_idx) = points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)))
        .map(|(idx, _)| idx)
    else {
        return Vec::new();
    };
    let anchor = points[anchor_idx];

    let mut rest: Vec<Vec2> = points
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != anchor_idx)
        .map(|(_, p)| *p)
        .collect();
    sort_by_angle(&mut rest, anchor);

    let mut stack: Vec<Vec2> = Vec::with_capacity(points.len());
    stack.push(anchor);
    for p in rest {
        while stack.len() >= 2 {
            let q = stack[stack.len() - 2];
            let r = stack[stack.len() - 1];
            if cross_product(q, r, p) <= 0.0 {
                stack.pop();
            } else {
                break;
            }
        }
        stack.push(p);
    }
    stack
}

/// Sorts counter-clockwise around `anchor`; equal angles keep the nearer point first.
pub fn sort_by_angle(points: &mut [Vec2], anchor: Vec2) {
    points.sort_by(|a, b| {
        let da = *a - anchor;
        let db = *b - anchor;
        da.y.atan2(da.x)
            .total_cmp(&db.y.atan2(db.x))
            .then(da.length_squared().total_cmp(&db.length_squared()))
    });
}

/// Triangulates a counter-clockwise polygon by ear clipping.
///
/// Bounded by [`EAR_CLIP_PASS_LIMIT`]; when a pass finds no ear (non-simple or clockwise
/// input) clipping stops and whatever is left is dropped.
pub fn ear_clip_polygon(polygon: &[Vec2]) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(polygon.len().saturating_sub(2));
    let mut vertices = polygon.to_vec();

    let mut passes = 0;
    while vertices.len() >= 3 && passes < EAR_CLIP_PASS_LIMIT {
        passes += 1;
        let Some(ear) = (0..vertices.len()).find(|&i| is_ear(&vertices, i)) else {
            break;
        };
        let i = ear as isize;
        triangles.push([
            *get_circular(&vertices, i - 1),
            vertices[ear],
            *get_circular(&vertices, i + 1),
        ]);
        vertices.remove(ear);
    }

    triangles
}

fn is_ear(vertices: &[Vec2], i: usize) -> bool {
    let n = vertices.len();
    let prev_idx = (i + n - 1) % n;
    let next_idx = (i + 1) % n;
    let (prev, curr, next) = (vertices[prev_idx], vertices[i], vertices[next_idx]);

    if cross_product(prev, curr, next) < 0.0 {
        return false;
    }

    !vertices
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != prev_idx && *j != i && *j != next_idx)
        .any(|(_, p)| is_point_in_triangle(*p, prev, curr, next))
}

/// Drops every vertex whose triangle with its two neighbours is thinner than `epsilon` (area).
pub fn remove_colinear_points(vertices: &[Vec2], epsilon: f32) -> Vec<Vec2> {
    let n = vertices.len() as isize;
    (0..n)
        .filter(|&i| {
            !is_colinear(
                *get_circular(vertices, i - 1),
                vertices[i as usize],
                *get_circular(vertices, i + 1),
                epsilon,
            )
        })
        .map(|i| vertices[i as usize])
        .collect()
}

/// Keeps the first of any group of points closer than `epsilon` on both axes.
pub fn remove_near_duplicates(points: &[Vec2], epsilon: f32) -> Vec<Vec2> {
    let mut unique: Vec<Vec2> = Vec::with_capacity(points.len());
    for &p in points {
        if !unique.iter().any(|&u| are_close(u, p, epsilon)) {
            unique.push(p);
        }
    }
    unique
}

/// Shoelace sum sign test; the y-up counter-clockwise convention gives `false`.
pub fn is_clockwise(polygon: &[Vec2]) -> bool {
    let n = polygon.len();
    let mut sum = 0.0;
    for i in 0..n {
        let current = polygon[i];
        let next = polygon[(i + 1) % n];
        sum += (next.x - current.x) * (next.y + current.y);
    }
    sum > 0.0
}

/// z of `(b - a) × (c - a)`: positive for a left turn.
pub fn cross_product(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Inclusive: points on an edge count as inside.
pub fn is_point_in_triangle(pt: Vec2, v1: Vec2, v2: Vec2, v3: Vec2) -> bool {
    let d1 = cross_product(pt, v1, v2);
    let d2 = cross_product(pt, v2, v3);
    let d3 = cross_product(pt, v3, v1);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

pub fn is_colinear(a: Vec2, b: Vec2, c: Vec2, epsilon: f32) -> bool {
    triangle_area(a, b, c) < epsilon
}

pub fn are_close(a: Vec2, b: Vec2, epsilon: f32) -> bool {
    (a.x - b.x).abs() < epsilon && (a.y - b.y).abs() < epsilon
}

pub fn triangle_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs() / 2.0
}

/// Unsigned shoelace area.
pub fn polygon_area(polygon: &[Vec2]) -> f32 {
    let n = polygon.len();
    let mut twice = 0.0;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        twice += a.x * b.y - b.x * a.y;
    }
    twice.abs() / 2.0
}

/// Mean of `points`; `None` when there are none.
pub fn compute_center(points: &[Vec2]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().copied().sum::<Vec2>() / points.len() as f32)
}

/// Wrapping index into `items`. Panics on an empty slice.
pub fn get_circular<T>(items: &[T], index: isize) -> &T {
    let len = items.len() as isize;
    &items[index.rem_euclid(len) as usize]
}

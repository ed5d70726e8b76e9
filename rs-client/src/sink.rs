use bevy::prelude::{Vec2, Vec3};
use rs_shadow::geometry::polygon::triangle_area;
use rs_shadow::{ShadowDraw, ShadowSink};
use tracing::trace;

fn ground(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Stands in for the renderer: tallies what would have been drawn this frame.
#[derive(Debug, Default)]
pub struct FrameSink {
    pub shadows: usize,
    pub triangles: usize,
    /// Ground area covered, summed over every shadow, in square blocks.
    pub area: f32,
    opacity_sum: f32,
}

impl FrameSink {
    pub fn mean_opacity(&self) -> f32 {
        if self.shadows == 0 {
            0.0
        } else {
            self.opacity_sum / self.shadows as f32
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ShadowSink for FrameSink {
    fn draw_shadow(&mut self, draw: ShadowDraw) {
        let area: f32 = draw
            .triangles
            .iter()
            .map(|[a, b, c]| triangle_area(ground(*a), ground(*b), ground(*c)))
            .sum();
        trace!(
            "shadow for entity {}: {} triangles, {:.2} blocks², opacity {:.2}",
            draw.entity.0,
            draw.triangles.len(),
            area,
            draw.opacity
        );
        self.shadows += 1;
        self.triangles += draw.triangles.len();
        self.area += area;
        self.opacity_sum += draw.opacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rs_shadow::EntityId;

    #[test]
    fn tallies_area_and_opacity() {
        let mut sink = FrameSink::default();
        for opacity in [0.8, 0.4] {
            sink.draw_shadow(ShadowDraw {
                entity: EntityId(1),
                origin: Vec3::ZERO,
                triangles: vec![[
                    Vec3::new(0.0, 0.01, 0.0),
                    Vec3::new(2.0, 0.01, 0.0),
                    Vec3::new(0.0, 0.01, 1.0),
                ]],
                opacity,
            });
        }
        assert_eq!(sink.shadows, 2);
        assert_eq!(sink.triangles, 2);
        assert!((sink.area - 2.0).abs() < 1e-5);
        assert!((sink.mean_opacity() - 0.6).abs() < 1e-5);

        sink.clear();
        assert_eq!(sink.mean_opacity(), 0.0);
    }
}

use super::{ModelDef, PartMotion};

/// Walk-cycle frequency used by vanilla `setRotationAngles`.
const SWING_FREQUENCY: f32 = 0.6662;
/// Vanilla clamps head pitch to roughly ±90° before posing.
const MAX_HEAD_PITCH_DEG: f32 = 90.0;

/// Per-part rotation (pitch, yaw, roll) in radians, added on top of the part's rest rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartPose {
    pub rotation: [f32; 3],
}

/// Current rotation of every part of one model instance, indexed like `ModelDef::parts`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelPose {
    pub parts: Vec<PartPose>,
}

impl ModelPose {
    pub fn rest(model: &ModelDef) -> Self {
        Self {
            parts: vec![PartPose::default(); model.parts.len()],
        }
    }

    /// Vanilla-style limb swing plus head look. Angles for the head are in degrees,
    /// relative to the body.
    pub fn animated(
        model: &ModelDef,
        limb: LimbSwing,
        head_yaw_deg: f32,
        head_pitch_deg: f32,
    ) -> Self {
        let head_pitch_deg = head_pitch_deg.clamp(-MAX_HEAD_PITCH_DEG, MAX_HEAD_PITCH_DEG);
        let parts = model
            .parts
            .iter()
            .map(|part| match part.motion {
                PartMotion::Rigid => PartPose::default(),
                PartMotion::Look => PartPose {
                    rotation: [head_pitch_deg.to_radians(), head_yaw_deg.to_radians(), 0.0],
                },
                PartMotion::Swing {
                    amplitude,
                    opposite,
                } => {
                    let phase = if opposite { std::f32::consts::PI } else { 0.0 };
                    let pitch = (limb.position * SWING_FREQUENCY + phase).cos()
                        * amplitude
                        * limb.amount;
                    PartPose {
                        rotation: [pitch, 0.0, 0.0],
                    }
                }
            })
            .collect();
        Self { parts }
    }

    /// Pose rotation for part `index`; parts beyond the pose fall back to no extra rotation.
    pub fn rotation(&self, index: usize) -> [f32; 3] {
        self.parts
            .get(index)
            .map(|part| part.rotation)
            .unwrap_or_default()
    }
}

/// Limb swing accumulator, advanced once per tick from horizontal movement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LimbSwing {
    pub position: f32,
    pub amount: f32,
}

impl LimbSwing {
    pub fn tick(&mut self, horizontal_distance: f32) {
        let target = (horizontal_distance * 4.0).min(1.0);
        self.amount += (target - self.amount) * 0.4;
        self.position += self.amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BIPED_LEFT_LEG, BIPED_MODEL, BIPED_RIGHT_LEG, CREEPER_MODEL};

    #[test]
    fn legs_swing_in_opposition() {
        let limb = LimbSwing {
            position: 1.3,
            amount: 1.0,
        };
        let pose = ModelPose::animated(&BIPED_MODEL, limb, 0.0, 0.0);
        let right = pose.rotation(BIPED_RIGHT_LEG)[0];
        let left = pose.rotation(BIPED_LEFT_LEG)[0];
        assert!(right.abs() > 0.1);
        assert!((right + left).abs() < 1e-5);
    }

    #[test]
    fn standing_still_settles_to_rest() {
        let mut limb = LimbSwing {
            position: 4.0,
            amount: 1.0,
        };
        for _ in 0..60 {
            limb.tick(0.0);
        }
        assert!(limb.amount < 1e-6);
        let pose = ModelPose::animated(&CREEPER_MODEL, limb, 0.0, 0.0);
        assert!(pose.parts.iter().all(|p| p.rotation[0].abs() < 1e-5));
    }

    #[test]
    fn head_follows_look_and_missing_parts_default() {
        let pose = ModelPose::animated(&BIPED_MODEL, LimbSwing::default(), 30.0, 120.0);
        let head = pose.rotation(0);
        assert!((head[1] - 30f32.to_radians()).abs() < 1e-6);
        assert!((head[0] - 90f32.to_radians()).abs() < 1e-6);
        assert_eq!(pose.rotation(99), [0.0, 0.0, 0.0]);
    }
}

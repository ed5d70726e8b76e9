use std::f32::consts::TAU;

use bevy::prelude::Vec3;
use rs_entity::{LimbSwing, ModelPose, ModelRegistry};
use rs_shadow::{EntityId, EntitySnapshot};
use rs_utils::{MobKind, NetEntityKind, ObjectKind, PlayerSkinModel};

#[derive(Debug, Clone, Copy)]
pub enum Motion {
    Idle,
    /// Walks a circle, one lap every `period` ticks.
    Circle { center: Vec3, radius: f32, period: f32 },
    /// Walks back and forth between two points at `speed` blocks per tick.
    Patrol { from: Vec3, to: Vec3, speed: f32 },
}

pub struct DemoEntity {
    pub id: EntityId,
    pub kind: NetEntityKind,
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub eye_height: f32,
    pub motion: Motion,
    /// Tick after which the entity leaves the scene.
    pub despawn_at: Option<u64>,
    limb: LimbSwing,
    pose: Option<ModelPose>,
    patrol_forward: bool,
}

impl DemoEntity {
    pub fn new(id: i32, kind: NetEntityKind, position: Vec3, motion: Motion) -> Self {
        Self {
            id: EntityId(id),
            kind,
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            eye_height: EntitySnapshot::DEFAULT_EYE_HEIGHT,
            motion,
            despawn_at: None,
            limb: LimbSwing::default(),
            pose: None,
            patrol_forward: true,
        }
    }

    fn next_position(&mut self, tick: u64) -> Vec3 {
        match self.motion {
            Motion::Idle => self.position,
            Motion::Circle {
                center,
                radius,
                period,
            } => {
                let angle = tick as f32 / period * TAU;
                center + Vec3::new(angle.cos(), 0.0, angle.sin()) * radius
            }
            Motion::Patrol { from, to, speed } => {
                let goal = if self.patrol_forward { to } else { from };
                let offset = goal - self.position;
                if offset.length() <= speed {
                    self.patrol_forward = !self.patrol_forward;
                    goal
                } else {
                    self.position + offset.normalize() * speed
                }
            }
        }
    }

    fn tick(&mut self, tick: u64, registry: &ModelRegistry) {
        let next = self.next_position(tick);
        self.velocity = next - self.position;
        self.position = next;

        let horizontal = Vec3::new(self.velocity.x, 0.0, self.velocity.z);
        if horizontal.length_squared() > 1.0e-6 {
            // Vanilla yaw: 0 faces +Z, 90 faces -X.
            self.yaw = (-horizontal.x).atan2(horizontal.z).to_degrees();
        }
        self.limb.tick(horizontal.length());

        self.pose = registry
            .get(self.kind)
            .map(|entry| ModelPose::animated(entry.model, self.limb, 0.0, 0.0));
    }

    pub fn snapshot(&self) -> EntitySnapshot<'_> {
        EntitySnapshot {
            id: self.id,
            kind: self.kind,
            position: self.position,
            velocity: self.velocity,
            yaw: self.yaw,
            body_yaw: None,
            eye_height: self.eye_height,
            pose: self.pose.as_ref(),
            texture: None,
        }
    }
}

/// Entities wandering the demo arena.
pub struct DemoScene {
    pub entities: Vec<DemoEntity>,
}

impl DemoScene {
    pub fn arena() -> Self {
        let ground = 64.0;
        let mut pig = DemoEntity::new(
            4,
            NetEntityKind::Mob(MobKind::Pig),
            Vec3::new(-4.0, ground, 6.0),
            Motion::Patrol {
                from: Vec3::new(-4.0, ground, 6.0),
                to: Vec3::new(6.0, ground, 6.0),
                speed: 0.15,
            },
        );
        pig.eye_height = 0.78;
        pig.despawn_at = Some(60);

        let mut cow = DemoEntity::new(
            5,
            NetEntityKind::Mob(MobKind::Cow),
            Vec3::new(11.5, 69.0, -0.5),
            Motion::Idle,
        );
        cow.eye_height = 1.2;

        let mut creeper = DemoEntity::new(
            6,
            NetEntityKind::Mob(MobKind::Creeper),
            Vec3::new(-1.5, ground, -4.5),
            Motion::Idle,
        );
        creeper.eye_height = 1.45;

        Self {
            entities: vec![
                DemoEntity::new(
                    1,
                    NetEntityKind::Player(PlayerSkinModel::Classic),
                    Vec3::new(3.5, ground, 3.5),
                    Motion::Circle {
                        center: Vec3::new(3.5, ground, 0.5),
                        radius: 3.0,
                        period: 200.0,
                    },
                ),
                DemoEntity::new(
                    2,
                    NetEntityKind::Player(PlayerSkinModel::Slim),
                    Vec3::new(0.5, ground, 0.5),
                    Motion::Idle,
                ),
                DemoEntity::new(
                    3,
                    NetEntityKind::Mob(MobKind::Zombie),
                    Vec3::new(6.5, ground, 6.5),
                    Motion::Idle,
                ),
                pig,
                cow,
                creeper,
                DemoEntity::new(
                    7,
                    NetEntityKind::Mob(MobKind::Spider),
                    Vec3::new(-8.5, ground, 2.5),
                    Motion::Idle,
                ),
                DemoEntity::new(8, NetEntityKind::Item, Vec3::new(1.5, ground, 1.5), Motion::Idle),
                DemoEntity::new(
                    9,
                    NetEntityKind::Object(ObjectKind::Minecart),
                    Vec3::new(-2.5, ground, 2.5),
                    Motion::Idle,
                ),
            ],
        }
    }

    /// Advances every entity and returns the ids that despawned this tick.
    pub fn tick(&mut self, tick: u64, registry: &ModelRegistry) -> Vec<EntityId> {
        let mut despawned = Vec::new();
        self.entities.retain(|entity| {
            let gone = entity.despawn_at.is_some_and(|at| tick >= at);
            if gone {
                despawned.push(entity.id);
            }
            !gone
        });
        for entity in &mut self.entities {
            entity.tick(tick, registry);
        }
        despawned
    }

    pub fn snapshots(&self) -> Vec<EntitySnapshot<'_>> {
        self.entities.iter().map(DemoEntity::snapshot).collect()
    }
}

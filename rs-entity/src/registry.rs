use std::collections::HashMap;

use rs_utils::{MobKind, NetEntityKind, PlayerSkinModel};

use super::{
    BIPED_MODEL, BIPED_SLIM_MODEL, COW_MODEL, CREEPER_MODEL, ModelDef, PIG_MODEL, SHEEP_MODEL,
    SKELETON_MODEL, ZOMBIE_MODEL,
};

#[derive(Debug, Clone, Copy)]
pub struct ModelEntry {
    pub model: &'static ModelDef,
    /// Default texture, relative to the texture pack's `textures/` directory.
    pub texture: &'static str,
}

/// Which static model (and default texture) each entity kind is drawn with.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    entries: HashMap<NetEntityKind, ModelEntry>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every kind with a hard-coded model in this crate.
    pub fn vanilla() -> Self {
        let mut registry = Self::new();
        registry.register(
            NetEntityKind::Player(PlayerSkinModel::Classic),
            &BIPED_MODEL,
            "entity/steve.png",
        );
        registry.register(
            NetEntityKind::Player(PlayerSkinModel::Slim),
            &BIPED_SLIM_MODEL,
            "entity/alex.png",
        );
        registry.register(
            NetEntityKind::Mob(MobKind::Zombie),
            &ZOMBIE_MODEL,
            "entity/zombie/zombie.png",
        );
        registry.register(
            NetEntityKind::Mob(MobKind::PigZombie),
            &ZOMBIE_MODEL,
            "entity/zombie_pigman.png",
        );
        registry.register(
            NetEntityKind::Mob(MobKind::Skeleton),
            &SKELETON_MODEL,
            "entity/skeleton/skeleton.png",
        );
        registry.register(
            NetEntityKind::Mob(MobKind::Creeper),
            &CREEPER_MODEL,
            "entity/creeper/creeper.png",
        );
        registry.register(NetEntityKind::Mob(MobKind::Pig), &PIG_MODEL, "entity/pig/pig.png");
        registry.register(
            NetEntityKind::Mob(MobKind::Sheep),
            &SHEEP_MODEL,
            "entity/sheep/sheep.png",
        );
        registry.register(NetEntityKind::Mob(MobKind::Cow), &COW_MODEL, "entity/cow/cow.png");
        registry.register(
            NetEntityKind::Mob(MobKind::Mooshroom),
            &COW_MODEL,
            "entity/cow/mooshroom.png",
        );
        registry
    }

    pub fn register(
        &mut self,
        kind: NetEntityKind,
        model: &'static ModelDef,
        texture: &'static str,
    ) {
        self.entries.insert(kind, ModelEntry { model, texture });
    }

    pub fn get(&self, kind: NetEntityKind) -> Option<&ModelEntry> {
        self.entries.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use std::path::{Path, PathBuf};

use bevy::prelude::{IVec3, Vec3};

pub const UMBRA_ASSETS_ROOT_ENV: &str = "UMBRA_ASSETS_ROOT";

pub fn umbra_assets_root() -> PathBuf {
    if let Ok(explicit) = std::env::var(UMBRA_ASSETS_ROOT_ENV) {
        let path = PathBuf::from(explicit);
        if path.exists() {
            return path;
        }
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(exe_dir) = exe.parent()
    {
        let sibling_assets = exe_dir.join("assets");
        if sibling_assets.exists() {
            return sibling_assets;
        }
    }

    let repo_assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("../rs-client/assets");
    if repo_assets.exists() {
        return repo_assets;
    }

    PathBuf::from("assets")
}

pub fn texturepack_textures_root() -> PathBuf {
    umbra_assets_root().join("texturepack/assets/minecraft/textures")
}

/// Block cell containing `pos`.
pub fn block_pos(pos: Vec3) -> IVec3 {
    pos.floor().as_ivec3()
}

/// Centre of the block cell at `pos`.
pub fn block_center(pos: IVec3) -> Vec3 {
    pos.as_vec3() + Vec3::splat(0.5)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetEntityKind {
    Player(PlayerSkinModel),
    Item,
    ExperienceOrb,
    Mob(MobKind),
    Object(ObjectKind),
}

impl NetEntityKind {
    /// Living entities are the only ones that get a bone shadow.
    pub fn is_living(self) -> bool {
        matches!(self, Self::Player(_) | Self::Mob(_))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Player(_) => "Player",
            Self::Item => "Dropped Item",
            Self::ExperienceOrb => "XP Orb",
            Self::Mob(mob) => mob.label(),
            Self::Object(object) => object.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerSkinModel {
    #[default]
    Classic,
    Slim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobKind {
    Creeper,
    Skeleton,
    Spider,
    Zombie,
    Slime,
    PigZombie,
    Enderman,
    Pig,
    Sheep,
    Cow,
    Chicken,
    Wolf,
    Mooshroom,
    Villager,
    Unknown(u8),
}

impl MobKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Creeper => "Creeper",
            Self::Skeleton => "Skeleton",
            Self::Spider => "Spider",
            Self::Zombie => "Zombie",
            Self::Slime => "Slime",
            Self::PigZombie => "Zombie Pigman",
            Self::Enderman => "Enderman",
            Self::Pig => "Pig",
            Self::Sheep => "Sheep",
            Self::Cow => "Cow",
            Self::Chicken => "Chicken",
            Self::Wolf => "Wolf",
            Self::Mooshroom => "Mooshroom",
            Self::Villager => "Villager",
            Self::Unknown(_) => "Mob",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Boat,
    Minecart,
    Arrow,
    ArmorStand,
    FallingBlock,
    Unknown(u8),
}

impl ObjectKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Boat => "Boat",
            Self::Minecart => "Minecart",
            Self::Arrow => "Arrow",
            Self::ArmorStand => "Armor Stand",
            Self::FallingBlock => "Falling Block",
            Self::Unknown(_) => "Object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_pos_floors_negative_coordinates() {
        assert_eq!(block_pos(Vec3::new(-0.2, 64.9, 3.0)), IVec3::new(-1, 64, 3));
        assert_eq!(block_center(IVec3::new(-1, 0, 2)), Vec3::new(-0.5, 0.5, 2.5));
    }

    #[test]
    fn only_players_and_mobs_are_living() {
        assert!(NetEntityKind::Player(PlayerSkinModel::Slim).is_living());
        assert!(NetEntityKind::Mob(MobKind::Cow).is_living());
        assert!(!NetEntityKind::Item.is_living());
        assert!(!NetEntityKind::Object(ObjectKind::Boat).is_living());
    }
}

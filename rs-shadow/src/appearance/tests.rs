use std::collections::HashMap;

use super::*;
use crate::host::TextureAlphaSource;
use crate::settings::ShadowSettings;
use crate::test_support::FlatWorld;
use bevy::prelude::{IVec3, Vec3};
use image::{Rgba, RgbaImage};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn sun_follows_the_day() {
    let noon = sun_light_source(0.0).unwrap();
    assert!(approx(noon.horizontal_deg, -90.0));
    assert!(approx(noon.vertical_deg, 90.0));

    let morning = sun_light_source(0.1).unwrap();
    assert!(approx(morning.horizontal_deg, -90.0));
    assert!(approx(morning.vertical_deg, 54.0));

    let evening = sun_light_source(0.9).unwrap();
    assert!(approx(evening.horizontal_deg, 90.0));
    assert!(approx(evening.vertical_deg, 54.0));

    assert!(sun_light_source(0.25).is_none());
    assert!(sun_light_source(0.5).is_none());
}

#[test]
fn emitter_angles() {
    let entity = Vec3::new(0.0, 64.0, 0.5);

    let east_up = emitter_light_source(entity, Vec3::new(3.5, 67.5, 0.5));
    assert!(approx(east_up.horizontal_deg, 90.0));
    assert!(approx(east_up.vertical_deg, 45.0));

    let west = emitter_light_source(entity, Vec3::new(-3.0, 64.0, 0.5));
    assert!(approx(west.horizontal_deg, 270.0));
    assert!(approx(west.vertical_deg, 0.0));

    let north_east = emitter_light_source(entity, Vec3::new(1.0, 65.0, -0.5));
    assert!(approx(north_east.horizontal_deg, 45.0));

    let north_west = emitter_light_source(entity, Vec3::new(-1.0, 65.0, -0.5));
    assert!(approx(north_west.horizontal_deg, 315.0));
}

#[test]
fn emitters_below_the_feet_cast_nothing() {
    let entity = Vec3::new(0.0, 64.0, 0.0);
    let sources = resolve_light_sources(
        0.5,
        entity,
        &[Vec3::new(2.0, 66.0, 0.0), Vec3::new(2.0, 62.0, 0.0)],
    );
    assert_eq!(sources.len(), 1);
    assert!(sources[0].vertical_deg > 0.0);

    let daytime = resolve_light_sources(0.0, entity, &[Vec3::new(2.0, 66.0, 0.0)]);
    assert_eq!(daytime.len(), 2);
    assert!(approx(daytime[0].vertical_deg, 90.0));
}

#[test]
fn nearby_emitters_need_range_and_sight() {
    let mut world = FlatWorld::night();
    world.emitters.insert(IVec3::new(3, 67, 0), 15);
    world.emitters.insert(IVec3::new(10, 64, 0), 5);
    world.emitters.insert(IVec3::new(0, 66, 3), 15);
    world.walls.insert(IVec3::new(0, 66, 2));

    let feet = Vec3::new(0.0, 64.0, 0.5);
    let eye = feet + Vec3::Y * 1.62;
    let radius = ShadowSettings::default().source_block_radius;
    let lights = nearby_light_positions(&world, feet, eye, radius);
    assert_eq!(lights, vec![Vec3::new(3.5, 67.5, 0.5)]);
}

#[test]
fn air_gap_fades_the_shadow() {
    let world = FlatWorld::night();
    let settings = ShadowSettings::default();

    assert_eq!(air_gap_blocks(&world, IVec3::new(0, 64, 0), 8), 0);
    assert_eq!(air_gap_blocks(&world, IVec3::new(0, 67, 0), 8), 3);
    assert_eq!(air_gap_blocks(&world, IVec3::new(0, 90, 0), 8), 8);

    let grounded = compute_opacity(&world, IVec3::new(0, 64, 0), 1.0, &settings);
    let hovering = compute_opacity(&world, IVec3::new(0, 67, 0), 1.0, &settings);
    let flying = compute_opacity(&world, IVec3::new(0, 90, 0), 1.0, &settings);
    assert!(approx(grounded, 0.8));
    assert!(approx(hovering, 0.5));
    assert!(flying.abs() < 1e-5);

    let mut previous = f32::MAX;
    for height in 64..75 {
        let opacity = compute_opacity(&world, IVec3::new(0, height, 0), 1.0, &settings);
        assert!(opacity <= previous);
        previous = opacity;
    }
}

#[test]
fn darkness_and_texture_alpha_scale_opacity() {
    let mut world = FlatWorld::night();
    let settings = ShadowSettings::default();
    let feet = IVec3::new(0, 64, 0);

    assert!(approx(compute_opacity(&world, feet, 0.5, &settings), 0.4));

    world.light = 0;
    assert_eq!(compute_opacity(&world, feet, 1.0, &settings), 0.0);

    world.light = 5;
    assert!(approx(compute_opacity(&world, feet, 1.0, &settings), 0.8 / 3.0));
}

#[test]
fn average_alpha_of_images() {
    let mut half = RgbaImage::new(2, 1);
    half.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
    half.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
    assert!(approx(average_alpha(&half).unwrap(), 0.5));
    assert!(average_alpha(&RgbaImage::new(0, 0)).is_none());
}

#[test]
fn texture_pack_alpha_reads_pngs() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("entity")).unwrap();
    RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 128]))
        .save(dir.path().join("entity/ghost.png"))
        .unwrap();

    let textures = TexturePackAlpha::new(dir.path());
    assert!(approx(textures.average_alpha("entity/ghost.png").unwrap(), 128.0 / 255.0));
    assert!(textures.average_alpha("entity/missing.png").is_none());
}

#[test]
fn alpha_cache_remembers_lookups_and_falls_back_to_opaque() {
    let mut source: HashMap<String, f32> = HashMap::new();
    source.insert("entity/ghost.png".to_string(), 0.25);

    let mut cache = TextureAlphaCache::default();
    assert_eq!(cache.alpha("entity/ghost.png", &source), 0.25);
    assert_eq!(cache.alpha("entity/missing.png", &source), 1.0);

    source.insert("entity/ghost.png".to_string(), 0.9);
    assert_eq!(cache.alpha("entity/ghost.png", &source), 0.25);
    assert_eq!(cache.len(), 2);
}

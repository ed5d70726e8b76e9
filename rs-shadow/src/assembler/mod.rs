mod state;

pub use state::*;

use bevy::prelude::{Resource, Vec3};
use rs_entity::ModelRegistry;
use tracing::{debug, trace};

use crate::appearance::{
    LightSource, TextureAlphaCache, compute_opacity, nearby_light_positions,
    resolve_light_sources,
};
use crate::error::ShadowError;
use crate::geometry::{
    BoneDataExtractor, HEADING_OFFSET_DEG, ShadowPolygon, base_shadow_height,
    center_bottom_offset, estimate_body_yaw, flatten_vertices, get_vertices, morph_shadow_size,
    prune_vertices, rotate_shadow, squish_shadow,
};
use crate::host::{
    EntityId, EntitySnapshot, ShadowDraw, ShadowSink, ShadowWorld, TextureAlphaSource,
};
use crate::settings::ShadowSettings;

/// Shadows fainter than this are not drawn.
pub const MIN_VISIBLE_OPACITY: f32 = 1.0e-3;

/// Per-frame outcome counts from [`ShadowAssembler::render_frame`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    /// Living entities with no light on them, or a fully faded shadow.
    pub unlit: usize,
    pub unsupported: usize,
}

/// Turns entity snapshots into shadow draws. One per world.
#[derive(Resource)]
pub struct ShadowAssembler {
    settings: ShadowSettings,
    registry: ModelRegistry,
    extractor: BoneDataExtractor,
    textures: Box<dyn TextureAlphaSource + Send + Sync>,
    alphas: TextureAlphaCache,
    states: ShadowStateStore,
}

impl ShadowAssembler {
    pub fn new(
        settings: ShadowSettings,
        registry: ModelRegistry,
        textures: impl TextureAlphaSource + Send + Sync + 'static,
    ) -> Self {
        Self {
            settings,
            registry,
            extractor: BoneDataExtractor::new(),
            textures: Box::new(textures),
            alphas: TextureAlphaCache::default(),
            states: ShadowStateStore::new(),
        }
    }

    pub fn settings(&self) -> &ShadowSettings {
        &self.settings
    }

    pub fn states(&self) -> &ShadowStateStore {
        &self.states
    }

    /// Drops cached state for an entity that left the world.
    pub fn forget_entity(&self, id: EntityId) {
        self.states.remove(id);
    }

    pub fn retain_entities(&self, live: impl Fn(EntityId) -> bool) {
        self.states.retain(live);
    }

    /// The entity's shadow for this frame, or `None` when no light reaches it (or the shadow
    /// has faded out completely).
    pub fn compute_shadow<W: ShadowWorld + ?Sized>(
        &mut self,
        world: &W,
        entity: &EntitySnapshot<'_>,
    ) -> Result<Option<ShadowDraw>, ShadowError> {
        let entry = *self
            .registry
            .get(entity.kind)
            .ok_or(ShadowError::UnsupportedEntity(entity.kind))?;
        let snapshot = self.extractor.extract(entry.model, entity.pose)?;

        let now = world.game_time();
        let radius = self.settings.source_block_radius;
        let light_positions = self.states.light_positions(
            entity.id,
            now,
            self.settings.update_interval_ticks,
            || {
                let positions = nearby_light_positions(
                    world,
                    entity.position,
                    entity.eye_position(),
                    radius,
                );
                debug!(
                    "entity {} sees {} light emitters at tick {now}",
                    entity.id.0,
                    positions.len()
                );
                positions
            },
        );

        let heading = match entity.body_yaw {
            Some(body_yaw) => body_yaw + HEADING_OFFSET_DEG,
            None => self.states.with_state(entity.id, |state| {
                let heading = estimate_body_yaw(entity.yaw, entity.velocity, state.last_body_yaw);
                state.last_body_yaw = Some(heading);
                heading
            }),
        };

        let vertices = get_vertices(&snapshot, heading);
        let (base_height, center_offset) = self.states.with_state(entity.id, |state| {
            let height = *state
                .base_height
                .get_or_insert_with(|| base_shadow_height(&vertices));
            let offset = *state
                .center_offset
                .get_or_insert_with(|| center_bottom_offset(&vertices));
            (height, offset)
        });

        let sources =
            resolve_light_sources(world.celestial_phase(), entity.position, &light_positions);
        if sources.is_empty() {
            trace!("entity {} is unlit", entity.id.0);
            return Ok(None);
        }

        let texture = entity.texture.unwrap_or(entry.texture);
        let alpha = self.alphas.alpha(texture, self.textures.as_ref());
        let opacity = compute_opacity(world, entity.feet_block(), alpha, &self.settings);
        if opacity < MIN_VISIBLE_OPACITY {
            trace!("entity {} shadow faded out", entity.id.0);
            return Ok(None);
        }

        let polygons = shadow_polygons(
            &vertices,
            &sources,
            base_height,
            center_offset,
            &self.settings,
        );
        let lift = self.settings.ground_lift;
        let triangles: Vec<[Vec3; 3]> = polygons
            .iter()
            .flat_map(|polygon| polygon.triangulate())
            .map(|tri| tri.map(|p| Vec3::new(p.x, lift, p.y)))
            .collect();
        if triangles.is_empty() {
            return Ok(None);
        }

        Ok(Some(ShadowDraw {
            entity: entity.id,
            origin: entity.position,
            triangles,
            opacity,
        }))
    }

    /// Computes and submits one shadow. Returns whether anything was drawn.
    pub fn render_entity<W, S>(
        &mut self,
        world: &W,
        entity: &EntitySnapshot<'_>,
        sink: &mut S,
    ) -> Result<bool, ShadowError>
    where
        W: ShadowWorld + ?Sized,
        S: ShadowSink + ?Sized,
    {
        match self.compute_shadow(world, entity)? {
            Some(draw) => {
                sink.draw_shadow(draw);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Shadows for every living entity in view. Entities without a model are skipped.
    pub fn render_frame<'a, 'e: 'a, W, S>(
        &mut self,
        world: &W,
        entities: impl IntoIterator<Item = &'a EntitySnapshot<'e>>,
        sink: &mut S,
    ) -> FrameStats
    where
        W: ShadowWorld + ?Sized,
        S: ShadowSink + ?Sized,
    {
        let mut stats = FrameStats::default();
        for entity in entities {
            if !entity.kind.is_living() {
                continue;
            }
            match self.render_entity(world, entity, sink) {
                Ok(true) => stats.drawn += 1,
                Ok(false) => stats.unlit += 1,
                Err(err) => {
                    trace!("skipping shadow for entity {}: {err}", entity.id.0);
                    stats.unsupported += 1;
                }
            }
        }
        stats
    }
}

/// Ground outlines cast by `vertices` for every light in `sources`, relative to the feet.
pub fn shadow_polygons(
    vertices: &[Vec<Vec3>],
    sources: &[LightSource],
    base_height: f32,
    center_offset: f32,
    settings: &ShadowSettings,
) -> Vec<ShadowPolygon> {
    let mut polygons = Vec::new();
    for source in sources {
        let flat = flatten_vertices(vertices, source.horizontal_deg, settings.vertex_epsilon);
        let pruned = prune_vertices(&flat, settings.vertex_epsilon, settings.colinear_epsilon);
        let multiplier = morph_shadow_size(base_height, source.vertical_deg, settings.sizing);
        let squished = squish_shadow(&pruned, multiplier, center_offset);
        polygons.extend(rotate_shadow(
            &squished,
            source.horizontal_deg,
            center_offset,
            settings.vertex_epsilon,
        ));
    }
    polygons
}

use bevy::prelude::Vec3;
use dashmap::DashMap;

use crate::host::EntityId;

/// What the assembler remembers about one entity between frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityShadowState {
    /// Centres of emitters that lit the entity at the last refresh.
    pub light_positions: Vec<Vec3>,
    pub last_update_tick: Option<u64>,
    pub base_height: Option<f32>,
    pub center_offset: Option<f32>,
    /// Estimated heading, for hosts that don't report body yaw.
    pub last_body_yaw: Option<f32>,
}

impl EntityShadowState {
    /// Fresh state always refreshes; after that, once `interval` ticks have passed.
    pub fn needs_refresh(&self, now: u64, interval: u64) -> bool {
        match self.last_update_tick {
            None => true,
            Some(last) => now.saturating_sub(last) >= interval,
        }
    }
}

#[derive(Debug, Default)]
pub struct ShadowStateStore {
    states: DashMap<EntityId, EntityShadowState>,
}

impl ShadowStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` on the entity's state, creating it first if needed. Don't call back into the
    /// store from `f`.
    pub fn with_state<R>(&self, id: EntityId, f: impl FnOnce(&mut EntityShadowState) -> R) -> R {
        let mut state = self.states.entry(id).or_default();
        f(state.value_mut())
    }

    /// Cached emitter positions, rescanned through `scan` when they are stale.
    pub fn light_positions(
        &self,
        id: EntityId,
        now: u64,
        interval: u64,
        scan: impl FnOnce() -> Vec<Vec3>,
    ) -> Vec<Vec3> {
        if !self.with_state(id, |state| state.needs_refresh(now, interval)) {
            return self.with_state(id, |state| state.light_positions.clone());
        }
        let positions = scan();
        self.with_state(id, |state| {
            state.light_positions = positions.clone();
            state.last_update_tick = Some(now);
        });
        positions
    }

    pub fn get(&self, id: EntityId) -> Option<EntityShadowState> {
        self.states.get(&id).map(|state| state.value().clone())
    }

    pub fn remove(&self, id: EntityId) -> Option<EntityShadowState> {
        self.states.remove(&id).map(|(_, state)| state)
    }

    pub fn retain(&self, keep: impl Fn(EntityId) -> bool) {
        self.states.retain(|id, _| keep(*id));
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

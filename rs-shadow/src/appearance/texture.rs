use std::collections::HashMap;
use std::path::PathBuf;

use image::RgbaImage;
use rs_utils::texturepack_textures_root;
use tracing::{debug, warn};

use crate::host::TextureAlphaSource;

/// Reads entity textures straight from the texture pack on disk.
#[derive(Debug, Clone)]
pub struct TexturePackAlpha {
    root: PathBuf,
}

impl TexturePackAlpha {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_assets() -> Self {
        Self::new(texturepack_textures_root())
    }
}

impl TextureAlphaSource for TexturePackAlpha {
    fn average_alpha(&self, texture: &str) -> Option<f32> {
        let full = self.root.join(texture);
        let Some(decoded) = std::fs::read(&full)
            .ok()
            .and_then(|bytes| image::load_from_memory(&bytes).ok())
        else {
            warn!("failed to load entity texture for shadow alpha: {:?}", full);
            return None;
        };
        average_alpha(&decoded.to_rgba8())
    }
}

/// Mean alpha over every pixel, 0..=1. `None` for an empty image.
pub fn average_alpha(rgba: &RgbaImage) -> Option<f32> {
    let pixels = u64::from(rgba.width()) * u64::from(rgba.height());
    if pixels == 0 {
        return None;
    }
    let total: u64 = rgba.pixels().map(|px| u64::from(px.0[3])).sum();
    Some(total as f32 / pixels as f32 / 255.0)
}

/// Remembers each texture's alpha after the first lookup, misses included.
#[derive(Debug, Default)]
pub struct TextureAlphaCache {
    alphas: HashMap<String, f32>,
}

impl TextureAlphaCache {
    pub const FALLBACK_ALPHA: f32 = 1.0;

    pub fn alpha(&mut self, texture: &str, source: &dyn TextureAlphaSource) -> f32 {
        if let Some(alpha) = self.alphas.get(texture) {
            return *alpha;
        }
        let alpha = source
            .average_alpha(texture)
            .unwrap_or(Self::FALLBACK_ALPHA)
            .clamp(0.0, 1.0);
        debug!("texture {texture} casts shadows at alpha {alpha:.3}");
        self.alphas.insert(texture.to_string(), alpha);
        alpha
    }

    pub fn len(&self) -> usize {
        self.alphas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphas.is_empty()
    }
}

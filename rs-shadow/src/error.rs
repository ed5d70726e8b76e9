use std::path::PathBuf;

use rs_utils::NetEntityKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShadowError {
    /// No model is registered for this kind of entity.
    #[error("no shadow model registered for {}", .0.label())]
    UnsupportedEntity(NetEntityKind),

    /// The model exists but none of its parts own any cubes.
    #[error("model {0} has no geometry to cast a shadow")]
    EmptyModel(&'static str),

    #[error("failed to read shadow settings from {path:?}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid shadow settings")]
    SettingsParse(#[from] toml::de::Error),
}

//! Packet script loader (strict parsing).

pub mod schema;

use std::fs;

use skore_core::error::{Result, SkoreError};

pub use schema::{ConstructConfig, EncodingSection, FieldScript, PacketScript};

pub fn load_from_file(path: &str) -> Result<ConstructConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SkoreError::Internal(format!("read script failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ConstructConfig> {
    let cfg: ConstructConfig = serde_yaml::from_str(s)
        .map_err(|e| SkoreError::InvalidArgument(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

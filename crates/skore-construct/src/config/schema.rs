use std::collections::HashSet;

use serde::Deserialize;
use skore_core::error::{Result, SkoreError};
use skore_core::{Charset, TypedValue};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructConfig {
    pub version: u32,

    #[serde(default)]
    pub encoding: EncodingSection,

    #[serde(default)]
    pub packets: Vec<PacketScript>,
}

impl ConstructConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SkoreError::UnsupportedVersion);
        }
        if self.packets.is_empty() {
            return Err(SkoreError::InvalidArgument("packets must not be empty".into()));
        }

        let mut names = HashSet::new();
        for p in &self.packets {
            p.validate()?;
            if !names.insert(p.name.as_str()) {
                return Err(SkoreError::InvalidArgument(format!(
                    "duplicate packet name: {}",
                    p.name
                )));
            }
        }
        Ok(())
    }

    pub fn packet(&self, name: &str) -> Option<&PacketScript> {
        self.packets.iter().find(|p| p.name == name)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncodingSection {
    #[serde(default)]
    pub charset: Charset,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PacketScript {
    pub name: String,
    pub header: u16,
    #[serde(default)]
    pub fields: Vec<FieldScript>,
}

impl PacketScript {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SkoreError::InvalidArgument("packet name must not be empty".into()));
        }
        for (i, f) in self.fields.iter().enumerate() {
            f.value().map_err(|e| {
                SkoreError::InvalidArgument(format!("packet {} field {i}: {e}", self.name))
            })?;
            if f.amount == 0 {
                return Err(SkoreError::InvalidArgument(format!(
                    "packet {} field {i}: amount must be at least 1",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// One field line: exactly one of `integer`, `boolean`, `string`, plus an
/// optional repeat `amount`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldScript {
    #[serde(default)]
    pub integer: Option<i32>,
    #[serde(default)]
    pub boolean: Option<bool>,
    #[serde(default)]
    pub string: Option<String>,

    #[serde(default = "default_amount")]
    pub amount: usize,
}

impl FieldScript {
    pub fn value(&self) -> Result<TypedValue> {
        match (self.integer, self.boolean, &self.string) {
            (Some(i), None, None) => Ok(TypedValue::Integer(i)),
            (None, Some(b), None) => Ok(TypedValue::Boolean(b)),
            (None, None, Some(s)) => Ok(TypedValue::String(s.clone())),
            _ => Err(SkoreError::InvalidArgument(
                "field needs exactly one of integer, boolean, string".into(),
            )),
        }
    }
}

fn default_amount() -> usize {
    1
}

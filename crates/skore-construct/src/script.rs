//! Replays packet scripts through a [`ConstructBuilder`].

use skore_core::error::Result;
use skore_core::{Charset, Packet};

use crate::builder::ConstructBuilder;
use crate::config::{ConstructConfig, PacketScript};

/// Builder holding every field of `script`, written in order.
pub fn build(script: &PacketScript, charset: Charset) -> Result<ConstructBuilder> {
    let builder = ConstructBuilder::new(charset);
    for f in &script.fields {
        builder.write_value(f.value()?, f.amount)?;
    }
    tracing::debug!(
        packet = %script.name,
        header = script.header,
        fields = script.fields.len(),
        "script replayed"
    );
    Ok(builder)
}

/// A script rendered for export.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub name: String,
    pub structure: String,
    pub packet: Packet,
}

/// Build and render every packet in `cfg`, in file order.
pub fn render_all(cfg: &ConstructConfig) -> Result<Vec<Rendered>> {
    cfg.packets
        .iter()
        .map(|script| {
            let packet = build(script, cfg.encoding.charset)?.get_packet(script.header)?;
            Ok(Rendered {
                name: script.name.clone(),
                structure: packet.structure(),
                packet,
            })
        })
        .collect()
}

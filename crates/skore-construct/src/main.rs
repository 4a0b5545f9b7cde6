//! skore-construct
//!
//! Renders packets for scripting and export:
//! - `skore-construct [script.yaml]` builds every packet in a YAML script
//!   (default `construct.yaml`).
//! - `skore-construct '{l}{u:1000}{i:42}'` replays one structure descriptor.
//!
//! Each packet prints its structure descriptor, framed hex and escaped text.
//! Descriptors are not escaped: a string field containing `}{` replays as
//! split fields.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use skore_construct::{config, script, ConstructBuilder};
use skore_core::error::Result;
use skore_core::protocol::{encode, structure};
use skore_core::{Charset, Packet};

const DEFAULT_SCRIPT: &str = "construct.yaml";

const USAGE: &str = "\
usage: skore-construct [script.yaml | descriptor]

  script.yaml   build every packet in a YAML script (default construct.yaml)
  descriptor    replay one structure descriptor, e.g. '{l}{u:1000}{i:42}'

Descriptors are not escaped: a string field containing `}{` cannot be
replayed and parses back as split fields.";

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let arg = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_SCRIPT.to_owned());
    if arg == "-h" || arg == "--help" {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let res = if arg.starts_with("{l}") {
        replay_descriptor(&arg)
    } else {
        render_script(&arg)
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), "{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn render_script(path: &str) -> Result<()> {
    let cfg = config::load_from_file(path)?;
    tracing::info!(
        %path,
        packets = cfg.packets.len(),
        charset = ?cfg.encoding.charset,
        "script loaded"
    );

    for r in script::render_all(&cfg)? {
        print_packet(&r.name, &r.structure, &r.packet)?;
    }
    Ok(())
}

fn replay_descriptor(text: &str) -> Result<()> {
    let (header, fields) = structure::parse_structure(text)?;
    let builder = ConstructBuilder::new(Charset::default());
    for v in fields {
        builder.write_value(v, 1)?;
    }
    let packet = builder.get_packet(header)?;
    print_packet("descriptor", &builder.get_structure(header)?, &packet)
}

fn print_packet(name: &str, structure: &str, packet: &Packet) -> Result<()> {
    let wire = packet.to_bytes()?;
    println!(
        "[{name}] header={} fields={} bytes={}",
        packet.header,
        packet.fields.len(),
        wire.len()
    );
    println!("  structure: {structure}");
    println!("  hex:       {}", encode::to_display_hex(&wire));
    println!("  text:      {}", encode::to_escaped_text(&wire));
    Ok(())
}

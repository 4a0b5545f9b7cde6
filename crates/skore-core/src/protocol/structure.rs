//! Structure descriptor: `{l}{u:<header>}{<tag>:<value>}...`
//!
//! Downstream scripting tools consume this grammar verbatim, so the output
//! is byte-for-byte stable: no escaping, booleans as `True`/`False`.

use std::fmt::Write;

use crate::error::{Result, SkoreError};
use crate::protocol::value::{TypedValue, ValueKind};

/// Fixed-length-list marker plus the header token prefix.
const PREFIX: &str = "{l}{u:";

/// Render the descriptor for `header` and `fields`.
pub fn format_structure(header: u16, fields: &[TypedValue]) -> String {
    let mut out = format!("{PREFIX}{header}}}");
    for v in fields {
        let _ = write!(out, "{{{}:{}}}", v.kind().type_char(), v);
    }
    out
}

/// Parse a descriptor back into its header and fields.
///
/// A field token ends at the first `}` followed by `{` or by the end of
/// input, so string values may contain `}` anywhere else. The grammar has no
/// escaping: a string containing `}{` formats fine but parses back as split
/// fields, so such packets cannot be replayed from their descriptor.
pub fn parse_structure(text: &str) -> Result<(u16, Vec<TypedValue>)> {
    let rest = text
        .strip_prefix(PREFIX)
        .ok_or_else(|| SkoreError::InvalidArgument("descriptor must start with {l}{u:".into()))?;
    let close = rest
        .find('}')
        .ok_or_else(|| SkoreError::InvalidArgument("unterminated header token".into()))?;
    let header = rest[..close]
        .parse::<u16>()
        .map_err(|e| SkoreError::InvalidArgument(format!("bad header {:?}: {e}", &rest[..close])))?;

    let mut rest = &rest[close + 1..];
    let mut fields = Vec::new();
    while !rest.is_empty() {
        let (value, tail) = parse_field(rest)?;
        fields.push(value);
        rest = tail;
    }
    Ok((header, fields))
}

fn parse_field(token: &str) -> Result<(TypedValue, &str)> {
    let mut chars = token.chars();
    let (Some('{'), Some(tag), Some(':')) = (chars.next(), chars.next(), chars.next()) else {
        return Err(SkoreError::InvalidArgument(format!("bad field token at {token:?}")));
    };
    let kind = ValueKind::from_type_char(tag)
        .ok_or_else(|| SkoreError::InvalidArgument(format!("unknown type tag {tag:?}")))?;

    let body = chars.as_str();
    let end = body
        .match_indices('}')
        .map(|(i, _)| i)
        .find(|&i| {
            let after = &body[i + 1..];
            after.is_empty() || after.starts_with('{')
        })
        .ok_or_else(|| SkoreError::InvalidArgument(format!("unterminated field token {token:?}")))?;

    let value = kind.parse(&body[..end])?;
    Ok((value, &body[end + 1..]))
}

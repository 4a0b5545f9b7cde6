//! Packet builder: an ordered value log plus a lazily built packet.
//!
//! The log is authoritative; the cached packet is derived from it. Both sit
//! behind one mutex so a reader never pairs a log state with a packet built
//! from a different one. Every successful mutation drops the cache before
//! the lock is released, and failed operations leave log and cache as they
//! were.

use std::sync::{Mutex, MutexGuard};

use skore_core::error::{Result, SkoreError};
use skore_core::protocol::structure;
use skore_core::{Charset, Packet, TypedValue, ValueKind};

use crate::rows::{DisplayRow, WriteBatch};

#[derive(Debug, Default)]
struct ValueLog {
    values: Vec<TypedValue>,
    cached: Option<Packet>,
}

impl ValueLog {
    fn kind_at(&self, index: usize) -> Result<ValueKind> {
        self.values
            .get(index)
            .map(TypedValue::kind)
            .ok_or(SkoreError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        self.kind_at(index).map(drop)
    }

    fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Replace the slot at `index`, keeping its recorded kind.
    fn replace(&mut self, index: usize, value: TypedValue, charset: Charset) -> Result<DisplayRow> {
        let expected = self.kind_at(index)?;
        if expected != value.kind() {
            return Err(SkoreError::TypeMismatch {
                expected,
                found: value.kind(),
            });
        }
        let row = DisplayRow::new(&value, charset)?;
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
        self.invalidate();
        Ok(row)
    }
}

/// Builds one packet from values written by a UI or a script.
#[derive(Debug, Default)]
pub struct ConstructBuilder {
    charset: Charset,
    log: Mutex<ValueLog>,
}

impl ConstructBuilder {
    /// Builder encoding strings with `charset`.
    pub fn new(charset: Charset) -> Self {
        Self {
            charset,
            log: Mutex::new(ValueLog::default()),
        }
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    fn lock(&self) -> Result<MutexGuard<'_, ValueLog>> {
        self.log
            .lock()
            .map_err(|_| SkoreError::Internal("construct log lock poisoned".into()))
    }

    /// Append `amount` copies of `value`.
    ///
    /// The value is encoded before the log is touched, so an unencodable
    /// string or a zero `amount` fails with nothing written.
    pub fn write_value(&self, value: TypedValue, amount: usize) -> Result<WriteBatch> {
        if amount == 0 {
            return Err(SkoreError::InvalidArgument("amount must be at least 1".into()));
        }
        let row = DisplayRow::new(&value, self.charset)?;

        let mut log = self.lock()?;
        let start = log.values.len();
        log.values.extend(std::iter::repeat(value).take(amount));
        log.invalidate();

        tracing::debug!(kind = %row.kind, amount, start, "values written");
        Ok(WriteBatch { start, amount, row })
    }

    pub fn write_integer(&self, value: i32, amount: usize) -> Result<WriteBatch> {
        self.write_value(TypedValue::Integer(value), amount)
    }

    pub fn write_boolean(&self, value: bool, amount: usize) -> Result<WriteBatch> {
        self.write_value(TypedValue::Boolean(value), amount)
    }

    pub fn write_string(&self, value: impl Into<String>, amount: usize) -> Result<WriteBatch> {
        self.write_value(TypedValue::String(value.into()), amount)
    }

    /// Move one value; the rest keep their relative order.
    pub fn move_value(&self, old_index: usize, new_index: usize) -> Result<()> {
        let mut log = self.lock()?;
        log.check_index(old_index)?;
        log.check_index(new_index)?;

        let value = log.values.remove(old_index);
        log.values.insert(new_index, value);
        log.invalidate();

        tracing::debug!(old_index, new_index, "value moved");
        Ok(())
    }

    /// Remove and return the value at `index`.
    pub fn remove_value(&self, index: usize) -> Result<TypedValue> {
        let mut log = self.lock()?;
        log.check_index(index)?;

        let removed = log.values.remove(index);
        log.invalidate();

        tracing::debug!(index, kind = %removed.kind(), "value removed");
        Ok(removed)
    }

    /// Replace the value at `index`.
    ///
    /// The slot keeps the kind it was written with; a value of another kind
    /// is a `TypeMismatch`.
    pub fn update_value(&self, index: usize, value: TypedValue) -> Result<DisplayRow> {
        let mut log = self.lock()?;
        let row = log.replace(index, value, self.charset)?;
        tracing::debug!(index, kind = %row.kind, "value updated");
        Ok(row)
    }

    /// Replace the value at `index` from edit-box text, parsed as the slot's kind.
    pub fn update_value_text(&self, index: usize, text: &str) -> Result<DisplayRow> {
        let mut log = self.lock()?;
        let value = log.kind_at(index)?.parse(text)?;
        let row = log.replace(index, value, self.charset)?;
        tracing::debug!(index, kind = %row.kind, "value updated from text");
        Ok(row)
    }

    /// Drop every value.
    pub fn clear(&self) -> Result<()> {
        let mut log = self.lock()?;
        log.values.clear();
        log.invalidate();
        tracing::debug!("values cleared");
        Ok(())
    }

    /// Snapshot of the log in wire order.
    pub fn values_written(&self) -> Result<Vec<TypedValue>> {
        Ok(self.lock()?.values.clone())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.values.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.values.is_empty())
    }

    /// Display rows for the whole log.
    pub fn rows(&self) -> Result<Vec<DisplayRow>> {
        let log = self.lock()?;
        log.values
            .iter()
            .map(|v| DisplayRow::new(v, self.charset))
            .collect()
    }

    /// The packet for the current log under `header`.
    ///
    /// Reuses the cached body when nothing changed since the last build;
    /// only the header is rewritten.
    pub fn get_packet(&self, header: u16) -> Result<Packet> {
        let mut log = self.lock()?;
        if let Some(cached) = log.cached.as_mut() {
            tracing::trace!(header, "packet cache hit");
            cached.header = header;
            return Ok(cached.clone());
        }

        let packet = Packet::build(header, &log.values, self.charset)?;
        tracing::trace!(
            header,
            fields = packet.fields.len(),
            body_len = packet.body.len(),
            "packet rebuilt"
        );
        log.cached = Some(packet.clone());
        Ok(packet)
    }

    /// Structure descriptor for the current log under `header`.
    pub fn get_structure(&self, header: u16) -> Result<String> {
        let log = self.lock()?;
        Ok(structure::format_structure(header, &log.values))
    }
}

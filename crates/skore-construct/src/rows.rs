//! Display rows for a list view bound to the value log.

use skore_core::error::Result;
use skore_core::protocol::encode;
use skore_core::{Charset, TypedValue, ValueKind};

/// One list row: type column, value column, encoded column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub kind: ValueKind,
    pub value: String,
    /// Space-separated hex of the field's wire encoding.
    pub encoded: String,
}

impl DisplayRow {
    pub fn new(value: &TypedValue, charset: Charset) -> Result<Self> {
        let data = encode::encode_value(value, charset)?;
        Ok(Self {
            kind: value.kind(),
            value: value.to_string(),
            encoded: encode::to_display_hex(&data),
        })
    }

    /// `"String"`, `"Integer"` or `"Boolean"`.
    pub fn type_name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Result of one write: `amount` copies of `row` appended from `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteBatch {
    pub start: usize,
    pub amount: usize,
    pub row: DisplayRow,
}

impl WriteBatch {
    /// Index of the last row written; the one a view should select.
    pub fn focused_index(&self) -> usize {
        self.start + self.amount.saturating_sub(1)
    }

    /// `(index, focused)` for every row in the batch.
    pub fn entries(&self) -> impl Iterator<Item = (usize, bool)> {
        let focused = self.focused_index();
        (self.start..=focused).map(move |i| (i, i == focused))
    }
}

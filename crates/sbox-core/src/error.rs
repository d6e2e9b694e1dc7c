//! Errors raised while building or verifying tables.

use thiserror::Error;

use crate::table::TableKind;

/// Failure while generating or verifying a table set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// A widened intermediate did not fit in a byte.
    #[error("{table} entry {index} out of byte range: {value:#x}")]
    FieldValueOutOfRange {
        /// Table being built.
        table: TableKind,
        /// Entry index.
        index: usize,
        /// Offending value.
        value: u16,
    },

    /// `inverse_sbox[sbox[index]] != index`.
    #[error("bijection violated at index {index}: forward {forward:#04x}, backward {backward:#04x}")]
    BijectionViolation {
        /// First failing index.
        index: usize,
        /// S-box entry at `index`.
        forward: u8,
        /// Inverse S-box entry at `forward`.
        backward: u8,
    },

    /// Two table sets differ.
    #[error("{table} mismatch at index {index}: expected {expected:#04x}, actual {actual:#04x}")]
    RoundTripMismatch {
        /// Table that differs.
        table: TableKind,
        /// First differing index.
        index: usize,
        /// Value in the reference set.
        expected: u8,
        /// Value in the compared set.
        actual: u8,
    },
}

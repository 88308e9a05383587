//! Error types for the ftdi-config crate.

use crate::transport::TransportStatus;
use crate::types::{ChipType, Interface};

/// The error type for configuration and capability operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The record variant or image does not belong to the stated chip family.
    #[error("configuration family mismatch: expected {expected:?}, found {found:?}")]
    FamilyMismatch {
        /// The family the operation was asked to use.
        expected: ChipType,
        /// The family the record or image actually belongs to.
        found: ChipType,
    },

    /// A parameter was rejected before any encoding took place.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The bit mode is not available on this chip family.
    #[error("bit mode {mode:#04x} not supported by {chip:?}")]
    UnsupportedMode {
        /// Chip family the request was checked against.
        chip: ChipType,
        /// Requested mode byte.
        mode: u8,
    },

    /// The bit mode exists on this family but not on the requested channel.
    #[error("bit mode {mode:#04x} not available on interface {interface:?} of {chip:?}")]
    WrongChannel {
        /// Chip family the request was checked against.
        chip: ChipType,
        /// Requested mode byte.
        mode: u8,
        /// Requested channel.
        interface: Interface,
    },

    /// A failure reported by the transport, passed through unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] TransportStatus),

    /// The operation is not supported for this chip type.
    #[error("unsupported operation for chip type {0:?}")]
    UnsupportedChip(ChipType),

    /// The transport does not implement the operation.
    #[error("operation not supported by transport: {0}")]
    Unsupported(&'static str),

    /// A malformed configuration image.
    #[error("EEPROM error: {0}")]
    Eeprom(String),

    /// The program record carries a layout version for another family.
    #[error("EEPROM layout version mismatch: expected {expected}, found {found}")]
    LayoutVersion {
        /// Version the family uses.
        expected: u32,
        /// Version found in the image.
        found: u32,
    },

    /// An enumerated field holds a value with no defined meaning.
    #[error("invalid value {value:#x} for EEPROM field {field}")]
    InvalidField {
        /// Field name.
        field: &'static str,
        /// Raw value found in the image.
        value: u32,
    },

    /// A caller buffer has the wrong size.
    #[error("buffer size mismatch: required {required} bytes, got {actual}")]
    BufferSize {
        /// Size the operation needs.
        required: usize,
        /// Size the caller supplied.
        actual: usize,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

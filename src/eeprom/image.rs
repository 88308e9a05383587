//! Binary configuration images exchanged with the transport.

use crate::constants::*;
use crate::error::{Error, Result};
use crate::types::{ChipType, EepromLayout};

use super::layout::{program, xseries};

/// A program record (layout versions 2 to 5).
#[derive(Clone, PartialEq, Eq)]
pub struct ProgramData {
    buf: [u8; program::LEN],
}

impl ProgramData {
    /// An empty record carrying the signatures and `version`.
    pub fn new(version: u32) -> Self {
        let mut data = Self {
            buf: [0; program::LEN],
        };
        put_u32(&mut data.buf, program::SIGNATURE_1, PROGRAM_SIGNATURE_1);
        put_u32(&mut data.buf, program::SIGNATURE_2, PROGRAM_SIGNATURE_2);
        put_u32(&mut data.buf, program::VERSION, version);
        data
    }

    /// Wrap raw bytes received from a transport.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let buf = bytes.try_into().map_err(|_| Error::BufferSize {
            required: program::LEN,
            actual: bytes.len(),
        })?;
        Ok(Self { buf })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Layout version word.
    pub fn version(&self) -> u32 {
        get_u32(&self.buf, program::VERSION)
    }

    /// Whether both signature words are present.
    pub fn has_signatures(&self) -> bool {
        get_u32(&self.buf, program::SIGNATURE_1) == PROGRAM_SIGNATURE_1
            && get_u32(&self.buf, program::SIGNATURE_2) == PROGRAM_SIGNATURE_2
    }

    /// The family this record was written for.
    ///
    /// Versions 3 to 5 name a single family. Version 2 is shared by BM,
    /// FT2232C and FT232R and is told apart by the revision markers: REV5
    /// marks an FT2232C, REV4 a BM, neither an FT232R. `None` when the
    /// signatures are missing or the version is unknown.
    pub fn family(&self) -> Option<ChipType> {
        if !self.has_signatures() {
            return None;
        }
        match self.version() {
            PROGRAM_VERSION_LEGACY if self.buf[program::ft2232c::REV5] != 0 => {
                Some(ChipType::Ft2232C)
            }
            PROGRAM_VERSION_LEGACY if self.buf[program::bm::REV4] != 0 => Some(ChipType::Bm),
            PROGRAM_VERSION_LEGACY => Some(ChipType::Ft232R),
            PROGRAM_VERSION_2232H => Some(ChipType::Ft2232H),
            PROGRAM_VERSION_4232H => Some(ChipType::Ft4232H),
            PROGRAM_VERSION_232H => Some(ChipType::Ft232H),
            _ => None,
        }
    }

    pub(crate) fn buf(&self) -> &[u8; program::LEN] {
        &self.buf
    }

    pub(crate) fn buf_mut(&mut self) -> &mut [u8; program::LEN] {
        &mut self.buf
    }
}

impl Default for ProgramData {
    fn default() -> Self {
        Self {
            buf: [0; program::LEN],
        }
    }
}

impl std::fmt::Debug for ProgramData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgramData")
            .field("version", &self.version())
            .field("len", &self.buf.len())
            .finish()
    }
}

/// UTF-8 string buffers that travel beside an X-series record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringBuffers {
    pub manufacturer: [u8; MANUFACTURER_MAX],
    pub manufacturer_id: [u8; MANUFACTURER_ID_MAX],
    pub description: [u8; DESCRIPTION_MAX],
    pub serial_number: [u8; SERIAL_NUMBER_MAX],
}

impl Default for StringBuffers {
    fn default() -> Self {
        Self {
            manufacturer: [0; MANUFACTURER_MAX],
            manufacturer_id: [0; MANUFACTURER_ID_MAX],
            description: [0; DESCRIPTION_MAX],
            serial_number: [0; SERIAL_NUMBER_MAX],
        }
    }
}

/// An X-series record plus its string buffers.
#[derive(Clone, PartialEq, Eq)]
pub struct XSeriesData {
    buf: [u8; xseries::LEN],
    pub strings: StringBuffers,
}

impl XSeriesData {
    /// An empty record tagged with the X-series device type.
    pub fn new() -> Self {
        let mut data = Self {
            buf: [0; xseries::LEN],
            strings: StringBuffers::default(),
        };
        put_u32(
            &mut data.buf,
            xseries::DEVICE_TYPE,
            ChipType::XSeries.device_type_code(),
        );
        data
    }

    /// Assemble a record from raw bytes and string buffers.
    pub fn from_parts(bytes: &[u8], strings: StringBuffers) -> Result<Self> {
        let buf = bytes.try_into().map_err(|_| Error::BufferSize {
            required: xseries::LEN,
            actual: bytes.len(),
        })?;
        Ok(Self { buf, strings })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Device type tag in the header.
    pub fn device_type(&self) -> u32 {
        get_u32(&self.buf, xseries::DEVICE_TYPE)
    }

    pub(crate) fn buf(&self) -> &[u8; xseries::LEN] {
        &self.buf
    }

    pub(crate) fn buf_mut(&mut self) -> &mut [u8; xseries::LEN] {
        &mut self.buf
    }
}

impl Default for XSeriesData {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for XSeriesData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XSeriesData")
            .field("device_type", &self.device_type())
            .field("len", &self.buf.len())
            .finish()
    }
}

/// A configuration image in one of the two wire layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EepromImage {
    Program(ProgramData),
    XSeries(XSeriesData),
}

impl EepromImage {
    /// The header-initialized image a transport fills in on read.
    pub fn request(chip: ChipType) -> Result<Self> {
        match chip.eeprom_layout() {
            Some(EepromLayout::Program { version }) => Ok(Self::Program(ProgramData::new(version))),
            Some(EepromLayout::XSeries) => Ok(Self::XSeries(XSeriesData::new())),
            None => Err(Error::UnsupportedChip(chip)),
        }
    }

    /// Record bytes, without the X-series string buffers.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Program(p) => p.as_bytes(),
            Self::XSeries(x) => x.as_bytes(),
        }
    }

    /// Short name of the layout, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Program(_) => "program",
            Self::XSeries(_) => "x-series",
        }
    }
}

// ---- Little-endian field access ----

pub(crate) fn put_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

pub(crate) fn get_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

pub(crate) fn put_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

pub(crate) fn get_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}

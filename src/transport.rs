//! The boundary between the configuration core and the device driver.
//!
//! A [`Transport`] moves whole configuration images to and from a device.
//! Opening, timeouts and retries are its business; the core only calls it
//! and passes any failure through unchanged.
//!
//! [`MemoryTransport`] is an in-memory device used by the tests and the demo.

use maybe_async::maybe_async;

use crate::eeprom::EepromImage;
use crate::error::{Error, Result};

/// Failure status reported by the device driver (`FT_STATUS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TransportStatus {
    #[error("Invalid handle for FTDI device.")]
    InvalidHandle,
    #[error("FTDI device not found.")]
    DeviceNotFound,
    #[error("FTDI device not opened.")]
    DeviceNotOpened,
    #[error("FTDI device IO error.")]
    IoError,
    #[error("Insufficient resources.")]
    InsufficientResources,
    #[error("Invalid parameter for FTD2XX function call.")]
    InvalidParameter,
    #[error("Invalid Baud rate for FTDI device.")]
    InvalidBaudRate,
    #[error("FTDI device not opened for erase.")]
    DeviceNotOpenedForErase,
    #[error("FTDI device not opened for write.")]
    DeviceNotOpenedForWrite,
    #[error("Failed to write to FTDI device.")]
    FailedToWriteDevice,
    #[error("Failed to read FTDI device EEPROM.")]
    EepromReadFailed,
    #[error("Failed to write FTDI device EEPROM.")]
    EepromWriteFailed,
    #[error("Failed to erase FTDI device EEPROM.")]
    EepromEraseFailed,
    #[error("No EEPROM fitted to FTDI device.")]
    EepromNotPresent,
    #[error("FTDI device EEPROM not programmed.")]
    EepromNotProgrammed,
    #[error("Invalid arguments for FTD2XX function call.")]
    InvalidArgs,
    #[error("FTDI device does not support this operation.")]
    NotSupported,
    #[error("An unexpected error has occurred when trying to communicate with the FTDI device.")]
    OtherError,
}

impl TransportStatus {
    /// Map a raw driver status. `0` (OK) and unknown codes give `None`.
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            1 => Self::InvalidHandle,
            2 => Self::DeviceNotFound,
            3 => Self::DeviceNotOpened,
            4 => Self::IoError,
            5 => Self::InsufficientResources,
            6 => Self::InvalidParameter,
            7 => Self::InvalidBaudRate,
            8 => Self::DeviceNotOpenedForErase,
            9 => Self::DeviceNotOpenedForWrite,
            10 => Self::FailedToWriteDevice,
            11 => Self::EepromReadFailed,
            12 => Self::EepromWriteFailed,
            13 => Self::EepromEraseFailed,
            14 => Self::EepromNotPresent,
            15 => Self::EepromNotProgrammed,
            16 => Self::InvalidArgs,
            17 => Self::NotSupported,
            18 => Self::OtherError,
            _ => return None,
        })
    }

    /// Raw driver status code.
    pub fn code(self) -> u32 {
        match self {
            Self::InvalidHandle => 1,
            Self::DeviceNotFound => 2,
            Self::DeviceNotOpened => 3,
            Self::IoError => 4,
            Self::InsufficientResources => 5,
            Self::InvalidParameter => 6,
            Self::InvalidBaudRate => 7,
            Self::DeviceNotOpenedForErase => 8,
            Self::DeviceNotOpenedForWrite => 9,
            Self::FailedToWriteDevice => 10,
            Self::EepromReadFailed => 11,
            Self::EepromWriteFailed => 12,
            Self::EepromEraseFailed => 13,
            Self::EepromNotPresent => 14,
            Self::EepromNotProgrammed => 15,
            Self::InvalidArgs => 16,
            Self::NotSupported => 17,
            Self::OtherError => 18,
        }
    }

    /// Turn a raw driver status into a `Result`.
    ///
    /// Codes outside the known table are reported as [`OtherError`](Self::OtherError).
    pub fn check(code: u32) -> Result<()> {
        if code == 0 {
            return Ok(());
        }
        Err(Error::Transport(
            Self::from_code(code).unwrap_or(Self::OtherError),
        ))
    }
}

/// Moves configuration images to and from one device.
///
/// Implementations own the device handle and serialize access to it.
#[maybe_async(AFIT)]
pub trait Transport {
    /// Program `image` into the device.
    async fn transmit(&mut self, image: &EepromImage) -> Result<()>;

    /// Read the device's configuration.
    ///
    /// `request` is the header-initialized image for the expected layout,
    /// see [`EepromImage::request`].
    async fn receive(&mut self, request: &EepromImage) -> Result<EepromImage>;

    /// Erase the configuration memory.
    async fn erase(&mut self) -> Result<()> {
        Err(Error::Unsupported("erase"))
    }

    /// Size of the free user area in bytes.
    async fn user_area_size(&mut self) -> Result<usize> {
        Err(Error::Unsupported("user area"))
    }

    /// Read the user area into `buf`, returning the number of bytes read.
    async fn read_user_area(&mut self, _buf: &mut [u8]) -> Result<usize> {
        Err(Error::Unsupported("user area"))
    }

    /// Write `data` to the start of the user area.
    async fn write_user_area(&mut self, _data: &[u8]) -> Result<()> {
        Err(Error::Unsupported("user area"))
    }

    /// Read one 16-bit word of raw EEPROM at word address `address`.
    async fn read_eeprom_word(&mut self, _address: u32) -> Result<u16> {
        Err(Error::Unsupported("EEPROM word access"))
    }

    /// Write one 16-bit word of raw EEPROM at word address `address`.
    async fn write_eeprom_word(&mut self, _address: u32, _value: u16) -> Result<()> {
        Err(Error::Unsupported("EEPROM word access"))
    }

    /// Select a bit mode with the given pin direction mask.
    async fn set_bit_mode(&mut self, _bitmask: u8, _mode: u8) -> Result<()> {
        Err(Error::Unsupported("bit mode"))
    }
}

const ERASED_WORD: u16 = 0xFFFF;

/// An in-memory device.
///
/// Stores the last programmed image, a user area, a raw word array and the
/// last bit mode. A failure status can be injected to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    image: Option<EepromImage>,
    user_area: Vec<u8>,
    words: Vec<u16>,
    bit_mode: Option<(u8, u8)>,
    failure: Option<TransportStatus>,
    transmits: usize,
    receives: usize,
}

impl MemoryTransport {
    /// A blank device with no user area.
    pub fn new() -> Self {
        Self::default()
    }

    /// A device already programmed with `image`.
    pub fn with_image(image: EepromImage) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }

    /// Give the device a zeroed user area of `size` bytes.
    pub fn user_area_bytes(mut self, size: usize) -> Self {
        self.user_area = vec![0; size];
        self
    }

    /// Give the device `count` raw EEPROM words, in the erased state.
    pub fn eeprom_words(mut self, count: usize) -> Self {
        self.words = vec![ERASED_WORD; count];
        self
    }

    /// Fail every following call with `status`.
    pub fn fail_with(&mut self, status: TransportStatus) {
        self.failure = Some(status);
    }

    pub fn clear_failure(&mut self) {
        self.failure = None;
    }

    /// The stored image, if programmed.
    pub fn image(&self) -> Option<&EepromImage> {
        self.image.as_ref()
    }

    pub fn user_area(&self) -> &[u8] {
        &self.user_area
    }

    pub fn words(&self) -> &[u16] {
        &self.words
    }

    /// Last `(bitmask, mode)` selected.
    pub fn bit_mode(&self) -> Option<(u8, u8)> {
        self.bit_mode
    }

    /// Number of successful transmits.
    pub fn transmit_count(&self) -> usize {
        self.transmits
    }

    /// Number of successful receives.
    pub fn receive_count(&self) -> usize {
        self.receives
    }

    fn word_index(&self, address: u32) -> Result<usize> {
        usize::try_from(address)
            .ok()
            .filter(|&i| i < self.words.len())
            .ok_or(Error::Transport(TransportStatus::InvalidArgs))
    }

    fn check(&self) -> Result<()> {
        match self.failure {
            Some(status) => Err(Error::Transport(status)),
            None => Ok(()),
        }
    }
}

#[maybe_async(AFIT)]
impl Transport for MemoryTransport {
    async fn transmit(&mut self, image: &EepromImage) -> Result<()> {
        self.check()?;
        self.image = Some(image.clone());
        self.transmits += 1;
        Ok(())
    }

    async fn receive(&mut self, _request: &EepromImage) -> Result<EepromImage> {
        self.check()?;
        let image = self
            .image
            .clone()
            .ok_or(Error::Transport(TransportStatus::EepromNotProgrammed))?;
        self.receives += 1;
        Ok(image)
    }

    async fn erase(&mut self) -> Result<()> {
        self.check()?;
        self.image = None;
        self.user_area.fill(0);
        self.words.fill(ERASED_WORD);
        Ok(())
    }

    async fn user_area_size(&mut self) -> Result<usize> {
        self.check()?;
        Ok(self.user_area.len())
    }

    async fn read_user_area(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.check()?;
        let n = buf.len().min(self.user_area.len());
        buf[..n].copy_from_slice(&self.user_area[..n]);
        Ok(n)
    }

    async fn write_user_area(&mut self, data: &[u8]) -> Result<()> {
        self.check()?;
        if data.len() > self.user_area.len() {
            return Err(Error::Transport(TransportStatus::InvalidArgs));
        }
        self.user_area[..data.len()].copy_from_slice(data);
        Ok(())
    }

    async fn read_eeprom_word(&mut self, address: u32) -> Result<u16> {
        self.check()?;
        let i = self.word_index(address)?;
        Ok(self.words[i])
    }

    async fn write_eeprom_word(&mut self, address: u32, value: u16) -> Result<()> {
        self.check()?;
        let i = self.word_index(address)?;
        self.words[i] = value;
        Ok(())
    }

    async fn set_bit_mode(&mut self, bitmask: u8, mode: u8) -> Result<()> {
        self.check()?;
        self.bit_mode = Some((bitmask, mode));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_round_trip() {
        for code in 1..=18 {
            let status = TransportStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(TransportStatus::from_code(0), None);
        assert_eq!(TransportStatus::from_code(19), None);
    }

    #[test]
    fn check_maps_codes() {
        assert_eq!(TransportStatus::check(0), Ok(()));
        assert_eq!(
            TransportStatus::check(14),
            Err(Error::Transport(TransportStatus::EepromNotPresent))
        );
        assert_eq!(
            TransportStatus::check(1000),
            Err(Error::Transport(TransportStatus::OtherError))
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            TransportStatus::DeviceNotFound.to_string(),
            "FTDI device not found."
        );
        assert_eq!(
            Error::from(TransportStatus::EepromNotPresent).to_string(),
            "transport error: No EEPROM fitted to FTDI device."
        );
    }
}

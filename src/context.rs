//! The device handle: [`FtdiDevice`] pairs a [`Transport`] with the
//! capability checks and the configuration codec.

use maybe_async::maybe_async;

use crate::bitmode::{check_bitmode, mode_support, ModeSupport};
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{BitMode, ChipType, Interface};

/// A configurable FTDI device reached through a transport.
///
/// The chip family is passed to every operation. It normally comes from the
/// transport's own detection (see [`ChipType::from_bcd_device`] and
/// [`ChipType::from_device_type`]); the device never caches it, nor any
/// configuration it reads.
///
/// Configuration I/O lives in [`crate::eeprom`]: see
/// [`read_configuration`](Self::read_configuration) and
/// [`write_configuration`](Self::write_configuration).
#[derive(Debug)]
pub struct FtdiDevice<T> {
    transport: T,
}

impl<T: Transport> FtdiDevice<T> {
    /// Wrap a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Check whether `mode` may be selected on `interface` of a `chip`.
    ///
    /// Pure lookup; the device is not contacted.
    pub fn validate_mode(&self, chip: ChipType, mode: u8, interface: Interface) -> ModeSupport {
        let verdict = mode_support(chip, mode, interface);
        if !verdict.is_accepted() {
            log::debug!(
                "bit mode {:#04x} on {:?} interface {}: {:?}",
                mode,
                chip,
                interface.letter(),
                verdict
            );
        }
        verdict
    }

    /// Enable a bitbang or MPSSE mode.
    ///
    /// `mode` is a [`BitMode`] or the raw mode byte, so any value
    /// [`validate_mode`](Self::validate_mode) accepts can be forwarded. The
    /// request is checked against the family's capabilities first; a
    /// rejected request never reaches the transport. `bitmask` sets pin
    /// directions (1 = output).
    #[maybe_async]
    pub async fn set_bitmode(
        &mut self,
        chip: ChipType,
        interface: Interface,
        bitmask: u8,
        mode: impl Into<u8>,
    ) -> Result<()> {
        let value = mode.into();
        check_bitmode(chip, value, interface)?;
        log::debug!(
            "set bit mode {:#04x} mask {:#04x} on {:?} interface {}",
            value,
            bitmask,
            chip,
            interface.letter()
        );
        self.transport.set_bit_mode(bitmask, value).await
    }

    /// Return the channel to normal serial/FIFO operation.
    #[maybe_async]
    pub async fn disable_bitbang(&mut self, chip: ChipType, interface: Interface) -> Result<()> {
        self.set_bitmode(chip, interface, 0, BitMode::Reset).await
    }
}

//! Configuration codec and bit-mode capability checks for FTDI USB bridges.
//!
//! FTDI chips keep their USB identity, descriptor strings and pin setup in a
//! configuration record. Each chip family lays that record out differently;
//! this crate models every family as a typed record, encodes it into the
//! exact binary image the driver expects, and decodes images read back from
//! a device. It also knows which bitbang / MPSSE modes each family and
//! channel supports.
//!
//! The USB side is abstracted behind [`Transport`]. With the default
//! `is_sync` feature the transport and the device operations are blocking;
//! without it they are `async`.
//!
//! # Quick Start
//!
//! ```
//! use ftdi_config::{ChipType, EepromConfig, FtdiDevice, MemoryTransport};
//!
//! let mut dev = FtdiDevice::new(MemoryTransport::new());
//!
//! let mut config = EepromConfig::factory_default(ChipType::Ft232R)?;
//! config.common_mut().serial_number = "FT5X0001".into();
//! dev.write_configuration(ChipType::Ft232R, &config)?;
//!
//! let read_back = dev.read_configuration(ChipType::Ft232R)?;
//! assert_eq!(read_back, config);
//! # Ok::<(), ftdi_config::Error>(())
//! ```
//!
//! # Features
//!
//! - **Records**: one typed record per family (FT232B, FT2232C, FT232R,
//!   FT2232H, FT4232H, FT232H, X-series) with factory defaults.
//! - **Codec**: bit-exact program records (layout versions 2 to 5) and
//!   X-series records with UTF-8 string buffers ([`eeprom::build`],
//!   [`eeprom::decode`]).
//! - **Capabilities**: per-family, per-channel bit-mode checks
//!   ([`bitmode::mode_support`]).
//! - **Safety**: records are never encoded for the wrong family, and zero
//!   VID/PID values are never written.

pub mod bitmode;
pub mod constants;
pub mod context;
pub mod eeprom;
pub mod error;
pub mod transport;
pub mod types;

// ---- Convenience re-exports ----

pub use bitmode::{check_bitmode, mode_support, ModeRejection, ModeSupport};
pub use constants::FTDI_VID;
pub use context::FtdiDevice;
pub use eeprom::{EepromConfig, EepromImage};
pub use error::{Error, Result};
pub use transport::{MemoryTransport, Transport, TransportStatus};
pub use types::*;

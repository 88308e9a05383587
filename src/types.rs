//! Type definitions shared by the codec and the capability checks.
//!
//! These types model the chip families, the wire layout each family uses for
//! its configuration record, bit-mode selection, and channel identity.

use crate::constants::*;

/// Supported FTDI chip families.
///
/// The family decides both the configuration record layout and which bit
/// modes the hardware accepts. It is normally reported by the transport
/// (driver device type or USB `bcdDevice`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipType {
    /// B-type chip (FT232BM, FT245BM).
    Bm,
    /// Original FTDI chip (FT8U232AM, FT8U245AM).
    Am,
    /// FT8U100AX.
    Ft100Ax,
    /// Dual-port chip (FT2232C/D/L).
    Ft2232C,
    /// FT232R / FT245R.
    Ft232R,
    /// Dual hi-speed chip (FT2232H).
    Ft2232H,
    /// Quad-port chip (FT4232H).
    Ft4232H,
    /// Single hi-speed chip (FT232H).
    Ft232H,
    /// FT230X / FT231X / FT234XD and the rest of the X-series.
    XSeries,
}

/// Wire layout of a family's configuration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EepromLayout {
    /// Signature-prefixed program record with the given layout version.
    Program {
        /// Layout version word (2 to 5).
        version: u32,
    },
    /// X-series header and body with separate UTF-8 string buffers.
    XSeries,
}

impl ChipType {
    /// All known families, in driver device-type order.
    pub const ALL: [ChipType; 9] = [
        Self::Bm,
        Self::Am,
        Self::Ft100Ax,
        Self::Ft2232C,
        Self::Ft232R,
        Self::Ft2232H,
        Self::Ft4232H,
        Self::Ft232H,
        Self::XSeries,
    ];

    /// Whether this is an H-type (hi-speed) chip.
    #[inline]
    pub fn is_h_type(self) -> bool {
        matches!(self, Self::Ft2232H | Self::Ft4232H | Self::Ft232H)
    }

    /// Whether the chip exposes more than one channel.
    #[inline]
    pub fn is_multi_channel(self) -> bool {
        matches!(self, Self::Ft2232C | Self::Ft2232H | Self::Ft4232H)
    }

    /// Driver device type code (`FT_DEVICE`).
    pub fn device_type_code(self) -> u32 {
        match self {
            Self::Bm => device_type::BM,
            Self::Am => device_type::AM,
            Self::Ft100Ax => device_type::AX100,
            Self::Ft2232C => device_type::FT2232C,
            Self::Ft232R => device_type::FT232R,
            Self::Ft2232H => device_type::FT2232H,
            Self::Ft4232H => device_type::FT4232H,
            Self::Ft232H => device_type::FT232H,
            Self::XSeries => device_type::X_SERIES,
        }
    }

    /// Look up a family from its driver device type code.
    pub fn from_device_type(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.device_type_code() == code)
    }

    /// Detect the family from the USB `bcdDevice` descriptor field.
    ///
    /// BM chips report `0x0200` instead of `0x0400` when no serial number
    /// string is programmed, so the serial string presence is needed to tell
    /// them apart from AM chips.
    pub fn from_bcd_device(bcd: u16, has_serial: bool) -> Option<Self> {
        match bcd {
            0x0400 => Some(Self::Bm),
            0x0200 if !has_serial => Some(Self::Bm),
            0x0200 => Some(Self::Am),
            0x0500 => Some(Self::Ft2232C),
            0x0600 => Some(Self::Ft232R),
            0x0700 => Some(Self::Ft2232H),
            0x0800 => Some(Self::Ft4232H),
            0x0900 => Some(Self::Ft232H),
            0x1000 => Some(Self::XSeries),
            _ => None,
        }
    }

    /// Configuration record layout, or `None` for chips that have no
    /// programmable configuration record.
    pub fn eeprom_layout(self) -> Option<EepromLayout> {
        match self {
            Self::Am | Self::Ft100Ax => None,
            Self::Bm | Self::Ft2232C | Self::Ft232R => Some(EepromLayout::Program {
                version: PROGRAM_VERSION_LEGACY,
            }),
            Self::Ft2232H => Some(EepromLayout::Program {
                version: PROGRAM_VERSION_2232H,
            }),
            Self::Ft4232H => Some(EepromLayout::Program {
                version: PROGRAM_VERSION_4232H,
            }),
            Self::Ft232H => Some(EepromLayout::Program {
                version: PROGRAM_VERSION_232H,
            }),
            Self::XSeries => Some(EepromLayout::XSeries),
        }
    }

    /// Default product string for this chip type.
    pub fn default_product_name(self) -> &'static str {
        match self {
            Self::Am | Self::Ft100Ax | Self::Bm => "USB-Serial Converter",
            Self::Ft2232C => "Dual RS232",
            Self::Ft232R => "FT232R USB UART",
            Self::Ft2232H => "Dual RS232-HS",
            Self::Ft4232H => "Quad RS232-HS",
            Self::Ft232H => "Single RS232-HS",
            Self::XSeries => "FT230X Basic UART",
        }
    }

    /// Default product ID for this chip type.
    pub fn default_product_id(self) -> u16 {
        match self {
            Self::Am | Self::Ft100Ax | Self::Bm | Self::Ft232R => pid::FT232,
            Self::Ft2232C | Self::Ft2232H => pid::FT2232,
            Self::Ft4232H => pid::FT4232,
            Self::Ft232H => pid::FT232H,
            Self::XSeries => pid::FT_X_SERIES,
        }
    }

    /// Default USB release number (bcdDevice) for this chip type.
    pub fn release_number(self) -> u16 {
        match self {
            Self::Am | Self::Ft100Ax => 0x0200,
            Self::Bm => 0x0400,
            Self::Ft2232C => 0x0500,
            Self::Ft232R => 0x0600,
            Self::Ft2232H => 0x0700,
            Self::Ft4232H => 0x0800,
            Self::Ft232H => 0x0900,
            Self::XSeries => 0x1000,
        }
    }
}

/// Bitbang / MPSSE mode selection.
///
/// The capability checks in [`bitmode`](crate::bitmode) work on the raw mode
/// byte; this enum names the defined values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitMode {
    /// Normal serial/FIFO mode (bitbang disabled).
    #[default]
    Reset,
    /// Asynchronous bitbang mode (B-type and later).
    BitBang,
    /// MPSSE mode (FT2232x and later).
    Mpsse,
    /// Synchronous bitbang mode (FT2232x, FT232R and later).
    SyncBB,
    /// MCU host bus emulation mode (FT2232x).
    Mcu,
    /// Fast opto-isolated serial mode (FT2232x).
    Opto,
    /// CBUS bitbang mode (FT232R, configure in EEPROM first).
    Cbus,
    /// Synchronous FIFO mode (FT2232H, FT232H).
    SyncFf,
}

impl BitMode {
    /// Every defined mode, lowest wire value first.
    pub const ALL: [BitMode; 8] = [
        Self::Reset,
        Self::BitBang,
        Self::Mpsse,
        Self::SyncBB,
        Self::Mcu,
        Self::Opto,
        Self::Cbus,
        Self::SyncFf,
    ];

    /// Wire value for the set-bit-mode request.
    pub const fn wire_value(self) -> u8 {
        match self {
            Self::Reset => 0x00,
            Self::BitBang => 0x01,
            Self::Mpsse => 0x02,
            Self::SyncBB => 0x04,
            Self::Mcu => 0x08,
            Self::Opto => 0x10,
            Self::Cbus => 0x20,
            Self::SyncFf => 0x40,
        }
    }

    /// Look up the mode with exactly this wire value.
    pub fn from_wire(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.wire_value() == value)
    }
}

impl From<BitMode> for u8 {
    fn from(mode: BitMode) -> Self {
        mode.wire_value()
    }
}

/// Channel selection for multi-interface chips.
///
/// Chips like the FT2232H (dual) and FT4232H (quad) expose multiple
/// independent interfaces, identified by a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interface {
    /// Use the first available interface (same as `A`).
    #[default]
    Any,
    /// Interface A (port 0).
    A,
    /// Interface B (port 1).
    B,
    /// Interface C (port 2, FT4232H only).
    C,
    /// Interface D (port 3, FT4232H only).
    D,
}

impl Interface {
    /// Resolve `Any` to the concrete interface it selects.
    pub fn resolve(self) -> Self {
        match self {
            Self::Any => Self::A,
            other => other,
        }
    }

    /// Channel letter of the resolved interface.
    pub fn letter(self) -> char {
        match self.resolve() {
            Self::Any | Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }

    /// Derive the channel from a device description.
    ///
    /// The driver suffixes each channel's USB description with its letter
    /// ("Dual RS232-HS A", "Dual RS232-HS B"). Returns `None` when the
    /// description does not end in a channel letter.
    pub fn from_description(description: &str) -> Option<Self> {
        match description.trim_end().chars().last()? {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }
}

//! Configuration record types.
//!
//! One struct per chip family, each embedding the [`CommonConfig`] fields.
//! [`EepromConfig`] is the tagged union the codec works on. `Default` on every
//! family struct yields the factory configuration, so writing a default
//! record back restores the chip to its shipped state.

use crate::constants::*;
use crate::error::{Error, Result};
use crate::types::ChipType;

use super::cbus::{Cbus232H, CbusR, CbusX};

/// Fields shared by every family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonConfig {
    /// USB Vendor ID. Must be non-zero to be written.
    pub vendor_id: u16,
    /// USB Product ID. Must be non-zero to be written.
    pub product_id: u16,
    /// Manufacturer string, clamped to 32 bytes.
    pub manufacturer: String,
    /// Serial number prefix, clamped to 16 bytes.
    pub manufacturer_id: String,
    /// Product description, clamped to 64 bytes.
    pub description: String,
    /// Serial number, clamped to 16 bytes.
    pub serial_number: String,
    /// Maximum bus power in mA.
    pub max_power: u16,
    /// Device is self-powered (vs bus-powered).
    pub self_powered: bool,
    /// Device supports USB remote wakeup.
    pub remote_wakeup: bool,
}

impl CommonConfig {
    /// Factory values for `chip`.
    pub fn for_chip(chip: ChipType) -> Self {
        Self {
            vendor_id: FTDI_VID,
            product_id: chip.default_product_id(),
            manufacturer: "FTDI".into(),
            manufacturer_id: "FT".into(),
            description: chip.default_product_name().into(),
            serial_number: String::new(),
            max_power: DEFAULT_MAX_POWER,
            self_powered: false,
            remote_wakeup: false,
        }
    }
}

/// Output drive strength of a pin group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DriveCurrent {
    /// 4 mA (factory default).
    #[default]
    Ma4,
    /// 8 mA.
    Ma8,
    /// 12 mA.
    Ma12,
    /// 16 mA.
    Ma16,
}

impl DriveCurrent {
    /// Drive strength in mA, as stored on the wire.
    pub fn milliamps(self) -> u8 {
        match self {
            Self::Ma4 => 4,
            Self::Ma8 => 8,
            Self::Ma12 => 12,
            Self::Ma16 => 16,
        }
    }

    /// Parse a wire value; `None` for anything but 4, 8, 12 or 16.
    pub fn from_milliamps(ma: u8) -> Option<Self> {
        match ma {
            4 => Some(Self::Ma4),
            8 => Some(Self::Ma8),
            12 => Some(Self::Ma12),
            16 => Some(Self::Ma16),
            _ => None,
        }
    }
}

/// Electrical options of one pin group (H-type and X-series chips).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PinGroup {
    /// Slow output slew rate.
    pub slow_slew: bool,
    /// Schmitt trigger on inputs.
    pub schmitt_input: bool,
    /// Output drive strength.
    pub drive_current: DriveCurrent,
}

bitflags::bitflags! {
    /// UART signals whose polarity is inverted.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InvertSignals: u8 {
        const TXD = 1 << 0;
        const RXD = 1 << 1;
        const RTS = 1 << 2;
        const CTS = 1 << 3;
        const DTR = 1 << 4;
        const DSR = 1 << 5;
        const DCD = 1 << 6;
        const RI = 1 << 7;
    }
}

/// Hardware interface and driver selection of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelMode {
    /// 245-style FIFO interface.
    pub fifo: bool,
    /// CPU-style FIFO target interface.
    pub fifo_target: bool,
    /// Fast opto-isolated serial interface.
    pub fast_serial: bool,
    /// Load the virtual COM port driver instead of D2XX.
    pub vcp: bool,
}

impl Default for ChannelMode {
    fn default() -> Self {
        Self {
            fifo: false,
            fifo_target: false,
            fast_serial: false,
            vcp: true,
        }
    }
}

/// FT1248 bus options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ft1248Options {
    /// Clock idles high.
    pub clock_polarity_high: bool,
    /// Data is shifted LSB first.
    pub lsb_first: bool,
    /// Flow control enabled on the FT1248 bus.
    pub flow_control: bool,
}

/// FT232B / FT245B configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ft232bEeprom {
    /// USB identity and descriptor strings.
    pub common: CommonConfig,
    /// Pull down I/O pins in suspend.
    pub pull_down_enable: bool,
    /// Report the serial number descriptor.
    pub serial_number_enable: bool,
    /// Use `usb_version` as bcdUSB.
    pub usb_version_enable: bool,
    /// bcdUSB value, e.g. 0x0200 for USB 2.0.
    pub usb_version: u16,
}

impl Default for Ft232bEeprom {
    fn default() -> Self {
        Self {
            common: CommonConfig::for_chip(ChipType::Bm),
            pull_down_enable: false,
            serial_number_enable: true,
            usb_version_enable: true,
            usb_version: DEFAULT_USB_VERSION,
        }
    }
}

/// FT2232C/D/L configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ft2232Eeprom {
    /// USB identity and descriptor strings.
    pub common: CommonConfig,
    /// Pull down I/O pins in suspend.
    pub pull_down_enable: bool,
    /// Report the serial number descriptor.
    pub serial_number_enable: bool,
    /// Use `usb_version` as bcdUSB.
    pub usb_version_enable: bool,
    /// bcdUSB value.
    pub usb_version: u16,
    /// Channel A I/O pins drive high current.
    pub a_high_current: bool,
    /// Channel B I/O pins drive high current.
    pub b_high_current: bool,
    /// Channel A interface and driver.
    pub a: ChannelMode,
    /// Channel B interface and driver.
    pub b: ChannelMode,
}

impl Default for Ft2232Eeprom {
    fn default() -> Self {
        Self {
            common: CommonConfig::for_chip(ChipType::Ft2232C),
            pull_down_enable: false,
            serial_number_enable: true,
            usb_version_enable: true,
            usb_version: DEFAULT_USB_VERSION,
            a_high_current: false,
            b_high_current: false,
            a: ChannelMode::default(),
            b: ChannelMode::default(),
        }
    }
}

/// FT232R / FT245R configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ft232rEeprom {
    /// USB identity and descriptor strings.
    pub common: CommonConfig,
    /// Pull down I/O pins in suspend.
    pub pull_down_enable: bool,
    /// Report the serial number descriptor.
    pub serial_number_enable: bool,
    /// Clock from an external crystal instead of the internal oscillator.
    pub external_oscillator: bool,
    /// I/O pins drive high current.
    pub high_drive_io: bool,
    /// USB endpoint size. Always written as 64.
    pub endpoint_size: u8,
    /// Inverted UART signals.
    pub invert: InvertSignals,
    /// CBUS0 to CBUS4.
    pub cbus: [CbusR; 5],
    /// Load the virtual COM port driver instead of D2XX.
    pub load_vcp: bool,
}

impl Default for Ft232rEeprom {
    fn default() -> Self {
        Self {
            common: CommonConfig::for_chip(ChipType::Ft232R),
            pull_down_enable: false,
            serial_number_enable: true,
            external_oscillator: false,
            high_drive_io: false,
            endpoint_size: FT232R_ENDPOINT_SIZE,
            invert: InvertSignals::empty(),
            cbus: [CbusR::default(); 5],
            load_vcp: true,
        }
    }
}

/// FT2232H configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ft2232hEeprom {
    /// USB identity and descriptor strings.
    pub common: CommonConfig,
    /// Pull down I/O pins in suspend.
    pub pull_down_enable: bool,
    /// Report the serial number descriptor.
    pub serial_number_enable: bool,
    /// ADBUS pins.
    pub al: PinGroup,
    /// ACBUS pins.
    pub ah: PinGroup,
    /// BDBUS pins.
    pub bl: PinGroup,
    /// BCBUS pins.
    pub bh: PinGroup,
    /// Channel A interface and driver.
    pub a: ChannelMode,
    /// Channel B interface and driver.
    pub b: ChannelMode,
    /// Suspend when BCBUS7 is low.
    pub power_save: bool,
}

impl Default for Ft2232hEeprom {
    fn default() -> Self {
        Self {
            common: CommonConfig::for_chip(ChipType::Ft2232H),
            pull_down_enable: false,
            serial_number_enable: true,
            al: PinGroup::default(),
            ah: PinGroup::default(),
            bl: PinGroup::default(),
            bh: PinGroup::default(),
            a: ChannelMode::default(),
            b: ChannelMode::default(),
            power_save: false,
        }
    }
}

/// One FT4232H channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadChannel {
    /// Electrical options of the channel's pins.
    pub pins: PinGroup,
    /// RI pin acts as RS485 transmit enable.
    pub ri_is_txden: bool,
    /// Load the virtual COM port driver instead of D2XX.
    pub vcp: bool,
}

impl Default for QuadChannel {
    fn default() -> Self {
        Self {
            pins: PinGroup::default(),
            ri_is_txden: false,
            vcp: true,
        }
    }
}

/// FT4232H configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ft4232hEeprom {
    /// USB identity and descriptor strings.
    pub common: CommonConfig,
    /// Pull down I/O pins in suspend.
    pub pull_down_enable: bool,
    /// Report the serial number descriptor.
    pub serial_number_enable: bool,
    pub a: QuadChannel,
    pub b: QuadChannel,
    pub c: QuadChannel,
    pub d: QuadChannel,
}

impl Default for Ft4232hEeprom {
    fn default() -> Self {
        Self {
            common: CommonConfig::for_chip(ChipType::Ft4232H),
            pull_down_enable: false,
            serial_number_enable: true,
            a: QuadChannel::default(),
            b: QuadChannel::default(),
            c: QuadChannel::default(),
            d: QuadChannel::default(),
        }
    }
}

impl Ft4232hEeprom {
    /// Channels in A to D order.
    pub fn channels(&self) -> [&QuadChannel; 4] {
        [&self.a, &self.b, &self.c, &self.d]
    }
}

/// FT232H configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ft232hEeprom {
    /// USB identity and descriptor strings.
    pub common: CommonConfig,
    /// Pull down I/O pins in suspend.
    pub pull_down_enable: bool,
    /// Report the serial number descriptor.
    pub serial_number_enable: bool,
    /// ACBUS pins.
    pub ac: PinGroup,
    /// ADBUS pins.
    pub ad: PinGroup,
    /// ACBUS0 to ACBUS9.
    pub cbus: [Cbus232H; 10],
    /// 245-style FIFO interface.
    pub fifo: bool,
    /// CPU-style FIFO target interface.
    pub fifo_target: bool,
    /// Fast opto-isolated serial interface.
    pub fast_serial: bool,
    /// FT1248 interface.
    pub ft1248: bool,
    /// FT1248 bus options, used when `ft1248` is set.
    pub ft1248_options: Ft1248Options,
    /// Load the virtual COM port driver instead of D2XX.
    pub vcp: bool,
    /// Suspend when ACBUS7 is low.
    pub power_save: bool,
}

impl Default for Ft232hEeprom {
    fn default() -> Self {
        Self {
            common: CommonConfig::for_chip(ChipType::Ft232H),
            pull_down_enable: false,
            serial_number_enable: true,
            ac: PinGroup::default(),
            ad: PinGroup::default(),
            cbus: [Cbus232H::default(); 10],
            fifo: false,
            fifo_target: false,
            fast_serial: false,
            ft1248: false,
            ft1248_options: Ft1248Options::default(),
            vcp: true,
            power_save: false,
        }
    }
}

/// X-series battery charger detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BatteryChargeDetect {
    /// Detect battery chargers on the USB port.
    pub enable: bool,
    /// Assert PWREN when a charger is detected.
    pub force_cbus_pwren: bool,
    /// Keep the chip awake while charging.
    pub disable_sleep: bool,
}

/// X-series I2C slave options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct I2cOptions {
    /// Address the chip answers on as an I2C slave.
    pub slave_address: u16,
    /// Value returned by the I2C device ID read.
    pub device_id: u32,
    /// Disable Schmitt triggers on SCL and SDA.
    pub disable_schmitt: bool,
}

/// X-series configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XSeriesEeprom {
    /// USB identity and descriptor strings, stored as UTF-8.
    pub common: CommonConfig,
    /// Pull down I/O pins in suspend.
    pub pull_down_enable: bool,
    /// Report the serial number descriptor.
    pub serial_number_enable: bool,
    /// CBUS pins.
    pub ac: PinGroup,
    /// DBUS pins.
    pub ad: PinGroup,
    /// CBUS0 to CBUS6.
    pub cbus: [CbusX; 7],
    /// Inverted UART signals.
    pub invert: InvertSignals,
    pub battery_charge: BatteryChargeDetect,
    pub i2c: I2cOptions,
    pub ft1248: Ft1248Options,
    /// Suppress RS485 echo.
    pub rs485_echo_suppress: bool,
    /// Suspend when the power-save pin is low.
    pub power_save: bool,
    /// Load the virtual COM port driver instead of D2XX.
    pub vcp: bool,
}

impl Default for XSeriesEeprom {
    fn default() -> Self {
        Self {
            common: CommonConfig::for_chip(ChipType::XSeries),
            pull_down_enable: false,
            serial_number_enable: true,
            ac: PinGroup::default(),
            ad: PinGroup::default(),
            cbus: [CbusX::default(); 7],
            invert: InvertSignals::empty(),
            battery_charge: BatteryChargeDetect::default(),
            i2c: I2cOptions::default(),
            ft1248: Ft1248Options::default(),
            rs485_echo_suppress: false,
            power_save: false,
            vcp: true,
        }
    }
}

/// A configuration record for one chip family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EepromConfig {
    Ft232B(Ft232bEeprom),
    Ft2232(Ft2232Eeprom),
    Ft232R(Ft232rEeprom),
    Ft2232H(Ft2232hEeprom),
    Ft4232H(Ft4232hEeprom),
    Ft232H(Ft232hEeprom),
    XSeries(XSeriesEeprom),
}

impl EepromConfig {
    /// Factory configuration of `chip`.
    ///
    /// AM and 100AX chips have no configuration record.
    pub fn factory_default(chip: ChipType) -> Result<Self> {
        Ok(match chip {
            ChipType::Am | ChipType::Ft100Ax => return Err(Error::UnsupportedChip(chip)),
            ChipType::Bm => Self::Ft232B(Ft232bEeprom::default()),
            ChipType::Ft2232C => Self::Ft2232(Ft2232Eeprom::default()),
            ChipType::Ft232R => Self::Ft232R(Ft232rEeprom::default()),
            ChipType::Ft2232H => Self::Ft2232H(Ft2232hEeprom::default()),
            ChipType::Ft4232H => Self::Ft4232H(Ft4232hEeprom::default()),
            ChipType::Ft232H => Self::Ft232H(Ft232hEeprom::default()),
            ChipType::XSeries => Self::XSeries(XSeriesEeprom::default()),
        })
    }

    /// The family this record belongs to.
    pub fn chip_type(&self) -> ChipType {
        match self {
            Self::Ft232B(_) => ChipType::Bm,
            Self::Ft2232(_) => ChipType::Ft2232C,
            Self::Ft232R(_) => ChipType::Ft232R,
            Self::Ft2232H(_) => ChipType::Ft2232H,
            Self::Ft4232H(_) => ChipType::Ft4232H,
            Self::Ft232H(_) => ChipType::Ft232H,
            Self::XSeries(_) => ChipType::XSeries,
        }
    }

    pub fn common(&self) -> &CommonConfig {
        match self {
            Self::Ft232B(c) => &c.common,
            Self::Ft2232(c) => &c.common,
            Self::Ft232R(c) => &c.common,
            Self::Ft2232H(c) => &c.common,
            Self::Ft4232H(c) => &c.common,
            Self::Ft232H(c) => &c.common,
            Self::XSeries(c) => &c.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut CommonConfig {
        match self {
            Self::Ft232B(c) => &mut c.common,
            Self::Ft2232(c) => &mut c.common,
            Self::Ft232R(c) => &mut c.common,
            Self::Ft2232H(c) => &mut c.common,
            Self::Ft4232H(c) => &mut c.common,
            Self::Ft232H(c) => &mut c.common,
            Self::XSeries(c) => &mut c.common,
        }
    }
}

macro_rules! impl_from_family {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for EepromConfig {
                fn from(config: $ty) -> Self {
                    Self::$variant(config)
                }
            }
        )+
    };
}

impl_from_family! {
    Ft232bEeprom => Ft232B,
    Ft2232Eeprom => Ft2232,
    Ft232rEeprom => Ft232R,
    Ft2232hEeprom => Ft2232H,
    Ft4232hEeprom => Ft4232H,
    Ft232hEeprom => Ft232H,
    XSeriesEeprom => XSeries,
}

//! EEPROM encoding: convert an [`EepromConfig`] into its binary image.

use crate::constants::*;
use crate::error::{Error, Result};
use crate::types::ChipType;

use super::image::{put_u16, put_u32, EepromImage, ProgramData, XSeriesData};
use super::layout::{program, xseries, CHANNEL_MODE_LEN, PIN_GROUP_LEN};
use super::text::{encode_text, TextEncoding};
use super::types::*;

/// Encode `config` for a chip of family `chip_type`.
///
/// Fails with [`Error::FamilyMismatch`] when the record variant belongs to a
/// different family; no image is produced in that case. The FT232R endpoint
/// size is always written as 64.
pub fn build(config: &EepromConfig, chip_type: ChipType) -> Result<EepromImage> {
    let found = config.chip_type();
    if found != chip_type {
        return Err(Error::FamilyMismatch {
            expected: chip_type,
            found,
        });
    }

    let image = match config {
        EepromConfig::Ft232B(c) => {
            let mut data = ProgramData::new(PROGRAM_VERSION_LEGACY);
            put_program_common(data.buf_mut(), &c.common);
            put_bm(data.buf_mut(), c);
            EepromImage::Program(data)
        }
        EepromConfig::Ft2232(c) => {
            let mut data = ProgramData::new(PROGRAM_VERSION_LEGACY);
            put_program_common(data.buf_mut(), &c.common);
            put_2232c(data.buf_mut(), c);
            EepromImage::Program(data)
        }
        EepromConfig::Ft232R(c) => {
            let mut data = ProgramData::new(PROGRAM_VERSION_LEGACY);
            put_program_common(data.buf_mut(), &c.common);
            put_232r(data.buf_mut(), c);
            EepromImage::Program(data)
        }
        EepromConfig::Ft2232H(c) => {
            let mut data = ProgramData::new(PROGRAM_VERSION_2232H);
            put_program_common(data.buf_mut(), &c.common);
            put_2232h(data.buf_mut(), c);
            EepromImage::Program(data)
        }
        EepromConfig::Ft4232H(c) => {
            let mut data = ProgramData::new(PROGRAM_VERSION_4232H);
            put_program_common(data.buf_mut(), &c.common);
            put_4232h(data.buf_mut(), c);
            EepromImage::Program(data)
        }
        EepromConfig::Ft232H(c) => {
            let mut data = ProgramData::new(PROGRAM_VERSION_232H);
            put_program_common(data.buf_mut(), &c.common);
            put_232h(data.buf_mut(), c);
            EepromImage::Program(data)
        }
        EepromConfig::XSeries(c) => EepromImage::XSeries(build_xseries(c)),
    };

    Ok(image)
}

fn put_program_common(buf: &mut [u8], common: &CommonConfig) {
    let ascii = TextEncoding::Ascii;
    put_u16(buf, program::VENDOR_ID, common.vendor_id);
    put_u16(buf, program::PRODUCT_ID, common.product_id);
    encode_text(
        &common.manufacturer,
        &mut buf[program::MANUFACTURER..][..MANUFACTURER_MAX],
        ascii,
    );
    encode_text(
        &common.manufacturer_id,
        &mut buf[program::MANUFACTURER_ID..][..MANUFACTURER_ID_MAX],
        ascii,
    );
    encode_text(
        &common.description,
        &mut buf[program::DESCRIPTION..][..DESCRIPTION_MAX],
        ascii,
    );
    encode_text(
        &common.serial_number,
        &mut buf[program::SERIAL_NUMBER..][..SERIAL_NUMBER_MAX],
        ascii,
    );
    put_u16(buf, program::MAX_POWER, common.max_power);
    // Plug and play is always enabled.
    put_u16(buf, program::PNP, 1);
    put_u16(buf, program::SELF_POWERED, common.self_powered as u16);
    put_u16(buf, program::REMOTE_WAKEUP, common.remote_wakeup as u16);
}

fn put_bm(buf: &mut [u8], c: &Ft232bEeprom) {
    use program::bm::*;
    buf[REV4] = 1;
    buf[PULL_DOWN] = c.pull_down_enable as u8;
    buf[SERIAL_ENABLE] = c.serial_number_enable as u8;
    buf[USB_VERSION_ENABLE] = c.usb_version_enable as u8;
    put_u16(buf, USB_VERSION, c.usb_version);
}

fn put_2232c(buf: &mut [u8], c: &Ft2232Eeprom) {
    use program::ft2232c::*;
    buf[REV5] = 1;
    buf[PULL_DOWN] = c.pull_down_enable as u8;
    buf[SERIAL_ENABLE] = c.serial_number_enable as u8;
    buf[USB_VERSION_ENABLE] = c.usb_version_enable as u8;
    put_u16(buf, USB_VERSION, c.usb_version);
    buf[A_HIGH_CURRENT] = c.a_high_current as u8;
    buf[B_HIGH_CURRENT] = c.b_high_current as u8;
    put_channel_mode(buf, A_MODE, &c.a);
    put_channel_mode(buf, B_MODE, &c.b);
}

fn put_232r(buf: &mut [u8], c: &Ft232rEeprom) {
    use program::ft232r::*;
    if c.endpoint_size != FT232R_ENDPOINT_SIZE {
        log::warn!(
            "FT232R endpoint size {} not supported, writing {}",
            c.endpoint_size,
            FT232R_ENDPOINT_SIZE
        );
    }
    buf[EXTERNAL_OSCILLATOR] = c.external_oscillator as u8;
    buf[HIGH_DRIVE_IO] = c.high_drive_io as u8;
    buf[ENDPOINT_SIZE] = FT232R_ENDPOINT_SIZE;
    buf[PULL_DOWN] = c.pull_down_enable as u8;
    buf[SERIAL_ENABLE] = c.serial_number_enable as u8;
    put_invert(buf, INVERT, c.invert);
    for (i, f) in c.cbus.iter().enumerate() {
        buf[CBUS + i] = f.wire_value();
    }
    buf[RI_IS_D2XX] = !c.load_vcp as u8;
}

fn put_2232h(buf: &mut [u8], c: &Ft2232hEeprom) {
    use program::ft2232h::*;
    buf[PULL_DOWN] = c.pull_down_enable as u8;
    buf[SERIAL_ENABLE] = c.serial_number_enable as u8;
    put_pin_group(buf, AL, &c.al);
    put_pin_group(buf, AH, &c.ah);
    put_pin_group(buf, BL, &c.bl);
    put_pin_group(buf, BH, &c.bh);
    put_channel_mode(buf, A_MODE, &c.a);
    put_channel_mode(buf, B_MODE, &c.b);
    buf[POWER_SAVE] = c.power_save as u8;
}

fn put_4232h(buf: &mut [u8], c: &Ft4232hEeprom) {
    use program::ft4232h::*;
    buf[PULL_DOWN] = c.pull_down_enable as u8;
    buf[SERIAL_ENABLE] = c.serial_number_enable as u8;
    for (i, ch) in c.channels().into_iter().enumerate() {
        put_pin_group(buf, PINS + i * PIN_GROUP_LEN, &ch.pins);
        buf[RI_IS_TXDEN + i] = ch.ri_is_txden as u8;
        buf[VCP + i] = ch.vcp as u8;
    }
}

fn put_232h(buf: &mut [u8], c: &Ft232hEeprom) {
    use program::ft232h::*;
    buf[PULL_DOWN] = c.pull_down_enable as u8;
    buf[SERIAL_ENABLE] = c.serial_number_enable as u8;
    put_pin_group(buf, AC, &c.ac);
    put_pin_group(buf, AD, &c.ad);
    for (i, f) in c.cbus.iter().enumerate() {
        buf[CBUS + i] = f.wire_value();
    }
    buf[FIFO] = c.fifo as u8;
    buf[FIFO_TARGET] = c.fifo_target as u8;
    buf[FAST_SERIAL] = c.fast_serial as u8;
    buf[FT1248] = c.ft1248 as u8;
    put_ft1248(buf, FT1248_CPOL, &c.ft1248_options);
    buf[VCP] = c.vcp as u8;
    buf[POWER_SAVE] = c.power_save as u8;
}

fn build_xseries(c: &XSeriesEeprom) -> XSeriesData {
    let mut data = XSeriesData::new();
    let buf = data.buf_mut();

    put_u16(buf, xseries::VENDOR_ID, c.common.vendor_id);
    put_u16(buf, xseries::PRODUCT_ID, c.common.product_id);
    buf[xseries::SERIAL_ENABLE] = c.serial_number_enable as u8;
    put_u16(buf, xseries::MAX_POWER, c.common.max_power);
    buf[xseries::SELF_POWERED] = c.common.self_powered as u8;
    buf[xseries::REMOTE_WAKEUP] = c.common.remote_wakeup as u8;
    buf[xseries::PULL_DOWN] = c.pull_down_enable as u8;

    put_pin_group(buf, xseries::AC, &c.ac);
    put_pin_group(buf, xseries::AD, &c.ad);
    for (i, f) in c.cbus.iter().enumerate() {
        buf[xseries::CBUS + i] = f.wire_value();
    }
    put_invert(buf, xseries::INVERT, c.invert);
    buf[xseries::BCD_ENABLE] = c.battery_charge.enable as u8;
    buf[xseries::BCD_FORCE_CBUS_PWREN] = c.battery_charge.force_cbus_pwren as u8;
    buf[xseries::BCD_DISABLE_SLEEP] = c.battery_charge.disable_sleep as u8;
    put_u16(buf, xseries::I2C_SLAVE_ADDRESS, c.i2c.slave_address);
    put_u32(buf, xseries::I2C_DEVICE_ID, c.i2c.device_id);
    buf[xseries::I2C_DISABLE_SCHMITT] = c.i2c.disable_schmitt as u8;
    put_ft1248(buf, xseries::FT1248_CPOL, &c.ft1248);
    buf[xseries::RS485_ECHO_SUPPRESS] = c.rs485_echo_suppress as u8;
    buf[xseries::POWER_SAVE] = c.power_save as u8;
    buf[xseries::DRIVER_TYPE] = c.vcp as u8;

    let utf8 = TextEncoding::Utf8;
    let strings = &mut data.strings;
    encode_text(&c.common.manufacturer, &mut strings.manufacturer, utf8);
    encode_text(&c.common.manufacturer_id, &mut strings.manufacturer_id, utf8);
    encode_text(&c.common.description, &mut strings.description, utf8);
    encode_text(&c.common.serial_number, &mut strings.serial_number, utf8);

    data
}

fn put_pin_group(buf: &mut [u8], offset: usize, pins: &PinGroup) {
    buf[offset] = pins.slow_slew as u8;
    buf[offset + 1] = pins.schmitt_input as u8;
    buf[offset + 2] = pins.drive_current.milliamps();
}

fn put_channel_mode(buf: &mut [u8], offset: usize, mode: &ChannelMode) {
    let bytes: [u8; CHANNEL_MODE_LEN] = [
        mode.fifo as u8,
        mode.fifo_target as u8,
        mode.fast_serial as u8,
        mode.vcp as u8,
    ];
    buf[offset..offset + CHANNEL_MODE_LEN].copy_from_slice(&bytes);
}

fn put_ft1248(buf: &mut [u8], offset: usize, opts: &Ft1248Options) {
    buf[offset] = opts.clock_polarity_high as u8;
    buf[offset + 1] = opts.lsb_first as u8;
    buf[offset + 2] = opts.flow_control as u8;
}

/// One byte per signal, TXD first.
fn put_invert(buf: &mut [u8], offset: usize, invert: InvertSignals) {
    for bit in 0..8 {
        buf[offset + bit] = (invert.bits() >> bit) & 1;
    }
}

//! EEPROM decoding: parse a binary image into an [`EepromConfig`].

use crate::constants::*;
use crate::error::{Error, Result};
use crate::types::{ChipType, EepromLayout};

use super::cbus::{Cbus232H, CbusR, CbusX};
use super::image::{get_u16, get_u32, EepromImage, ProgramData, XSeriesData};
use super::layout::{program, xseries, PIN_GROUP_LEN};
use super::text::{decode_text, TextEncoding};
use super::types::*;

/// Decode an image read from a chip of family `chip_type`.
///
/// The image must use the family's layout: program records are checked for
/// both signature words and the family's layout version, X-series records
/// for the device type tag. A record written for another family, including
/// one of the families sharing layout version 2, fails with
/// [`Error::FamilyMismatch`]. Enumerated fields holding undefined values fail
/// with [`Error::InvalidField`].
pub fn decode(image: &EepromImage, chip_type: ChipType) -> Result<EepromConfig> {
    let layout = chip_type
        .eeprom_layout()
        .ok_or(Error::UnsupportedChip(chip_type))?;

    match (layout, image) {
        (EepromLayout::Program { version }, EepromImage::Program(data)) => {
            decode_program(data, version, chip_type)
        }
        (EepromLayout::XSeries, EepromImage::XSeries(data)) => decode_xseries(data),
        (EepromLayout::Program { .. }, EepromImage::XSeries(_)) => Err(Error::FamilyMismatch {
            expected: chip_type,
            found: ChipType::XSeries,
        }),
        (EepromLayout::XSeries, EepromImage::Program(data)) => Err(match data.family() {
            Some(found) => Error::FamilyMismatch {
                expected: chip_type,
                found,
            },
            None => Error::Eeprom("unrecognised program record for an X-series chip".into()),
        }),
    }
}

fn decode_program(data: &ProgramData, version: u32, chip_type: ChipType) -> Result<EepromConfig> {
    if !data.has_signatures() {
        return Err(Error::Eeprom("program record signature missing".into()));
    }
    let found = data.version();
    if found != version {
        return Err(Error::LayoutVersion {
            expected: version,
            found,
        });
    }
    // BM, FT2232C and FT232R share a layout version.
    if let Some(found) = data.family() {
        if found != chip_type {
            return Err(Error::FamilyMismatch {
                expected: chip_type,
                found,
            });
        }
    }

    let buf = data.buf();
    let common = program_common(buf);
    let config = match chip_type {
        ChipType::Bm => EepromConfig::Ft232B(bm(buf, common)),
        ChipType::Ft2232C => EepromConfig::Ft2232(ft2232c(buf, common)),
        ChipType::Ft232R => EepromConfig::Ft232R(ft232r(buf, common)?),
        ChipType::Ft2232H => EepromConfig::Ft2232H(ft2232h(buf, common)?),
        ChipType::Ft4232H => EepromConfig::Ft4232H(ft4232h(buf, common)?),
        ChipType::Ft232H => EepromConfig::Ft232H(ft232h(buf, common)?),
        ChipType::Am | ChipType::Ft100Ax | ChipType::XSeries => {
            return Err(Error::UnsupportedChip(chip_type))
        }
    };
    Ok(config)
}

fn program_common(buf: &[u8]) -> CommonConfig {
    let ascii = TextEncoding::Ascii;
    CommonConfig {
        vendor_id: get_u16(buf, program::VENDOR_ID),
        product_id: get_u16(buf, program::PRODUCT_ID),
        manufacturer: decode_text(&buf[program::MANUFACTURER..][..MANUFACTURER_MAX], ascii),
        manufacturer_id: decode_text(
            &buf[program::MANUFACTURER_ID..][..MANUFACTURER_ID_MAX],
            ascii,
        ),
        description: decode_text(&buf[program::DESCRIPTION..][..DESCRIPTION_MAX], ascii),
        serial_number: decode_text(&buf[program::SERIAL_NUMBER..][..SERIAL_NUMBER_MAX], ascii),
        max_power: get_u16(buf, program::MAX_POWER),
        self_powered: get_u16(buf, program::SELF_POWERED) != 0,
        remote_wakeup: get_u16(buf, program::REMOTE_WAKEUP) != 0,
    }
}

fn bm(buf: &[u8], common: CommonConfig) -> Ft232bEeprom {
    use program::bm::*;
    Ft232bEeprom {
        common,
        pull_down_enable: flag(buf, PULL_DOWN),
        serial_number_enable: flag(buf, SERIAL_ENABLE),
        usb_version_enable: flag(buf, USB_VERSION_ENABLE),
        usb_version: get_u16(buf, USB_VERSION),
    }
}

fn ft2232c(buf: &[u8], common: CommonConfig) -> Ft2232Eeprom {
    use program::ft2232c::*;
    Ft2232Eeprom {
        common,
        pull_down_enable: flag(buf, PULL_DOWN),
        serial_number_enable: flag(buf, SERIAL_ENABLE),
        usb_version_enable: flag(buf, USB_VERSION_ENABLE),
        usb_version: get_u16(buf, USB_VERSION),
        a_high_current: flag(buf, A_HIGH_CURRENT),
        b_high_current: flag(buf, B_HIGH_CURRENT),
        a: channel_mode(buf, A_MODE),
        b: channel_mode(buf, B_MODE),
    }
}

fn ft232r(buf: &[u8], common: CommonConfig) -> Result<Ft232rEeprom> {
    use program::ft232r::*;
    let mut cbus = [CbusR::default(); 5];
    for (i, slot) in cbus.iter_mut().enumerate() {
        let raw = buf[CBUS + i];
        *slot = CbusR::from_wire(raw).ok_or_else(|| invalid("FT232R CBUS function", raw))?;
    }
    Ok(Ft232rEeprom {
        common,
        pull_down_enable: flag(buf, PULL_DOWN),
        serial_number_enable: flag(buf, SERIAL_ENABLE),
        external_oscillator: flag(buf, EXTERNAL_OSCILLATOR),
        high_drive_io: flag(buf, HIGH_DRIVE_IO),
        endpoint_size: buf[ENDPOINT_SIZE],
        invert: invert(buf, INVERT),
        cbus,
        load_vcp: !flag(buf, RI_IS_D2XX),
    })
}

fn ft2232h(buf: &[u8], common: CommonConfig) -> Result<Ft2232hEeprom> {
    use program::ft2232h::*;
    Ok(Ft2232hEeprom {
        common,
        pull_down_enable: flag(buf, PULL_DOWN),
        serial_number_enable: flag(buf, SERIAL_ENABLE),
        al: pin_group(buf, AL, "AL drive current")?,
        ah: pin_group(buf, AH, "AH drive current")?,
        bl: pin_group(buf, BL, "BL drive current")?,
        bh: pin_group(buf, BH, "BH drive current")?,
        a: channel_mode(buf, A_MODE),
        b: channel_mode(buf, B_MODE),
        power_save: flag(buf, POWER_SAVE),
    })
}

fn ft4232h(buf: &[u8], common: CommonConfig) -> Result<Ft4232hEeprom> {
    use program::ft4232h::*;
    const FIELDS: [&str; 4] = [
        "A drive current",
        "B drive current",
        "C drive current",
        "D drive current",
    ];
    let mut channels = [QuadChannel::default(); 4];
    for (i, ch) in channels.iter_mut().enumerate() {
        *ch = QuadChannel {
            pins: pin_group(buf, PINS + i * PIN_GROUP_LEN, FIELDS[i])?,
            ri_is_txden: flag(buf, RI_IS_TXDEN + i),
            vcp: flag(buf, VCP + i),
        };
    }
    let [a, b, c, d] = channels;
    Ok(Ft4232hEeprom {
        common,
        pull_down_enable: flag(buf, PULL_DOWN),
        serial_number_enable: flag(buf, SERIAL_ENABLE),
        a,
        b,
        c,
        d,
    })
}

fn ft232h(buf: &[u8], common: CommonConfig) -> Result<Ft232hEeprom> {
    use program::ft232h::*;
    let mut cbus = [Cbus232H::default(); 10];
    for (i, slot) in cbus.iter_mut().enumerate() {
        let raw = buf[CBUS + i];
        *slot = Cbus232H::from_wire(raw).ok_or_else(|| invalid("FT232H CBUS function", raw))?;
    }
    Ok(Ft232hEeprom {
        common,
        pull_down_enable: flag(buf, PULL_DOWN),
        serial_number_enable: flag(buf, SERIAL_ENABLE),
        ac: pin_group(buf, AC, "AC drive current")?,
        ad: pin_group(buf, AD, "AD drive current")?,
        cbus,
        fifo: flag(buf, FIFO),
        fifo_target: flag(buf, FIFO_TARGET),
        fast_serial: flag(buf, FAST_SERIAL),
        ft1248: flag(buf, FT1248),
        ft1248_options: ft1248(buf, FT1248_CPOL),
        vcp: flag(buf, VCP),
        power_save: flag(buf, POWER_SAVE),
    })
}

fn decode_xseries(data: &XSeriesData) -> Result<EepromConfig> {
    let tag = data.device_type();
    if tag != ChipType::XSeries.device_type_code() {
        return Err(match ChipType::from_device_type(tag) {
            Some(found) => Error::FamilyMismatch {
                expected: ChipType::XSeries,
                found,
            },
            None => Error::Eeprom(format!("unknown device type {tag} in X-series header")),
        });
    }

    let buf = data.buf();
    let mut cbus = [CbusX::default(); 7];
    for (i, slot) in cbus.iter_mut().enumerate() {
        let raw = buf[xseries::CBUS + i];
        *slot = CbusX::from_wire(raw).ok_or_else(|| invalid("X-series CBUS function", raw))?;
    }

    let utf8 = TextEncoding::Utf8;
    let strings = &data.strings;
    let common = CommonConfig {
        vendor_id: get_u16(buf, xseries::VENDOR_ID),
        product_id: get_u16(buf, xseries::PRODUCT_ID),
        manufacturer: decode_text(&strings.manufacturer, utf8),
        manufacturer_id: decode_text(&strings.manufacturer_id, utf8),
        description: decode_text(&strings.description, utf8),
        serial_number: decode_text(&strings.serial_number, utf8),
        max_power: get_u16(buf, xseries::MAX_POWER),
        self_powered: flag(buf, xseries::SELF_POWERED),
        remote_wakeup: flag(buf, xseries::REMOTE_WAKEUP),
    };

    Ok(EepromConfig::XSeries(XSeriesEeprom {
        common,
        pull_down_enable: flag(buf, xseries::PULL_DOWN),
        serial_number_enable: flag(buf, xseries::SERIAL_ENABLE),
        ac: pin_group(buf, xseries::AC, "AC drive current")?,
        ad: pin_group(buf, xseries::AD, "AD drive current")?,
        cbus,
        invert: invert(buf, xseries::INVERT),
        battery_charge: BatteryChargeDetect {
            enable: flag(buf, xseries::BCD_ENABLE),
            force_cbus_pwren: flag(buf, xseries::BCD_FORCE_CBUS_PWREN),
            disable_sleep: flag(buf, xseries::BCD_DISABLE_SLEEP),
        },
        i2c: I2cOptions {
            slave_address: get_u16(buf, xseries::I2C_SLAVE_ADDRESS),
            device_id: get_u32(buf, xseries::I2C_DEVICE_ID),
            disable_schmitt: flag(buf, xseries::I2C_DISABLE_SCHMITT),
        },
        ft1248: ft1248(buf, xseries::FT1248_CPOL),
        rs485_echo_suppress: flag(buf, xseries::RS485_ECHO_SUPPRESS),
        power_save: flag(buf, xseries::POWER_SAVE),
        vcp: flag(buf, xseries::DRIVER_TYPE),
    }))
}

#[inline]
fn flag(buf: &[u8], offset: usize) -> bool {
    buf[offset] != 0
}

fn invalid(field: &'static str, raw: u8) -> Error {
    Error::InvalidField {
        field,
        value: raw as u32,
    }
}

fn pin_group(buf: &[u8], offset: usize, field: &'static str) -> Result<PinGroup> {
    let raw = buf[offset + 2];
    Ok(PinGroup {
        slow_slew: flag(buf, offset),
        schmitt_input: flag(buf, offset + 1),
        drive_current: DriveCurrent::from_milliamps(raw).ok_or_else(|| invalid(field, raw))?,
    })
}

fn channel_mode(buf: &[u8], offset: usize) -> ChannelMode {
    ChannelMode {
        fifo: flag(buf, offset),
        fifo_target: flag(buf, offset + 1),
        fast_serial: flag(buf, offset + 2),
        vcp: flag(buf, offset + 3),
    }
}

fn ft1248(buf: &[u8], offset: usize) -> Ft1248Options {
    Ft1248Options {
        clock_polarity_high: flag(buf, offset),
        lsb_first: flag(buf, offset + 1),
        flow_control: flag(buf, offset + 2),
    }
}

fn invert(buf: &[u8], offset: usize) -> InvertSignals {
    let bits = (0..8).fold(0u8, |acc, bit| acc | ((flag(buf, offset + bit) as u8) << bit));
    InvertSignals::from_bits_truncate(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eeprom::build::build;
    use crate::eeprom::image::{put_u32, StringBuffers};

    fn program_data(image: EepromImage) -> ProgramData {
        match image {
            EepromImage::Program(p) => p,
            EepromImage::XSeries(_) => panic!("expected program record"),
        }
    }

    #[test]
    fn rejects_wrong_version() {
        let image = build(&Ft2232hEeprom::default().into(), ChipType::Ft2232H).unwrap();
        assert_eq!(
            decode(&image, ChipType::Ft4232H),
            Err(Error::LayoutVersion {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn rejects_missing_signature() {
        let mut data = program_data(build(&Ft232bEeprom::default().into(), ChipType::Bm).unwrap());
        put_u32(data.buf_mut(), program::SIGNATURE_2, 0);
        assert!(matches!(
            decode(&EepromImage::Program(data), ChipType::Bm),
            Err(Error::Eeprom(_))
        ));
    }

    #[test]
    fn rejects_unknown_drive_current() {
        let mut data =
            program_data(build(&Ft232hEeprom::default().into(), ChipType::Ft232H).unwrap());
        data.buf_mut()[program::ft232h::AD + 2] = 6;
        assert_eq!(
            decode(&EepromImage::Program(data), ChipType::Ft232H),
            Err(Error::InvalidField {
                field: "AD drive current",
                value: 6
            })
        );
    }

    #[test]
    fn rejects_unknown_cbus_function() {
        let mut data =
            program_data(build(&Ft232rEeprom::default().into(), ChipType::Ft232R).unwrap());
        data.buf_mut()[program::ft232r::CBUS + 2] = 0x0D;
        assert_eq!(
            decode(&EepromImage::Program(data), ChipType::Ft232R),
            Err(Error::InvalidField {
                field: "FT232R CBUS function",
                value: 0x0D
            })
        );
    }

    #[test]
    fn xseries_tag_for_other_family() {
        let mut bytes = [0u8; xseries::LEN];
        bytes[0] = 8;
        let data = XSeriesData::from_parts(&bytes, StringBuffers::default()).unwrap();
        assert_eq!(
            decode(&EepromImage::XSeries(data), ChipType::XSeries),
            Err(Error::FamilyMismatch {
                expected: ChipType::XSeries,
                found: ChipType::Ft232H
            })
        );

        bytes[0] = 42;
        let data = XSeriesData::from_parts(&bytes, StringBuffers::default()).unwrap();
        assert!(matches!(
            decode(&EepromImage::XSeries(data), ChipType::XSeries),
            Err(Error::Eeprom(_))
        ));
    }

    #[test]
    fn layout_kind_must_match_family() {
        let x = build(&XSeriesEeprom::default().into(), ChipType::XSeries).unwrap();
        assert_eq!(
            decode(&x, ChipType::Ft232R),
            Err(Error::FamilyMismatch {
                expected: ChipType::Ft232R,
                found: ChipType::XSeries
            })
        );
        let p = build(&Ft232rEeprom::default().into(), ChipType::Ft232R).unwrap();
        assert_eq!(
            decode(&p, ChipType::XSeries),
            Err(Error::FamilyMismatch {
                expected: ChipType::XSeries,
                found: ChipType::Ft232R
            })
        );
        let h = build(&Ft4232hEeprom::default().into(), ChipType::Ft4232H).unwrap();
        assert_eq!(
            decode(&h, ChipType::XSeries),
            Err(Error::FamilyMismatch {
                expected: ChipType::XSeries,
                found: ChipType::Ft4232H
            })
        );
        let blank = EepromImage::Program(ProgramData::default());
        assert!(matches!(decode(&blank, ChipType::XSeries), Err(Error::Eeprom(_))));
        assert_eq!(decode(&p, ChipType::Am), Err(Error::UnsupportedChip(ChipType::Am)));
    }

    #[test]
    fn legacy_families_are_told_apart() {
        let images = [
            (
                ChipType::Bm,
                build(&Ft232bEeprom::default().into(), ChipType::Bm).unwrap(),
            ),
            (
                ChipType::Ft2232C,
                build(&Ft2232Eeprom::default().into(), ChipType::Ft2232C).unwrap(),
            ),
            (
                ChipType::Ft232R,
                build(&Ft232rEeprom::default().into(), ChipType::Ft232R).unwrap(),
            ),
        ];
        for (written, image) in &images {
            for (read_as, _) in &images {
                let result = decode(image, *read_as);
                if written == read_as {
                    assert_eq!(result.unwrap().chip_type(), *written);
                } else {
                    assert_eq!(
                        result,
                        Err(Error::FamilyMismatch {
                            expected: *read_as,
                            found: *written
                        }),
                        "{written:?} image read as {read_as:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn xseries_string_without_nul_taken_whole() {
        let mut x = XSeriesEeprom::default();
        x.common.serial_number = "0123456789ABCDEF".into();
        let image = build(&x.into(), ChipType::XSeries).unwrap();
        let config = decode(&image, ChipType::XSeries).unwrap();
        assert_eq!(config.common().serial_number, "0123456789ABCDEF");
    }

    #[test]
    fn ft232r_vcp_is_inverted_d2xx_flag() {
        let mut data =
            program_data(build(&Ft232rEeprom::default().into(), ChipType::Ft232R).unwrap());
        assert_eq!(data.buf()[program::ft232r::RI_IS_D2XX], 0);
        data.buf_mut()[program::ft232r::RI_IS_D2XX] = 1;
        let EepromConfig::Ft232R(r) = decode(&EepromImage::Program(data), ChipType::Ft232R).unwrap()
        else {
            panic!("expected FT232R record");
        };
        assert!(!r.load_vcp);
    }
}

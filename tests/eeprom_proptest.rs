//! Property-based tests for configuration build/decode round-trips.
//!
//! Uses `proptest` to generate random records for every family and verify
//! that build() followed by decode() preserves all fields, and that
//! oversized text is clamped rather than rejected.

use ftdi_config::constants::*;
use ftdi_config::eeprom::text::{truncate_text, TextEncoding};
use ftdi_config::eeprom::*;
use ftdi_config::{ChipType, Error};
use proptest::array::{uniform10, uniform4, uniform5, uniform7};
use proptest::prelude::*;
use proptest::sample::select;

/// Text that fits a `max` byte field and contains no NUL.
fn text(max: usize, encoding: TextEncoding) -> BoxedStrategy<String> {
    match encoding {
        TextEncoding::Ascii => proptest::string::string_regex(&format!("[ -~]{{0,{max}}}"))
            .expect("valid regex")
            .boxed(),
        TextEncoding::Utf8 => proptest::string::string_regex(&format!("\\PC{{0,{max}}}"))
            .expect("valid regex")
            .prop_map(move |s| truncate_text(&s, max, TextEncoding::Utf8))
            .boxed(),
    }
}

prop_compose! {
    fn common_config(encoding: TextEncoding)(
        vendor_id in 1u16..,
        product_id in 1u16..,
        manufacturer in text(MANUFACTURER_MAX, encoding),
        manufacturer_id in text(MANUFACTURER_ID_MAX, encoding),
        description in text(DESCRIPTION_MAX, encoding),
        serial_number in text(SERIAL_NUMBER_MAX, encoding),
        max_power in any::<u16>(),
        self_powered in any::<bool>(),
        remote_wakeup in any::<bool>(),
    ) -> CommonConfig {
        CommonConfig {
            vendor_id,
            product_id,
            manufacturer,
            manufacturer_id,
            description,
            serial_number,
            max_power,
            self_powered,
            remote_wakeup,
        }
    }
}

fn drive_current() -> impl Strategy<Value = DriveCurrent> {
    prop_oneof![
        Just(DriveCurrent::Ma4),
        Just(DriveCurrent::Ma8),
        Just(DriveCurrent::Ma12),
        Just(DriveCurrent::Ma16),
    ]
}

prop_compose! {
    fn pin_group()(
        slow_slew in any::<bool>(),
        schmitt_input in any::<bool>(),
        drive_current in drive_current(),
    ) -> PinGroup {
        PinGroup { slow_slew, schmitt_input, drive_current }
    }
}

prop_compose! {
    fn channel_mode()(flags in any::<[bool; 4]>()) -> ChannelMode {
        let [fifo, fifo_target, fast_serial, vcp] = flags;
        ChannelMode { fifo, fifo_target, fast_serial, vcp }
    }
}

prop_compose! {
    fn ft1248_options()(flags in any::<[bool; 3]>()) -> Ft1248Options {
        let [clock_polarity_high, lsb_first, flow_control] = flags;
        Ft1248Options { clock_polarity_high, lsb_first, flow_control }
    }
}

fn invert_signals() -> impl Strategy<Value = InvertSignals> {
    any::<u8>().prop_map(InvertSignals::from_bits_truncate)
}

prop_compose! {
    fn ft232b()(
        common in common_config(TextEncoding::Ascii),
        flags in any::<[bool; 3]>(),
        usb_version in any::<u16>(),
    ) -> EepromConfig {
        let [pull_down_enable, serial_number_enable, usb_version_enable] = flags;
        EepromConfig::Ft232B(Ft232bEeprom {
            common,
            pull_down_enable,
            serial_number_enable,
            usb_version_enable,
            usb_version,
        })
    }
}

prop_compose! {
    fn ft2232()(
        common in common_config(TextEncoding::Ascii),
        flags in any::<[bool; 5]>(),
        usb_version in any::<u16>(),
        a in channel_mode(),
        b in channel_mode(),
    ) -> EepromConfig {
        let [pull_down_enable, serial_number_enable, usb_version_enable, a_high_current, b_high_current] = flags;
        EepromConfig::Ft2232(Ft2232Eeprom {
            common,
            pull_down_enable,
            serial_number_enable,
            usb_version_enable,
            usb_version,
            a_high_current,
            b_high_current,
            a,
            b,
        })
    }
}

prop_compose! {
    fn ft232r()(
        common in common_config(TextEncoding::Ascii),
        flags in any::<[bool; 5]>(),
        endpoint_size in any::<u8>(),
        invert in invert_signals(),
        cbus in uniform5(select(CbusR::ALL)),
    ) -> Ft232rEeprom {
        let [pull_down_enable, serial_number_enable, external_oscillator, high_drive_io, load_vcp] = flags;
        Ft232rEeprom {
            common,
            pull_down_enable,
            serial_number_enable,
            external_oscillator,
            high_drive_io,
            endpoint_size,
            invert,
            cbus,
            load_vcp,
        }
    }
}

prop_compose! {
    fn ft2232h()(
        common in common_config(TextEncoding::Ascii),
        flags in any::<[bool; 3]>(),
        groups in uniform4(pin_group()),
        a in channel_mode(),
        b in channel_mode(),
    ) -> EepromConfig {
        let [pull_down_enable, serial_number_enable, power_save] = flags;
        let [al, ah, bl, bh] = groups;
        EepromConfig::Ft2232H(Ft2232hEeprom {
            common,
            pull_down_enable,
            serial_number_enable,
            al,
            ah,
            bl,
            bh,
            a,
            b,
            power_save,
        })
    }
}

prop_compose! {
    fn quad_channel()(pins in pin_group(), flags in any::<[bool; 2]>()) -> QuadChannel {
        let [ri_is_txden, vcp] = flags;
        QuadChannel { pins, ri_is_txden, vcp }
    }
}

prop_compose! {
    fn ft4232h()(
        common in common_config(TextEncoding::Ascii),
        flags in any::<[bool; 2]>(),
        channels in uniform4(quad_channel()),
    ) -> EepromConfig {
        let [pull_down_enable, serial_number_enable] = flags;
        let [a, b, c, d] = channels;
        EepromConfig::Ft4232H(Ft4232hEeprom {
            common,
            pull_down_enable,
            serial_number_enable,
            a,
            b,
            c,
            d,
        })
    }
}

prop_compose! {
    fn ft232h()(
        common in common_config(TextEncoding::Ascii),
        flags in any::<[bool; 8]>(),
        ac in pin_group(),
        ad in pin_group(),
        cbus in uniform10(select(Cbus232H::ALL)),
        ft1248_options in ft1248_options(),
    ) -> EepromConfig {
        let [pull_down_enable, serial_number_enable, fifo, fifo_target, fast_serial, ft1248, vcp, power_save] = flags;
        EepromConfig::Ft232H(Ft232hEeprom {
            common,
            pull_down_enable,
            serial_number_enable,
            ac,
            ad,
            cbus,
            fifo,
            fifo_target,
            fast_serial,
            ft1248,
            ft1248_options,
            vcp,
            power_save,
        })
    }
}

prop_compose! {
    fn xseries()(
        common in common_config(TextEncoding::Utf8),
        flags in any::<[bool; 9]>(),
        ac in pin_group(),
        ad in pin_group(),
        cbus in uniform7(select(CbusX::ALL)),
        invert in invert_signals(),
        i2c_address in any::<u16>(),
        i2c_device_id in any::<u32>(),
        ft1248 in ft1248_options(),
    ) -> EepromConfig {
        let [
            pull_down_enable,
            serial_number_enable,
            bcd_enable,
            bcd_force_cbus_pwren,
            bcd_disable_sleep,
            i2c_disable_schmitt,
            rs485_echo_suppress,
            power_save,
            vcp,
        ] = flags;
        EepromConfig::XSeries(XSeriesEeprom {
            common,
            pull_down_enable,
            serial_number_enable,
            ac,
            ad,
            cbus,
            invert,
            battery_charge: BatteryChargeDetect {
                enable: bcd_enable,
                force_cbus_pwren: bcd_force_cbus_pwren,
                disable_sleep: bcd_disable_sleep,
            },
            i2c: I2cOptions {
                slave_address: i2c_address,
                device_id: i2c_device_id,
                disable_schmitt: i2c_disable_schmitt,
            },
            ft1248,
            rs485_echo_suppress,
            power_save,
            vcp,
        })
    }
}

/// Every family except FT232R, whose endpoint size is not round-trippable.
fn exact_config() -> impl Strategy<Value = EepromConfig> {
    prop_oneof![ft232b(), ft2232(), ft2232h(), ft4232h(), ft232h(), xseries()]
}

fn configurable_chip() -> impl Strategy<Value = ChipType> {
    prop_oneof![
        Just(ChipType::Bm),
        Just(ChipType::Ft2232C),
        Just(ChipType::Ft232R),
        Just(ChipType::Ft2232H),
        Just(ChipType::Ft4232H),
        Just(ChipType::Ft232H),
        Just(ChipType::XSeries),
    ]
}

proptest! {
    /// Round-trip: build + decode returns the record unchanged.
    #[test]
    fn round_trip_preserves_every_field(config in exact_config()) {
        let chip = config.chip_type();
        let image = build(&config, chip).expect("build");
        let decoded = decode(&image, chip).expect("decode");
        prop_assert_eq!(decoded, config, "round-trip mismatch for {:?}", chip);
    }

    /// FT232R: every field survives except the endpoint size, which is
    /// always read back as 64.
    #[test]
    fn ft232r_endpoint_size_always_64(config in ft232r()) {
        let image = build(&EepromConfig::Ft232R(config.clone()), ChipType::Ft232R)
            .expect("build");
        let decoded = decode(&image, ChipType::Ft232R).expect("decode");

        let expected = Ft232rEeprom { endpoint_size: 64, ..config };
        prop_assert_eq!(decoded, EepromConfig::Ft232R(expected));
    }

    /// Truncation: oversized text keeps its first N bytes, no error.
    #[test]
    fn oversized_text_is_truncated(
        chip in configurable_chip(),
        manufacturer in "[ -~]{0,80}",
        manufacturer_id in "[ -~]{0,80}",
        description in "[ -~]{0,80}",
        serial_number in "[ -~]{0,80}",
    ) {
        let mut config = EepromConfig::factory_default(chip).expect("configurable family");
        {
            let common = config.common_mut();
            common.manufacturer = manufacturer.clone();
            common.manufacturer_id = manufacturer_id.clone();
            common.description = description.clone();
            common.serial_number = serial_number.clone();
        }

        let image = build(&config, chip).expect("oversized text must not fail");
        let decoded = decode(&image, chip).expect("decode");
        let common = decoded.common();

        let prefix = |s: &str, n: usize| s[..s.len().min(n)].to_owned();
        prop_assert_eq!(&common.manufacturer, &prefix(&manufacturer, MANUFACTURER_MAX), "{:?}", chip);
        prop_assert_eq!(&common.manufacturer_id, &prefix(&manufacturer_id, MANUFACTURER_ID_MAX), "{:?}", chip);
        prop_assert_eq!(&common.description, &prefix(&description, DESCRIPTION_MAX), "{:?}", chip);
        prop_assert_eq!(&common.serial_number, &prefix(&serial_number, SERIAL_NUMBER_MAX), "{:?}", chip);
    }

    /// X-series UTF-8 text is clamped on a character boundary.
    #[test]
    fn xseries_utf8_truncation_keeps_valid_prefix(description in "\\PC{0,80}") {
        let mut config = EepromConfig::factory_default(ChipType::XSeries).expect("x-series");
        config.common_mut().description = description.clone();

        let image = build(&config, ChipType::XSeries).expect("build");
        let decoded = decode(&image, ChipType::XSeries).expect("decode");
        let got = &decoded.common().description;

        prop_assert!(got.len() <= DESCRIPTION_MAX);
        prop_assert!(description.starts_with(got.as_str()));
        if description.len() > DESCRIPTION_MAX {
            // At most one partial character (up to three bytes) is dropped.
            prop_assert!(got.len() + 3 >= DESCRIPTION_MAX);
        } else {
            prop_assert_eq!(got, &description);
        }
    }

    /// A record is never encoded for another family.
    #[test]
    fn family_mismatch_never_encodes(record_chip in configurable_chip(), target in configurable_chip()) {
        prop_assume!(record_chip != target);
        let config = EepromConfig::factory_default(record_chip).expect("configurable family");
        prop_assert_eq!(
            build(&config, target),
            Err(Error::FamilyMismatch { expected: target, found: record_chip })
        );
    }
}

/// Factory defaults round-trip for every configurable family.
#[test]
fn factory_defaults_round_trip() {
    for chip in ChipType::ALL {
        let Ok(config) = EepromConfig::factory_default(chip) else {
            assert!(matches!(chip, ChipType::Am | ChipType::Ft100Ax));
            continue;
        };
        let image = build(&config, chip).unwrap();
        assert_eq!(decode(&image, chip).unwrap(), config, "{chip:?}");
    }
}

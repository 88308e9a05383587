//! Byte offsets of the configuration record wire layouts.
//!
//! All scalars are little-endian and aligned to `min(size, 4)`. Offsets that
//! are not listed are alignment padding and stay zero.

/// Program record (layout versions 2 to 5).
pub mod program {
    /// Total record length.
    pub const LEN: usize = 0x110;

    pub const SIGNATURE_1: usize = 0x00;
    pub const SIGNATURE_2: usize = 0x04;
    pub const VERSION: usize = 0x08;
    pub const VENDOR_ID: usize = 0x0C;
    pub const PRODUCT_ID: usize = 0x0E;
    pub const MANUFACTURER: usize = 0x10;
    pub const MANUFACTURER_ID: usize = 0x30;
    pub const DESCRIPTION: usize = 0x40;
    pub const SERIAL_NUMBER: usize = 0x80;
    pub const MAX_POWER: usize = 0x90;
    pub const PNP: usize = 0x92;
    pub const SELF_POWERED: usize = 0x94;
    pub const REMOTE_WAKEUP: usize = 0x96;

    /// FT232B / FT245B block.
    pub mod bm {
        pub const REV4: usize = 0x98;
        pub const ISO_IN: usize = 0x99;
        pub const ISO_OUT: usize = 0x9A;
        pub const PULL_DOWN: usize = 0x9B;
        pub const SERIAL_ENABLE: usize = 0x9C;
        pub const USB_VERSION_ENABLE: usize = 0x9D;
        pub const USB_VERSION: usize = 0x9E;
    }

    /// FT2232C/D/L block.
    pub mod ft2232c {
        pub const REV5: usize = 0xA0;
        pub const ISO_IN_A: usize = 0xA1;
        pub const ISO_IN_B: usize = 0xA2;
        pub const ISO_OUT_A: usize = 0xA3;
        pub const ISO_OUT_B: usize = 0xA4;
        pub const PULL_DOWN: usize = 0xA5;
        pub const SERIAL_ENABLE: usize = 0xA6;
        pub const USB_VERSION_ENABLE: usize = 0xA7;
        pub const USB_VERSION: usize = 0xA8;
        pub const A_HIGH_CURRENT: usize = 0xAA;
        pub const B_HIGH_CURRENT: usize = 0xAB;
        /// Channel A fifo, fifo-target, fast-serial, VCP bytes.
        pub const A_MODE: usize = 0xAC;
        /// Channel B fifo, fifo-target, fast-serial, VCP bytes.
        pub const B_MODE: usize = 0xB0;
    }

    /// FT232R / FT245R block.
    pub mod ft232r {
        pub const EXTERNAL_OSCILLATOR: usize = 0xB4;
        pub const HIGH_DRIVE_IO: usize = 0xB5;
        pub const ENDPOINT_SIZE: usize = 0xB6;
        pub const PULL_DOWN: usize = 0xB7;
        pub const SERIAL_ENABLE: usize = 0xB8;
        /// Eight invert bytes, TXD first.
        pub const INVERT: usize = 0xB9;
        /// Five CBUS selector bytes.
        pub const CBUS: usize = 0xC1;
        pub const RI_IS_D2XX: usize = 0xC6;
    }

    /// FT2232H block.
    pub mod ft2232h {
        pub const PULL_DOWN: usize = 0xC7;
        pub const SERIAL_ENABLE: usize = 0xC8;
        pub const AL: usize = 0xC9;
        pub const AH: usize = 0xCC;
        pub const BL: usize = 0xCF;
        pub const BH: usize = 0xD2;
        pub const A_MODE: usize = 0xD5;
        pub const B_MODE: usize = 0xD9;
        pub const POWER_SAVE: usize = 0xDD;
    }

    /// FT4232H block.
    pub mod ft4232h {
        pub const PULL_DOWN: usize = 0xDE;
        pub const SERIAL_ENABLE: usize = 0xDF;
        /// Pin groups A to D, three bytes each.
        pub const PINS: usize = 0xE0;
        /// RI-as-TXDEN bytes A to D.
        pub const RI_IS_TXDEN: usize = 0xEC;
        /// VCP bytes A to D.
        pub const VCP: usize = 0xF0;
    }

    /// FT232H block.
    pub mod ft232h {
        pub const PULL_DOWN: usize = 0xF4;
        pub const SERIAL_ENABLE: usize = 0xF5;
        pub const AC: usize = 0xF6;
        pub const AD: usize = 0xF9;
        /// Ten CBUS selector bytes.
        pub const CBUS: usize = 0xFC;
        pub const FIFO: usize = 0x106;
        pub const FIFO_TARGET: usize = 0x107;
        pub const FAST_SERIAL: usize = 0x108;
        pub const FT1248: usize = 0x109;
        pub const FT1248_CPOL: usize = 0x10A;
        pub const FT1248_LSB: usize = 0x10B;
        pub const FT1248_FLOW: usize = 0x10C;
        pub const VCP: usize = 0x10D;
        pub const POWER_SAVE: usize = 0x10E;
    }
}

/// X-series header and body.
pub mod xseries {
    /// Total record length.
    pub const LEN: usize = 0x38;

    pub const DEVICE_TYPE: usize = 0x00;
    pub const VENDOR_ID: usize = 0x04;
    pub const PRODUCT_ID: usize = 0x06;
    pub const SERIAL_ENABLE: usize = 0x08;
    pub const MAX_POWER: usize = 0x0A;
    pub const SELF_POWERED: usize = 0x0C;
    pub const REMOTE_WAKEUP: usize = 0x0D;
    pub const PULL_DOWN: usize = 0x0E;

    pub const AC: usize = 0x10;
    pub const AD: usize = 0x13;
    /// Seven CBUS selector bytes.
    pub const CBUS: usize = 0x16;
    /// Eight invert bytes, TXD first.
    pub const INVERT: usize = 0x1D;
    pub const BCD_ENABLE: usize = 0x25;
    pub const BCD_FORCE_CBUS_PWREN: usize = 0x26;
    pub const BCD_DISABLE_SLEEP: usize = 0x27;
    pub const I2C_SLAVE_ADDRESS: usize = 0x28;
    pub const I2C_DEVICE_ID: usize = 0x2C;
    pub const I2C_DISABLE_SCHMITT: usize = 0x30;
    pub const FT1248_CPOL: usize = 0x31;
    pub const FT1248_LSB: usize = 0x32;
    pub const FT1248_FLOW: usize = 0x33;
    pub const RS485_ECHO_SUPPRESS: usize = 0x34;
    pub const POWER_SAVE: usize = 0x35;
    pub const DRIVER_TYPE: usize = 0x36;
}

/// Bytes per pin group: slow slew, Schmitt input, drive current.
pub const PIN_GROUP_LEN: usize = 3;

/// Bytes per channel mode: fifo, fifo target, fast serial, VCP.
pub const CHANNEL_MODE_LEN: usize = 4;

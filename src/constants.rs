//! Protocol constants for FTDI configuration records.
//!
//! These constants define the signature words, layout versions, text field
//! limits, and device-type codes that frame a configuration record on the
//! wire. Most users should not need to use these directly.

// ---- FTDI Vendor ID and known Product IDs ----

/// Default FTDI vendor ID.
pub const FTDI_VID: u16 = 0x0403;

/// Known FTDI product IDs.
pub mod pid {
    /// FT232AM, FT232BM, FT232R.
    pub const FT232: u16 = 0x6001;
    /// FT2232C/D/H.
    pub const FT2232: u16 = 0x6010;
    /// FT4232H.
    pub const FT4232: u16 = 0x6011;
    /// FT232H.
    pub const FT232H: u16 = 0x6014;
    /// FT230X / FT231X / FT234XD.
    pub const FT_X_SERIES: u16 = 0x6015;
}

// ---- Program record framing ----

/// First signature word of a program record.
pub const PROGRAM_SIGNATURE_1: u32 = 0x0000_0000;
/// Second signature word of a program record.
pub const PROGRAM_SIGNATURE_2: u32 = 0xFFFF_FFFF;

/// Layout version shared by the BM, FT2232C and FT232R records.
pub const PROGRAM_VERSION_LEGACY: u32 = 2;
/// Layout version of the FT2232H record.
pub const PROGRAM_VERSION_2232H: u32 = 3;
/// Layout version of the FT4232H record.
pub const PROGRAM_VERSION_4232H: u32 = 4;
/// Layout version of the FT232H record.
pub const PROGRAM_VERSION_232H: u32 = 5;

// ---- Text field limits (bytes) ----

/// Maximum manufacturer string length.
pub const MANUFACTURER_MAX: usize = 32;
/// Maximum manufacturer ID (serial number prefix) length.
pub const MANUFACTURER_ID_MAX: usize = 16;
/// Maximum product description length.
pub const DESCRIPTION_MAX: usize = 64;
/// Maximum serial number length.
pub const SERIAL_NUMBER_MAX: usize = 16;

// ---- Fixed field values ----

/// The only endpoint size an FT232R may be programmed with.
pub const FT232R_ENDPOINT_SIZE: u8 = 64;

/// Factory default maximum bus power in mA.
pub const DEFAULT_MAX_POWER: u16 = 0x0090;

/// Factory default USB version (bcdUSB) for chips that carry one.
pub const DEFAULT_USB_VERSION: u16 = 0x0200;

// ---- D2XX device type codes ----

/// Device type codes used by the driver and by the X-series header tag.
pub(crate) mod device_type {
    pub const BM: u32 = 0;
    pub const AM: u32 = 1;
    pub const AX100: u32 = 2;
    pub const FT2232C: u32 = 4;
    pub const FT232R: u32 = 5;
    pub const FT2232H: u32 = 6;
    pub const FT4232H: u32 = 7;
    pub const FT232H: u32 = 8;
    pub const X_SERIES: u32 = 9;
}

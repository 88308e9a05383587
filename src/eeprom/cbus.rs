//! CBUS pin-function selectors.
//!
//! Each family with configurable CBUS pins has its own function table; the
//! same byte means different things on different chips.

macro_rules! cbus_functions {
    (
        $(#[$meta:meta])*
        pub enum $name:ident (default $default:ident) {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// Every function, in wire-value order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Byte stored in the configuration record.
            pub fn wire_value(self) -> u8 {
                self as u8
            }

            /// Look up the function stored as `value`.
            pub fn from_wire(value: u8) -> Option<Self> {
                Self::ALL.iter().copied().find(|f| f.wire_value() == value)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }
    };
}

cbus_functions! {
    /// FT232R CBUS0 to CBUS4 functions.
    pub enum CbusR (default Sleep) {
        TxDen = 0x00,
        PwrOn = 0x01,
        RxLed = 0x02,
        TxLed = 0x03,
        TxRxLed = 0x04,
        Sleep = 0x05,
        Clk48 = 0x06,
        Clk24 = 0x07,
        Clk12 = 0x08,
        Clk6 = 0x09,
        /// Bit-bang I/O (CBUS bit-bang mode).
        IoMode = 0x0A,
        BitBangWr = 0x0B,
        BitBangRd = 0x0C,
    }
}

cbus_functions! {
    /// FT232H ACBUS0 to ACBUS9 functions.
    pub enum Cbus232H (default Tristate) {
        Tristate = 0x00,
        RxLed = 0x01,
        TxLed = 0x02,
        TxRxLed = 0x03,
        PwrEn = 0x04,
        Sleep = 0x05,
        Drive0 = 0x06,
        Drive1 = 0x07,
        IoMode = 0x08,
        TxDen = 0x09,
        Clk30 = 0x0A,
        Clk15 = 0x0B,
        Clk7_5 = 0x0C,
    }
}

cbus_functions! {
    /// X-series CBUS0 to CBUS6 functions.
    pub enum CbusX (default Tristate) {
        Tristate = 0x00,
        RxLed = 0x01,
        TxLed = 0x02,
        TxRxLed = 0x03,
        PwrEn = 0x04,
        Sleep = 0x05,
        Drive0 = 0x06,
        Drive1 = 0x07,
        Gpio = 0x08,
        TxDen = 0x09,
        Clk24 = 0x0A,
        Clk12 = 0x0B,
        Clk6 = 0x0C,
        /// Battery charger detected.
        BcdCharger = 0x0D,
        BcdChargerN = 0x0E,
        I2cTxe = 0x0F,
        I2cRxf = 0x10,
        VbusSense = 0x11,
        BitBangWr = 0x12,
        BitBangRd = 0x13,
        TimeStamp = 0x14,
        KeepAwake = 0x15,
    }
}

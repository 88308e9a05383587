//! Bit-mode capability checks.
//!
//! Each chip family supports a different subset of the bit modes, and some
//! modes are wired to particular channels only. [`mode_support`] answers
//! whether a `(family, mode byte, channel)` request is legal without touching
//! any device.
//!
//! Membership is an AND-mask test against the family's supported set, so a
//! request combining several mode bits passes when any of them is supported.
//! Channel restrictions apply when the request is exactly the restricted
//! mode value. A zero request (reset) is always legal.

use crate::error::{Error, Result};
use crate::types::{BitMode, ChipType, Interface};

/// Why a bit-mode request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeRejection {
    /// The family does not implement the mode.
    UnsupportedMode,
    /// The family implements the mode, but not on the requested channel.
    WrongChannel,
}

/// Verdict of a capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeSupport {
    /// The request is legal.
    Accepted,
    /// The request is refused.
    Rejected(ModeRejection),
}

impl ModeSupport {
    /// Whether the request was accepted.
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }
}

const BM_MODES: u8 = bits(&[BitMode::BitBang]);

const FT2232C_MODES: u8 = bits(&[
    BitMode::BitBang,
    BitMode::Mpsse,
    BitMode::SyncBB,
    BitMode::Mcu,
    BitMode::Opto,
]);

const FT232R_MODES: u8 = bits(&[BitMode::BitBang, BitMode::SyncBB, BitMode::Cbus]);

const FT2232H_MODES: u8 = bits(&[
    BitMode::BitBang,
    BitMode::Mpsse,
    BitMode::SyncBB,
    BitMode::Mcu,
    BitMode::Opto,
    BitMode::SyncFf,
]);

const FT4232H_MODES: u8 = bits(&[BitMode::BitBang, BitMode::Mpsse, BitMode::SyncBB]);

/// Highest mode byte the FT232H accepts.
const FT232H_MAX_MODE: u8 = 0x40;

const fn bits(modes: &[BitMode]) -> u8 {
    let mut mask = 0;
    let mut i = 0;
    while i < modes.len() {
        mask |= modes[i].wire_value();
        i += 1;
    }
    mask
}

/// Decide whether `mode` may be selected on `interface` of a `chip`.
pub fn mode_support(chip: ChipType, mode: u8, interface: Interface) -> ModeSupport {
    use ModeRejection::*;

    if mode == BitMode::Reset.wire_value() {
        return ModeSupport::Accepted;
    }

    let iface = interface.resolve();
    let verdict = match chip {
        ChipType::Am | ChipType::Ft100Ax => Err(UnsupportedMode),
        ChipType::Bm => in_set(mode, BM_MODES),
        ChipType::Ft2232C => in_set(mode, FT2232C_MODES).and_then(|()| {
            if mode == BitMode::Mpsse.wire_value() && iface != Interface::A {
                Err(WrongChannel)
            } else {
                Ok(())
            }
        }),
        ChipType::Ft232R => in_set(mode, FT232R_MODES),
        ChipType::Ft2232H => in_set(mode, FT2232H_MODES).and_then(|()| {
            let a_only = mode == BitMode::Mcu.wire_value() || mode == BitMode::SyncFf.wire_value();
            if a_only && iface != Interface::A {
                Err(WrongChannel)
            } else {
                Ok(())
            }
        }),
        ChipType::Ft4232H => in_set(mode, FT4232H_MODES).and_then(|()| {
            let a_or_b = matches!(iface, Interface::A | Interface::B);
            if mode == BitMode::Mpsse.wire_value() && !a_or_b {
                Err(WrongChannel)
            } else {
                Ok(())
            }
        }),
        ChipType::Ft232H => {
            if mode > FT232H_MAX_MODE {
                Err(UnsupportedMode)
            } else {
                Ok(())
            }
        }
        ChipType::XSeries => Ok(()),
    };

    match verdict {
        Ok(()) => ModeSupport::Accepted,
        Err(reason) => ModeSupport::Rejected(reason),
    }
}

fn in_set(mode: u8, supported: u8) -> std::result::Result<(), ModeRejection> {
    if mode & supported == 0 {
        Err(ModeRejection::UnsupportedMode)
    } else {
        Ok(())
    }
}

/// Check a bit-mode request, turning a rejection into an [`Error`].
///
/// Returns [`Error::UnsupportedMode`] or [`Error::WrongChannel`] with the
/// offending request attached.
pub fn check_bitmode(chip: ChipType, mode: u8, interface: Interface) -> Result<()> {
    match mode_support(chip, mode, interface) {
        ModeSupport::Accepted => Ok(()),
        ModeSupport::Rejected(ModeRejection::UnsupportedMode) => {
            Err(Error::UnsupportedMode { chip, mode })
        }
        ModeSupport::Rejected(ModeRejection::WrongChannel) => Err(Error::WrongChannel {
            chip,
            mode,
            interface,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REJECT_MODE: ModeSupport = ModeSupport::Rejected(ModeRejection::UnsupportedMode);
    const REJECT_CHANNEL: ModeSupport = ModeSupport::Rejected(ModeRejection::WrongChannel);

    #[test]
    fn supported_sets_match_wire_values() {
        assert_eq!(BM_MODES, 0x01);
        assert_eq!(FT2232C_MODES, 0x1F);
        assert_eq!(FT232R_MODES, 0x25);
        assert_eq!(FT2232H_MODES, 0x5F);
        assert_eq!(FT4232H_MODES, 0x07);
    }

    #[test]
    fn am_rejects_bitbang() {
        assert_eq!(mode_support(ChipType::Am, 0x01, Interface::A), REJECT_MODE);
        assert_eq!(mode_support(ChipType::Ft100Ax, 0x40, Interface::A), REJECT_MODE);
    }

    #[test]
    fn ft2232h_sync_fifo_channel_a_only() {
        assert_eq!(mode_support(ChipType::Ft2232H, 0x40, Interface::B), REJECT_CHANNEL);
        assert_eq!(mode_support(ChipType::Ft2232H, 0x40, Interface::A), ModeSupport::Accepted);
        assert_eq!(mode_support(ChipType::Ft2232H, 0x08, Interface::B), REJECT_CHANNEL);
        assert_eq!(mode_support(ChipType::Ft2232H, 0x02, Interface::B), ModeSupport::Accepted);
    }

    #[test]
    fn ft232h_accepts_up_to_sync_fifo() {
        assert!(mode_support(ChipType::Ft232H, 0x40, Interface::Any).is_accepted());
        assert!(mode_support(ChipType::Ft232H, 0x20, Interface::Any).is_accepted());
        assert_eq!(mode_support(ChipType::Ft232H, 0x41, Interface::Any), REJECT_MODE);
        assert_eq!(mode_support(ChipType::Ft232H, 0x80, Interface::Any), REJECT_MODE);
    }

    #[test]
    fn ft2232c_mpsse_on_a() {
        assert!(mode_support(ChipType::Ft2232C, 0x02, Interface::A).is_accepted());
        assert!(mode_support(ChipType::Ft2232C, 0x02, Interface::Any).is_accepted());
        assert_eq!(mode_support(ChipType::Ft2232C, 0x02, Interface::B), REJECT_CHANNEL);
        assert_eq!(mode_support(ChipType::Ft2232C, 0x40, Interface::A), REJECT_MODE);
    }

    #[test]
    fn ft4232h_mpsse_on_a_or_b() {
        assert!(mode_support(ChipType::Ft4232H, 0x02, Interface::B).is_accepted());
        assert_eq!(mode_support(ChipType::Ft4232H, 0x02, Interface::C), REJECT_CHANNEL);
        assert_eq!(mode_support(ChipType::Ft4232H, 0x02, Interface::D), REJECT_CHANNEL);
        assert!(mode_support(ChipType::Ft4232H, 0x04, Interface::D).is_accepted());
    }

    #[test]
    fn reset_always_accepted() {
        for chip in ChipType::ALL {
            assert!(mode_support(chip, 0, Interface::D).is_accepted(), "{chip:?}");
        }
    }

    #[test]
    fn check_bitmode_reports_request() {
        assert_eq!(
            check_bitmode(ChipType::Bm, 0x02, Interface::A),
            Err(Error::UnsupportedMode {
                chip: ChipType::Bm,
                mode: 0x02
            })
        );
        assert_eq!(
            check_bitmode(ChipType::Ft2232H, 0x40, Interface::B),
            Err(Error::WrongChannel {
                chip: ChipType::Ft2232H,
                mode: 0x40,
                interface: Interface::B
            })
        );
        assert_eq!(check_bitmode(ChipType::Ft232R, 0x20, Interface::A), Ok(()));
    }
}

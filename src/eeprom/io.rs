//! Configuration I/O on an [`FtdiDevice`]: read, write and erase the
//! configuration record, and access the free user area.

use maybe_async::maybe_async;

use crate::context::FtdiDevice;
use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::types::ChipType;

use super::build::build;
use super::decode::decode;
use super::{EepromConfig, EepromImage};

impl<T: Transport> FtdiDevice<T> {
    /// Read and decode the configuration of a `chip`.
    ///
    /// Nothing is returned unless the whole image decodes.
    #[maybe_async]
    pub async fn read_configuration(&mut self, chip: ChipType) -> Result<EepromConfig> {
        let request = EepromImage::request(chip)?;
        log::debug!("reading {} configuration from {:?}", request.kind(), chip);

        let image = self.transport_mut().receive(&request).await?;
        log::trace!("received {} byte {} image", image.as_bytes().len(), image.kind());

        decode(&image, chip)
    }

    /// Encode `config` and program it into a `chip`.
    ///
    /// A zero vendor or product ID is refused before anything is encoded, and
    /// a record of another family is refused before anything is sent. The
    /// transport is called once, with the complete image.
    #[maybe_async]
    pub async fn write_configuration(&mut self, chip: ChipType, config: &EepromConfig) -> Result<()> {
        let common = config.common();
        if common.vendor_id == 0 {
            log::debug!("refusing to write zero vendor ID to {:?}", chip);
            return Err(Error::InvalidParameter("vendor ID must be non-zero"));
        }
        if common.product_id == 0 {
            log::debug!("refusing to write zero product ID to {:?}", chip);
            return Err(Error::InvalidParameter("product ID must be non-zero"));
        }

        let image = build(config, chip)?;
        log::debug!(
            "writing {} configuration to {:?} ({:04x}:{:04x})",
            image.kind(),
            chip,
            common.vendor_id,
            common.product_id
        );
        log::trace!("transmitting {} byte image", image.as_bytes().len());

        self.transport_mut().transmit(&image).await
    }

    /// Erase the configuration memory.
    ///
    /// The FT232R keeps its configuration in internal memory that cannot be
    /// erased; it, and chips without a configuration record, fail with
    /// [`Error::UnsupportedChip`].
    #[maybe_async]
    pub async fn erase_configuration(&mut self, chip: ChipType) -> Result<()> {
        if chip == ChipType::Ft232R || chip.eeprom_layout().is_none() {
            return Err(Error::UnsupportedChip(chip));
        }
        log::debug!("erasing configuration of {:?}", chip);
        self.transport_mut().erase().await
    }

    /// Read the raw EEPROM word at `address`.
    ///
    /// Bypasses the record codec. Chips without a configuration record fail
    /// with [`Error::UnsupportedChip`].
    #[maybe_async]
    pub async fn read_eeprom_word(&mut self, chip: ChipType, address: u32) -> Result<u16> {
        if chip.eeprom_layout().is_none() {
            return Err(Error::UnsupportedChip(chip));
        }
        let value = self.transport_mut().read_eeprom_word(address).await?;
        log::trace!("EEPROM word {:#06x} of {:?} = {:#06x}", address, chip, value);
        Ok(value)
    }

    /// Write the raw EEPROM word at `address`.
    #[maybe_async]
    pub async fn write_eeprom_word(
        &mut self,
        chip: ChipType,
        address: u32,
        value: u16,
    ) -> Result<()> {
        if chip.eeprom_layout().is_none() {
            return Err(Error::UnsupportedChip(chip));
        }
        log::debug!("writing EEPROM word {:#06x} of {:?} = {:#06x}", address, chip, value);
        self.transport_mut().write_eeprom_word(address, value).await
    }

    /// Size of the free user area in bytes.
    #[maybe_async]
    pub async fn user_area_size(&mut self) -> Result<usize> {
        self.transport_mut().user_area_size().await
    }

    /// Read the user area into `buf`, returning the number of bytes read.
    ///
    /// `buf` must hold the whole user area.
    #[maybe_async]
    pub async fn read_user_area(&mut self, buf: &mut [u8]) -> Result<usize> {
        let size = self.transport_mut().user_area_size().await?;
        if buf.len() < size {
            return Err(Error::BufferSize {
                required: size,
                actual: buf.len(),
            });
        }
        self.transport_mut().read_user_area(&mut buf[..size]).await
    }

    /// Write `data` to the start of the user area.
    ///
    /// `data` must fit in the user area.
    #[maybe_async]
    pub async fn write_user_area(&mut self, data: &[u8]) -> Result<()> {
        let size = self.transport_mut().user_area_size().await?;
        if data.len() > size {
            return Err(Error::BufferSize {
                required: size,
                actual: data.len(),
            });
        }
        log::debug!("writing {} of {} user area bytes", data.len(), size);
        self.transport_mut().write_user_area(data).await
    }
}

//! FTDI configuration records: model, wire images, encoding and decoding.
//!
//! This module provides:
//!
//! - [`EepromConfig`] - The per-family configuration record.
//! - [`EepromImage`] - The binary image exchanged with a transport.
//! - [`build`] - Encode a record into an image.
//! - [`decode`] - Decode an image into a record.
//! - I/O operations on [`FtdiDevice`](crate::FtdiDevice) for reading and
//!   writing a device's configuration.

pub mod build;
pub mod cbus;
pub mod decode;
mod image;
mod io;
pub mod layout;
pub mod text;
mod types;

pub use build::build;
pub use cbus::{Cbus232H, CbusR, CbusX};
pub use decode::decode;
pub use image::{EepromImage, ProgramData, StringBuffers, XSeriesData};
pub use types::*;

//! Configuration write / read example.
//!
//! Programs an FT2232H configuration into an in-memory device, reads it
//! back, prints the decoded record, and checks a few bit-mode requests.
//!
//! Usage: RUST_LOG=debug cargo run --example eeprom

use ftdi_config::eeprom::{DriveCurrent, EepromConfig};
use ftdi_config::{BitMode, ChipType, FtdiDevice, Interface, MemoryTransport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let chip = ChipType::Ft2232H;
    let mut dev = FtdiDevice::new(MemoryTransport::new().user_area_bytes(64));

    let mut config = EepromConfig::factory_default(chip)?;
    if let EepromConfig::Ft2232H(h) = &mut config {
        h.common.serial_number = "FTDEMO01".into();
        h.common.description = "Dual RS232-HS demo board with a very long description string".into();
        h.al.drive_current = DriveCurrent::Ma8;
        h.b.vcp = false;
    }

    println!("Writing {chip:?} configuration...");
    dev.write_configuration(chip, &config)?;

    println!("Reading it back...");
    let read = dev.read_configuration(chip)?;
    let common = read.common();
    println!("\nDecoded configuration:");
    println!("  Vendor ID:    0x{:04X}", common.vendor_id);
    println!("  Product ID:   0x{:04X}", common.product_id);
    println!("  Manufacturer: {}", common.manufacturer);
    println!("  Description:  {}", common.description);
    println!("  Serial:       {}", common.serial_number);
    println!("  Max power:    {} mA", common.max_power);
    println!("  Self-powered: {}", common.self_powered);
    if let EepromConfig::Ft2232H(h) = &read {
        println!("  AL drive:     {} mA", h.al.drive_current.milliamps());
        println!("  B uses VCP:   {}", h.b.vcp);
    }

    if let Some(image) = dev.transport().image() {
        println!("\nRaw image (first 32 bytes):");
        for (i, chunk) in image.as_bytes()[..32].chunks(16).enumerate() {
            print!("  {:04X}: ", i * 16);
            for b in chunk {
                print!("{b:02X} ");
            }
            println!();
        }
    }

    println!("\nBit modes:");
    for (interface, mode) in [
        (Interface::A, BitMode::SyncFf),
        (Interface::B, BitMode::SyncFf),
        (Interface::B, BitMode::Mpsse),
        (Interface::A, BitMode::Cbus),
    ] {
        let verdict = dev.validate_mode(chip, mode.wire_value(), interface);
        println!("  {mode:?} on {}: {verdict:?}", interface.letter());
    }
    dev.set_bitmode(chip, Interface::B, 0x0B, BitMode::Mpsse)?;

    Ok(())
}

//! Force a buffer's CRC-32 to a chosen value.
//!
//! Run with: `cargo run --example forge -p checksum --features tracing`
//!
//! Set `RUST_LOG=checksum=debug` to see the compensation events.

use checksum::{Crc32, compensate_register, compensate_tail, crc32};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), checksum::CrcCompensationError> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  println!("=== CRC-32 Compensation ===\n");

  let mut buf = *b"Hello, World!\n";
  println!("input:     {:?}", String::from_utf8_lossy(&buf));
  println!("crc32:     0x{:08X}", crc32(&buf));
  println!("register:  0x{:08X}", Crc32::register(&buf));

  compensate_tail(&mut buf, 0xDEAD_BEEF)?;
  println!();
  println!("patched:   {:02X?}", &buf[10..]);
  println!("crc32:     0x{:08X}", crc32(&buf));
  assert_eq!(crc32(&buf), 0xDEAD_BEEF);

  // Some consumers check the register before the final XOR.
  let mut buf = *b"Hello, World!\n";
  compensate_register(&mut buf, 10, 0xDEAD_BEEF)?;
  println!();
  println!("register-form patch: {:02X?}", &buf[10..]);
  println!("register:  0x{:08X}", Crc32::register(&buf));
  assert_eq!(Crc32::register(&buf), 0xDEAD_BEEF);

  Ok(())
}

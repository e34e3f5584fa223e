//! Compensation introspection: the intermediate values behind a patch.
//!
//! Run with: `cargo run --example introspect -p checksum --features diag`

use checksum::{crc32, diag};

fn main() -> Result<(), checksum::CrcCompensationError> {
  println!("=== Compensation Introspection ===\n");

  let config = checksum::crc32::config::get();
  println!("force:     {}", config.force.as_str());
  println!("threshold: {} bytes", config.tunables.bytewise_to_slice8);
  println!();

  let mut buf = vec![0u8; 4096];
  buf[..14].copy_from_slice(b"Hello, World!\n");

  for offset in [0usize, 10, 2048, buf.len() - 4] {
    let d = diag::compensation(&buf, offset, 0xDEAD_BEEF)?;
    println!(
      "offset {:>5}: trailing {:>5}  base 0x{:08X}  delta 0x{:08X}  patch {:02X?}  kernel {}  invertible {}",
      d.offset, d.trailing, d.base, d.delta, d.patch, d.kernel, d.invertible
    );
  }

  println!();
  println!("crc32 of buffer: 0x{:08X}", crc32(&buf));
  Ok(())
}

//! CRC-32 runtime configuration (overrides + thresholds).
//!
//! This module centralizes kernel selection knobs:
//! - the bytewise vs slice-by-8 length threshold
//! - optional forced kernel selection
//!
//! Every kernel computes the same function, so configuration only ever changes
//! speed, never results.
//!
//! # Environment
//!
//! Under `std`, overrides are read once per process:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRCFORGE_CRC32_FORCE` | `auto`, `bitwise`, `bytewise`, `slice8` (and aliases) |
//! | `CRCFORGE_CRC32_THRESHOLD_BYTEWISE_TO_SLICE8` | byte count |

/// Default length at which slice-by-8 overtakes the single-table kernel.
pub const DEFAULT_BYTEWISE_TO_SLICE8: usize = 64;

/// Environment variable selecting a forced kernel.
pub const ENV_FORCE: &str = "CRCFORGE_CRC32_FORCE";

/// Environment variable overriding the bytewise → slice-by-8 threshold.
pub const ENV_THRESHOLD_BYTEWISE_TO_SLICE8: &str = "CRCFORGE_CRC32_THRESHOLD_BYTEWISE_TO_SLICE8";

/// Forced kernel selection for CRC-32.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Crc32Force {
  /// Use the default length-based selector.
  #[default]
  Auto,
  /// Force the table-less bit-at-a-time reference kernel.
  Bitwise,
  /// Force the single 256-entry table kernel.
  Bytewise,
  /// Force the slice-by-8 kernel.
  Slice8,
}

impl Crc32Force {
  /// Canonical lowercase name, as accepted by [`Crc32Force::parse`].
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bitwise => "bitwise",
      Self::Bytewise => "bytewise",
      Self::Slice8 => "slice8",
    }
  }

  /// Parse a force mode, accepting a few common aliases (case-insensitive).
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("bitwise") || value.eq_ignore_ascii_case("reference") {
      return Some(Self::Bitwise);
    }
    if value.eq_ignore_ascii_case("bytewise") || value.eq_ignore_ascii_case("table") {
      return Some(Self::Bytewise);
    }
    if value.eq_ignore_ascii_case("slice8") || value.eq_ignore_ascii_case("slice-by-8") {
      return Some(Self::Slice8);
    }

    None
  }
}

/// CRC-32 selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32Tunables {
  /// Bytes where slice-by-8 becomes faster than the single-table kernel.
  pub bytewise_to_slice8: usize,
}

impl Default for Crc32Tunables {
  fn default() -> Self {
    Self {
      bytewise_to_slice8: DEFAULT_BYTEWISE_TO_SLICE8,
    }
  }
}

/// Full CRC-32 runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Crc32Config {
  /// Requested force mode (env/programmatic).
  pub force: Crc32Force,
  /// Thresholds used by the selector.
  pub tunables: Crc32Tunables,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Overrides {
  force: Crc32Force,
  bytewise_to_slice8: Option<usize>,
}

fn parse_usize(value: &str) -> Option<usize> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  value.parse::<usize>().ok()
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    std::env::var(name).ok()
  }

  Overrides {
    force: var(ENV_FORCE)
      .and_then(|v| Crc32Force::parse(&v))
      .unwrap_or(Crc32Force::Auto),
    bytewise_to_slice8: var(ENV_THRESHOLD_BYTEWISE_TO_SLICE8).and_then(|v| parse_usize(&v)),
  }
}

#[cfg(not(feature = "std"))]
fn read_env_overrides() -> Overrides {
  Overrides::default()
}

fn apply(ov: Overrides) -> Crc32Config {
  let mut tunables = Crc32Tunables::default();
  if let Some(v) = ov.bytewise_to_slice8 {
    tunables.bytewise_to_slice8 = v;
  }

  Crc32Config {
    force: ov.force,
    tunables,
  }
}

/// Resolve the configuration from defaults and the environment.
///
/// Prefer [`get`], which returns the cached result of this function.
#[must_use]
pub fn resolve() -> Crc32Config {
  apply(read_env_overrides())
}

/// Get the effective CRC-32 configuration for this process.
#[inline]
#[must_use]
pub fn get() -> Crc32Config {
  super::CRC32_DISPATCHER.config()
}

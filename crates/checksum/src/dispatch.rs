//! Kernel dispatch: selection results and the cached CRC-32 dispatcher.
//!
//! Kernels are plain function pointers with the signature [`Crc32Fn`]. A
//! selector picks one for a given input length from the active
//! [`Crc32Config`](crate::Crc32Config); the dispatcher caches that config so the
//! per-call cost is a couple of comparisons and one indirect call.

use crate::crc32::config::Crc32Config;

/// Signature for CRC-32 kernels: `fn(state: u32, data: &[u8]) -> u32`.
///
/// # Arguments
///
/// * `state` - Current CRC register (0xFFFFFFFF at message start)
/// * `data` - Input data to process
///
/// # Returns
///
/// Updated CRC register after processing the input data (no final XOR).
pub type Crc32Fn = fn(u32, &[u8]) -> u32;

/// The result of kernel selection.
///
/// Contains the selected kernel's name and function pointer.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  /// Human-readable name of the selected kernel.
  pub name: &'static str,
  /// The selected kernel function.
  pub func: F,
}

impl<F> Selected<F> {
  /// Create a new selected result.
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: F) -> Self {
    Self { name, func }
  }
}

/// Dispatcher for CRC-32 kernels.
///
/// Under `std` the configuration is resolved once through `OnceLock`; without
/// `std` the compile-time defaults are used and nothing needs caching.
pub(crate) struct Crc32Dispatcher {
  #[cfg(feature = "std")]
  config: std::sync::OnceLock<Crc32Config>,

  /// Resolves the configuration (defaults plus overrides).
  resolve: fn() -> Crc32Config,

  /// Picks a kernel for a buffer length under a configuration.
  select: fn(&Crc32Config, usize) -> Selected<Crc32Fn>,
}

impl Crc32Dispatcher {
  /// Create a new dispatcher.
  #[must_use]
  pub(crate) const fn new(
    resolve: fn() -> Crc32Config,
    select: fn(&Crc32Config, usize) -> Selected<Crc32Fn>,
  ) -> Self {
    Self {
      #[cfg(feature = "std")]
      config: std::sync::OnceLock::new(),
      resolve,
      select,
    }
  }

  /// The effective configuration, resolving it on first use.
  #[inline]
  #[must_use]
  pub(crate) fn config(&self) -> Crc32Config {
    #[cfg(feature = "std")]
    {
      *self.config.get_or_init(self.resolve)
    }

    #[cfg(not(feature = "std"))]
    {
      (self.resolve)()
    }
  }

  /// The kernel that handles a buffer of `len` bytes.
  #[inline]
  #[must_use]
  pub(crate) fn get(&self, len: usize) -> Selected<Crc32Fn> {
    (self.select)(&self.config(), len)
  }

  /// Call the selected kernel.
  #[inline]
  #[must_use]
  pub(crate) fn call(&self, state: u32, data: &[u8]) -> u32 {
    (self.get(data.len()).func)(state, data)
  }
}

//! CRC-64/ISO runtime configuration (kernel override + threshold).
//!
//! All kernels are bit-exact with each other, so forcing one only changes
//! throughput. Overrides exist so tests and benchmarks can pin a kernel:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRC64_ISO_FORCE` | `auto`, `split-word` (`split`, `words`), `slice8` (`portable`, `table`), `reference` (`bitwise`) |
//! | `CRC64_ISO_SLICE8_MIN_LEN` | byte length from which `auto` switches to slice-by-8 |

/// Forced kernel selection for CRC-64/ISO.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Crc64IsoForce {
  /// Split-word for short updates, slice-by-8 for longer ones.
  #[default]
  Auto,
  /// The two 32-bit word kernel, one byte per step.
  SplitWord,
  /// The native 64-bit slice-by-8 kernel.
  Slice8,
  /// The bitwise reference (slow; verification only).
  Reference,
}

impl Crc64IsoForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::SplitWord => "split-word",
      Self::Slice8 => "slice8",
      Self::Reference => "reference",
    }
  }

  /// Parse a force name, case-insensitively, accepting the usual aliases.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    const ALIASES: [(&str, Crc64IsoForce); 9] = [
      ("auto", Crc64IsoForce::Auto),
      ("split-word", Crc64IsoForce::SplitWord),
      ("split", Crc64IsoForce::SplitWord),
      ("words", Crc64IsoForce::SplitWord),
      ("slice8", Crc64IsoForce::Slice8),
      ("portable", Crc64IsoForce::Slice8),
      ("table", Crc64IsoForce::Slice8),
      ("reference", Crc64IsoForce::Reference),
      ("bitwise", Crc64IsoForce::Reference),
    ];
    let value = value.trim();
    ALIASES
      .iter()
      .find(|(name, _)| value.eq_ignore_ascii_case(name))
      .map(|&(_, force)| force)
  }
}

/// Default length from which `auto` prefers slice-by-8.
///
/// Below two full 8-byte blocks the table setup of slice-by-8 does not pay off.
pub const DEFAULT_SLICE8_MIN_LEN: usize = 16;

/// Full CRC-64/ISO runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc64IsoConfig {
  /// Requested force mode.
  pub force: Crc64IsoForce,
  /// Minimum update length for slice-by-8 under `auto`.
  pub slice8_min_len: usize,
}

impl Default for Crc64IsoConfig {
  fn default() -> Self {
    Self {
      force: Crc64IsoForce::Auto,
      slice8_min_len: DEFAULT_SLICE8_MIN_LEN,
    }
  }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Overrides {
  pub(crate) force: Option<Crc64IsoForce>,
  pub(crate) slice8_min_len: Option<usize>,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn non_empty(name: &str) -> Option<std::string::String> {
    let value = std::env::var(name).ok()?;
    if value.trim().is_empty() { None } else { Some(value) }
  }

  Overrides {
    force: non_empty("CRC64_ISO_FORCE").and_then(|v| Crc64IsoForce::parse(&v)),
    slice8_min_len: non_empty("CRC64_ISO_SLICE8_MIN_LEN").and_then(|v| v.trim().parse::<usize>().ok()),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Merge overrides onto the defaults.
#[inline]
#[must_use]
pub(crate) fn config(ov: Overrides) -> Crc64IsoConfig {
  let defaults = Crc64IsoConfig::default();
  Crc64IsoConfig {
    force: ov.force.unwrap_or(defaults.force),
    slice8_min_len: ov.slice8_min_len.unwrap_or(defaults.slice8_min_len),
  }
}

/// Cached process-wide CRC-64/ISO configuration.
///
/// Env overrides are read once; they are expected to be set before process start.
#[inline]
#[must_use]
pub fn get() -> Crc64IsoConfig {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Crc64IsoConfig> = OnceLock::new();
    *CACHED.get_or_init(|| config(overrides()))
  }

  #[cfg(not(feature = "std"))]
  {
    config(overrides())
  }
}

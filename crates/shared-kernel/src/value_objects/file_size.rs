// crates/shared-kernel/src/value_objects/file_size.rs
use std::fmt;

use serde::{Deserialize, Serialize};

const UNIT_STEP: u64 = 1024;
const UNITS: [&str; 4] = ["K", "M", "G", "T"];

/// Size of a file in bytes.
///
/// `Display` prints the raw byte count; the alternate form (`{:#}`) prints
/// the base-2 human readable form produced by [`FileSize::to_human`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Returns a base-2 human readable representation (`K`, `M`, `G`, `T`).
    ///
    /// Sizes below one kibibyte are printed as a bare integer. Larger sizes
    /// are scaled by 1024 until they drop below 1024 or the `T` unit has been
    /// reached, and printed with one decimal digit. Nothing is scaled past
    /// `T`, so petabyte-sized values read as e.g. `6063.3T`.
    #[must_use]
    pub fn to_human(self) -> String {
        let bytes = self.bytes();
        if bytes < UNIT_STEP {
            return bytes.to_string();
        }

        let step = UNIT_STEP as f64;
        let mut value = bytes as f64 / step;
        let mut unit = 0;
        while value >= step && unit + 1 < UNITS.len() {
            value /= step;
            unit += 1;
        }
        format!("{value:.1}{}", UNITS[unit])
    }

    /// Formats either the raw byte count or the human readable form.
    #[must_use]
    pub fn render(self, human_readable: bool) -> String {
        if human_readable { self.to_human() } else { self.0.to_string() }
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

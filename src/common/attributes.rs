//! Packed attribute word handed back to the runtime.
//!
//! Layout (most significant first): one reserved bit, `STAT_VALID`,
//! `STAT_FOLDER`, `STAT_READ_ONLY`, then 60 bits of last-modified time in
//! milliseconds since the epoch. A word without `STAT_VALID` is always 0.

use crate::common::types::{STAT_FOLDER, STAT_LAST_MODIFIED, STAT_READ_ONLY, STAT_VALID};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Attributes(u64);

impl Attributes {
    pub const INVALID: Attributes = Attributes(0);

    /// Packs the fields of a successful stat.
    pub fn from_stat(mtime_sec: i64, is_folder: bool, is_read_only: bool) -> Self {
        let millis = if mtime_sec > 0 {
            (mtime_sec as u64).saturating_mul(1000) & STAT_LAST_MODIFIED
        } else {
            0
        };
        let mut bits = millis | STAT_VALID;
        if is_folder {
            bits |= STAT_FOLDER;
        }
        if is_read_only {
            bits |= STAT_READ_ONLY;
        }
        Attributes(bits)
    }

    /// Reinterprets a raw word. Words without `STAT_VALID` collapse to 0.
    pub fn from_bits(bits: u64) -> Self {
        if bits & STAT_VALID == 0 {
            Self::INVALID
        } else {
            Attributes(bits)
        }
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 & STAT_VALID != 0
    }

    pub fn is_folder(self) -> bool {
        self.is_valid() && self.0 & STAT_FOLDER != 0
    }

    pub fn is_file(self) -> bool {
        self.is_valid() && self.0 & STAT_FOLDER == 0
    }

    pub fn is_read_only(self) -> bool {
        self.is_valid() && self.0 & STAT_READ_ONLY != 0
    }

    pub fn last_modified_millis(self) -> i64 {
        if !self.is_valid() {
            return 0;
        }
        (self.0 & STAT_LAST_MODIFIED) as i64
    }
}

impl From<Attributes> for u64 {
    fn from(value: Attributes) -> Self {
        value.0
    }
}

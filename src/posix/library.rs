use std::sync::atomic::{AtomicU32, Ordering};

use crate::common::attributes::Attributes;
use crate::common::types::CoreFsStatus;
use crate::common::unicode::UNICODE_CAPABLE;
use crate::config::LibraryOptions;
use crate::library::FileSystemLibrary;
use crate::posix::sys;

const TARGET: &str = "corefs::posix";

/// Attribute operations over POSIX `stat`, `chmod` and `utimensat`.
pub struct PosixLibrary {
    flags: AtomicU32,
}

impl PosixLibrary {
    pub const fn new() -> Self {
        Self {
            flags: AtomicU32::new(0),
        }
    }

    pub fn with_options(options: LibraryOptions) -> Self {
        Self {
            flags: AtomicU32::new(options.flags()),
        }
    }

    pub fn options(&self) -> LibraryOptions {
        LibraryOptions::from_flags(self.flags.load(Ordering::Relaxed))
    }

    pub fn set_options(&self, options: LibraryOptions) {
        log::debug!(target: TARGET, "options set to {options:?}");
        self.flags.store(options.flags(), Ordering::Relaxed);
    }
}

impl Default for PosixLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn display(path: &[u8]) -> String {
    String::from_utf8_lossy(path).into_owned()
}

impl FileSystemLibrary for PosixLibrary {
    fn is_unicode_capable(&self) -> bool {
        UNICODE_CAPABLE
    }

    fn is_case_sensitive(&self) -> bool {
        true
    }

    fn get_attributes(&self, path: &[u8]) -> Result<Attributes, CoreFsStatus> {
        let c_path = sys::path_to_cstring(path)?;
        let follow = !self.options().no_follow_symlinks;
        let info = sys::stat(&c_path, follow).map_err(|status| {
            log::trace!(target: TARGET, "stat {} failed: {status}", display(path));
            status
        })?;
        let attrs = Attributes::from_stat(info.modified.sec, info.is_dir(), !info.is_owner_writable());
        log::trace!(target: TARGET, "stat {} -> {:#018x}", display(path), attrs.bits());
        Ok(attrs)
    }

    fn set_read_only(&self, path: &[u8], read_only: bool) -> Result<(), CoreFsStatus> {
        let c_path = sys::path_to_cstring(path)?;
        let info = sys::stat(&c_path, true)?;
        let mut mask = info.permission_bits();
        if read_only {
            mask &= !sys::WRITE_BITS;
        } else {
            mask |= sys::OWNER_READ_WRITE;
        }
        log::debug!(
            target: TARGET,
            "set_read_only({read_only}) {}: {:o} -> {:o}",
            display(path),
            info.permission_bits(),
            mask
        );
        sys::chmod(&c_path, mask)
    }

    fn copy_attributes(
        &self,
        source: &[u8],
        destination: &[u8],
        copy_last_modified: bool,
    ) -> Result<(), CoreFsStatus> {
        let c_source = sys::path_to_cstring(source)?;
        let c_destination = sys::path_to_cstring(destination)?;
        let info = sys::stat(&c_source, true)?;

        log::debug!(
            target: TARGET,
            "copy_attributes {} -> {}: mode {:o}, last_modified={copy_last_modified}",
            display(source),
            display(destination),
            info.mode_bits()
        );
        sys::chmod(&c_destination, info.mode_bits())?;

        if copy_last_modified {
            let accessed = self.options().copy_access_time.then_some(info.accessed);
            sys::set_times(&c_destination, accessed, info.modified)?;
        }
        Ok(())
    }
}

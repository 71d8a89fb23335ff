use crate::common::types::{
    CoreFsConfig, CoreFsStatus, COREFS_FLAG_COPY_ACCESS_TIME, COREFS_FLAG_NO_FOLLOW_SYMLINKS,
    COREFS_KNOWN_FLAGS,
};

/// Behavior switches for a [`crate::PlatformLibrary`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LibraryOptions {
    /// Query attributes of a symlink itself rather than its target.
    pub no_follow_symlinks: bool,
    /// When copying the modification time, copy the access time as well.
    pub copy_access_time: bool,
}

impl LibraryOptions {
    pub fn flags(&self) -> u32 {
        let mut flags = 0;
        if self.no_follow_symlinks {
            flags |= COREFS_FLAG_NO_FOLLOW_SYMLINKS;
        }
        if self.copy_access_time {
            flags |= COREFS_FLAG_COPY_ACCESS_TIME;
        }
        flags
    }

    pub fn from_flags(flags: u32) -> Self {
        Self {
            no_follow_symlinks: flags & COREFS_FLAG_NO_FOLLOW_SYMLINKS != 0,
            copy_access_time: flags & COREFS_FLAG_COPY_ACCESS_TIME != 0,
        }
    }
}

impl TryFrom<&CoreFsConfig> for LibraryOptions {
    type Error = CoreFsStatus;

    fn try_from(config: &CoreFsConfig) -> Result<Self, Self::Error> {
        if (config.size as usize) < std::mem::size_of::<CoreFsConfig>() {
            log::warn!(
                target: "corefs::config",
                "config size {} smaller than expected {}",
                config.size,
                std::mem::size_of::<CoreFsConfig>()
            );
            return Err(CoreFsStatus::InvalidArgument);
        }
        let unknown = config.flags & !COREFS_KNOWN_FLAGS;
        if unknown != 0 {
            log::warn!(target: "corefs::config", "ignoring unknown config flags {unknown:#x}");
        }
        Ok(Self::from_flags(config.flags))
    }
}

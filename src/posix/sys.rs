use std::ffi::{CStr, CString};
use std::io;

use crate::common::types::CoreFsStatus;

pub const PERMISSION_BITS: u32 = 0o777;
pub const MODE_BITS: u32 = 0o7777;
pub const WRITE_BITS: u32 = (libc::S_IWUSR | libc::S_IWGRP | libc::S_IWOTH) as u32;
pub const OWNER_READ_WRITE: u32 = (libc::S_IRUSR | libc::S_IWUSR) as u32;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Timestamp {
    pub sec: i64,
    pub nsec: i64,
}

#[derive(Copy, Clone, Debug)]
pub struct FileStat {
    pub mode: u32,
    pub accessed: Timestamp,
    pub modified: Timestamp,
}

impl FileStat {
    pub fn is_dir(&self) -> bool {
        self.mode & libc::S_IFMT as u32 == libc::S_IFDIR as u32
    }

    pub fn is_owner_writable(&self) -> bool {
        self.mode & libc::S_IWUSR as u32 != 0
    }

    pub fn permission_bits(&self) -> u32 {
        self.mode & PERMISSION_BITS
    }

    /// Permission bits plus setuid, setgid and sticky; never the file type.
    pub fn mode_bits(&self) -> u32 {
        self.mode & MODE_BITS
    }
}

pub fn map_io_error(err: &io::Error) -> CoreFsStatus {
    use io::ErrorKind;
    if let Some(code) = err.raw_os_error() {
        match code {
            libc::ELOOP => return CoreFsStatus::TooManySymlinks,
            libc::ENAMETOOLONG => return CoreFsStatus::PathTooLong,
            libc::EROFS => return CoreFsStatus::ReadOnlyFilesystem,
            libc::ENOTDIR => return CoreFsStatus::NotADirectory,
            _ => {}
        }
    }
    match err.kind() {
        ErrorKind::NotFound => CoreFsStatus::NotFound,
        ErrorKind::PermissionDenied => CoreFsStatus::PermissionDenied,
        ErrorKind::InvalidInput => CoreFsStatus::InvalidPath,
        _ => CoreFsStatus::IoError,
    }
}

fn last_error() -> CoreFsStatus {
    map_io_error(&io::Error::last_os_error())
}

/// Copies a native path into a NUL-terminated buffer. A single trailing NUL
/// from the caller is dropped; any other NUL makes the path invalid.
pub fn path_to_cstring(path: &[u8]) -> Result<CString, CoreFsStatus> {
    let trimmed = match path.split_last() {
        Some((0, rest)) => rest,
        _ => path,
    };
    CString::new(trimmed).map_err(|_| CoreFsStatus::InvalidPath)
}

pub fn stat(path: &CStr, follow_symlinks: bool) -> Result<FileStat, CoreFsStatus> {
    let mut info: libc::stat = unsafe { std::mem::zeroed() };
    let code = unsafe {
        if follow_symlinks {
            libc::stat(path.as_ptr(), &mut info)
        } else {
            libc::lstat(path.as_ptr(), &mut info)
        }
    };
    if code != 0 {
        return Err(last_error());
    }
    Ok(FileStat {
        mode: info.st_mode as u32,
        accessed: Timestamp {
            sec: info.st_atime as i64,
            nsec: info.st_atime_nsec as i64,
        },
        modified: Timestamp {
            sec: info.st_mtime as i64,
            nsec: info.st_mtime_nsec as i64,
        },
    })
}

pub fn chmod(path: &CStr, mode: u32) -> Result<(), CoreFsStatus> {
    let code = unsafe { libc::chmod(path.as_ptr(), mode as libc::mode_t) };
    if code != 0 {
        return Err(last_error());
    }
    Ok(())
}

/// Sets the modification time and, when given, the access time. A missing
/// access time leaves the current one in place.
pub fn set_times(
    path: &CStr,
    accessed: Option<Timestamp>,
    modified: Timestamp,
) -> Result<(), CoreFsStatus> {
    let times = [timespec(accessed), timespec(Some(modified))];
    let code = unsafe { libc::utimensat(libc::AT_FDCWD, path.as_ptr(), times.as_ptr(), 0) };
    if code != 0 {
        return Err(last_error());
    }
    Ok(())
}

fn timespec(value: Option<Timestamp>) -> libc::timespec {
    let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
    match value {
        Some(value) => {
            ts.tv_sec = value.sec as libc::time_t;
            ts.tv_nsec = value.nsec as _;
        }
        None => {
            ts.tv_nsec = libc::UTIME_OMIT as _;
        }
    }
    ts
}

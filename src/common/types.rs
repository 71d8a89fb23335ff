use core::ffi::c_char;
use std::fmt;

#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CoreFsStatus {
    Ok = 0,
    NotFound = 1,
    PermissionDenied = 2,
    NotADirectory = 3,
    TooManySymlinks = 4,
    PathTooLong = 5,
    ReadOnlyFilesystem = 6,
    InvalidPath = 7,
    InvalidArgument = 8,
    Unsupported = 9,
    IoError = 10,
}

impl fmt::Display for CoreFsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CoreFsStatus::Ok => "ok",
            CoreFsStatus::NotFound => "no such file or directory",
            CoreFsStatus::PermissionDenied => "permission denied",
            CoreFsStatus::NotADirectory => "a path component is not a directory",
            CoreFsStatus::TooManySymlinks => "too many levels of symbolic links",
            CoreFsStatus::PathTooLong => "path too long",
            CoreFsStatus::ReadOnlyFilesystem => "read-only filesystem",
            CoreFsStatus::InvalidPath => "invalid path",
            CoreFsStatus::InvalidArgument => "invalid argument",
            CoreFsStatus::Unsupported => "operation not supported on this platform",
            CoreFsStatus::IoError => "I/O error",
        };
        f.write_str(text)
    }
}

impl std::error::Error for CoreFsStatus {}

#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CoreFsLogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

/// Borrowed byte path in the platform's native encoding. Not NUL-terminated.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct CoreFsPathView {
    pub ptr: *const c_char,
    pub len: usize,
}

/// Borrowed UTF-16 path, accepted by the wide entry points.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct CoreFsWideView {
    pub ptr: *const u16,
    pub len: usize,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct CoreFsStringView {
    pub ptr: *const c_char,
    pub len: usize,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct CoreFsConfig {
    pub size: u32,
    pub flags: u32,
    pub reserved: [u64; 6],
}

impl Default for CoreFsConfig {
    fn default() -> Self {
        Self {
            size: std::mem::size_of::<CoreFsConfig>() as u32,
            flags: 0,
            reserved: [0; 6],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct CoreFsLogRecord {
    pub level: CoreFsLogLevel,
    pub target: CoreFsStringView,
    pub message: CoreFsStringView,
    pub file: CoreFsStringView,
    pub line: u32,
}

pub const COREFS_FLAG_NO_FOLLOW_SYMLINKS: u32 = 1 << 0;
pub const COREFS_FLAG_COPY_ACCESS_TIME: u32 = 1 << 1;
pub const COREFS_KNOWN_FLAGS: u32 = COREFS_FLAG_NO_FOLLOW_SYMLINKS | COREFS_FLAG_COPY_ACCESS_TIME;

pub const STAT_RESERVED: u64 = 0x8000_0000_0000_0000;
pub const STAT_VALID: u64 = 0x4000_0000_0000_0000;
pub const STAT_FOLDER: u64 = 0x2000_0000_0000_0000;
pub const STAT_READ_ONLY: u64 = 0x1000_0000_0000_0000;
pub const STAT_LAST_MODIFIED: u64 = !(STAT_RESERVED | STAT_VALID | STAT_FOLDER | STAT_READ_ONLY);

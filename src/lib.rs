mod common;
mod config;
mod ffi;
mod library;
mod logging;

#[cfg(unix)]
mod posix;
#[cfg(unix)]
pub use posix::PlatformLibrary;

#[cfg(not(unix))]
compile_error!("corefs only supports POSIX targets.");

pub use crate::common::attributes::Attributes;
pub use crate::common::types::*;
pub use crate::config::LibraryOptions;
pub use crate::ffi::*;
pub use crate::library::FileSystemLibrary;
pub use crate::logging::CoreFsLogCallback;

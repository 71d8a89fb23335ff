use core::ffi::c_void;

use crate::common::types::*;
use crate::common::unicode::wide_from_view;
use crate::config::LibraryOptions;
use crate::library::FileSystemLibrary;
use crate::logging::{self, CoreFsLogCallback};
use crate::PlatformLibrary;

static LIBRARY: PlatformLibrary = PlatformLibrary::new();

fn path_from_view<'a>(view: *const CoreFsPathView) -> Result<&'a [u8], CoreFsStatus> {
    let view = unsafe { view.as_ref() }.ok_or(CoreFsStatus::InvalidPath)?;
    if view.ptr.is_null() {
        if view.len != 0 {
            return Err(CoreFsStatus::InvalidPath);
        }
        return Ok(&[]);
    }
    Ok(unsafe { std::slice::from_raw_parts(view.ptr as *const u8, view.len) })
}

fn status_of(result: Result<(), CoreFsStatus>) -> CoreFsStatus {
    match result {
        Ok(()) => CoreFsStatus::Ok,
        Err(status) => status,
    }
}

fn get_attributes(path: *const CoreFsPathView) -> Result<u64, CoreFsStatus> {
    let path = path_from_view(path)?;
    LIBRARY.get_attributes(path).map(u64::from)
}

fn set_read_only(path: *const CoreFsPathView, read_only: bool) -> Result<(), CoreFsStatus> {
    let path = path_from_view(path)?;
    LIBRARY.set_read_only(path, read_only)
}

fn copy_attributes(
    source: *const CoreFsPathView,
    destination: *const CoreFsPathView,
    copy_last_modified: bool,
) -> Result<(), CoreFsStatus> {
    let source = path_from_view(source)?;
    let destination = path_from_view(destination)?;
    LIBRARY.copy_attributes(source, destination, copy_last_modified)
}

#[no_mangle]
pub extern "C" fn corefs_configure(config: *const CoreFsConfig) -> CoreFsStatus {
    let options = match unsafe { config.as_ref() } {
        Some(config) => match LibraryOptions::try_from(config) {
            Ok(options) => options,
            Err(status) => return status,
        },
        None => LibraryOptions::default(),
    };
    LIBRARY.set_options(options);
    CoreFsStatus::Ok
}

#[no_mangle]
pub extern "C" fn corefs_is_unicode_capable() -> bool {
    LIBRARY.is_unicode_capable()
}

#[no_mangle]
pub extern "C" fn corefs_is_case_sensitive() -> bool {
    LIBRARY.is_case_sensitive()
}

/// Packed attribute word for `path`, or 0 when it cannot be stat'ed.
#[no_mangle]
pub extern "C" fn corefs_get_attributes(path: *const CoreFsPathView) -> u64 {
    get_attributes(path).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn corefs_get_attributes_ex(
    path: *const CoreFsPathView,
    out_attributes: *mut u64,
) -> CoreFsStatus {
    let Some(out) = (unsafe { out_attributes.as_mut() }) else {
        return CoreFsStatus::InvalidArgument;
    };
    match get_attributes(path) {
        Ok(bits) => {
            *out = bits;
            CoreFsStatus::Ok
        }
        Err(status) => {
            *out = 0;
            status
        }
    }
}

#[no_mangle]
pub extern "C" fn corefs_is_read_only(path: *const CoreFsPathView) -> bool {
    match path_from_view(path) {
        Ok(path) => LIBRARY.is_read_only(path),
        Err(_) => false,
    }
}

#[no_mangle]
pub extern "C" fn corefs_get_last_modified(path: *const CoreFsPathView) -> i64 {
    match path_from_view(path) {
        Ok(path) => LIBRARY.get_last_modified(path),
        Err(_) => 0,
    }
}

#[no_mangle]
pub extern "C" fn corefs_set_read_only(path: *const CoreFsPathView, read_only: bool) -> bool {
    set_read_only(path, read_only).is_ok()
}

#[no_mangle]
pub extern "C" fn corefs_set_read_only_ex(
    path: *const CoreFsPathView,
    read_only: bool,
) -> CoreFsStatus {
    status_of(set_read_only(path, read_only))
}

#[no_mangle]
pub extern "C" fn corefs_copy_attributes(
    source: *const CoreFsPathView,
    destination: *const CoreFsPathView,
    copy_last_modified: bool,
) -> bool {
    copy_attributes(source, destination, copy_last_modified).is_ok()
}

/// Same operation as [`corefs_copy_attributes`], exported under the name the
/// build-tool integration binds to.
#[no_mangle]
pub extern "C" fn corefs_copy_attributes_for_build_tool(
    source: *const CoreFsPathView,
    destination: *const CoreFsPathView,
    copy_last_modified: bool,
) -> bool {
    corefs_copy_attributes(source, destination, copy_last_modified)
}

#[no_mangle]
pub extern "C" fn corefs_copy_attributes_ex(
    source: *const CoreFsPathView,
    destination: *const CoreFsPathView,
    copy_last_modified: bool,
) -> CoreFsStatus {
    status_of(copy_attributes(source, destination, copy_last_modified))
}

#[no_mangle]
pub extern "C" fn corefs_get_attributes_w(path: *const CoreFsWideView) -> u64 {
    wide_from_view(path)
        .and_then(|path| LIBRARY.get_attributes_wide(path))
        .map(u64::from)
        .unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn corefs_set_read_only_w(path: *const CoreFsWideView, read_only: bool) -> bool {
    wide_from_view(path)
        .and_then(|path| LIBRARY.set_read_only_wide(path, read_only))
        .is_ok()
}

#[no_mangle]
pub extern "C" fn corefs_copy_attributes_w(
    source: *const CoreFsWideView,
    destination: *const CoreFsWideView,
    copy_last_modified: bool,
) -> bool {
    let source = match wide_from_view(source) {
        Ok(source) => source,
        Err(_) => return false,
    };
    wide_from_view(destination)
        .and_then(|destination| {
            LIBRARY.copy_attributes_wide(source, destination, copy_last_modified)
        })
        .is_ok()
}

#[no_mangle]
pub extern "C" fn corefs_log_set_stderr(level: CoreFsLogLevel) -> CoreFsStatus {
    logging::log_set_stderr(level)
}

#[no_mangle]
pub extern "C" fn corefs_log_set_callback(
    callback: CoreFsLogCallback,
    user_data: *mut c_void,
    level: CoreFsLogLevel,
) -> CoreFsStatus {
    logging::log_set_callback(callback, user_data, level)
}

#[no_mangle]
pub extern "C" fn corefs_log_set_level(level: CoreFsLogLevel) -> CoreFsStatus {
    logging::log_set_level(level)
}

#[no_mangle]
pub extern "C" fn corefs_log_disable() -> CoreFsStatus {
    logging::log_disable()
}

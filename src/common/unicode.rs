// Wide (UTF-16) path entry points exist for ABI parity with platforms that
// resolve names through a unicode API. POSIX paths are raw bytes, so nothing
// here ever decodes a wide path.

use crate::common::types::{CoreFsStatus, CoreFsWideView};

pub const UNICODE_CAPABLE: bool = false;

pub fn wide_from_view<'a>(view: *const CoreFsWideView) -> Result<&'a [u16], CoreFsStatus> {
    let view = unsafe { view.as_ref() }.ok_or(CoreFsStatus::InvalidPath)?;
    if view.ptr.is_null() {
        if view.len != 0 {
            return Err(CoreFsStatus::InvalidPath);
        }
        return Ok(&[]);
    }
    Ok(unsafe { std::slice::from_raw_parts(view.ptr, view.len) })
}

/// Status for every wide operation on this platform.
pub fn unsupported(operation: &str) -> CoreFsStatus {
    log::debug!(
        target: "corefs::unicode",
        "{operation}: wide paths are not supported on this platform"
    );
    CoreFsStatus::Unsupported
}

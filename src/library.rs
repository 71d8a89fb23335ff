use crate::common::attributes::Attributes;
use crate::common::types::CoreFsStatus;
use crate::common::unicode;

/// Filesystem attribute operations backing the C ABI.
///
/// Paths are raw bytes in the platform's native encoding. The wide variants
/// take UTF-16 code units and default to `Unsupported`.
pub trait FileSystemLibrary: Send + Sync {
    fn is_unicode_capable(&self) -> bool;

    fn is_case_sensitive(&self) -> bool;

    fn get_attributes(&self, path: &[u8]) -> Result<Attributes, CoreFsStatus>;

    /// Clears every write bit, or restores owner read+write.
    fn set_read_only(&self, path: &[u8], read_only: bool) -> Result<(), CoreFsStatus>;

    /// Copies the permission mode of `source` onto `destination`, then its
    /// modification time when `copy_last_modified` is set.
    fn copy_attributes(
        &self,
        source: &[u8],
        destination: &[u8],
        copy_last_modified: bool,
    ) -> Result<(), CoreFsStatus>;

    fn get_attributes_wide(&self, _path: &[u16]) -> Result<Attributes, CoreFsStatus> {
        Err(unicode::unsupported("get_attributes_wide"))
    }

    fn set_read_only_wide(&self, _path: &[u16], _read_only: bool) -> Result<(), CoreFsStatus> {
        Err(unicode::unsupported("set_read_only_wide"))
    }

    fn copy_attributes_wide(
        &self,
        _source: &[u16],
        _destination: &[u16],
        _copy_last_modified: bool,
    ) -> Result<(), CoreFsStatus> {
        Err(unicode::unsupported("copy_attributes_wide"))
    }

    fn is_read_only(&self, path: &[u8]) -> bool {
        self.get_attributes(path)
            .map(Attributes::is_read_only)
            .unwrap_or(false)
    }

    fn get_last_modified(&self, path: &[u8]) -> i64 {
        self.get_attributes(path)
            .map(Attributes::last_modified_millis)
            .unwrap_or(0)
    }
}

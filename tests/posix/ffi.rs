use std::ffi::c_char;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use corefs::*;

use super::support::{bytes, mode_of, mtime_secs, set_mode, set_mtime_secs, TempDir};

// corefs_configure mutates process-wide state.
static CONFIG_MUTEX: Mutex<()> = Mutex::new(());

fn view(path: &Path) -> CoreFsPathView {
    let raw = bytes(path);
    CoreFsPathView {
        ptr: raw.as_ptr() as *const c_char,
        len: raw.len(),
    }
}

fn wide(value: &str) -> (Vec<u16>, CoreFsWideView) {
    let units: Vec<u16> = value.encode_utf16().collect();
    let view = CoreFsWideView {
        ptr: units.as_ptr(),
        len: units.len(),
    };
    (units, view)
}

#[test]
fn get_attributes_packs_flags() {
    let temp = TempDir::new("ffi_attrs");
    let file = temp.file("a.txt", b"a");
    set_mtime_secs(&file, 1_234_567_890);

    let bits = corefs_get_attributes(&view(&file));
    assert_ne!(bits & STAT_VALID, 0);
    assert_eq!(bits & STAT_FOLDER, 0);
    assert_eq!(bits & STAT_LAST_MODIFIED, 1_234_567_890_000);
    assert_eq!(corefs_get_last_modified(&view(&file)), 1_234_567_890_000);

    let bits = corefs_get_attributes(&view(&temp.path));
    assert_ne!(bits & STAT_VALID, 0);
    assert_ne!(bits & STAT_FOLDER, 0);
}

#[test]
fn missing_path_returns_exact_zero() {
    let temp = TempDir::new("ffi_missing");
    let missing = temp.path.join("nope");

    assert_eq!(corefs_get_attributes(&view(&missing)), 0);
    assert!(!corefs_set_read_only(&view(&missing), true));
    assert!(!corefs_is_read_only(&view(&missing)));
    assert_eq!(corefs_get_last_modified(&view(&missing)), 0);

    let mut out = u64::MAX;
    assert_eq!(
        corefs_get_attributes_ex(&view(&missing), &mut out),
        CoreFsStatus::NotFound
    );
    assert_eq!(out, 0);
    assert_eq!(
        corefs_set_read_only_ex(&view(&missing), false),
        CoreFsStatus::NotFound
    );
}

#[test]
fn null_and_malformed_views_fail() {
    assert_eq!(corefs_get_attributes(std::ptr::null()), 0);
    assert!(!corefs_set_read_only(std::ptr::null(), true));
    assert!(!corefs_copy_attributes(std::ptr::null(), std::ptr::null(), false));

    let dangling = CoreFsPathView {
        ptr: std::ptr::null(),
        len: 4,
    };
    assert_eq!(
        corefs_set_read_only_ex(&dangling, true),
        CoreFsStatus::InvalidPath
    );

    let empty = CoreFsPathView {
        ptr: std::ptr::null(),
        len: 0,
    };
    let mut out = 7;
    assert_eq!(
        corefs_get_attributes_ex(&empty, &mut out),
        CoreFsStatus::NotFound
    );
    assert_eq!(out, 0);

    assert_eq!(
        corefs_get_attributes_ex(&empty, std::ptr::null_mut()),
        CoreFsStatus::InvalidArgument
    );
}

#[test]
fn set_read_only_round_trip() {
    let temp = TempDir::new("ffi_readonly");
    let file = temp.file("b.txt", b"b");
    set_mode(&file, 0o666);

    assert!(corefs_set_read_only(&view(&file), true));
    assert_eq!(mode_of(&file), 0o444);
    assert_ne!(corefs_get_attributes(&view(&file)) & STAT_READ_ONLY, 0);
    assert!(corefs_is_read_only(&view(&file)));

    assert_eq!(corefs_set_read_only_ex(&view(&file), false), CoreFsStatus::Ok);
    assert_eq!(mode_of(&file), 0o644);
    assert_eq!(corefs_get_attributes(&view(&file)) & STAT_READ_ONLY, 0);
}

#[test]
fn copy_attributes_and_alias() {
    let temp = TempDir::new("ffi_copy");
    let source = temp.file("src.txt", b"s");
    let first = temp.file("first.txt", b"1");
    let second = temp.file("second.txt", b"2");
    set_mtime_secs(&source, 1_400_000_000);
    set_mode(&source, 0o640);

    assert!(corefs_copy_attributes(&view(&source), &view(&first), true));
    assert_eq!(mode_of(&first), 0o640);
    assert_eq!(mtime_secs(&first), 1_400_000_000);

    assert!(corefs_copy_attributes_for_build_tool(
        &view(&source),
        &view(&second),
        false
    ));
    assert_eq!(mode_of(&second), 0o640);
    assert_ne!(mtime_secs(&second), 1_400_000_000);

    let missing = temp.path.join("missing");
    assert!(!corefs_copy_attributes(&view(&source), &view(&missing), true));
    assert_eq!(
        corefs_copy_attributes_ex(&view(&missing), &view(&first), true),
        CoreFsStatus::NotFound
    );
}

#[test]
fn wide_variants_always_fail() {
    let temp = TempDir::new("ffi_wide");
    let path = temp.path.to_string_lossy().into_owned();
    let (_units, wide_view) = wide(&path);

    assert!(!corefs_is_unicode_capable());
    assert!(corefs_is_case_sensitive());
    assert_eq!(corefs_get_attributes_w(&wide_view), 0);
    assert!(!corefs_set_read_only_w(&wide_view, true));
    assert!(!corefs_copy_attributes_w(&wide_view, &wide_view, true));
    assert_eq!(corefs_get_attributes_w(std::ptr::null()), 0);
}

#[test]
fn configure_validates_and_applies_flags() {
    let _guard = CONFIG_MUTEX.lock().unwrap();
    let temp = TempDir::new("ffi_config");
    let dir = temp.path.join("dir");
    fs::create_dir(&dir).unwrap();
    let link = temp.path.join("link");
    std::os::unix::fs::symlink(&dir, &link).unwrap();

    let short = CoreFsConfig {
        size: 4,
        ..CoreFsConfig::default()
    };
    assert_eq!(corefs_configure(&short), CoreFsStatus::InvalidArgument);
    assert_ne!(corefs_get_attributes(&view(&link)) & STAT_FOLDER, 0);

    let no_follow = CoreFsConfig {
        flags: COREFS_FLAG_NO_FOLLOW_SYMLINKS,
        ..CoreFsConfig::default()
    };
    assert_eq!(corefs_configure(&no_follow), CoreFsStatus::Ok);
    let bits = corefs_get_attributes(&view(&link));
    assert_ne!(bits & STAT_VALID, 0);
    assert_eq!(bits & STAT_FOLDER, 0);

    assert_eq!(corefs_configure(std::ptr::null()), CoreFsStatus::Ok);
    assert_ne!(corefs_get_attributes(&view(&link)) & STAT_FOLDER, 0);
}

#[test]
fn configure_copy_access_time() {
    let _guard = CONFIG_MUTEX.lock().unwrap();
    let temp = TempDir::new("ffi_atime");
    let source = temp.file("src.txt", b"s");
    let destination = temp.file("dst.txt", b"d");
    let stamp = std::time::UNIX_EPOCH + std::time::Duration::from_secs(1_300_000_000);
    let times = fs::FileTimes::new().set_accessed(stamp).set_modified(stamp);
    fs::OpenOptions::new()
        .write(true)
        .open(&source)
        .unwrap()
        .set_times(times)
        .unwrap();

    let config = CoreFsConfig {
        flags: COREFS_FLAG_COPY_ACCESS_TIME,
        ..CoreFsConfig::default()
    };
    assert_eq!(corefs_configure(&config), CoreFsStatus::Ok);
    let status = corefs_copy_attributes_ex(&view(&source), &view(&destination), true);
    assert_eq!(corefs_configure(std::ptr::null()), CoreFsStatus::Ok);
    assert_eq!(status, CoreFsStatus::Ok);

    let meta = fs::metadata(&destination).unwrap();
    assert_eq!(meta.accessed().unwrap(), stamp);
    assert_eq!(meta.modified().unwrap(), stamp);
}

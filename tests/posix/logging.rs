use std::ffi::c_void;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use corefs::{
    corefs_log_disable, corefs_log_set_callback, corefs_log_set_level, corefs_log_set_stderr,
    CoreFsLogLevel, CoreFsLogRecord, CoreFsStatus,
};

static LOG_COUNT: AtomicUsize = AtomicUsize::new(0);
static LOG_MUTEX: Mutex<()> = Mutex::new(());
const TARGET: &str = "corefs::logging_test";

extern "C" fn log_callback(record: *const CoreFsLogRecord, user_data: *mut c_void) {
    if record.is_null() {
        return;
    }
    let rec = unsafe { &*record };
    let target = unsafe { std::slice::from_raw_parts(rec.target.ptr as *const u8, rec.target.len) };
    if target != TARGET.as_bytes() {
        return;
    }
    LOG_COUNT.fetch_add(1, Ordering::SeqCst);
    if !user_data.is_null() {
        let counter = unsafe { &*(user_data as *const AtomicUsize) };
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn logging_callback_receives_records() {
    let _guard = LOG_MUTEX.lock().unwrap();
    corefs_log_disable();
    LOG_COUNT.store(0, Ordering::SeqCst);

    let user_counter = Box::new(AtomicUsize::new(0));
    let user_ptr = Box::into_raw(user_counter) as *mut c_void;

    let status = corefs_log_set_callback(Some(log_callback), user_ptr, CoreFsLogLevel::Info);
    assert_eq!(status, CoreFsStatus::Ok);

    log::info!(target: TARGET, "logging smoke test");
    log::debug!(target: TARGET, "debug should be filtered");

    assert_eq!(LOG_COUNT.load(Ordering::SeqCst), 1);
    let user_count = unsafe { &*(user_ptr as *const AtomicUsize) }.load(Ordering::SeqCst);
    assert_eq!(user_count, 1);

    corefs_log_disable();
    unsafe { drop(Box::from_raw(user_ptr as *mut AtomicUsize)) };
}

#[test]
fn logging_level_off_suppresses_records() {
    let _guard = LOG_MUTEX.lock().unwrap();
    corefs_log_disable();
    LOG_COUNT.store(0, Ordering::SeqCst);

    let status =
        corefs_log_set_callback(Some(log_callback), std::ptr::null_mut(), CoreFsLogLevel::Info);
    assert_eq!(status, CoreFsStatus::Ok);

    let status = corefs_log_set_level(CoreFsLogLevel::Off);
    assert_eq!(status, CoreFsStatus::Ok);

    log::info!(target: TARGET, "should not be logged");
    assert_eq!(LOG_COUNT.load(Ordering::SeqCst), 0);

    corefs_log_disable();
}

#[test]
fn disabled_logging_drops_records_and_stderr_is_selectable() {
    let _guard = LOG_MUTEX.lock().unwrap();
    corefs_log_disable();
    LOG_COUNT.store(0, Ordering::SeqCst);

    log::error!(target: TARGET, "dropped while disabled");
    assert_eq!(LOG_COUNT.load(Ordering::SeqCst), 0);

    assert_eq!(corefs_log_set_stderr(CoreFsLogLevel::Error), CoreFsStatus::Ok);
    assert_eq!(corefs_log_set_callback(None, std::ptr::null_mut(), CoreFsLogLevel::Trace), CoreFsStatus::Ok);
    log::error!(target: TARGET, "dropped after callback reset");
    assert_eq!(LOG_COUNT.load(Ordering::SeqCst), 0);
}

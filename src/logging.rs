use crate::common::types::{CoreFsLogLevel, CoreFsLogRecord, CoreFsStatus, CoreFsStringView};

use core::ffi::{c_char, c_void};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock};

pub type CoreFsLogCallback =
    Option<extern "C" fn(record: *const CoreFsLogRecord, user_data: *mut c_void)>;

const MODE_DISABLED: u8 = 0;
const MODE_STDERR: u8 = 1;
const MODE_CALLBACK: u8 = 2;

struct CallbackState {
    callback: CoreFsLogCallback,
    user_data: usize,
}

pub struct CoreFsLogger {
    mode: AtomicU8,
    level: AtomicU8,
    callback: Mutex<CallbackState>,
}

impl CoreFsLogger {
    const fn new() -> Self {
        Self {
            mode: AtomicU8::new(MODE_DISABLED),
            level: AtomicU8::new(CoreFsLogLevel::Off as u8),
            callback: Mutex::new(CallbackState {
                callback: None,
                user_data: 0,
            }),
        }
    }

    fn level(&self) -> Option<Level> {
        level_from_u8(self.level.load(Ordering::Relaxed))
    }

    fn set_level(&self, level: CoreFsLogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
        log::set_max_level(level_filter_from_u8(level as u8));
    }

    fn set_mode(&self, mode: u8) {
        self.mode.store(mode, Ordering::Relaxed);
    }

    fn set_callback(&self, callback: CoreFsLogCallback, user_data: *mut c_void) {
        if let Ok(mut state) = self.callback.lock() {
            state.callback = callback;
            state.user_data = user_data as usize;
        }
    }

    fn emit_callback(&self, record: &Record) {
        let Ok(state) = self.callback.lock() else {
            return;
        };
        let Some(callback) = state.callback else {
            return;
        };
        let message = record.args().to_string();
        let record = CoreFsLogRecord {
            level: corefs_level_from_log(record.level()),
            target: string_view_from_str(record.target()),
            message: string_view_from_str(&message),
            file: string_view_from_str(record.file().unwrap_or("")),
            line: record.line().unwrap_or(0),
        };
        callback(&record as *const CoreFsLogRecord, state.user_data as *mut c_void);
    }
}

impl Log for CoreFsLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let Some(level) = self.level() else {
            return false;
        };
        metadata.level() <= level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match self.mode.load(Ordering::Relaxed) {
            MODE_STDERR => eprintln!("[corefs][{}] {}", record.level(), record.args()),
            MODE_CALLBACK => self.emit_callback(record),
            _ => {}
        }
    }

    fn flush(&self) {}
}

static LOGGER: CoreFsLogger = CoreFsLogger::new();
static LOGGER_STATE: OnceLock<LoggerInstall> = OnceLock::new();

#[derive(Copy, Clone)]
enum LoggerInstall {
    Installed,
    External,
}

fn init_logger() -> LoggerInstall {
    *LOGGER_STATE.get_or_init(|| match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(LevelFilter::Off);
            LoggerInstall::Installed
        }
        Err(_) => LoggerInstall::External,
    })
}

fn level_filter_from_u8(level: u8) -> LevelFilter {
    match level_from_u8(level) {
        Some(level) => level.to_level_filter(),
        None => LevelFilter::Off,
    }
}

fn level_from_u8(level: u8) -> Option<Level> {
    match level {
        x if x == CoreFsLogLevel::Error as u8 => Some(Level::Error),
        x if x == CoreFsLogLevel::Warn as u8 => Some(Level::Warn),
        x if x == CoreFsLogLevel::Info as u8 => Some(Level::Info),
        x if x == CoreFsLogLevel::Debug as u8 => Some(Level::Debug),
        x if x == CoreFsLogLevel::Trace as u8 => Some(Level::Trace),
        _ => None,
    }
}

fn corefs_level_from_log(level: Level) -> CoreFsLogLevel {
    match level {
        Level::Error => CoreFsLogLevel::Error,
        Level::Warn => CoreFsLogLevel::Warn,
        Level::Info => CoreFsLogLevel::Info,
        Level::Debug => CoreFsLogLevel::Debug,
        Level::Trace => CoreFsLogLevel::Trace,
    }
}

fn string_view_from_str(value: &str) -> CoreFsStringView {
    CoreFsStringView {
        ptr: value.as_ptr() as *const c_char,
        len: value.len(),
    }
}

pub fn log_set_stderr(level: CoreFsLogLevel) -> CoreFsStatus {
    if matches!(init_logger(), LoggerInstall::External) {
        return CoreFsStatus::IoError;
    }
    LOGGER.set_mode(MODE_STDERR);
    LOGGER.set_level(level);
    CoreFsStatus::Ok
}

pub fn log_set_callback(
    callback: CoreFsLogCallback,
    user_data: *mut c_void,
    level: CoreFsLogLevel,
) -> CoreFsStatus {
    if callback.is_none() {
        return log_disable();
    }
    if matches!(init_logger(), LoggerInstall::External) {
        return CoreFsStatus::IoError;
    }
    LOGGER.set_callback(callback, user_data);
    LOGGER.set_mode(MODE_CALLBACK);
    LOGGER.set_level(level);
    CoreFsStatus::Ok
}

pub fn log_set_level(level: CoreFsLogLevel) -> CoreFsStatus {
    match init_logger() {
        LoggerInstall::Installed => LOGGER.set_level(level),
        LoggerInstall::External => log::set_max_level(level_filter_from_u8(level as u8)),
    }
    CoreFsStatus::Ok
}

pub fn log_disable() -> CoreFsStatus {
    match init_logger() {
        LoggerInstall::Installed => {
            LOGGER.set_mode(MODE_DISABLED);
            LOGGER.set_level(CoreFsLogLevel::Off);
        }
        LoggerInstall::External => log::set_max_level(LevelFilter::Off),
    }
    CoreFsStatus::Ok
}

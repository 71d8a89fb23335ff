pub mod library;
pub mod sys;

pub use library::PosixLibrary as PlatformLibrary;

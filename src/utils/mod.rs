//! Miscellaneous components used in the library.

mod logger;
pub use logger::init_logger;
pub use logger::init_logger_with_level;

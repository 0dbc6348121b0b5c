use log::LevelFilter;
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

/// Installs a logger printing the messages of level [`Info`](LevelFilter::Info) and above to the standard error.
///
/// Only the first call to a logger initialization function has an effect.
pub fn init_logger() {
    init_logger_with_level(LevelFilter::Info)
}

/// Installs a logger printing the messages of the given level and above to the standard error.
///
/// Only the first call to a logger initialization function has an effect.
/// If another logger was installed by some other mean, it is left in place.
pub fn init_logger_with_level(level: LevelFilter) {
    LOGGER_INIT.call_once(|| {
        let colors = fern::colors::ColoredLevelConfig::new().info(fern::colors::Color::Cyan);
        fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "![{:5}] {} {}",
                    colors.color(record.level()),
                    chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stderr())
            .apply()
            .unwrap_or(());
    });
}

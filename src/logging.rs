//! Logger setup.

/// Installs a global logger writing `[timestamp][target][LEVEL] message` lines to stderr.
pub fn init_logger(min_level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(min_level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}

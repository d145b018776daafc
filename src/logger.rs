use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::OpenOptions;
use std::path::Path;

/// Routes the `log` macros to a file; stdout belongs to the terminal UI.
/// Failing to open the file leaves logging disabled.
pub fn init(path: &Path, level: LevelFilter) {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, config, file);
        }
        Err(e) => eprintln!("kana-drill: cannot open log file {}: {}", path.display(), e),
    }
}

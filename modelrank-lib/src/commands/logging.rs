use super::Host;
use crate::Result;
use env_logger::Target;
use log::LevelFilter;
use ohno::IntoAppError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
const LOG_FILE_VAR: &str = "LOG_FILE";

/// Verbosity selected by `LOG_LEVEL`: `1` is info, `2` is debug, anything else is silent.
fn level_from(value: Option<&str>) -> Option<LevelFilter> {
    match value.map(str::trim) {
        Some("1") => Some(LevelFilter::Info),
        Some("2") => Some(LevelFilter::Debug),
        _ => None,
    }
}

/// Where log output should go, if anywhere.
///
/// Logging needs both a level and a file; without either, output is discarded.
fn destination(level: Option<&str>, file: Option<&Path>) -> Result<Option<(LevelFilter, File)>> {
    let (Some(level), Some(path)) = (level_from(level), file) else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .into_app_err_with(|| format!("opening log file '{}'", path.display()))?;

    Ok(Some((level, file)))
}

/// Configure logging from `LOG_LEVEL` and `LOG_FILE`.
///
/// Log output never goes to the host's output stream. If the log file can't be opened, a
/// warning goes to the host's error stream and the run carries on without logging.
pub fn init_logging<H: Host>(host: &mut H) {
    let level = std::env::var(LOG_LEVEL_VAR).ok();
    let file = std::env::var_os(LOG_FILE_VAR);

    match destination(level.as_deref(), file.as_deref().map(Path::new)) {
        Ok(Some((level, file))) => {
            // a logger may already be installed when running in-process more than once
            let _ = env_logger::Builder::new()
                .filter_level(level)
                .format_timestamp_millis()
                .format_module_path(false)
                .format_target(level >= LevelFilter::Debug)
                .target(Target::Pipe(Box::new(file)))
                .try_init();
        }
        Ok(None) => {}
        Err(e) => {
            let _ = writeln!(host.error(), "warning: {e}; logging is disabled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from() {
        assert_eq!(level_from(Some("1")), Some(LevelFilter::Info));
        assert_eq!(level_from(Some("2")), Some(LevelFilter::Debug));
        assert_eq!(level_from(Some(" 2 ")), Some(LevelFilter::Debug));
        assert_eq!(level_from(Some("0")), None);
        assert_eq!(level_from(Some("3")), None);
        assert_eq!(level_from(Some("debug")), None);
        assert_eq!(level_from(None), None);
    }

    #[test]
    fn test_no_file_discards() {
        assert!(destination(Some("2"), None).unwrap().is_none());
    }

    #[test]
    fn test_silent_level_discards() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("run.log");

        assert!(destination(Some("0"), Some(&path)).unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_file_is_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("run.log");

        let (level, _file) = destination(Some("1"), Some(&path)).unwrap().unwrap();
        assert_eq!(level, LevelFilter::Info);
        assert!(path.exists());
    }

    #[test]
    fn test_unopenable_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing-dir").join("run.log");

        let message = destination(Some("1"), Some(&path)).unwrap_err().to_string();
        assert!(message.contains("opening log file"));
    }
}

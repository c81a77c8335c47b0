use crate::common::*;

#[doc = r#"
    Installs the global logger.

    1. Level filter from `RUST_LOG`, `info` when unset
    2. Every line goes to `logs/` and is duplicated to stderr
    3. Files rotate daily under timestamped names, the latest 10 are kept

    # Returns
    * `LoggerHandle` - must stay alive for as long as the program logs

    # Panics
    When the logger cannot be started (bad `RUST_LOG` spec, unwritable `logs/`)
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_env_or_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(FileSpec::default().directory(log_directory))
                .duplicate_to_stderr(Duplicate::All)
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .format(custom_format)
                .start()
        })
        .unwrap_or_else(|e| panic!("Logger initialization failed: {:?}", e))
}

#[doc = "`[timestamp] [LEVEL] [file:line] message`"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        &record.args()
    )
}

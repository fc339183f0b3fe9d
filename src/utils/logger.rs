use chrono::Utc;
use log::info;
use std::io::Write;

/// Initializes env_logger once for a binary.
///
/// `RUST_LOG` wins when set; otherwise `fallback_level` (usually
/// `LOG_LEVEL` from the client config) is used.
pub fn init(fallback_level: &str) {
    let env = env_logger::Env::default().default_filter_or(fallback_level);
    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        info!("Logger initialized");
    }
}

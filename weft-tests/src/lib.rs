mod scripted;

use env_logger::Env;
use log::LevelFilter;

pub use scripted::*;

/// Route logs to the test output, `warn` and above unless `RUST_LOG` asks otherwise.
pub fn init_logs() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .is_test(true)
        .format_file(true)
        .format_line_number(true)
        .try_init();
}

/// Turns logging off until dropped, then restores the previous level (also on unwind).
#[must_use]
pub struct SilentLogs {
    level: LevelFilter,
}

impl SilentLogs {
    pub fn new() -> Self {
        let level = log::max_level();
        log::set_max_level(LevelFilter::Off);
        Self { level }
    }
}

impl Default for SilentLogs {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SilentLogs {
    fn drop(&mut self) {
        log::set_max_level(self.level);
    }
}

/// Run the statements with logging turned off.
#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let _silent = $crate::SilentLogs::new();
        $($code)+
    }};
}

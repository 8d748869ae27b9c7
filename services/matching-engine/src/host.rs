//! Host-delegated services
//!
//! The engine runs inside a confidentiality boundary and never touches the
//! ambient environment directly: wall-clock reads and diagnostics cross the
//! boundary through these traits. The host-side implementations live here
//! too; the trusted side only ever sees the trait objects.

use std::time::{SystemTime, UNIX_EPOCH};

/// Wall clock provided by the untrusted host.
pub trait HostClock: Send + Sync {
    /// Current time in seconds since the Unix epoch
    fn current_time(&self) -> i64;
}

/// Diagnostic sink provided by the untrusted host.
///
/// Both channels are best-effort; the engine never depends on their output.
pub trait HostLog: Send + Sync {
    /// Structured diagnostic message
    fn log_message(&self, text: &str);

    /// Raw stdout forwarding for trace prints
    fn print_string(&self, text: &str);
}

/// Host clock backed by the system time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl HostClock for SystemClock {
    fn current_time(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

/// Host log sink that forwards diagnostics to `tracing` and trace prints to
/// stdout.
#[derive(Debug, Default)]
pub struct TracingLog;

impl HostLog for TracingLog {
    fn log_message(&self, text: &str) {
        tracing::debug!(target: "engine", "{}", text);
    }

    fn print_string(&self, text: &str) {
        print!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_past_2024() {
        let clock = SystemClock;
        assert!(clock.current_time() > 1_700_000_000);
    }
}

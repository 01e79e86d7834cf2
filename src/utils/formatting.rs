//! Text formatting utilities for the Lens viewer.

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats a time value in milliseconds with an appropriate unit.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_time(0.25), "250 µs");
/// assert_eq!(format_time(12.345), "12.35 ms");
/// assert_eq!(format_time(2500.0), "2.500 s");
/// ```
pub fn format_time(ms: f64) -> String {
    let abs = ms.abs();
    if abs < 1.0 {
        format!("{:.0} µs", ms * 1000.0)
    } else if abs < 1000.0 {
        format!("{:.2} ms", ms)
    } else {
        format!("{:.3} s", ms / 1000.0)
    }
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_units() {
        assert_eq!(format_time(0.25), "250 µs");
        assert_eq!(format_time(12.345), "12.35 ms");
        assert_eq!(format_time(2500.0), "2.500 s");
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}

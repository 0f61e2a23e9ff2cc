use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock nanoseconds, used once to seed the engine's tie-break generator.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

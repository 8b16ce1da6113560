//! Deployment-time configuration constants

/// Tick interrupt rate in Hz (1000 Hz = 1 ms per tick)
pub const TICK_HZ: u32 = 1_000;

/// Capacity of the scheduler task table
pub const MAX_TASKS: usize = 8;

/// Startup banner sent by the echo task: clear screen, home cursor, greeting
pub const GREETING: &[u8] = b"\x1b[2J\x1b[HReady.\r\n";

/// Convert milliseconds to ticks, rounding down
pub const fn ms_to_ticks(ms: u32) -> u32 {
    ms.saturating_mul(TICK_HZ) / 1_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ms_conversion_at_1khz() {
        assert_eq!(ms_to_ticks(0), 0);
        assert_eq!(ms_to_ticks(1), 1);
        assert_eq!(ms_to_ticks(200), 200);
    }
}

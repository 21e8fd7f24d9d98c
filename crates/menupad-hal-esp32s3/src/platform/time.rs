use embedded_hal::delay::DelayNs;
use esp_hal::{delay::Delay, time::Instant};

use menupad_core::time::CadenceClock;

/// Millisecond clock seeded at construction, idling through the blocking
/// delay peripheral.
#[derive(Debug)]
pub struct CycleClock {
    started: Instant,
    delay: Delay,
}

impl CycleClock {
    pub fn new(delay: Delay) -> Self {
        Self {
            started: Instant::now(),
            delay,
        }
    }
}

impl CadenceClock for CycleClock {
    fn now_ms(&mut self) -> u64 {
        self.started.elapsed().as_millis()
    }

    fn idle_wait_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

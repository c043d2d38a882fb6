#![no_std]

use core::fmt;

use rp2040_hal::Timer;

use mcubench::{Clock, Instant};

/// The RP2040 64 bit, 1 MHz system timer
pub struct TimerClock<'a>(pub &'a Timer);

impl Clock for TimerClock<'_> {
    fn now(&self) -> Instant {
        Instant(self.0.get_counter().ticks())
    }
}

/// Line buffered `defmt` console
///
/// Each complete line is printed as one `defmt` frame.
/// Lines longer than the buffer are truncated.
pub struct DefmtLines {
    buf: [u8; 96],
    len: usize,
}

impl Default for DefmtLines {
    fn default() -> Self {
        Self {
            buf: [0; 96],
            len: 0,
        }
    }
}

impl DefmtLines {
    fn flush(&mut self) {
        let line = core::str::from_utf8(&self.buf[..self.len]).unwrap_or("<utf8>");
        defmt::println!("{=str}", line);
        self.len = 0;
    }
}

impl fmt::Write for DefmtLines {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.bytes() {
            if b == b'\n' {
                self.flush();
            } else if self.len < self.buf.len() {
                self.buf[self.len] = b;
                self.len += 1;
            }
        }
        Ok(())
    }
}

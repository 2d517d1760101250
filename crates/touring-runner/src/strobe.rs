//! Step pacing sources for the driver.

use std::io::BufRead;
use std::thread;

use emu_core::{MasterClock, Strobe};

/// One step per line of input. End of input stops the run.
pub struct KeypressStrobe<R> {
    input: R,
    line: String,
}

impl<R: BufRead> KeypressStrobe<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }
}

impl<R: BufRead> Strobe for KeypressStrobe<R> {
    fn wait(&mut self) -> bool {
        self.line.clear();
        match self.input.read_line(&mut self.line) {
            Ok(0) => false,
            Ok(_) => true,
            Err(e) => {
                log::warn!("stopping: input failed: {e}");
                false
            }
        }
    }
}

/// Sleeps one clock period before each step.
pub struct IntervalStrobe {
    clock: MasterClock,
}

impl IntervalStrobe {
    pub fn new(clock: MasterClock) -> Self {
        Self { clock }
    }
}

impl Strobe for IntervalStrobe {
    fn wait(&mut self) -> bool {
        thread::sleep(self.clock.period());
        true
    }
}

/// Never waits.
pub struct FreeRunning;

impl Strobe for FreeRunning {
    fn wait(&mut self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn keypress_counts_lines_then_stops() {
        let mut strobe = KeypressStrobe::new(Cursor::new("\n\nx\n"));
        assert!(strobe.wait());
        assert!(strobe.wait());
        assert!(strobe.wait());
        assert!(!strobe.wait());
        assert!(!strobe.wait());
    }

    #[test]
    fn unterminated_last_line_still_counts() {
        let mut strobe = KeypressStrobe::new(Cursor::new("go"));
        assert!(strobe.wait());
        assert!(!strobe.wait());
    }

    #[test]
    fn unpaced_interval_does_not_block() {
        let mut strobe = IntervalStrobe::new(MasterClock::new(0));
        assert!(strobe.wait());
    }
}

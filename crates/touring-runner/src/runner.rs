//! The step loop shared by every pacing mode, and the final report.

use std::fmt;
use std::io::{self, Write};

use emu_core::Strobe;
use emu_touring::Machine;

/// Driver options that don't depend on how steps are paced.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerConfig {
    /// Stop after this many steps.
    pub max_steps: Option<u64>,
    /// Print `Machine State: <n>` before every step.
    pub echo_state: bool,
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Halted,
    StrobeStopped,
    StepLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Halted => "halted",
            Self::StrobeStopped => "input ended",
            Self::StepLimit => "step limit reached",
        })
    }
}

/// Step `machine` until it halts, the strobe stops, or the step limit is hit.
pub fn run<S: Strobe, W: Write>(
    machine: &mut Machine,
    strobe: &mut S,
    out: &mut W,
    config: RunnerConfig,
) -> io::Result<StopReason> {
    let mut steps = 0u64;
    loop {
        if machine.is_halted() {
            return Ok(StopReason::Halted);
        }
        if config.max_steps.is_some_and(|max| steps >= max) {
            return Ok(StopReason::StepLimit);
        }
        if config.echo_state {
            writeln!(out, "Machine State: {}", machine.state())?;
            out.flush()?;
        }
        if !strobe.wait() {
            return Ok(StopReason::StrobeStopped);
        }
        machine.step();
        steps += 1;
    }
}

/// Write the final machine state: a JSON snapshot, or a two-line summary.
pub fn report<W: Write>(
    machine: &Machine,
    reason: StopReason,
    json: bool,
    out: &mut W,
) -> io::Result<()> {
    if json {
        let snapshot = serde_json::json!({
            "registers": machine.registers(),
            "halted": machine.is_halted(),
            "steps": machine.steps(),
            "stop": reason.to_string(),
        });
        serde_json::to_writer_pretty(&mut *out, &snapshot)?;
        writeln!(out)
    } else {
        writeln!(out, "Machine State: {}", machine.state())?;
        writeln!(
            out,
            "{reason} after {} steps (PC={:#06X}, flags={:#04X})",
            machine.steps(),
            machine.pc(),
            machine.flags()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Allows a fixed number of steps.
    struct Budget(u32);

    impl Strobe for Budget {
        fn wait(&mut self) -> bool {
            if self.0 == 0 {
                return false;
            }
            self.0 -= 1;
            true
        }
    }

    fn machine(program: &[u8]) -> Machine {
        Machine::new(program).expect("program fits")
    }

    #[test]
    fn runs_to_halt() {
        let mut m = machine(&[0x0C, 0x0C, 0xFF]);
        let mut out = Vec::new();
        let config = RunnerConfig {
            max_steps: None,
            echo_state: true,
        };
        let reason = run(&mut m, &mut Budget(100), &mut out, config).expect("vec write");
        assert_eq!(reason, StopReason::Halted);
        assert_eq!(m.state(), 2);
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Machine State: 0\nMachine State: 1\nMachine State: 2\n"
        );
    }

    #[test]
    fn strobe_can_stop_early() {
        let mut m = machine(&[0x0C, 0x0C, 0xFF]);
        let mut out = Vec::new();
        let reason =
            run(&mut m, &mut Budget(1), &mut out, RunnerConfig::default()).expect("vec write");
        assert_eq!(reason, StopReason::StrobeStopped);
        assert_eq!(m.state(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn step_limit_bounds_a_stall() {
        let mut m = machine(&[0x01]);
        let config = RunnerConfig {
            max_steps: Some(10),
            echo_state: false,
        };
        let reason = run(&mut m, &mut Budget(u32::MAX), &mut io::sink(), config).expect("sink");
        assert_eq!(reason, StopReason::StepLimit);
        assert_eq!(m.steps(), 10);
        assert_eq!(m.pc(), 0x0200);
    }

    #[test]
    fn json_report_is_a_single_document() {
        let mut m = machine(&[0x07, 0x05, 0x0E, 0x05, 0xFF]);
        m.run(10);
        let mut out = Vec::new();
        report(&m, StopReason::Halted, true, &mut out).expect("vec write");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
        assert_eq!(value["registers"]["pc"], 0x0204);
        assert_eq!(value["registers"]["state"], 5);
        assert_eq!(value["registers"]["flags"], 1);
        assert_eq!(value["halted"], true);
        assert_eq!(value["steps"], 3);
        assert_eq!(value["stop"], "halted");
    }

    #[test]
    fn text_report_ends_with_state() {
        let mut m = machine(&[0x0C, 0xFF]);
        m.run(10);
        let mut out = Vec::new();
        report(&m, StopReason::Halted, false, &mut out).expect("vec write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Machine State: 1\nhalted after 2 steps (PC=0x0201, flags=0x00)\n"
        );
    }
}

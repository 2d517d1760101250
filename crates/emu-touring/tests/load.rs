//! Property tests for program loading.

use emu_touring::{LOAD_ADDRESS, MAX_PROGRAM_LEN, Machine};
use proptest::prelude::*;

proptest! {
    #[test]
    fn program_bytes_round_trip(program in prop::collection::vec(any::<u8>(), 0..4096)) {
        let machine = Machine::new(&program).expect("program fits");
        let start = usize::from(LOAD_ADDRESS);
        let image = machine.memory().as_slice();
        prop_assert_eq!(&image[start..start + program.len()], program.as_slice());
        prop_assert!(image[..start].iter().all(|&b| b == 0));
        prop_assert!(image[start + program.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn oversized_programs_are_rejected(extra in 1usize..256) {
        let program = vec![0u8; MAX_PROGRAM_LEN + extra];
        prop_assert!(Machine::new(&program).is_err());
    }

    #[test]
    fn halted_machine_never_changes(value in any::<u8>(), extra_steps in 1usize..64) {
        let mut machine = Machine::new(&[0x07, value, 0xFF]).expect("program fits");
        machine.step();
        machine.step();
        prop_assert!(machine.is_halted());
        let registers = machine.registers();
        for _ in 0..extra_steps {
            machine.step();
        }
        prop_assert_eq!(machine.registers(), registers);
        prop_assert_eq!(machine.state(), value);
    }
}

#[test]
fn largest_program_round_trips() {
    let program: Vec<u8> = (0..MAX_PROGRAM_LEN).map(|i| i as u8).collect();
    let machine = Machine::new(&program).expect("exactly fits");
    assert_eq!(&machine.memory().as_slice()[usize::from(LOAD_ADDRESS)..], program.as_slice());
}

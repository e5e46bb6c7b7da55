use crate::cpu6502::{CPU, Fetched};

impl CPU {
    pub(crate) fn handle_jmp(&mut self, fetched: Fetched) -> u8 {
        let address = fetched.address.expect("BUG: address of JMP should be present");
        self.program_counter = address;
        0
    }
}

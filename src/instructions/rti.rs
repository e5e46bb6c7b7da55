use crate::cpu6502::{CPU, Fetched};

impl CPU {
    pub(crate) fn handle_rti(&mut self, _fetched: Fetched) -> u8 {
        // Flags first, then the return address; no +1 unlike RTS.
        self.status_register = self.pop_u8();
        self.program_counter = self.pop_u16();
        0
    }
}

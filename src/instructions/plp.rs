use crate::cpu6502::{CPU, Fetched};

impl CPU {
    pub(crate) fn handle_plp(&mut self, _fetched: Fetched) -> u8 {
        // The popped byte is restored verbatim, B field included.
        self.status_register = self.pop_u8();
        0
    }
}

use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_php(&mut self, _fetched: Fetched) -> u8 {
        // The status register is pushed with both bits of the B field forced
        // high; the in-register copy is left as it is.
        let mut status = self.status_register;
        status |= 1 << (StatusFlag::BreakCommand as u8);
        status |= 1 << (StatusFlag::Unused as u8);
        self.push_u8(status);
        0
    }
}

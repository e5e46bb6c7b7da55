use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_sec(&mut self, _fetched: Fetched) -> u8 {
        self.set_status_flag(StatusFlag::Carry, true);
        0
    }
}

use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_sei(&mut self, _fetched: Fetched) -> u8 {
        self.set_status_flag(StatusFlag::InterruptDisable, true);
        0
    }
}

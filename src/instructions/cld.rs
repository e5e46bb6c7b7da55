use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_cld(&mut self, _fetched: Fetched) -> u8 {
        self.set_status_flag(StatusFlag::DecimalMode, false);
        0
    }
}

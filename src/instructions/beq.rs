use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_beq(&mut self, fetched: Fetched) -> u8 {
        let offset = fetched.value.expect("BUG: branch offset of BEQ should be present");
        self.branch(self.get_status_flag(StatusFlag::Zero), offset as i8)
    }
}

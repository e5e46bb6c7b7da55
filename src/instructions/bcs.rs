use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_bcs(&mut self, fetched: Fetched) -> u8 {
        let offset = fetched.value.expect("BUG: branch offset of BCS should be present");
        self.branch(self.get_status_flag(StatusFlag::Carry), offset as i8)
    }
}

use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_bvc(&mut self, fetched: Fetched) -> u8 {
        let offset = fetched.value.expect("BUG: branch offset of BVC should be present");
        self.branch(!self.get_status_flag(StatusFlag::Overflow), offset as i8)
    }
}

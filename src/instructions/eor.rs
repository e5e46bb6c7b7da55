use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_eor(&mut self, fetched: Fetched) -> u8 {
        let value = fetched.value.expect("BUG: memory value of EOR should be present");
        self.accumulator ^= value;

        self.set_status_flag(StatusFlag::Zero, self.accumulator == 0);
        self.set_status_flag(StatusFlag::Negative, (self.accumulator & 0x80) != 0);

        u8::from(fetched.page_crossed)
    }
}

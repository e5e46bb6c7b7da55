use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_bit(&mut self, fetched: Fetched) -> u8 {
        let value = fetched.value.expect("BUG: memory value of BIT should be present");

        // Z comes from the AND, N and V are copied straight from the operand.
        // The accumulator itself is untouched.
        self.set_status_flag(StatusFlag::Zero, (self.accumulator & value) == 0);
        self.set_status_flag(StatusFlag::Negative, (value & 0x80) != 0);
        self.set_status_flag(StatusFlag::Overflow, (value & 0x40) != 0);

        0
    }
}

use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_lsr(&mut self, fetched: Fetched) -> u8 {
        let value = fetched.value.expect("BUG: memory value of LSR should be present");

        // Bit 0 falls into the carry; bit 7 of the result is always clear.
        self.set_status_flag(StatusFlag::Carry, (value & 0x01) != 0);

        let result = value >> 1;

        self.set_status_flag(StatusFlag::Zero, result == 0);
        self.set_status_flag(StatusFlag::Negative, false);

        if let Some(address) = fetched.address {
            self.write_u8(address, result);
        } else {
            // Accumulator mode
            self.accumulator = result;
        }

        0
    }
}

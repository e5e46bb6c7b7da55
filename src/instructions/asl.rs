use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_asl(&mut self, fetched: Fetched) -> u8 {
        let value = fetched.value.expect("BUG: memory value of ASL should be present");

        // Bit 7 falls into the carry.
        self.set_status_flag(StatusFlag::Carry, (value & 0x80) != 0);

        let result = value << 1;

        self.set_status_flag(StatusFlag::Zero, result == 0);
        self.set_status_flag(StatusFlag::Negative, (result & 0x80) != 0);

        if let Some(address) = fetched.address {
            self.write_u8(address, result);
        } else {
            // Accumulator mode
            self.accumulator = result;
        }

        0
    }
}

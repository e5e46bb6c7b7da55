use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_dec(&mut self, fetched: Fetched) -> u8 {
        let value = fetched.value.expect("BUG: memory value of DEC should be present");
        let address = fetched.address.expect("BUG: address of DEC should be present");

        let result = value.wrapping_sub(1);
        self.write_u8(address, result);

        self.set_status_flag(StatusFlag::Zero, result == 0);
        self.set_status_flag(StatusFlag::Negative, (result & 0x80) != 0);

        0
    }
}

use crate::cpu6502::{CPU, Fetched};

impl CPU {
    pub(crate) fn handle_stx(&mut self, fetched: Fetched) -> u8 {
        let address = fetched.address.expect("BUG: address of STX should be present");
        self.write_u8(address, self.x_register);
        0
    }
}

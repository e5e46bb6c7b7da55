use crate::cpu6502::{CPU, Fetched};

impl CPU {
    pub(crate) fn handle_sta(&mut self, fetched: Fetched) -> u8 {
        let address = fetched.address.expect("BUG: address of STA should be present");
        self.write_u8(address, self.accumulator);
        // Stores always pay the indexed upper bound; no page-cross penalty.
        0
    }
}

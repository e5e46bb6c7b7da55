use crate::cpu6502::{CPU, Fetched};

impl CPU {
    pub(crate) fn handle_cpy(&mut self, fetched: Fetched) -> u8 {
        let value = fetched.value.expect("BUG: memory value of CPY should be present");
        self.compare(self.y_register, value);
        0
    }
}

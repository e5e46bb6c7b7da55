use crate::cpu6502::{CPU, Fetched};

impl CPU {
    pub(crate) fn handle_cpx(&mut self, fetched: Fetched) -> u8 {
        let value = fetched.value.expect("BUG: memory value of CPX should be present");
        self.compare(self.x_register, value);
        0
    }
}

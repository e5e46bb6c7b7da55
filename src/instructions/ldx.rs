use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_ldx(&mut self, fetched: Fetched) -> u8 {
        let value = fetched.value.expect("BUG: memory value of LDX should be present");
        self.x_register = value;

        self.set_status_flag(StatusFlag::Zero, self.x_register == 0);
        self.set_status_flag(StatusFlag::Negative, (self.x_register & 0x80) != 0);

        u8::from(fetched.page_crossed)
    }
}

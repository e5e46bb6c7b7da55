use crate::cpu6502::{CPU, Fetched};

impl CPU {
    pub(crate) fn handle_sty(&mut self, fetched: Fetched) -> u8 {
        let address = fetched.address.expect("BUG: address of STY should be present");
        self.write_u8(address, self.y_register);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu6502::{Fetched, new_cpu};

    #[test]
    fn test_sty_writes_y_register() {
        let mut cpu = new_cpu();
        cpu.y_register = 0x30;
        cpu.handle_sty(Fetched::with_address(0x00, 0x0030));
        assert_eq!(cpu.read_u8(0x0030), 0x30);
    }
}

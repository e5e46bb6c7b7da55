use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_ora(&mut self, fetched: Fetched) -> u8 {
        let value = fetched.value.expect("BUG: memory value of ORA should be present");
        self.accumulator |= value;

        self.set_status_flag(StatusFlag::Zero, self.accumulator == 0);
        self.set_status_flag(StatusFlag::Negative, (self.accumulator & 0x80) != 0);

        u8::from(fetched.page_crossed)
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu6502::{Fetched, StatusFlag, new_cpu};

    #[test]
    fn test_ora_merges_bits() {
        let mut cpu = new_cpu();
        cpu.accumulator = 0x0F;
        cpu.handle_ora(Fetched::with_value(0xB0));
        assert_eq!(cpu.accumulator, 0xBF);
        assert!(!cpu.get_status_flag(StatusFlag::Zero));
        assert!(cpu.get_status_flag(StatusFlag::Negative));
    }

    #[test]
    fn test_ora_zero_stays_zero() {
        let mut cpu = new_cpu();
        cpu.accumulator = 0x00;
        cpu.handle_ora(Fetched::with_value(0x00));
        assert_eq!(cpu.accumulator, 0x00);
        assert!(cpu.get_status_flag(StatusFlag::Zero));
    }
}

use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_ror(&mut self, fetched: Fetched) -> u8 {
        let value = fetched.value.expect("BUG: memory value of ROR should be present");

        // The old carry rotates into bit 7, bit 0 becomes the new carry.
        let old_carry: u8 = if self.get_status_flag(StatusFlag::Carry) { 1 } else { 0 };
        self.set_status_flag(StatusFlag::Carry, (value & 0x01) != 0);

        let result = (old_carry << 7) | (value >> 1);

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

#[cfg(test)]
mod tests {
    use crate::cpu6502::{Fetched, StatusFlag, new_cpu};

    #[test]
    fn test_ror_accumulator() {
        let mut cpu = new_cpu();
        cpu.accumulator = 0x01;
        cpu.handle_ror(Fetched::with_value(0x01));
        assert_eq!(cpu.accumulator, 0x00);
        assert!(cpu.get_status_flag(StatusFlag::Carry));
        assert!(cpu.get_status_flag(StatusFlag::Zero));
    }

    #[test]
    fn test_ror_carry_in_becomes_bit_7() {
        let mut cpu = new_cpu();
        cpu.set_status_flag(StatusFlag::Carry, true);
        cpu.accumulator = 0x00;
        cpu.handle_ror(Fetched::with_value(0x00));
        assert_eq!(cpu.accumulator, 0x80);
        assert!(!cpu.get_status_flag(StatusFlag::Carry));
        assert!(cpu.get_status_flag(StatusFlag::Negative));
    }

    #[test]
    fn test_ror_memory() {
        let mut cpu = new_cpu();
        cpu.write_u8(0x0300, 0x02);
        cpu.handle_ror(Fetched::with_address(0x02, 0x0300));
        assert_eq!(cpu.read_u8(0x0300), 0x01);
        assert!(!cpu.get_status_flag(StatusFlag::Carry));
    }
}

use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_dex(&mut self, _fetched: Fetched) -> u8 {
        self.x_register = self.x_register.wrapping_sub(1);

        self.set_status_flag(StatusFlag::Zero, self.x_register == 0);
        self.set_status_flag(StatusFlag::Negative, (self.x_register & 0x80) != 0);

        0
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu6502::{Fetched, StatusFlag, new_cpu};

    #[test]
    fn test_dex_decrements() {
        let mut cpu = new_cpu();
        cpu.x_register = 0x08;
        cpu.handle_dex(Fetched::none());
        assert_eq!(cpu.x_register, 0x07);
        assert!(!cpu.get_status_flag(StatusFlag::Zero));
    }

    #[test]
    fn test_dex_wraps_below_zero() {
        let mut cpu = new_cpu();
        cpu.x_register = 0x00;
        cpu.handle_dex(Fetched::none());
        assert_eq!(cpu.x_register, 0xFF);
        assert!(cpu.get_status_flag(StatusFlag::Negative));
    }
}

use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_sbc(&mut self, fetched: Fetched) -> u8 {
        let value = fetched.value.expect("BUG: memory value of SBC should be present");

        if self.get_status_flag(StatusFlag::DecimalMode) {
            self.sbc_decimal(value);
        } else {
            // A - M - (1-C) is equivalent to A + !M + C, flags included.
            self.adc_binary(!value);
        }

        u8::from(fetched.page_crossed)
    }

    // Decimal mode subtracts digit by digit, correcting a borrowed nibble by
    // subtracting 6 to keep it in the 0-9 range.
    fn sbc_decimal(&mut self, value: u8) {
        let borrow: u8 = if self.get_status_flag(StatusFlag::Carry) { 0 } else { 1 };

        let result = (self.accumulator as u16)
            .wrapping_sub(value as u16)
            .wrapping_sub(borrow as u16);

        let mut lower = (self.accumulator & 0x0F)
            .wrapping_sub(value & 0x0F)
            .wrapping_sub(borrow);
        if lower & 0x80 != 0 {
            lower = lower.wrapping_sub(6);
        }

        // The high digit borrows one when the low digit went negative.
        let mut upper = (self.accumulator >> 4)
            .wrapping_sub(value >> 4)
            .wrapping_sub(lower >> 7);
        if upper & 0x80 != 0 {
            upper = upper.wrapping_sub(6);
        }

        let overflow =
            ((self.accumulator ^ value) as u16 & (self.accumulator as u16 ^ result) & 0x80) != 0;
        self.set_status_flag(StatusFlag::Overflow, overflow);
        // Carry means no borrow out of bit 8.
        self.set_status_flag(StatusFlag::Carry, result & 0xFF00 == 0);

        self.accumulator = (upper << 4) | (lower & 0xF);
        self.set_status_flag(StatusFlag::Zero, self.accumulator == 0);
        self.set_status_flag(StatusFlag::Negative, upper >> 7 != 0);
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu6502::{Fetched, StatusFlag, new_cpu};

    #[test]
    fn test_sbc_basic_subtraction() {
        let mut cpu = new_cpu();
        cpu.accumulator = 0x10;
        cpu.set_status_flag(StatusFlag::Carry, true); // No borrow
        cpu.handle_sbc(Fetched::with_value(0x05));
        assert_eq!(cpu.accumulator, 0x0B);
        assert!(cpu.get_status_flag(StatusFlag::Carry), "no borrow occurred");
        assert!(!cpu.get_status_flag(StatusFlag::Overflow));
        assert!(!cpu.get_status_flag(StatusFlag::Negative));
    }

    #[test]
    fn test_sbc_with_borrow_in() {
        let mut cpu = new_cpu();
        cpu.accumulator = 0x10;
        cpu.set_status_flag(StatusFlag::Carry, false); // With borrow
        cpu.handle_sbc(Fetched::with_value(0x05));
        assert_eq!(cpu.accumulator, 0x0A);
        assert!(cpu.get_status_flag(StatusFlag::Carry));
    }

    #[test]
    fn test_sbc_underflow_sets_borrow() {
        let mut cpu = new_cpu();
        cpu.accumulator = 0x10;
        cpu.set_status_flag(StatusFlag::Carry, false);
        cpu.handle_sbc(Fetched::with_value(0x10));
        // 0x10 - 0x10 - 1 borrows.
        assert_eq!(cpu.accumulator, 0xFF);
        assert!(!cpu.get_status_flag(StatusFlag::Carry), "borrow occurred");
        assert!(cpu.get_status_flag(StatusFlag::Negative));
        assert!(!cpu.get_status_flag(StatusFlag::Overflow));
        assert!(!cpu.get_status_flag(StatusFlag::Zero));
    }

    #[test]
    fn test_sbc_signed_overflow() {
        let mut cpu = new_cpu();
        cpu.accumulator = 0x80; // -128
        cpu.set_status_flag(StatusFlag::Carry, true);
        cpu.handle_sbc(Fetched::with_value(0x01)); // -128 - 1 overflows to +127
        assert_eq!(cpu.accumulator, 0x7F);
        assert!(cpu.get_status_flag(StatusFlag::Carry));
        assert!(cpu.get_status_flag(StatusFlag::Overflow));
        assert!(!cpu.get_status_flag(StatusFlag::Negative));
    }

    #[test]
    fn test_sbc_decimal_exact() {
        let mut cpu = new_cpu();
        cpu.set_status_flag(StatusFlag::DecimalMode, true);
        cpu.set_status_flag(StatusFlag::Carry, true);
        cpu.accumulator = 0x10;
        cpu.handle_sbc(Fetched::with_value(0x10));
        assert_eq!(cpu.accumulator, 0x00);
        assert!(cpu.get_status_flag(StatusFlag::Zero));
        assert!(cpu.get_status_flag(StatusFlag::Carry));
    }

    #[test]
    fn test_sbc_decimal_borrow_wraps_to_99() {
        let mut cpu = new_cpu();
        cpu.set_status_flag(StatusFlag::DecimalMode, true);
        cpu.set_status_flag(StatusFlag::Carry, true);
        cpu.accumulator = 0x00;
        cpu.handle_sbc(Fetched::with_value(0x01));
        // 0 - 1 wraps to 99 decimal with a borrow out.
        assert_eq!(cpu.accumulator, 0x99);
        assert!(!cpu.get_status_flag(StatusFlag::Carry));
        assert!(cpu.get_status_flag(StatusFlag::Negative));
        assert!(!cpu.get_status_flag(StatusFlag::Zero));
    }

    #[test]
    fn test_sbc_decimal_digit_borrow() {
        let mut cpu = new_cpu();
        cpu.set_status_flag(StatusFlag::DecimalMode, true);
        cpu.set_status_flag(StatusFlag::Carry, false);
        cpu.accumulator = 0x99;
        cpu.handle_sbc(Fetched::with_value(0x20));
        // 99 - 20 - 1 = 78 decimal.
        assert_eq!(cpu.accumulator, 0x78);
        assert!(cpu.get_status_flag(StatusFlag::Carry));
        assert!(!cpu.get_status_flag(StatusFlag::Negative));
    }

    #[test]
    fn test_sbc_page_cross_costs_extra_cycle() {
        let mut cpu = new_cpu();
        cpu.accumulator = 0x10;
        cpu.set_status_flag(StatusFlag::Carry, true);
        let extra = cpu.handle_sbc(Fetched::with_value(0x01).across_page());
        assert_eq!(extra, 1);
        assert_eq!(cpu.accumulator, 0x0F);
    }
}

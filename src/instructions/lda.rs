use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_lda(&mut self, fetched: Fetched) -> u8 {
        let value = fetched.value.expect("BUG: memory value of LDA should be present");
        self.accumulator = value;

        self.set_status_flag(StatusFlag::Zero, self.accumulator == 0);
        self.set_status_flag(StatusFlag::Negative, (self.accumulator & 0x80) != 0);

        u8::from(fetched.page_crossed)
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu6502::{Fetched, StatusFlag, new_cpu};

    #[test]
    fn test_lda_load_value() {
        let mut cpu = new_cpu();
        cpu.handle_lda(Fetched::with_value(0x42));
        assert_eq!(cpu.accumulator, 0x42);
        assert!(!cpu.get_status_flag(StatusFlag::Zero), "Zero flag should be clear");
        assert!(!cpu.get_status_flag(StatusFlag::Negative), "Negative flag should be clear");
    }

    #[test]
    fn test_lda_sets_zero_flag() {
        let mut cpu = new_cpu();
        cpu.handle_lda(Fetched::with_value(0x00));
        assert_eq!(cpu.accumulator, 0x00);
        assert!(cpu.get_status_flag(StatusFlag::Zero), "Zero flag should be set");
        assert!(!cpu.get_status_flag(StatusFlag::Negative), "Negative flag should be clear");
    }

    #[test]
    fn test_lda_sets_negative_flag() {
        let mut cpu = new_cpu();
        cpu.handle_lda(Fetched::with_value(0x80));
        assert_eq!(cpu.accumulator, 0x80);
        assert!(!cpu.get_status_flag(StatusFlag::Zero), "Zero flag should be clear");
        assert!(cpu.get_status_flag(StatusFlag::Negative), "Negative flag should be set");
    }

    #[test]
    fn test_lda_page_cross_costs_extra_cycle() {
        let mut cpu = new_cpu();
        let extra = cpu.handle_lda(Fetched::with_value(0x42).across_page());
        assert_eq!(extra, 1);
    }
}

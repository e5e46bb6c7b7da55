use crate::cpu6502::{CPU, Fetched, StatusFlag};

impl CPU {
    pub(crate) fn handle_clv(&mut self, _fetched: Fetched) -> u8 {
        self.set_status_flag(StatusFlag::Overflow, false);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu6502::{Fetched, StatusFlag, new_cpu};

    #[test]
    fn test_clv_clears_overflow() {
        let mut cpu = new_cpu();
        cpu.set_status_flag(StatusFlag::Overflow, true);
        cpu.handle_clv(Fetched::none());
        assert!(!cpu.get_status_flag(StatusFlag::Overflow));
    }
}

use crate::cpu6502::{CPU, Fetched};

impl CPU {
    pub(crate) fn handle_jsr(&mut self, fetched: Fetched) -> u8 {
        let target = fetched.address.expect("BUG: address of JSR should be present");

        // The program counter already sits past the operand; the 6502 pushes
        // the address of the instruction's last byte, which RTS re-increments.
        let return_address = self.program_counter.wrapping_sub(1);
        self.push_u16(return_address);

        self.program_counter = target;
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu6502::{Fetched, new_cpu};

    #[test]
    fn test_jsr_pushes_return_address_and_jumps() {
        let mut cpu = new_cpu();
        // Simulate the state after the opcode and both operand bytes of a JSR
        // at 0x8000 have been consumed.
        cpu.program_counter = 0x8003;
        cpu.handle_jsr(Fetched::with_address(0x00, 0x1234));

        assert_eq!(cpu.program_counter, 0x1234, "PC should jump to target address");
        assert_eq!(cpu.stack_pointer, 0xFB, "stack pointer should drop by two");
        // The address of the instruction's last byte (0x8002) is on the stack.
        assert_eq!(cpu.read_u16(0x01FC), 0x8002);
    }

    #[test]
    fn test_jsr_then_rts_resumes_after_call() {
        let mut cpu = new_cpu();
        cpu.program_counter = 0x8003;
        cpu.handle_jsr(Fetched::with_address(0x00, 0x1234));
        cpu.handle_rts(Fetched::none());
        assert_eq!(cpu.program_counter, 0x8003);
        assert_eq!(cpu.stack_pointer, 0xFD);
    }
}

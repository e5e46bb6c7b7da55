use once_cell::sync::Lazy;
use phf::phf_map;

use crate::memory::Memory;

pub struct CPU {
    // More info about the 6502 registers can be found here:
    // https://www.nesdev.org/obelisk-6502-guide/registers.html

    // The program counter is a 16 bit register that holds the memory address of
    // the next instruction to be executed. It is advanced automatically as
    // opcode and operand bytes are consumed, and rewritten by jumps, branches,
    // subroutine calls and interrupts.
    pub program_counter: u16,

    // The stack pointer is an 8 bit register holding the low byte of the next
    // free location on the stack. The stack itself is fixed at page 0x01,
    // memory space [0x0100 .. 0x01FF], and grows downwards.
    pub stack_pointer: u8,

    // The accumulator is an 8 bit register used for arithmetic and logical operations.
    pub accumulator: u8,

    // The 8 bit index register is most commonly used to hold counters or offsets for accessing memory.
    pub x_register: u8,

    // The Y register is similar to the X register in that it is available for holding counters or offsets.
    pub y_register: u8,

    // As instructions are executed a set of processor flags are set or cleared
    // to record the results of the operation. Each bit in the status register
    // represents a different flag:
    // Bit 7: Negative Flag (N)
    // Bit 6: Overflow Flag (V)
    // Bit 5: Unused (U) (second half of the two-bit B field)
    // Bit 4: Break Command (B)
    // Bit 3: Decimal Mode Flag (D)
    // Bit 2: Interrupt Disable (I)
    // Bit 1: Zero Flag (Z)
    // Bit 0: Carry Flag (C)
    // This byte is also the serialised form used by PHP/PLP/BRK/RTI.
    pub status_register: u8,

    // Flat 64KB address space. Mirroring, bank switching and I/O belong to the
    // surrounding system, not the core.
    pub memory: Memory,

    // Clock frequency in Hz. Advisory only; the core never sleeps.
    pub frequency: u32,

    // Global cycle counter (counts CPU cycles executed).
    pub cycles: u64,
}

impl core::fmt::Debug for CPU {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CPU")
            .field("accumulator", &format_args!("{:#04X}", self.accumulator))
            .field("x_register", &format_args!("{:#04X}", self.x_register))
            .field("y_register", &format_args!("{:#04X}", self.y_register))
            .field("stack_pointer", &format_args!("{:#04X}", self.stack_pointer))
            .field("program_counter", &format_args!("{:#06X}", self.program_counter))
            .field("status_register", &format_args!("{:#010b}", self.status_register))
            .field("cycles", &self.cycles)
            .field("memory", &"Memory { .. }")
            .finish()
    }
}

// Each flag corresponds to a bit in the status register.
// Values are the bit positions.
#[derive(Debug, Clone, Copy)]
pub enum StatusFlag {
    Carry = 0,
    Zero = 1,
    InterruptDisable = 2,
    DecimalMode = 3,
    BreakCommand = 4,
    Unused = 5,
    Overflow = 6,
    Negative = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Absolute,    // e.g. LDA $1234
    AbsoluteX,   // e.g. LDA $1234,X
    AbsoluteY,   // e.g. LDA $1234,Y
    Accumulator, // e.g. ASL A
    Immediate,   // e.g. LDA #$10
    Implied,     // e.g. CLC, INX (no operand)
    Indirect,    // e.g. JMP ($1234)
    IndirectX,   // e.g. LDA ($10,X)
    IndirectY,   // e.g. LDA ($10),Y
    Relative,    // e.g. BEQ +5
    ZeroPage,    // e.g. LDA $10
    ZeroPageX,   // e.g. LDA $10,X
    ZeroPageY,   // e.g. LDX $10,Y
}

impl AddressingMode {
    // Number of operand bytes following the opcode.
    pub(crate) fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

pub fn new_cpu() -> CPU {
    CPU {
        program_counter: 0x0000,
        stack_pointer: CPU::STACK_POINTER_DEFAULT,
        accumulator: 0x00,
        x_register: 0x00,
        y_register: 0x00,
        status_register: 1 << (StatusFlag::InterruptDisable as u8),
        memory: Memory::new(),
        frequency: CPU::DEFAULT_FREQUENCY,
        cycles: 0,
    }
}

// The operand bundle handed to an instruction handler after the addressing
// mode has been resolved. `value` is the byte read through the mode (the
// accumulator for the Accumulator mode, the branch offset for Relative),
// `address` the effective address for stores and read-modify-write forms,
// and `page_crossed` whether indexing stepped over a page boundary.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fetched {
    pub(crate) value: Option<u8>,
    pub(crate) address: Option<u16>,
    pub(crate) page_crossed: bool,
}

impl Fetched {
    pub(crate) fn none() -> Fetched {
        Fetched {
            value: None,
            address: None,
            page_crossed: false,
        }
    }

    pub(crate) fn with_value(value: u8) -> Fetched {
        Fetched {
            value: Some(value),
            address: None,
            page_crossed: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_address(value: u8, address: u16) -> Fetched {
        Fetched {
            value: Some(value),
            address: Some(address),
            page_crossed: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn across_page(mut self) -> Fetched {
        self.page_crossed = true;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Operand {
    pub(crate) opcode: u8,
    pub(crate) name: &'static str,
    // Function pointer to the instruction handler. Returns the extra cycles
    // consumed on top of the base count in this entry (page-cross penalty,
    // branch taken penalty).
    pub(crate) handler: fn(&mut CPU, Fetched) -> u8,
    pub(crate) addressing_mode: AddressingMode,
    pub(crate) bytes: u8,
    pub(crate) cycles: u8,
}

impl Operand {
    // Addressing modes each documented mnemonic accepts. Checked while the
    // decode table is built; a mismatch is a table bug and must never survive
    // to execution.
    fn allowed_modes(&self) -> &'static [AddressingMode] {
        use AddressingMode::*;
        match self.name {
            "ADC" | "AND" | "CMP" | "EOR" | "LDA" | "ORA" | "SBC" => &[
                Immediate, ZeroPage, ZeroPageX, Absolute, AbsoluteX, AbsoluteY, IndirectX,
                IndirectY,
            ],
            "ASL" | "LSR" | "ROL" | "ROR" => {
                &[Accumulator, ZeroPage, ZeroPageX, Absolute, AbsoluteX]
            }
            "BCC" | "BCS" | "BEQ" | "BMI" | "BNE" | "BPL" | "BVC" | "BVS" => &[Relative],
            "BIT" => &[ZeroPage, Absolute],
            "CPX" | "CPY" => &[Immediate, ZeroPage, Absolute],
            "DEC" | "INC" => &[ZeroPage, ZeroPageX, Absolute, AbsoluteX],
            "JMP" => &[Absolute, Indirect],
            "JSR" => &[Absolute],
            "LDX" => &[Immediate, ZeroPage, ZeroPageY, Absolute, AbsoluteY],
            "LDY" => &[Immediate, ZeroPage, ZeroPageX, Absolute, AbsoluteX],
            "STA" => &[ZeroPage, ZeroPageX, Absolute, AbsoluteX, AbsoluteY, IndirectX, IndirectY],
            "STX" => &[ZeroPage, ZeroPageY, Absolute],
            "STY" => &[ZeroPage, ZeroPageX, Absolute],
            _ => &[Implied],
        }
    }

    fn validate(&self) {
        if !self.allowed_modes().contains(&self.addressing_mode) {
            panic!(
                "decode table bug: {} ({:#04X}) does not support {:?}",
                self.name, self.opcode, self.addressing_mode
            );
        }
        if self.bytes != self.addressing_mode.operand_len() + 1 {
            panic!(
                "decode table bug: {} ({:#04X}) is {} bytes but {:?} takes {}",
                self.name,
                self.opcode,
                self.bytes,
                self.addressing_mode,
                self.addressing_mode.operand_len() + 1
            );
        }
    }
}

// 256-entry decode table, built once on first use. Opcodes missing from
// OPERAND_MAP are bound to the invalid handler, which reports the stray
// opcode and consumes zero cycles.
static DECODE_TABLE: Lazy<[Operand; 256]> = Lazy::new(|| {
    let invalid = Operand {
        opcode: 0x00,
        name: "???",
        handler: CPU::handle_invalid,
        addressing_mode: AddressingMode::Implied,
        bytes: 1,
        cycles: 0,
    };
    let mut table = [invalid; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        entry.opcode = i as u8;
    }
    for (code, operand) in CPU::OPERAND_MAP.entries() {
        assert_eq!(
            *code, operand.opcode,
            "decode table bug: entry {:#04X} claims opcode {:#04X}",
            code, operand.opcode
        );
        operand.validate();
        table[*code as usize] = *operand;
    }
    table
});

pub(crate) fn decode(opcode: u8) -> &'static Operand {
    &DECODE_TABLE[opcode as usize]
}

impl CPU {
    pub const STACK_BASE_ADDRESS: u16 = 0x0100;
    pub const STACK_POINTER_DEFAULT: u8 = 0xFD;
    pub const RESET_VECTOR_ADDRESS: u16 = 0xFFFC;
    pub const IRQ_VECTOR_ADDRESS: u16 = 0xFFFE;
    // NTSC NES clock rate; advisory only.
    pub const DEFAULT_FREQUENCY: u32 = 1_660_000;

    // List of all legal opcodes and their corresponding Operand definitions.
    pub(crate) const OPERAND_MAP: phf::Map<u8, Operand> = phf_map! {
        // ADC Instructions
        0x69u8 => Operand { opcode: 0x69, name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2 },
        0x65u8 => Operand { opcode: 0x65, name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0x75u8 => Operand { opcode: 0x75, name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4 },
        0x6Du8 => Operand { opcode: 0x6D, name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },
        0x7Du8 => Operand { opcode: 0x7D, name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0x79u8 => Operand { opcode: 0x79, name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0x61u8 => Operand { opcode: 0x61, name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6 },
        0x71u8 => Operand { opcode: 0x71, name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5 /* +1 if page crossed */ },

        // AND Instructions
        0x29u8 => Operand { opcode: 0x29, name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2 },
        0x25u8 => Operand { opcode: 0x25, name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0x35u8 => Operand { opcode: 0x35, name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4 },
        0x2Du8 => Operand { opcode: 0x2D, name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },
        0x3Du8 => Operand { opcode: 0x3D, name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0x39u8 => Operand { opcode: 0x39, name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0x21u8 => Operand { opcode: 0x21, name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6 },
        0x31u8 => Operand { opcode: 0x31, name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5 /* +1 if page crossed */ },

        // ASL Instructions
        0x0Au8 => Operand { opcode: 0x0A, name: "ASL", handler: CPU::handle_asl, addressing_mode: AddressingMode::Accumulator, bytes: 1, cycles: 2 },
        0x06u8 => Operand { opcode: 0x06, name: "ASL", handler: CPU::handle_asl, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 5 },
        0x16u8 => Operand { opcode: 0x16, name: "ASL", handler: CPU::handle_asl, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 6 },
        0x0Eu8 => Operand { opcode: 0x0E, name: "ASL", handler: CPU::handle_asl, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6 },
        0x1Eu8 => Operand { opcode: 0x1E, name: "ASL", handler: CPU::handle_asl, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 7 },

        // BCC Instructions
        0x90u8 => Operand { opcode: 0x90, name: "BCC", handler: CPU::handle_bcc, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2 /* +1 if taken, +2 if to a new page */ },

        // BCS Instructions
        0xB0u8 => Operand { opcode: 0xB0, name: "BCS", handler: CPU::handle_bcs, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2 /* +1 if taken, +2 if to a new page */ },

        // BEQ Instructions
        0xF0u8 => Operand { opcode: 0xF0, name: "BEQ", handler: CPU::handle_beq, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2 /* +1 if taken, +2 if to a new page */ },

        // BIT Instructions
        0x24u8 => Operand { opcode: 0x24, name: "BIT", handler: CPU::handle_bit, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0x2Cu8 => Operand { opcode: 0x2C, name: "BIT", handler: CPU::handle_bit, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },

        // BMI Instructions
        0x30u8 => Operand { opcode: 0x30, name: "BMI", handler: CPU::handle_bmi, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2 /* +1 if taken, +2 if to a new page */ },

        // BNE Instructions
        0xD0u8 => Operand { opcode: 0xD0, name: "BNE", handler: CPU::handle_bne, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2 /* +1 if taken, +2 if to a new page */ },

        // BPL Instructions
        0x10u8 => Operand { opcode: 0x10, name: "BPL", handler: CPU::handle_bpl, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2 /* +1 if taken, +2 if to a new page */ },

        // BRK Instructions
        0x00u8 => Operand { opcode: 0x00, name: "BRK", handler: CPU::handle_brk, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 7 },

        // BVC Instructions
        0x50u8 => Operand { opcode: 0x50, name: "BVC", handler: CPU::handle_bvc, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2 /* +1 if taken, +2 if to a new page */ },

        // BVS Instructions
        0x70u8 => Operand { opcode: 0x70, name: "BVS", handler: CPU::handle_bvs, addressing_mode: AddressingMode::Relative, bytes: 2, cycles: 2 /* +1 if taken, +2 if to a new page */ },

        // CLC Instructions
        0x18u8 => Operand { opcode: 0x18, name: "CLC", handler: CPU::handle_clc, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // CLD Instructions
        0xD8u8 => Operand { opcode: 0xD8, name: "CLD", handler: CPU::handle_cld, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // CLI Instructions
        0x58u8 => Operand { opcode: 0x58, name: "CLI", handler: CPU::handle_cli, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // CLV Instructions
        0xB8u8 => Operand { opcode: 0xB8, name: "CLV", handler: CPU::handle_clv, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // CMP Instructions
        0xC9u8 => Operand { opcode: 0xC9, name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2 },
        0xC5u8 => Operand { opcode: 0xC5, name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0xD5u8 => Operand { opcode: 0xD5, name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4 },
        0xCDu8 => Operand { opcode: 0xCD, name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },
        0xDDu8 => Operand { opcode: 0xDD, name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0xD9u8 => Operand { opcode: 0xD9, name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0xC1u8 => Operand { opcode: 0xC1, name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6 },
        0xD1u8 => Operand { opcode: 0xD1, name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5 /* +1 if page crossed */ },

        // CPX Instructions
        0xE0u8 => Operand { opcode: 0xE0, name: "CPX", handler: CPU::handle_cpx, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2 },
        0xE4u8 => Operand { opcode: 0xE4, name: "CPX", handler: CPU::handle_cpx, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0xECu8 => Operand { opcode: 0xEC, name: "CPX", handler: CPU::handle_cpx, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },

        // CPY Instructions
        0xC0u8 => Operand { opcode: 0xC0, name: "CPY", handler: CPU::handle_cpy, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2 },
        0xC4u8 => Operand { opcode: 0xC4, name: "CPY", handler: CPU::handle_cpy, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0xCCu8 => Operand { opcode: 0xCC, name: "CPY", handler: CPU::handle_cpy, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },

        // DEC Instructions
        0xC6u8 => Operand { opcode: 0xC6, name: "DEC", handler: CPU::handle_dec, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 5 },
        0xD6u8 => Operand { opcode: 0xD6, name: "DEC", handler: CPU::handle_dec, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 6 },
        0xCEu8 => Operand { opcode: 0xCE, name: "DEC", handler: CPU::handle_dec, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6 },
        0xDEu8 => Operand { opcode: 0xDE, name: "DEC", handler: CPU::handle_dec, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 7 },

        // DEX Instructions
        0xCAu8 => Operand { opcode: 0xCA, name: "DEX", handler: CPU::handle_dex, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // DEY Instructions
        0x88u8 => Operand { opcode: 0x88, name: "DEY", handler: CPU::handle_dey, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // EOR Instructions
        0x49u8 => Operand { opcode: 0x49, name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2 },
        0x45u8 => Operand { opcode: 0x45, name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0x55u8 => Operand { opcode: 0x55, name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4 },
        0x4Du8 => Operand { opcode: 0x4D, name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },
        0x5Du8 => Operand { opcode: 0x5D, name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0x59u8 => Operand { opcode: 0x59, name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0x41u8 => Operand { opcode: 0x41, name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6 },
        0x51u8 => Operand { opcode: 0x51, name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5 /* +1 if page crossed */ },

        // INC Instructions
        0xE6u8 => Operand { opcode: 0xE6, name: "INC", handler: CPU::handle_inc, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 5 },
        0xF6u8 => Operand { opcode: 0xF6, name: "INC", handler: CPU::handle_inc, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 6 },
        0xEEu8 => Operand { opcode: 0xEE, name: "INC", handler: CPU::handle_inc, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6 },
        0xFEu8 => Operand { opcode: 0xFE, name: "INC", handler: CPU::handle_inc, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 7 },

        // INX Instructions
        0xE8u8 => Operand { opcode: 0xE8, name: "INX", handler: CPU::handle_inx, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // INY Instructions
        0xC8u8 => Operand { opcode: 0xC8, name: "INY", handler: CPU::handle_iny, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // JMP Instructions
        0x4Cu8 => Operand { opcode: 0x4C, name: "JMP", handler: CPU::handle_jmp, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 3 },
        0x6Cu8 => Operand { opcode: 0x6C, name: "JMP", handler: CPU::handle_jmp, addressing_mode: AddressingMode::Indirect, bytes: 3, cycles: 5 },

        // JSR Instructions
        0x20u8 => Operand { opcode: 0x20, name: "JSR", handler: CPU::handle_jsr, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6 },

        // LDA Instructions
        0xA9u8 => Operand { opcode: 0xA9, name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2 },
        0xA5u8 => Operand { opcode: 0xA5, name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0xB5u8 => Operand { opcode: 0xB5, name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4 },
        0xADu8 => Operand { opcode: 0xAD, name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },
        0xBDu8 => Operand { opcode: 0xBD, name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0xB9u8 => Operand { opcode: 0xB9, name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0xA1u8 => Operand { opcode: 0xA1, name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6 },
        0xB1u8 => Operand { opcode: 0xB1, name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5 /* +1 if page crossed */ },

        // LDX Instructions
        0xA2u8 => Operand { opcode: 0xA2, name: "LDX", handler: CPU::handle_ldx, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2 },
        0xA6u8 => Operand { opcode: 0xA6, name: "LDX", handler: CPU::handle_ldx, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0xB6u8 => Operand { opcode: 0xB6, name: "LDX", handler: CPU::handle_ldx, addressing_mode: AddressingMode::ZeroPageY, bytes: 2, cycles: 4 },
        0xAEu8 => Operand { opcode: 0xAE, name: "LDX", handler: CPU::handle_ldx, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },
        0xBEu8 => Operand { opcode: 0xBE, name: "LDX", handler: CPU::handle_ldx, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4 /* +1 if page crossed */ },

        // LDY Instructions
        0xA0u8 => Operand { opcode: 0xA0, name: "LDY", handler: CPU::handle_ldy, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2 },
        0xA4u8 => Operand { opcode: 0xA4, name: "LDY", handler: CPU::handle_ldy, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0xB4u8 => Operand { opcode: 0xB4, name: "LDY", handler: CPU::handle_ldy, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4 },
        0xACu8 => Operand { opcode: 0xAC, name: "LDY", handler: CPU::handle_ldy, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },
        0xBCu8 => Operand { opcode: 0xBC, name: "LDY", handler: CPU::handle_ldy, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4 /* +1 if page crossed */ },

        // LSR Instructions
        0x4Au8 => Operand { opcode: 0x4A, name: "LSR", handler: CPU::handle_lsr, addressing_mode: AddressingMode::Accumulator, bytes: 1, cycles: 2 },
        0x46u8 => Operand { opcode: 0x46, name: "LSR", handler: CPU::handle_lsr, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 5 },
        0x56u8 => Operand { opcode: 0x56, name: "LSR", handler: CPU::handle_lsr, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 6 },
        0x4Eu8 => Operand { opcode: 0x4E, name: "LSR", handler: CPU::handle_lsr, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6 },
        0x5Eu8 => Operand { opcode: 0x5E, name: "LSR", handler: CPU::handle_lsr, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 7 },

        // NOP Instructions
        0xEAu8 => Operand { opcode: 0xEA, name: "NOP", handler: CPU::handle_nop, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // ORA Instructions
        0x09u8 => Operand { opcode: 0x09, name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2 },
        0x05u8 => Operand { opcode: 0x05, name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0x15u8 => Operand { opcode: 0x15, name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4 },
        0x0Du8 => Operand { opcode: 0x0D, name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },
        0x1Du8 => Operand { opcode: 0x1D, name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0x19u8 => Operand { opcode: 0x19, name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0x01u8 => Operand { opcode: 0x01, name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6 },
        0x11u8 => Operand { opcode: 0x11, name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5 /* +1 if page crossed */ },

        // PHA Instructions
        0x48u8 => Operand { opcode: 0x48, name: "PHA", handler: CPU::handle_pha, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 3 },

        // PHP Instructions
        0x08u8 => Operand { opcode: 0x08, name: "PHP", handler: CPU::handle_php, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 3 },

        // PLA Instructions
        0x68u8 => Operand { opcode: 0x68, name: "PLA", handler: CPU::handle_pla, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 4 },

        // PLP Instructions
        0x28u8 => Operand { opcode: 0x28, name: "PLP", handler: CPU::handle_plp, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 4 },

        // ROL Instructions
        0x2Au8 => Operand { opcode: 0x2A, name: "ROL", handler: CPU::handle_rol, addressing_mode: AddressingMode::Accumulator, bytes: 1, cycles: 2 },
        0x26u8 => Operand { opcode: 0x26, name: "ROL", handler: CPU::handle_rol, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 5 },
        0x36u8 => Operand { opcode: 0x36, name: "ROL", handler: CPU::handle_rol, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 6 },
        0x2Eu8 => Operand { opcode: 0x2E, name: "ROL", handler: CPU::handle_rol, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6 },
        0x3Eu8 => Operand { opcode: 0x3E, name: "ROL", handler: CPU::handle_rol, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 7 },

        // ROR Instructions
        0x6Au8 => Operand { opcode: 0x6A, name: "ROR", handler: CPU::handle_ror, addressing_mode: AddressingMode::Accumulator, bytes: 1, cycles: 2 },
        0x66u8 => Operand { opcode: 0x66, name: "ROR", handler: CPU::handle_ror, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 5 },
        0x76u8 => Operand { opcode: 0x76, name: "ROR", handler: CPU::handle_ror, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 6 },
        0x6Eu8 => Operand { opcode: 0x6E, name: "ROR", handler: CPU::handle_ror, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 6 },
        0x7Eu8 => Operand { opcode: 0x7E, name: "ROR", handler: CPU::handle_ror, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 7 },

        // RTI Instructions
        0x40u8 => Operand { opcode: 0x40, name: "RTI", handler: CPU::handle_rti, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 6 },

        // RTS Instructions
        0x60u8 => Operand { opcode: 0x60, name: "RTS", handler: CPU::handle_rts, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 6 },

        // SBC Instructions
        0xE9u8 => Operand { opcode: 0xE9, name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::Immediate, bytes: 2, cycles: 2 },
        0xE5u8 => Operand { opcode: 0xE5, name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0xF5u8 => Operand { opcode: 0xF5, name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4 },
        0xEDu8 => Operand { opcode: 0xED, name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },
        0xFDu8 => Operand { opcode: 0xFD, name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0xF9u8 => Operand { opcode: 0xF9, name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 4 /* +1 if page crossed */ },
        0xE1u8 => Operand { opcode: 0xE1, name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6 },
        0xF1u8 => Operand { opcode: 0xF1, name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 5 /* +1 if page crossed */ },

        // SEC Instructions
        0x38u8 => Operand { opcode: 0x38, name: "SEC", handler: CPU::handle_sec, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // SED Instructions
        0xF8u8 => Operand { opcode: 0xF8, name: "SED", handler: CPU::handle_sed, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // SEI Instructions
        0x78u8 => Operand { opcode: 0x78, name: "SEI", handler: CPU::handle_sei, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // STA Instructions
        0x85u8 => Operand { opcode: 0x85, name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0x95u8 => Operand { opcode: 0x95, name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4 },
        0x8Du8 => Operand { opcode: 0x8D, name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },
        0x9Du8 => Operand { opcode: 0x9D, name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::AbsoluteX, bytes: 3, cycles: 5 },
        0x99u8 => Operand { opcode: 0x99, name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::AbsoluteY, bytes: 3, cycles: 5 },
        0x81u8 => Operand { opcode: 0x81, name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::IndirectX, bytes: 2, cycles: 6 },
        0x91u8 => Operand { opcode: 0x91, name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::IndirectY, bytes: 2, cycles: 6 },

        // STX Instructions
        0x86u8 => Operand { opcode: 0x86, name: "STX", handler: CPU::handle_stx, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0x96u8 => Operand { opcode: 0x96, name: "STX", handler: CPU::handle_stx, addressing_mode: AddressingMode::ZeroPageY, bytes: 2, cycles: 4 },
        0x8Eu8 => Operand { opcode: 0x8E, name: "STX", handler: CPU::handle_stx, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },

        // STY Instructions
        0x84u8 => Operand { opcode: 0x84, name: "STY", handler: CPU::handle_sty, addressing_mode: AddressingMode::ZeroPage, bytes: 2, cycles: 3 },
        0x94u8 => Operand { opcode: 0x94, name: "STY", handler: CPU::handle_sty, addressing_mode: AddressingMode::ZeroPageX, bytes: 2, cycles: 4 },
        0x8Cu8 => Operand { opcode: 0x8C, name: "STY", handler: CPU::handle_sty, addressing_mode: AddressingMode::Absolute, bytes: 3, cycles: 4 },

        // TAX Instructions
        0xAAu8 => Operand { opcode: 0xAA, name: "TAX", handler: CPU::handle_tax, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // TAY Instructions
        0xA8u8 => Operand { opcode: 0xA8, name: "TAY", handler: CPU::handle_tay, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // TSX Instructions
        0xBAu8 => Operand { opcode: 0xBA, name: "TSX", handler: CPU::handle_tsx, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // TXA Instructions
        0x8Au8 => Operand { opcode: 0x8A, name: "TXA", handler: CPU::handle_txa, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // TXS Instructions
        0x9Au8 => Operand { opcode: 0x9A, name: "TXS", handler: CPU::handle_txs, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },

        // TYA Instructions
        0x98u8 => Operand { opcode: 0x98, name: "TYA", handler: CPU::handle_tya, addressing_mode: AddressingMode::Implied, bytes: 1, cycles: 2 },
    };

    pub fn read_u8(&self, addr: u16) -> u8 {
        self.memory.get(addr)
    }

    pub fn write_u8(&mut self, addr: u16, value: u8) {
        self.memory.set(addr, value);
    }

    pub fn read_u16(&self, addr: u16) -> u16 {
        // We use little-endian format: low byte at addr, high byte at addr + 1.
        // Addresses wrap around the 64KB boundary.
        u16::from_le_bytes([self.read_u8(addr), self.read_u8(addr.wrapping_add(1))])
    }

    pub fn write_u16(&mut self, addr: u16, value: u16) {
        let [low, high] = u16::to_le_bytes(value);
        self.write_u8(addr, low);
        self.write_u8(addr.wrapping_add(1), high);
    }

    /// Reads the byte at the program counter and advances past it.
    pub(crate) fn take(&mut self) -> u8 {
        let byte = self.read_u8(self.program_counter);
        self.program_counter = self.program_counter.wrapping_add(1);
        byte
    }

    /// Reads the little-endian word at the program counter and advances past it.
    pub(crate) fn take_u16(&mut self) -> u16 {
        let word = self.read_u16(self.program_counter);
        self.program_counter = self.program_counter.wrapping_add(2);
        word
    }

    pub fn set_status_flag(&mut self, flag: StatusFlag, value: bool) {
        if value {
            self.status_register |= 1 << (flag as u8);
        } else {
            self.status_register &= !(1 << (flag as u8));
        }
    }

    pub fn get_status_flag(&self, flag: StatusFlag) -> bool {
        (self.status_register & (1 << (flag as u8))) != 0
    }

    /// Pushes a byte onto the stack.
    pub fn push_u8(&mut self, value: u8) {
        let stack_addr = Self::STACK_BASE_ADDRESS + self.stack_pointer as u16;
        self.write_u8(stack_addr, value);
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
    }

    /// Pushes a 16-bit word onto the stack.
    /// The high byte is pushed first, then the low byte, so they are stored in little-endian format on the stack.
    pub fn push_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_u8(high);
        self.push_u8(low);
    }

    /// Pops a byte from the stack.
    pub fn pop_u8(&mut self) -> u8 {
        self.stack_pointer = self.stack_pointer.wrapping_add(1);
        let stack_addr = Self::STACK_BASE_ADDRESS + self.stack_pointer as u16;
        self.read_u8(stack_addr)
    }

    /// Pops a 16-bit word from the stack.
    /// The low byte is popped first, then the high byte, as they are stored in little-endian format on the stack.
    pub fn pop_u16(&mut self) -> u16 {
        let low = self.pop_u8();
        let high = self.pop_u8();
        u16::from_le_bytes([low, high])
    }

    /// Copies a byte sequence into memory starting at the current program
    /// counter. Test helper; hosts normally fill memory through `write_u8`.
    pub fn program_write(&mut self, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            self.memory
                .set(self.program_counter.wrapping_add(i as u16), byte);
        }
    }

    /// Sends the RESET signal: reloads the program counter from the reset
    /// vector. Registers and flags are left as they are.
    pub fn reset(&mut self) {
        self.program_counter = self.read_u16(Self::RESET_VECTOR_ADDRESS);
    }

    /// Sets all register values to their power-on defaults.
    pub fn reset_registers(&mut self) {
        self.accumulator = 0;
        self.x_register = 0;
        self.y_register = 0;
        self.stack_pointer = Self::STACK_POINTER_DEFAULT;
        self.program_counter = 0;
    }

    /// Sets all flags to their power-on defaults (only Interrupt Disable set).
    pub fn reset_flags(&mut self) {
        self.status_register = 1 << (StatusFlag::InterruptDisable as u8);
    }

    /// Executes the instruction at the program counter and returns the number
    /// of cycles it consumed. The count is also added to the global cycle
    /// counter.
    pub fn step(&mut self) -> u8 {
        let pc = self.program_counter;
        let opcode = self.take();
        let operand = decode(opcode);
        log::trace!(
            "{:04X}  {:02X}  {} ({:?})",
            pc,
            opcode,
            operand.name,
            operand.addressing_mode
        );

        let fetched = self.fetch_operand(operand.addressing_mode);
        let extra = (operand.handler)(self, fetched);

        let total = operand.cycles + extra;
        self.cycles += u64::from(total);
        total
    }

    // Resolves the addressing mode against the current program counter,
    // consuming the operand bytes.
    fn fetch_operand(&mut self, mode: AddressingMode) -> Fetched {
        match mode {
            AddressingMode::Implied => Fetched::none(),
            AddressingMode::Accumulator => Fetched::with_value(self.accumulator),
            // Branch handlers turn the raw offset into a target themselves.
            AddressingMode::Relative => Fetched::with_value(self.take()),
            _ => {
                let (address, page_crossed) = self.operand_address(mode);
                Fetched {
                    value: Some(self.read_u8(address)),
                    address: Some(address),
                    page_crossed,
                }
            }
        }
    }

    /// Computes the effective address for an addressing mode, advancing the
    /// program counter past the operand bytes. The second half of the pair
    /// reports whether indexing crossed a page boundary (only ever true for
    /// AbsoluteX, AbsoluteY and IndirectY).
    pub(crate) fn operand_address(&mut self, mode: AddressingMode) -> (u16, bool) {
        match mode {
            AddressingMode::Immediate => {
                let addr = self.program_counter;
                self.program_counter = addr.wrapping_add(1);
                (addr, false)
            }

            AddressingMode::ZeroPage => (self.take() as u16, false),

            // Zero-page indexing wraps within the page, never into 0x01xx.
            AddressingMode::ZeroPageX => (self.take().wrapping_add(self.x_register) as u16, false),

            AddressingMode::ZeroPageY => (self.take().wrapping_add(self.y_register) as u16, false),

            AddressingMode::Absolute => (self.take_u16(), false),

            AddressingMode::AbsoluteX => {
                let base = self.take_u16();
                let effective = base.wrapping_add(self.x_register as u16);
                (effective, (base & 0xFF00) != (effective & 0xFF00))
            }

            AddressingMode::AbsoluteY => {
                let base = self.take_u16();
                let effective = base.wrapping_add(self.y_register as u16);
                (effective, (base & 0xFF00) != (effective & 0xFF00))
            }

            AddressingMode::Indirect => {
                let ptr = self.take_u16();
                // 6502 hardware bug: when the pointer sits at 0xXXFF the high
                // byte is fetched from the start of the same page, not the
                // next one.
                let low = self.read_u8(ptr);
                let high = self.read_u8((ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF));
                (u16::from_le_bytes([low, high]), false)
            }

            AddressingMode::IndirectX => {
                let ptr = self.take().wrapping_add(self.x_register);
                let low = self.read_u8(ptr as u16);
                let high = self.read_u8(ptr.wrapping_add(1) as u16);
                (u16::from_le_bytes([low, high]), false)
            }

            AddressingMode::IndirectY => {
                let ptr = self.take();
                let low = self.read_u8(ptr as u16);
                let high = self.read_u8(ptr.wrapping_add(1) as u16);
                let base = u16::from_le_bytes([low, high]);
                let effective = base.wrapping_add(self.y_register as u16);
                (effective, (base & 0xFF00) != (effective & 0xFF00))
            }

            // Implied and Accumulator consume nothing; Relative is resolved by
            // the branch helper. None of them produce a memory address.
            AddressingMode::Implied | AddressingMode::Accumulator | AddressingMode::Relative => {
                panic!("No effective address for {:?}", mode)
            }
        }
    }

    /// Branch helper: centralizes branch behavior for relative branches.
    /// `condition` indicates whether the branch should be taken.
    /// `offset` is the signed 8-bit relative offset, applied to the program
    /// counter after the operand byte has been consumed.
    /// Returns additional cycles: 0 if not taken, +1 if taken, +2 if the
    /// target lies on a different page.
    pub(crate) fn branch(&mut self, condition: bool, offset: i8) -> u8 {
        if !condition {
            return 0;
        }
        let old_pc = self.program_counter;
        let target = old_pc.wrapping_add(offset as u16);
        self.program_counter = target;
        if (old_pc & 0xFF00) != (target & 0xFF00) { 2 } else { 1 }
    }

    // Bound to every opcode the decode table has no mapping for. Reports the
    // stray opcode once and consumes no cycles; the host decides whether to
    // keep stepping.
    pub(crate) fn handle_invalid(&mut self, _fetched: Fetched) -> u8 {
        let pc = self.program_counter.wrapping_sub(1);
        log::error!("invalid opcode {:#04X} at {:#06X}", self.read_u8(pc), pc);
        0
    }
}

//! Single-step example
//!
//! Walks a program one instruction at a time, decoding the next opcode
//! before each step and reporting faults without stopping.
//!
//! This example shows:
//! - Peeking at the next instruction through Instruction::decode()
//! - Stepping the CPU manually with step()
//! - Treating unknown opcodes as diagnostics rather than fatal errors

use micro6502::{AddressSpace, Cpu, Instruction, MemoryBus};

fn main() {
    println!("micro6502 - Single Step Example");
    println!("===============================\n");

    let mut cpu = Cpu::new(AddressSpace::new());

    // Jump to a program body that contains a stray data byte
    cpu.memory_mut().write(0xFFFC, 0x20); // JSR $0600
    cpu.memory_mut().write(0xFFFD, 0x00); // Low byte
    cpu.memory_mut().write(0xFFFE, 0x06); // High byte

    cpu.memory_mut().load(
        0x0600,
        &[
            0xA9, 0xC0, // LDA #$C0
            0x02, // Not an instruction
            0xA5, 0x44, // LDA $44
        ],
    );
    cpu.memory_mut().write(0x0044, 0x07);

    for step in 1..=4 {
        let pc = cpu.pc();
        let opcode = cpu.memory().read(pc);
        let decoded = Instruction::decode(opcode);

        // Raw instruction bytes: the opcode plus however many operand
        // bytes the addressing mode calls for
        let mut bytes = format!("{:02X}", opcode);
        if let Some(instruction) = decoded {
            for i in 1..=instruction.addressing_mode().operand_size() {
                bytes.push_str(&format!(" {:02X}", cpu.memory().read(pc.wrapping_add(i))));
            }
        }

        let name = match decoded {
            Some(instruction) => instruction.mnemonic(),
            None => "???",
        };

        println!("Step {}: 0x{:04X}  {:<8}  {}", step, pc, bytes, name);

        match cpu.step() {
            Ok(()) => {
                println!(
                    "        A=0x{:02X} PC=0x{:04X} SP=0x{:04X} cycles={}",
                    cpu.a(),
                    cpu.pc(),
                    cpu.sp(),
                    cpu.cycles_remaining()
                );
            }
            Err(fault) => {
                println!("        Fault: {} (execution continues)", fault);
            }
        }
    }

    println!("\nFinal A: 0x{:02X}", cpu.a());
}

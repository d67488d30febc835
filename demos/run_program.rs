//! Budgeted run example
//!
//! Demonstrates loading a program, running it against a cycle budget,
//! and inspecting the resulting CPU and memory state.
//!
//! This example shows:
//! - Creating a CPU over a 64KB address space
//! - Loading code and data after construction (reset zeroes the bus)
//! - Calling a subroutine with JSR
//! - Executing to an exact cycle budget
//! - Dumping registers and memory

use micro6502::{AddressSpace, Cpu, MemoryBus};

fn main() {
    println!("micro6502 - Budgeted Run Example");
    println!("================================\n");

    // Construction resets the CPU and zeroes the bus, so code and data
    // are loaded afterwards through memory_mut()
    let mut cpu = Cpu::new(AddressSpace::new());

    // Execution starts at 0xFFFC: jump straight into the subroutine
    cpu.memory_mut().write(0xFFFC, 0x20); // JSR $8000
    cpu.memory_mut().write(0xFFFD, 0x00); // Low byte
    cpu.memory_mut().write(0xFFFE, 0x80); // High byte

    // Subroutine at 0x8000: one LDA per addressing mode
    cpu.memory_mut().load(
        0x8000,
        &[
            0xA9, 0x42, // LDA #$42
            0xA5, 0x10, // LDA $10
            0xB5, 0x20, // LDA $20,X
        ],
    );

    // Data for the zero page reads
    cpu.memory_mut().write(0x0010, 0x99);
    cpu.memory_mut().write(0x0024, 0x37); // 0x20 + X with X = 0x04
    cpu.set_x(0x04);

    println!("Loaded JSR at 0xFFFC and a 3-instruction subroutine at 0x8000\n");
    print_state(&cpu);

    // JSR (6) + LDA # (2) + LDA zp (3) + LDA zp,X (4) = 15 cycles
    let faults = cpu.execute(15);

    println!("\nRan with a budget of 15 cycles");
    if faults.is_empty() {
        println!("No faults reported");
    } else {
        for fault in &faults {
            println!("Fault: {}", fault);
        }
    }

    println!();
    print_state(&cpu);

    println!("\nZero page:");
    dump(&cpu, 0x0000, 48);
    println!("\nStack page:");
    dump(&cpu, 0x0100, 16);
    println!("\nSubroutine:");
    dump(&cpu, 0x8000, 16);
}

/// Print the register file in the usual 6502 layout
fn print_state(cpu: &Cpu<AddressSpace>) {
    println!("CPU State:");
    println!("----------");
    println!("  PC: 0x{:04X}", cpu.pc());
    println!("  SP: 0x{:04X}", cpu.sp());
    println!("  A:  0x{:02X}", cpu.a());
    println!("  X:  0x{:02X}", cpu.x());
    println!("  Y:  0x{:02X}", cpu.y());
    println!(
        "  Status: 0x{:02X} (NV-BDIZC: {:08b})",
        cpu.status(),
        cpu.status()
    );
    println!("  Cycles remaining: {}", cpu.cycles_remaining());
}

/// Hex dump with an ASCII column, 16 bytes per row
fn dump(cpu: &Cpu<AddressSpace>, start: u16, len: u16) {
    for row in 0..(len / 16) {
        let base = start + row * 16;
        print!("  {:04X}: ", base);
        for offset in 0..16 {
            print!("{:02X} ", cpu.memory().read(base + offset));
        }
        print!(" |");
        for offset in 0..16 {
            let byte = cpu.memory().read(base + offset);
            if (0x20..=0x7E).contains(&byte) {
                print!("{}", byte as char);
            } else {
                print!(".");
            }
        }
        println!("|");
    }
}

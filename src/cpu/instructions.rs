// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! Implementation of the Z80-like cpu's instructions.

use super::Cpu;
use super::alu::*;
use super::state::registers::*;

use crate::GameboyError;

/// Instructions implementations returns the amount of cycles taken,
/// of the relevant error if occured.
pub type InsnResult = Result<usize, GameboyError>;
/// An instruction's method.
pub type Instruction = fn(&mut Cpu) -> InsnResult;

/// The eight-way ALU operation selector encoded in bits 5-3 of opcodes
/// 0x80-0xBF (and used directly by the 0xC6/.../0xFE immediate forms).
#[derive(Clone, Copy, PartialEq)]
pub enum AluOp {
	/// ADD
	Add,
	/// ADC
	Adc,
	/// SUB
	Sub,
	/// SBC
	Sbc,
	/// AND
	And,
	/// XOR
	Xor,
	/// OR
	Or,
	/// CP
	Cp,
}

/// Internal utilities for implementing repeating logic once.
mod util {
	use super::*;

	/// Reads one of the eight `r8` operand slots (`B,C,D,E,H,L,(HL),A`).
	pub fn get_r8(cpu: &mut Cpu, idx: u8) -> Result<u8, GameboyError> {
		if idx == 6 {
			let address = cpu.registers.get(Register::HL);
			cpu.mmap.read(address)
		} else {
			Ok(cpu.registers.get(R8_SLOTS[idx as usize]) as u8)
		}
	}

	/// Writes one of the eight `r8` operand slots (`B,C,D,E,H,L,(HL),A`).
	pub fn set_r8(cpu: &mut Cpu, idx: u8, value: u8) -> Result<(), GameboyError> {
		if idx == 6 {
			let address = cpu.registers.get(Register::HL);
			cpu.mmap.write(address, value)
		} else {
			cpu.registers.set(R8_SLOTS[idx as usize], value as u16);
			Ok(())
		}
	}

	/// `LD r,r'` (and `LD r,(HL)` / `LD (HL),r`, since `(HL)` is just slot 6).
	pub fn ld_r_r(cpu: &mut Cpu, dst: u8, src: u8) -> InsnResult {
		let value = get_r8(cpu, src)?;
		set_r8(cpu, dst, value)?;

		Ok(if dst == 6 || src == 6 { 8 } else { 4 })
	}

	/// `LD r,d8` / `LD (HL),d8`.
	pub fn ld_r_d8(cpu: &mut Cpu, dst: u8) -> InsnResult {
		let value: u8 = cpu.fetch()?;
		set_r8(cpu, dst, value)?;

		Ok(if dst == 6 { 12 } else { 8 })
	}

	/// Applies an `AluOp` to `A` and `x`, storing the result back into `A`
	/// unless `op` is `Cp` (which only sets flags).
	fn apply_alu(cpu: &mut Cpu, op: AluOp, x: u8) {
		let a = cpu.registers.get(Register::A) as u8;

		let result = match op {
			AluOp::Add => alu8::add(cpu, a, x, false),
			AluOp::Adc => {
				let carry = cpu.registers.flag(Flag::C);
				alu8::add(cpu, a, x, carry)
			},
			AluOp::Sub => alu8::sub(cpu, a, x, false),
			AluOp::Sbc => {
				let carry = cpu.registers.flag(Flag::C);
				alu8::sub(cpu, a, x, carry)
			},
			AluOp::And => alu8::and(cpu, a, x),
			AluOp::Xor => alu8::xor(cpu, a, x),
			AluOp::Or => alu8::or(cpu, a, x),
			AluOp::Cp => {
				alu8::sub(cpu, a, x, false);
				a
			},
		};

		if op != AluOp::Cp {
			cpu.registers.set(Register::A, result as u16);
		}
	}

	/// `<ALU> A,r8`.
	pub fn alu_r(cpu: &mut Cpu, op: AluOp, src: u8) -> InsnResult {
		let x = get_r8(cpu, src)?;
		apply_alu(cpu, op, x);

		Ok(if src == 6 { 8 } else { 4 })
	}

	/// `<ALU> A,d8`.
	pub fn alu_d8(cpu: &mut Cpu, op: AluOp) -> InsnResult {
		let x: u8 = cpu.fetch()?;
		apply_alu(cpu, op, x);

		Ok(8)
	}

	/// `INC r8` / `INC (HL)`.
	pub fn inc_r8(cpu: &mut Cpu, idx: u8) -> InsnResult {
		let value = get_r8(cpu, idx)?;
		let result = alu8::inc(cpu, value);
		set_r8(cpu, idx, result)?;

		Ok(if idx == 6 { 12 } else { 4 })
	}

	/// `DEC r8` / `DEC (HL)`.
	pub fn dec_r8(cpu: &mut Cpu, idx: u8) -> InsnResult {
		let value = get_r8(cpu, idx)?;
		let result = alu8::dec(cpu, value);
		set_r8(cpu, idx, result)?;

		Ok(if idx == 6 { 12 } else { 4 })
	}

	/// `INC rr`.
	pub fn inc_rr(cpu: &mut Cpu, reg: Register) -> InsnResult {
		assert!(get_type(&reg) == RegisterType::Wide);

		let value = cpu.registers.get(reg);
		cpu.registers.set(reg, value.wrapping_add(1));

		Ok(8)
	}

	/// `DEC rr`.
	pub fn dec_rr(cpu: &mut Cpu, reg: Register) -> InsnResult {
		assert!(get_type(&reg) == RegisterType::Wide);

		let value = cpu.registers.get(reg);
		cpu.registers.set(reg, value.wrapping_sub(1));

		Ok(8)
	}

	/// `ADD HL,rr`.
	pub fn add_hl_rr(cpu: &mut Cpu, reg: Register) -> InsnResult {
		assert!(get_type(&reg) == RegisterType::Wide);

		let hl = cpu.registers.get(Register::HL);
		let rr = cpu.registers.get(reg);
		let result = alu16::add_hl(cpu, hl, rr);
		cpu.registers.set(Register::HL, result);

		Ok(8)
	}

	/// Loads a 16-bit immediate into the given wide register.
	pub fn load_imm16_to_register(cpu: &mut Cpu, reg: Register) -> InsnResult {
		assert!(get_type(&reg) == RegisterType::Wide);

		let value: u16 = cpu.fetch()?;
		cpu.registers.set(reg, value);

		Ok(12)
	}

	/// Moves the source register to the destination (for the wide
	/// register-to-register forms, `LD SP,HL`).
	pub fn move_registers(cpu: &mut Cpu, dst: Register, src: Register) -> InsnResult {
		assert!((get_type(&src) == RegisterType::Wide) == (get_type(&dst) == RegisterType::Wide));

		let value = cpu.registers.get(src);
		cpu.registers.set(dst, value);

		Ok(8)
	}

	/// Reads the memory at the address held by `mem` into `A`.
	pub fn load_mem_to_a(cpu: &mut Cpu, mem: Register) -> InsnResult {
		assert!(get_type(&mem) == RegisterType::Wide);

		let address = cpu.registers.get(mem);
		let value: u8 = cpu.mmap.read(address)?;
		cpu.registers.set(Register::A, value as u16);

		Ok(8)
	}

	/// Writes `A` to the memory at the address held by `mem`.
	pub fn store_a_into_mem(cpu: &mut Cpu, mem: Register) -> InsnResult {
		assert!(get_type(&mem) == RegisterType::Wide);

		let value: u8 = cpu.registers.get(Register::A) as u8;
		let address = cpu.registers.get(mem);
		cpu.mmap.write(address, value)?;

		Ok(8)
	}

	/// Places a 16-bit register on the stack.
	pub fn push_nn(cpu: &mut Cpu, reg: Register) -> InsnResult {
		assert!(get_type(&reg) == RegisterType::Wide);

		let mut address: u16 = cpu.registers.get(Register::SP);
		let value: u16 = cpu.registers.get(reg);

		cpu.registers.set(Register::SP, address.wrapping_sub(2));

		address = address.wrapping_sub(1);
		cpu.mmap.write(address, ((value >> 8) & 0xFF) as u8)?;

		address = address.wrapping_sub(1);
		cpu.mmap.write(address, (value & 0xFF) as u8)?;

		Ok(16)
	}

	/// Pops a 16-bit register from the stack.
	pub fn pop_nn(cpu: &mut Cpu, reg: Register) -> InsnResult {
		assert!(get_type(&reg) == RegisterType::Wide);

		let address: u16 = cpu.registers.get(Register::SP);

		let low = cpu.mmap.read(address)? as u16;
		let high = cpu.mmap.read(address.wrapping_add(1))? as u16;

		cpu.registers.set(reg, (high << 8) | low);
		cpu.registers.set(Register::SP, address.wrapping_add(2));

		Ok(12)
	}

	/// `JR e`.
	pub fn jump_relative(cpu: &mut Cpu) -> InsnResult {
		let offset: i8 = cpu.fetch::<u8>()? as i8;
		let address: u16 = cpu.registers.get(Register::PC);
		cpu.registers.set(Register::PC, address.wrapping_add((offset as i16) as u16));

		Ok(12)
	}

	/// `JR cc,e`: 12 cycles if the branch is taken, 8 if not.
	pub fn jump_relative_conditional(cpu: &mut Cpu, flag: Flag, expected_state: bool) -> InsnResult {
		let offset: i8 = cpu.fetch::<u8>()? as i8;

		if cpu.registers.flag(flag) == expected_state {
			let address: u16 = cpu.registers.get(Register::PC);
			cpu.registers.set(Register::PC, address.wrapping_add((offset as i16) as u16));
			Ok(12)
		} else {
			Ok(8)
		}
	}

	/// `JP cc,nn`: 16 cycles if taken, 12 if not.
	pub fn jump_conditional(cpu: &mut Cpu, flag: Flag, expected_state: bool) -> InsnResult {
		let dest: u16 = cpu.fetch()?;

		if cpu.registers.flag(flag) == expected_state {
			cpu.registers.set(Register::PC, dest);
			Ok(16)
		} else {
			Ok(12)
		}
	}

	/// `CALL cc,nn`: 24 cycles if taken, 12 if not.
	pub fn call_conditional(cpu: &mut Cpu, flag: Flag, expected_state: bool) -> InsnResult {
		let dest: u16 = cpu.fetch()?;

		if cpu.registers.flag(flag) == expected_state {
			push_nn(cpu, Register::PC)?;
			cpu.registers.set(Register::PC, dest);
			Ok(24)
		} else {
			Ok(12)
		}
	}

	/// `RET cc`: 20 cycles if taken, 8 if not.
	pub fn ret_conditional(cpu: &mut Cpu, flag: Flag, expected_state: bool) -> InsnResult {
		if cpu.registers.flag(flag) == expected_state {
			pop_nn(cpu, Register::PC)?;
			Ok(20)
		} else {
			Ok(8)
		}
	}

	/// `RST n`.
	pub fn rst(cpu: &mut Cpu, target: u16) -> InsnResult {
		push_nn(cpu, Register::PC)?;
		cpu.registers.set(Register::PC, target);

		Ok(16)
	}

	/// CB-prefixed rotate (`RLC`/`RRC`/`RL`/`RR`): `Z` reflects the result.
	pub fn cb_rotate(cpu: &mut Cpu, idx: u8, op: fn(&mut Cpu, u8, bool) -> u8) -> InsnResult {
		let value = get_r8(cpu, idx)?;
		let result = op(cpu, value, true);
		set_r8(cpu, idx, result)?;

		Ok(if idx == 6 { 16 } else { 8 })
	}

	/// CB-prefixed shift (`SLA`/`SRA`/`SWAP`/`SRL`).
	pub fn cb_shift(cpu: &mut Cpu, idx: u8, op: fn(&mut Cpu, u8) -> u8) -> InsnResult {
		let value = get_r8(cpu, idx)?;
		let result = op(cpu, value);
		set_r8(cpu, idx, result)?;

		Ok(if idx == 6 { 16 } else { 8 })
	}

	/// `BIT n,r8`.
	pub fn cb_bit(cpu: &mut Cpu, idx: u8, bit: u8) -> InsnResult {
		let value = get_r8(cpu, idx)?;
		alu8::bit(cpu, value, bit);

		Ok(if idx == 6 { 12 } else { 8 })
	}

	/// `RES n,r8`.
	pub fn cb_res(cpu: &mut Cpu, idx: u8, bit: u8) -> InsnResult {
		let value = get_r8(cpu, idx)?;
		let result = alu8::res(value, bit);
		set_r8(cpu, idx, result)?;

		Ok(if idx == 6 { 16 } else { 8 })
	}

	/// `SET n,r8`.
	pub fn cb_set(cpu: &mut Cpu, idx: u8, bit: u8) -> InsnResult {
		let value = get_r8(cpu, idx)?;
		let result = alu8::set(value, bit);
		set_r8(cpu, idx, result)?;

		Ok(if idx == 6 { 16 } else { 8 })
	}
}

use util::*;

/// Enter the given interrupt vector. Pushes `PC`, clears `IME` and jumps.
pub fn enter_interrupt(cpu: &mut Cpu, int_vector: u16) -> InsnResult {
	assert!(int_vector & 0xFF00 == 0);

	let cycles = push_nn(cpu, Register::PC)? + 4;

	cpu.registers.set_ime(false);
	cpu.registers.set(Register::PC, int_vector);

	Ok(cycles)
}

/// nop
pub fn opcode_00(_cpu: &mut Cpu) -> InsnResult {
	Ok(4)
}

/// ld BC, d16
pub fn opcode_01(cpu: &mut Cpu) -> InsnResult {
	load_imm16_to_register(cpu, Register::BC)
}

/// ld (BC), A
pub fn opcode_02(cpu: &mut Cpu) -> InsnResult {
	store_a_into_mem(cpu, Register::BC)
}

/// inc BC
pub fn opcode_03(cpu: &mut Cpu) -> InsnResult {
	inc_rr(cpu, Register::BC)
}

/// inc B
pub fn opcode_04(cpu: &mut Cpu) -> InsnResult {
	inc_r8(cpu, 0)
}

/// dec B
pub fn opcode_05(cpu: &mut Cpu) -> InsnResult {
	dec_r8(cpu, 0)
}

/// ld B, d8
pub fn opcode_06(cpu: &mut Cpu) -> InsnResult {
	ld_r_d8(cpu, 0)
}

/// rlca
pub fn opcode_07(cpu: &mut Cpu) -> InsnResult {
	let a = cpu.registers.get(Register::A) as u8;
	let result = alu8::rlc(cpu, a, false);
	cpu.registers.set(Register::A, result as u16);

	Ok(4)
}

/// ld (nn), SP
pub fn opcode_08(cpu: &mut Cpu) -> InsnResult {
	let address: u16 = cpu.fetch()?;
	let value = cpu.registers.get(Register::SP);

	cpu.mmap.write(address, (value & 0xFF) as u8)?;
	cpu.mmap.write(address.wrapping_add(1), ((value >> 8) & 0xFF) as u8)?;

	Ok(20)
}

/// add HL, BC
pub fn opcode_09(cpu: &mut Cpu) -> InsnResult {
	add_hl_rr(cpu, Register::BC)
}

/// ld A, (BC)
pub fn opcode_0a(cpu: &mut Cpu) -> InsnResult {
	load_mem_to_a(cpu, Register::BC)
}

/// dec BC
pub fn opcode_0b(cpu: &mut Cpu) -> InsnResult {
	dec_rr(cpu, Register::BC)
}

/// inc C
pub fn opcode_0c(cpu: &mut Cpu) -> InsnResult {
	inc_r8(cpu, 1)
}

/// dec C
pub fn opcode_0d(cpu: &mut Cpu) -> InsnResult {
	dec_r8(cpu, 1)
}

/// ld C, d8
pub fn opcode_0e(cpu: &mut Cpu) -> InsnResult {
	ld_r_d8(cpu, 1)
}

/// rrca
pub fn opcode_0f(cpu: &mut Cpu) -> InsnResult {
	let a = cpu.registers.get(Register::A) as u8;
	let result = alu8::rrc(cpu, a, false);
	cpu.registers.set(Register::A, result as u16);

	Ok(4)
}

/// stop
pub fn opcode_10(cpu: &mut Cpu) -> InsnResult {
	// The second byte of STOP is always 0x00 and carries no information;
	// it still needs to be consumed from the instruction stream.
	let _: u8 = cpu.fetch()?;
	cpu.stop();

	Ok(4)
}

/// ld DE, d16
pub fn opcode_11(cpu: &mut Cpu) -> InsnResult {
	load_imm16_to_register(cpu, Register::DE)
}

/// ld (DE), A
pub fn opcode_12(cpu: &mut Cpu) -> InsnResult {
	store_a_into_mem(cpu, Register::DE)
}

/// inc DE
pub fn opcode_13(cpu: &mut Cpu) -> InsnResult {
	inc_rr(cpu, Register::DE)
}

/// inc D
pub fn opcode_14(cpu: &mut Cpu) -> InsnResult {
	inc_r8(cpu, 2)
}

/// dec D
pub fn opcode_15(cpu: &mut Cpu) -> InsnResult {
	dec_r8(cpu, 2)
}

/// ld D, d8
pub fn opcode_16(cpu: &mut Cpu) -> InsnResult {
	ld_r_d8(cpu, 2)
}

/// rla
pub fn opcode_17(cpu: &mut Cpu) -> InsnResult {
	let a = cpu.registers.get(Register::A) as u8;
	let result = alu8::rl(cpu, a, false);
	cpu.registers.set(Register::A, result as u16);

	Ok(4)
}

/// jr e
pub fn opcode_18(cpu: &mut Cpu) -> InsnResult {
	jump_relative(cpu)
}

/// add HL, DE
pub fn opcode_19(cpu: &mut Cpu) -> InsnResult {
	add_hl_rr(cpu, Register::DE)
}

/// ld A, (DE)
pub fn opcode_1a(cpu: &mut Cpu) -> InsnResult {
	load_mem_to_a(cpu, Register::DE)
}

/// dec DE
pub fn opcode_1b(cpu: &mut Cpu) -> InsnResult {
	dec_rr(cpu, Register::DE)
}

/// inc E
pub fn opcode_1c(cpu: &mut Cpu) -> InsnResult {
	inc_r8(cpu, 3)
}

/// dec E
pub fn opcode_1d(cpu: &mut Cpu) -> InsnResult {
	dec_r8(cpu, 3)
}

/// ld E, d8
pub fn opcode_1e(cpu: &mut Cpu) -> InsnResult {
	ld_r_d8(cpu, 3)
}

/// rra
pub fn opcode_1f(cpu: &mut Cpu) -> InsnResult {
	let a = cpu.registers.get(Register::A) as u8;
	let result = alu8::rr(cpu, a, false);
	cpu.registers.set(Register::A, result as u16);

	Ok(4)
}

/// jr NZ, e
pub fn opcode_20(cpu: &mut Cpu) -> InsnResult {
	jump_relative_conditional(cpu, Flag::Z, false)
}

/// ld HL, d16
pub fn opcode_21(cpu: &mut Cpu) -> InsnResult {
	load_imm16_to_register(cpu, Register::HL)
}

/// ld (HL+), A
pub fn opcode_22(cpu: &mut Cpu) -> InsnResult {
	let address = cpu.registers.get(Register::HL);
	let value: u8 = cpu.registers.get(Register::A) as u8;

	cpu.mmap.write(address, value)?;
	cpu.registers.set(Register::HL, address.wrapping_add(1));

	Ok(8)
}

/// inc HL
pub fn opcode_23(cpu: &mut Cpu) -> InsnResult {
	inc_rr(cpu, Register::HL)
}

/// inc H
pub fn opcode_24(cpu: &mut Cpu) -> InsnResult {
	inc_r8(cpu, 4)
}

/// dec H
pub fn opcode_25(cpu: &mut Cpu) -> InsnResult {
	dec_r8(cpu, 4)
}

/// ld H, d8
pub fn opcode_26(cpu: &mut Cpu) -> InsnResult {
	ld_r_d8(cpu, 4)
}

/// daa
pub fn opcode_27(cpu: &mut Cpu) -> InsnResult {
	let a = cpu.registers.get(Register::A) as u8;
	let result = alu8::daa(cpu, a);
	cpu.registers.set(Register::A, result as u16);

	Ok(4)
}

/// jr Z, e
pub fn opcode_28(cpu: &mut Cpu) -> InsnResult {
	jump_relative_conditional(cpu, Flag::Z, true)
}

/// add HL, HL
pub fn opcode_29(cpu: &mut Cpu) -> InsnResult {
	add_hl_rr(cpu, Register::HL)
}

/// ld A, (HL+)
pub fn opcode_2a(cpu: &mut Cpu) -> InsnResult {
	let address = cpu.registers.get(Register::HL);
	let value: u8 = cpu.mmap.read(address)?;
	cpu.registers.set(Register::A, value as u16);
	cpu.registers.set(Register::HL, address.wrapping_add(1));

	Ok(8)
}

/// dec HL
pub fn opcode_2b(cpu: &mut Cpu) -> InsnResult {
	dec_rr(cpu, Register::HL)
}

/// inc L
pub fn opcode_2c(cpu: &mut Cpu) -> InsnResult {
	inc_r8(cpu, 5)
}

/// dec L
pub fn opcode_2d(cpu: &mut Cpu) -> InsnResult {
	dec_r8(cpu, 5)
}

/// ld L, d8
pub fn opcode_2e(cpu: &mut Cpu) -> InsnResult {
	ld_r_d8(cpu, 5)
}

/// cpl
pub fn opcode_2f(cpu: &mut Cpu) -> InsnResult {
	let a = cpu.registers.get(Register::A) as u8;
	let result = alu8::cpl(cpu, a);
	cpu.registers.set(Register::A, result as u16);

	Ok(4)
}

/// jr NC, e
pub fn opcode_30(cpu: &mut Cpu) -> InsnResult {
	jump_relative_conditional(cpu, Flag::C, false)
}

/// ld SP, d16
pub fn opcode_31(cpu: &mut Cpu) -> InsnResult {
	load_imm16_to_register(cpu, Register::SP)
}

/// ld (HL-), A
pub fn opcode_32(cpu: &mut Cpu) -> InsnResult {
	let address = cpu.registers.get(Register::HL);
	let value: u8 = cpu.registers.get(Register::A) as u8;

	cpu.mmap.write(address, value)?;
	cpu.registers.set(Register::HL, address.wrapping_sub(1));

	Ok(8)
}

/// inc SP
pub fn opcode_33(cpu: &mut Cpu) -> InsnResult {
	inc_rr(cpu, Register::SP)
}

/// inc (HL)
pub fn opcode_34(cpu: &mut Cpu) -> InsnResult {
	inc_r8(cpu, 6)
}

/// dec (HL)
pub fn opcode_35(cpu: &mut Cpu) -> InsnResult {
	dec_r8(cpu, 6)
}

/// ld (HL), d8
pub fn opcode_36(cpu: &mut Cpu) -> InsnResult {
	ld_r_d8(cpu, 6)
}

/// scf
pub fn opcode_37(cpu: &mut Cpu) -> InsnResult {
	alu8::scf(cpu);

	Ok(4)
}

/// jr C, e
pub fn opcode_38(cpu: &mut Cpu) -> InsnResult {
	jump_relative_conditional(cpu, Flag::C, true)
}

/// add HL, SP
pub fn opcode_39(cpu: &mut Cpu) -> InsnResult {
	add_hl_rr(cpu, Register::SP)
}

/// ld A, (HL-)
pub fn opcode_3a(cpu: &mut Cpu) -> InsnResult {
	let address = cpu.registers.get(Register::HL);
	let value: u8 = cpu.mmap.read(address)?;
	cpu.registers.set(Register::A, value as u16);
	cpu.registers.set(Register::HL, address.wrapping_sub(1));

	Ok(8)
}

/// dec SP
pub fn opcode_3b(cpu: &mut Cpu) -> InsnResult {
	dec_rr(cpu, Register::SP)
}

/// inc A
pub fn opcode_3c(cpu: &mut Cpu) -> InsnResult {
	inc_r8(cpu, 7)
}

/// dec A
pub fn opcode_3d(cpu: &mut Cpu) -> InsnResult {
	dec_r8(cpu, 7)
}

/// ld A, d8
pub fn opcode_3e(cpu: &mut Cpu) -> InsnResult {
	ld_r_d8(cpu, 7)
}

/// ccf
pub fn opcode_3f(cpu: &mut Cpu) -> InsnResult {
	alu8::ccf(cpu);

	Ok(4)
}

/// halt
pub fn opcode_76(cpu: &mut Cpu) -> InsnResult {
	cpu.halt();

	Ok(4)
}

/// ld B, B
pub fn opcode_40(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 0, 0)
}

/// ld B, C
pub fn opcode_41(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 0, 1)
}

/// ld B, D
pub fn opcode_42(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 0, 2)
}

/// ld B, E
pub fn opcode_43(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 0, 3)
}

/// ld B, H
pub fn opcode_44(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 0, 4)
}

/// ld B, L
pub fn opcode_45(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 0, 5)
}

/// ld B, (HL)
pub fn opcode_46(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 0, 6)
}

/// ld B, A
pub fn opcode_47(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 0, 7)
}

/// ld C, B
pub fn opcode_48(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 1, 0)
}

/// ld C, C
pub fn opcode_49(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 1, 1)
}

/// ld C, D
pub fn opcode_4a(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 1, 2)
}

/// ld C, E
pub fn opcode_4b(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 1, 3)
}

/// ld C, H
pub fn opcode_4c(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 1, 4)
}

/// ld C, L
pub fn opcode_4d(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 1, 5)
}

/// ld C, (HL)
pub fn opcode_4e(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 1, 6)
}

/// ld C, A
pub fn opcode_4f(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 1, 7)
}

/// ld D, B
pub fn opcode_50(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 2, 0)
}

/// ld D, C
pub fn opcode_51(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 2, 1)
}

/// ld D, D
pub fn opcode_52(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 2, 2)
}

/// ld D, E
pub fn opcode_53(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 2, 3)
}

/// ld D, H
pub fn opcode_54(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 2, 4)
}

/// ld D, L
pub fn opcode_55(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 2, 5)
}

/// ld D, (HL)
pub fn opcode_56(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 2, 6)
}

/// ld D, A
pub fn opcode_57(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 2, 7)
}

/// ld E, B
pub fn opcode_58(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 3, 0)
}

/// ld E, C
pub fn opcode_59(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 3, 1)
}

/// ld E, D
pub fn opcode_5a(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 3, 2)
}

/// ld E, E
pub fn opcode_5b(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 3, 3)
}

/// ld E, H
pub fn opcode_5c(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 3, 4)
}

/// ld E, L
pub fn opcode_5d(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 3, 5)
}

/// ld E, (HL)
pub fn opcode_5e(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 3, 6)
}

/// ld E, A
pub fn opcode_5f(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 3, 7)
}

/// ld H, B
pub fn opcode_60(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 4, 0)
}

/// ld H, C
pub fn opcode_61(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 4, 1)
}

/// ld H, D
pub fn opcode_62(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 4, 2)
}

/// ld H, E
pub fn opcode_63(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 4, 3)
}

/// ld H, H
pub fn opcode_64(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 4, 4)
}

/// ld H, L
pub fn opcode_65(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 4, 5)
}

/// ld H, (HL)
pub fn opcode_66(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 4, 6)
}

/// ld H, A
pub fn opcode_67(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 4, 7)
}

/// ld L, B
pub fn opcode_68(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 5, 0)
}

/// ld L, C
pub fn opcode_69(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 5, 1)
}

/// ld L, D
pub fn opcode_6a(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 5, 2)
}

/// ld L, E
pub fn opcode_6b(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 5, 3)
}

/// ld L, H
pub fn opcode_6c(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 5, 4)
}

/// ld L, L
pub fn opcode_6d(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 5, 5)
}

/// ld L, (HL)
pub fn opcode_6e(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 5, 6)
}

/// ld L, A
pub fn opcode_6f(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 5, 7)
}

/// ld (HL), B
pub fn opcode_70(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 6, 0)
}

/// ld (HL), C
pub fn opcode_71(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 6, 1)
}

/// ld (HL), D
pub fn opcode_72(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 6, 2)
}

/// ld (HL), E
pub fn opcode_73(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 6, 3)
}

/// ld (HL), H
pub fn opcode_74(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 6, 4)
}

/// ld (HL), L
pub fn opcode_75(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 6, 5)
}

/// ld (HL), A
pub fn opcode_77(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 6, 7)
}

/// ld A, B
pub fn opcode_78(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 7, 0)
}

/// ld A, C
pub fn opcode_79(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 7, 1)
}

/// ld A, D
pub fn opcode_7a(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 7, 2)
}

/// ld A, E
pub fn opcode_7b(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 7, 3)
}

/// ld A, H
pub fn opcode_7c(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 7, 4)
}

/// ld A, L
pub fn opcode_7d(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 7, 5)
}

/// ld A, (HL)
pub fn opcode_7e(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 7, 6)
}

/// ld A, A
pub fn opcode_7f(cpu: &mut Cpu) -> InsnResult {
	ld_r_r(cpu, 7, 7)
}

/// add A, B
pub fn opcode_80(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Add, 0)
}

/// add A, C
pub fn opcode_81(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Add, 1)
}

/// add A, D
pub fn opcode_82(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Add, 2)
}

/// add A, E
pub fn opcode_83(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Add, 3)
}

/// add A, H
pub fn opcode_84(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Add, 4)
}

/// add A, L
pub fn opcode_85(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Add, 5)
}

/// add A, (HL)
pub fn opcode_86(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Add, 6)
}

/// add A, A
pub fn opcode_87(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Add, 7)
}

/// adc A, B
pub fn opcode_88(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Adc, 0)
}

/// adc A, C
pub fn opcode_89(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Adc, 1)
}

/// adc A, D
pub fn opcode_8a(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Adc, 2)
}

/// adc A, E
pub fn opcode_8b(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Adc, 3)
}

/// adc A, H
pub fn opcode_8c(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Adc, 4)
}

/// adc A, L
pub fn opcode_8d(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Adc, 5)
}

/// adc A, (HL)
pub fn opcode_8e(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Adc, 6)
}

/// adc A, A
pub fn opcode_8f(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Adc, 7)
}

/// sub A, B
pub fn opcode_90(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sub, 0)
}

/// sub A, C
pub fn opcode_91(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sub, 1)
}

/// sub A, D
pub fn opcode_92(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sub, 2)
}

/// sub A, E
pub fn opcode_93(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sub, 3)
}

/// sub A, H
pub fn opcode_94(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sub, 4)
}

/// sub A, L
pub fn opcode_95(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sub, 5)
}

/// sub A, (HL)
pub fn opcode_96(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sub, 6)
}

/// sub A, A
pub fn opcode_97(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sub, 7)
}

/// sbc A, B
pub fn opcode_98(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sbc, 0)
}

/// sbc A, C
pub fn opcode_99(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sbc, 1)
}

/// sbc A, D
pub fn opcode_9a(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sbc, 2)
}

/// sbc A, E
pub fn opcode_9b(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sbc, 3)
}

/// sbc A, H
pub fn opcode_9c(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sbc, 4)
}

/// sbc A, L
pub fn opcode_9d(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sbc, 5)
}

/// sbc A, (HL)
pub fn opcode_9e(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sbc, 6)
}

/// sbc A, A
pub fn opcode_9f(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Sbc, 7)
}

/// and A, B
pub fn opcode_a0(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::And, 0)
}

/// and A, C
pub fn opcode_a1(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::And, 1)
}

/// and A, D
pub fn opcode_a2(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::And, 2)
}

/// and A, E
pub fn opcode_a3(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::And, 3)
}

/// and A, H
pub fn opcode_a4(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::And, 4)
}

/// and A, L
pub fn opcode_a5(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::And, 5)
}

/// and A, (HL)
pub fn opcode_a6(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::And, 6)
}

/// and A, A
pub fn opcode_a7(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::And, 7)
}

/// xor A, B
pub fn opcode_a8(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Xor, 0)
}

/// xor A, C
pub fn opcode_a9(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Xor, 1)
}

/// xor A, D
pub fn opcode_aa(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Xor, 2)
}

/// xor A, E
pub fn opcode_ab(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Xor, 3)
}

/// xor A, H
pub fn opcode_ac(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Xor, 4)
}

/// xor A, L
pub fn opcode_ad(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Xor, 5)
}

/// xor A, (HL)
pub fn opcode_ae(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Xor, 6)
}

/// xor A, A
pub fn opcode_af(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Xor, 7)
}

/// or A, B
pub fn opcode_b0(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Or, 0)
}

/// or A, C
pub fn opcode_b1(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Or, 1)
}

/// or A, D
pub fn opcode_b2(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Or, 2)
}

/// or A, E
pub fn opcode_b3(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Or, 3)
}

/// or A, H
pub fn opcode_b4(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Or, 4)
}

/// or A, L
pub fn opcode_b5(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Or, 5)
}

/// or A, (HL)
pub fn opcode_b6(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Or, 6)
}

/// or A, A
pub fn opcode_b7(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Or, 7)
}

/// cp A, B
pub fn opcode_b8(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Cp, 0)
}

/// cp A, C
pub fn opcode_b9(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Cp, 1)
}

/// cp A, D
pub fn opcode_ba(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Cp, 2)
}

/// cp A, E
pub fn opcode_bb(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Cp, 3)
}

/// cp A, H
pub fn opcode_bc(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Cp, 4)
}

/// cp A, L
pub fn opcode_bd(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Cp, 5)
}

/// cp A, (HL)
pub fn opcode_be(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Cp, 6)
}

/// cp A, A
pub fn opcode_bf(cpu: &mut Cpu) -> InsnResult {
	alu_r(cpu, AluOp::Cp, 7)
}
/// ret NZ
pub fn opcode_c0(cpu: &mut Cpu) -> InsnResult {
	ret_conditional(cpu, Flag::Z, false)
}

/// pop BC
pub fn opcode_c1(cpu: &mut Cpu) -> InsnResult {
	pop_nn(cpu, Register::BC)
}

/// jp NZ, nn
pub fn opcode_c2(cpu: &mut Cpu) -> InsnResult {
	jump_conditional(cpu, Flag::Z, false)
}

/// jp nn
pub fn opcode_c3(cpu: &mut Cpu) -> InsnResult {
	let dest: u16 = cpu.fetch()?;
	cpu.registers.set(Register::PC, dest);

	Ok(16)
}

/// call NZ, nn
pub fn opcode_c4(cpu: &mut Cpu) -> InsnResult {
	call_conditional(cpu, Flag::Z, false)
}

/// push BC
pub fn opcode_c5(cpu: &mut Cpu) -> InsnResult {
	push_nn(cpu, Register::BC)
}

/// add A, d8
pub fn opcode_c6(cpu: &mut Cpu) -> InsnResult {
	alu_d8(cpu, AluOp::Add)
}

/// rst 00H
pub fn opcode_c7(cpu: &mut Cpu) -> InsnResult {
	rst(cpu, 0x00)
}

/// ret Z
pub fn opcode_c8(cpu: &mut Cpu) -> InsnResult {
	ret_conditional(cpu, Flag::Z, true)
}

/// ret
pub fn opcode_c9(cpu: &mut Cpu) -> InsnResult {
	pop_nn(cpu, Register::PC)?;

	Ok(16)
}

/// jp Z, nn
pub fn opcode_ca(cpu: &mut Cpu) -> InsnResult {
	jump_conditional(cpu, Flag::Z, true)
}

/// call Z, nn
pub fn opcode_cc(cpu: &mut Cpu) -> InsnResult {
	call_conditional(cpu, Flag::Z, true)
}

/// call nn
pub fn opcode_cd(cpu: &mut Cpu) -> InsnResult {
	let dest: u16 = cpu.fetch()?;

	push_nn(cpu, Register::PC)?;
	cpu.registers.set(Register::PC, dest);

	Ok(24)
}

/// adc A, d8
pub fn opcode_ce(cpu: &mut Cpu) -> InsnResult {
	alu_d8(cpu, AluOp::Adc)
}

/// rst 08H
pub fn opcode_cf(cpu: &mut Cpu) -> InsnResult {
	rst(cpu, 0x08)
}

/// ret NC
pub fn opcode_d0(cpu: &mut Cpu) -> InsnResult {
	ret_conditional(cpu, Flag::C, false)
}

/// pop DE
pub fn opcode_d1(cpu: &mut Cpu) -> InsnResult {
	pop_nn(cpu, Register::DE)
}

/// jp NC, nn
pub fn opcode_d2(cpu: &mut Cpu) -> InsnResult {
	jump_conditional(cpu, Flag::C, false)
}

/// call NC, nn
pub fn opcode_d4(cpu: &mut Cpu) -> InsnResult {
	call_conditional(cpu, Flag::C, false)
}

/// push DE
pub fn opcode_d5(cpu: &mut Cpu) -> InsnResult {
	push_nn(cpu, Register::DE)
}

/// sub A, d8
pub fn opcode_d6(cpu: &mut Cpu) -> InsnResult {
	alu_d8(cpu, AluOp::Sub)
}

/// rst 10H
pub fn opcode_d7(cpu: &mut Cpu) -> InsnResult {
	rst(cpu, 0x10)
}

/// ret C
pub fn opcode_d8(cpu: &mut Cpu) -> InsnResult {
	ret_conditional(cpu, Flag::C, true)
}

/// reti
pub fn opcode_d9(cpu: &mut Cpu) -> InsnResult {
	pop_nn(cpu, Register::PC)?;
	cpu.registers.set_ime(true);

	Ok(16)
}

/// jp C, nn
pub fn opcode_da(cpu: &mut Cpu) -> InsnResult {
	jump_conditional(cpu, Flag::C, true)
}

/// call C, nn
pub fn opcode_dc(cpu: &mut Cpu) -> InsnResult {
	call_conditional(cpu, Flag::C, true)
}

/// sbc A, d8
pub fn opcode_de(cpu: &mut Cpu) -> InsnResult {
	alu_d8(cpu, AluOp::Sbc)
}

/// rst 18H
pub fn opcode_df(cpu: &mut Cpu) -> InsnResult {
	rst(cpu, 0x18)
}

/// ldh (a8), A
pub fn opcode_e0(cpu: &mut Cpu) -> InsnResult {
	let low_byte = cpu.fetch::<u8>()? as u16;
	let address: u16 = 0xFF00 | low_byte;
	let value: u8 = cpu.registers.get(Register::A) as u8;

	cpu.mmap.write(address, value)?;

	Ok(12)
}

/// pop HL
pub fn opcode_e1(cpu: &mut Cpu) -> InsnResult {
	pop_nn(cpu, Register::HL)
}

/// ld (C), A
pub fn opcode_e2(cpu: &mut Cpu) -> InsnResult {
	let address: u16 = 0xFF00 | cpu.registers.get(Register::C);
	let value: u8 = cpu.registers.get(Register::A) as u8;

	cpu.mmap.write(address, value)?;

	Ok(8)
}

/// push HL
pub fn opcode_e5(cpu: &mut Cpu) -> InsnResult {
	push_nn(cpu, Register::HL)
}

/// and A, d8
pub fn opcode_e6(cpu: &mut Cpu) -> InsnResult {
	alu_d8(cpu, AluOp::And)
}

/// rst 20H
pub fn opcode_e7(cpu: &mut Cpu) -> InsnResult {
	rst(cpu, 0x20)
}

/// add SP, e8
pub fn opcode_e8(cpu: &mut Cpu) -> InsnResult {
	let offset = cpu.fetch::<u8>()? as i8;
	let sp = cpu.registers.get(Register::SP);
	let result = alu16::add_sp_signed(cpu, sp, offset);
	cpu.registers.set(Register::SP, result);

	Ok(16)
}

/// jp (HL)
pub fn opcode_e9(cpu: &mut Cpu) -> InsnResult {
	let address = cpu.registers.get(Register::HL);
	cpu.registers.set(Register::PC, address);

	Ok(4)
}

/// ld (nn), A
pub fn opcode_ea(cpu: &mut Cpu) -> InsnResult {
	let address: u16 = cpu.fetch::<u16>()?;
	let value: u8 = cpu.registers.get(Register::A) as u8;

	cpu.mmap.write(address, value)?;

	Ok(16)
}

/// xor A, d8
pub fn opcode_ee(cpu: &mut Cpu) -> InsnResult {
	alu_d8(cpu, AluOp::Xor)
}

/// rst 28H
pub fn opcode_ef(cpu: &mut Cpu) -> InsnResult {
	rst(cpu, 0x28)
}

/// ldh A, (a8)
pub fn opcode_f0(cpu: &mut Cpu) -> InsnResult {
	let low_byte = cpu.fetch::<u8>()? as u16;
	let address: u16 = 0xFF00 | low_byte;
	let value: u8 = cpu.mmap.read(address)?;

	cpu.registers.set(Register::A, value as u16);

	Ok(12)
}

/// pop AF
pub fn opcode_f1(cpu: &mut Cpu) -> InsnResult {
	pop_nn(cpu, Register::AF)
}

/// ld A, (C)
pub fn opcode_f2(cpu: &mut Cpu) -> InsnResult {
	let address: u16 = 0xFF00 | cpu.registers.get(Register::C);
	let value: u8 = cpu.mmap.read(address)?;

	cpu.registers.set(Register::A, value as u16);

	Ok(8)
}

/// di
pub fn opcode_f3(cpu: &mut Cpu) -> InsnResult {
	cpu.registers.disable_ime_immediate();

	Ok(4)
}

/// push AF
pub fn opcode_f5(cpu: &mut Cpu) -> InsnResult {
	push_nn(cpu, Register::AF)
}

/// or A, d8
pub fn opcode_f6(cpu: &mut Cpu) -> InsnResult {
	alu_d8(cpu, AluOp::Or)
}

/// rst 30H
pub fn opcode_f7(cpu: &mut Cpu) -> InsnResult {
	rst(cpu, 0x30)
}

/// ld HL, SP+e8
pub fn opcode_f8(cpu: &mut Cpu) -> InsnResult {
	let offset = cpu.fetch::<u8>()? as i8;
	let sp = cpu.registers.get(Register::SP);
	let result = alu16::add_sp_signed(cpu, sp, offset);
	cpu.registers.set(Register::HL, result);

	Ok(12)
}

/// ld SP, HL
pub fn opcode_f9(cpu: &mut Cpu) -> InsnResult {
	move_registers(cpu, Register::SP, Register::HL)
}

/// ld A, (nn)
pub fn opcode_fa(cpu: &mut Cpu) -> InsnResult {
	let address: u16 = cpu.fetch::<u16>()?;
	let value: u8 = cpu.mmap.read(address)?;

	cpu.registers.set(Register::A, value as u16);

	Ok(16)
}

/// ei
pub fn opcode_fb(cpu: &mut Cpu) -> InsnResult {
	cpu.registers.schedule_ime_enable();

	Ok(4)
}

/// cp A, d8
pub fn opcode_fe(cpu: &mut Cpu) -> InsnResult {
	alu_d8(cpu, AluOp::Cp)
}

/// rst 38H
pub fn opcode_ff(cpu: &mut Cpu) -> InsnResult {
	rst(cpu, 0x38)
}

/// rlc B
pub fn opcode_cb00(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 0, alu8::rlc)
}

/// rlc C
pub fn opcode_cb01(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 1, alu8::rlc)
}

/// rlc D
pub fn opcode_cb02(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 2, alu8::rlc)
}

/// rlc E
pub fn opcode_cb03(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 3, alu8::rlc)
}

/// rlc H
pub fn opcode_cb04(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 4, alu8::rlc)
}

/// rlc L
pub fn opcode_cb05(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 5, alu8::rlc)
}

/// rlc (HL)
pub fn opcode_cb06(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 6, alu8::rlc)
}

/// rlc A
pub fn opcode_cb07(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 7, alu8::rlc)
}

/// rrc B
pub fn opcode_cb08(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 0, alu8::rrc)
}

/// rrc C
pub fn opcode_cb09(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 1, alu8::rrc)
}

/// rrc D
pub fn opcode_cb0a(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 2, alu8::rrc)
}

/// rrc E
pub fn opcode_cb0b(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 3, alu8::rrc)
}

/// rrc H
pub fn opcode_cb0c(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 4, alu8::rrc)
}

/// rrc L
pub fn opcode_cb0d(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 5, alu8::rrc)
}

/// rrc (HL)
pub fn opcode_cb0e(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 6, alu8::rrc)
}

/// rrc A
pub fn opcode_cb0f(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 7, alu8::rrc)
}

/// rl B
pub fn opcode_cb10(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 0, alu8::rl)
}

/// rl C
pub fn opcode_cb11(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 1, alu8::rl)
}

/// rl D
pub fn opcode_cb12(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 2, alu8::rl)
}

/// rl E
pub fn opcode_cb13(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 3, alu8::rl)
}

/// rl H
pub fn opcode_cb14(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 4, alu8::rl)
}

/// rl L
pub fn opcode_cb15(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 5, alu8::rl)
}

/// rl (HL)
pub fn opcode_cb16(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 6, alu8::rl)
}

/// rl A
pub fn opcode_cb17(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 7, alu8::rl)
}

/// rr B
pub fn opcode_cb18(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 0, alu8::rr)
}

/// rr C
pub fn opcode_cb19(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 1, alu8::rr)
}

/// rr D
pub fn opcode_cb1a(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 2, alu8::rr)
}

/// rr E
pub fn opcode_cb1b(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 3, alu8::rr)
}

/// rr H
pub fn opcode_cb1c(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 4, alu8::rr)
}

/// rr L
pub fn opcode_cb1d(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 5, alu8::rr)
}

/// rr (HL)
pub fn opcode_cb1e(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 6, alu8::rr)
}

/// rr A
pub fn opcode_cb1f(cpu: &mut Cpu) -> InsnResult {
	cb_rotate(cpu, 7, alu8::rr)
}

/// sla B
pub fn opcode_cb20(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 0, alu8::sla)
}

/// sla C
pub fn opcode_cb21(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 1, alu8::sla)
}

/// sla D
pub fn opcode_cb22(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 2, alu8::sla)
}

/// sla E
pub fn opcode_cb23(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 3, alu8::sla)
}

/// sla H
pub fn opcode_cb24(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 4, alu8::sla)
}

/// sla L
pub fn opcode_cb25(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 5, alu8::sla)
}

/// sla (HL)
pub fn opcode_cb26(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 6, alu8::sla)
}

/// sla A
pub fn opcode_cb27(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 7, alu8::sla)
}

/// sra B
pub fn opcode_cb28(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 0, alu8::sra)
}

/// sra C
pub fn opcode_cb29(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 1, alu8::sra)
}

/// sra D
pub fn opcode_cb2a(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 2, alu8::sra)
}

/// sra E
pub fn opcode_cb2b(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 3, alu8::sra)
}

/// sra H
pub fn opcode_cb2c(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 4, alu8::sra)
}

/// sra L
pub fn opcode_cb2d(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 5, alu8::sra)
}

/// sra (HL)
pub fn opcode_cb2e(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 6, alu8::sra)
}

/// sra A
pub fn opcode_cb2f(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 7, alu8::sra)
}

/// swap B
pub fn opcode_cb30(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 0, alu8::swap)
}

/// swap C
pub fn opcode_cb31(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 1, alu8::swap)
}

/// swap D
pub fn opcode_cb32(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 2, alu8::swap)
}

/// swap E
pub fn opcode_cb33(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 3, alu8::swap)
}

/// swap H
pub fn opcode_cb34(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 4, alu8::swap)
}

/// swap L
pub fn opcode_cb35(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 5, alu8::swap)
}

/// swap (HL)
pub fn opcode_cb36(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 6, alu8::swap)
}

/// swap A
pub fn opcode_cb37(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 7, alu8::swap)
}

/// srl B
pub fn opcode_cb38(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 0, alu8::srl)
}

/// srl C
pub fn opcode_cb39(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 1, alu8::srl)
}

/// srl D
pub fn opcode_cb3a(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 2, alu8::srl)
}

/// srl E
pub fn opcode_cb3b(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 3, alu8::srl)
}

/// srl H
pub fn opcode_cb3c(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 4, alu8::srl)
}

/// srl L
pub fn opcode_cb3d(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 5, alu8::srl)
}

/// srl (HL)
pub fn opcode_cb3e(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 6, alu8::srl)
}

/// srl A
pub fn opcode_cb3f(cpu: &mut Cpu) -> InsnResult {
	cb_shift(cpu, 7, alu8::srl)
}

/// bit 0, B
pub fn opcode_cb40(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 0, 0)
}

/// bit 0, C
pub fn opcode_cb41(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 1, 0)
}

/// bit 0, D
pub fn opcode_cb42(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 2, 0)
}

/// bit 0, E
pub fn opcode_cb43(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 3, 0)
}

/// bit 0, H
pub fn opcode_cb44(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 4, 0)
}

/// bit 0, L
pub fn opcode_cb45(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 5, 0)
}

/// bit 0, (HL)
pub fn opcode_cb46(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 6, 0)
}

/// bit 0, A
pub fn opcode_cb47(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 7, 0)
}

/// bit 1, B
pub fn opcode_cb48(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 0, 1)
}

/// bit 1, C
pub fn opcode_cb49(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 1, 1)
}

/// bit 1, D
pub fn opcode_cb4a(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 2, 1)
}

/// bit 1, E
pub fn opcode_cb4b(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 3, 1)
}

/// bit 1, H
pub fn opcode_cb4c(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 4, 1)
}

/// bit 1, L
pub fn opcode_cb4d(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 5, 1)
}

/// bit 1, (HL)
pub fn opcode_cb4e(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 6, 1)
}

/// bit 1, A
pub fn opcode_cb4f(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 7, 1)
}

/// bit 2, B
pub fn opcode_cb50(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 0, 2)
}

/// bit 2, C
pub fn opcode_cb51(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 1, 2)
}

/// bit 2, D
pub fn opcode_cb52(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 2, 2)
}

/// bit 2, E
pub fn opcode_cb53(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 3, 2)
}

/// bit 2, H
pub fn opcode_cb54(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 4, 2)
}

/// bit 2, L
pub fn opcode_cb55(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 5, 2)
}

/// bit 2, (HL)
pub fn opcode_cb56(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 6, 2)
}

/// bit 2, A
pub fn opcode_cb57(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 7, 2)
}

/// bit 3, B
pub fn opcode_cb58(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 0, 3)
}

/// bit 3, C
pub fn opcode_cb59(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 1, 3)
}

/// bit 3, D
pub fn opcode_cb5a(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 2, 3)
}

/// bit 3, E
pub fn opcode_cb5b(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 3, 3)
}

/// bit 3, H
pub fn opcode_cb5c(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 4, 3)
}

/// bit 3, L
pub fn opcode_cb5d(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 5, 3)
}

/// bit 3, (HL)
pub fn opcode_cb5e(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 6, 3)
}

/// bit 3, A
pub fn opcode_cb5f(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 7, 3)
}

/// bit 4, B
pub fn opcode_cb60(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 0, 4)
}

/// bit 4, C
pub fn opcode_cb61(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 1, 4)
}

/// bit 4, D
pub fn opcode_cb62(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 2, 4)
}

/// bit 4, E
pub fn opcode_cb63(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 3, 4)
}

/// bit 4, H
pub fn opcode_cb64(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 4, 4)
}

/// bit 4, L
pub fn opcode_cb65(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 5, 4)
}

/// bit 4, (HL)
pub fn opcode_cb66(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 6, 4)
}

/// bit 4, A
pub fn opcode_cb67(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 7, 4)
}

/// bit 5, B
pub fn opcode_cb68(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 0, 5)
}

/// bit 5, C
pub fn opcode_cb69(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 1, 5)
}

/// bit 5, D
pub fn opcode_cb6a(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 2, 5)
}

/// bit 5, E
pub fn opcode_cb6b(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 3, 5)
}

/// bit 5, H
pub fn opcode_cb6c(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 4, 5)
}

/// bit 5, L
pub fn opcode_cb6d(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 5, 5)
}

/// bit 5, (HL)
pub fn opcode_cb6e(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 6, 5)
}

/// bit 5, A
pub fn opcode_cb6f(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 7, 5)
}

/// bit 6, B
pub fn opcode_cb70(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 0, 6)
}

/// bit 6, C
pub fn opcode_cb71(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 1, 6)
}

/// bit 6, D
pub fn opcode_cb72(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 2, 6)
}

/// bit 6, E
pub fn opcode_cb73(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 3, 6)
}

/// bit 6, H
pub fn opcode_cb74(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 4, 6)
}

/// bit 6, L
pub fn opcode_cb75(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 5, 6)
}

/// bit 6, (HL)
pub fn opcode_cb76(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 6, 6)
}

/// bit 6, A
pub fn opcode_cb77(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 7, 6)
}

/// bit 7, B
pub fn opcode_cb78(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 0, 7)
}

/// bit 7, C
pub fn opcode_cb79(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 1, 7)
}

/// bit 7, D
pub fn opcode_cb7a(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 2, 7)
}

/// bit 7, E
pub fn opcode_cb7b(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 3, 7)
}

/// bit 7, H
pub fn opcode_cb7c(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 4, 7)
}

/// bit 7, L
pub fn opcode_cb7d(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 5, 7)
}

/// bit 7, (HL)
pub fn opcode_cb7e(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 6, 7)
}

/// bit 7, A
pub fn opcode_cb7f(cpu: &mut Cpu) -> InsnResult {
	cb_bit(cpu, 7, 7)
}

/// res 0, B
pub fn opcode_cb80(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 0, 0)
}

/// res 0, C
pub fn opcode_cb81(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 1, 0)
}

/// res 0, D
pub fn opcode_cb82(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 2, 0)
}

/// res 0, E
pub fn opcode_cb83(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 3, 0)
}

/// res 0, H
pub fn opcode_cb84(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 4, 0)
}

/// res 0, L
pub fn opcode_cb85(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 5, 0)
}

/// res 0, (HL)
pub fn opcode_cb86(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 6, 0)
}

/// res 0, A
pub fn opcode_cb87(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 7, 0)
}

/// res 1, B
pub fn opcode_cb88(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 0, 1)
}

/// res 1, C
pub fn opcode_cb89(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 1, 1)
}

/// res 1, D
pub fn opcode_cb8a(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 2, 1)
}

/// res 1, E
pub fn opcode_cb8b(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 3, 1)
}

/// res 1, H
pub fn opcode_cb8c(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 4, 1)
}

/// res 1, L
pub fn opcode_cb8d(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 5, 1)
}

/// res 1, (HL)
pub fn opcode_cb8e(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 6, 1)
}

/// res 1, A
pub fn opcode_cb8f(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 7, 1)
}

/// res 2, B
pub fn opcode_cb90(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 0, 2)
}

/// res 2, C
pub fn opcode_cb91(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 1, 2)
}

/// res 2, D
pub fn opcode_cb92(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 2, 2)
}

/// res 2, E
pub fn opcode_cb93(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 3, 2)
}

/// res 2, H
pub fn opcode_cb94(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 4, 2)
}

/// res 2, L
pub fn opcode_cb95(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 5, 2)
}

/// res 2, (HL)
pub fn opcode_cb96(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 6, 2)
}

/// res 2, A
pub fn opcode_cb97(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 7, 2)
}

/// res 3, B
pub fn opcode_cb98(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 0, 3)
}

/// res 3, C
pub fn opcode_cb99(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 1, 3)
}

/// res 3, D
pub fn opcode_cb9a(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 2, 3)
}

/// res 3, E
pub fn opcode_cb9b(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 3, 3)
}

/// res 3, H
pub fn opcode_cb9c(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 4, 3)
}

/// res 3, L
pub fn opcode_cb9d(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 5, 3)
}

/// res 3, (HL)
pub fn opcode_cb9e(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 6, 3)
}

/// res 3, A
pub fn opcode_cb9f(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 7, 3)
}

/// res 4, B
pub fn opcode_cba0(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 0, 4)
}

/// res 4, C
pub fn opcode_cba1(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 1, 4)
}

/// res 4, D
pub fn opcode_cba2(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 2, 4)
}

/// res 4, E
pub fn opcode_cba3(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 3, 4)
}

/// res 4, H
pub fn opcode_cba4(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 4, 4)
}

/// res 4, L
pub fn opcode_cba5(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 5, 4)
}

/// res 4, (HL)
pub fn opcode_cba6(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 6, 4)
}

/// res 4, A
pub fn opcode_cba7(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 7, 4)
}

/// res 5, B
pub fn opcode_cba8(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 0, 5)
}

/// res 5, C
pub fn opcode_cba9(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 1, 5)
}

/// res 5, D
pub fn opcode_cbaa(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 2, 5)
}

/// res 5, E
pub fn opcode_cbab(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 3, 5)
}

/// res 5, H
pub fn opcode_cbac(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 4, 5)
}

/// res 5, L
pub fn opcode_cbad(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 5, 5)
}

/// res 5, (HL)
pub fn opcode_cbae(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 6, 5)
}

/// res 5, A
pub fn opcode_cbaf(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 7, 5)
}

/// res 6, B
pub fn opcode_cbb0(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 0, 6)
}

/// res 6, C
pub fn opcode_cbb1(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 1, 6)
}

/// res 6, D
pub fn opcode_cbb2(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 2, 6)
}

/// res 6, E
pub fn opcode_cbb3(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 3, 6)
}

/// res 6, H
pub fn opcode_cbb4(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 4, 6)
}

/// res 6, L
pub fn opcode_cbb5(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 5, 6)
}

/// res 6, (HL)
pub fn opcode_cbb6(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 6, 6)
}

/// res 6, A
pub fn opcode_cbb7(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 7, 6)
}

/// res 7, B
pub fn opcode_cbb8(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 0, 7)
}

/// res 7, C
pub fn opcode_cbb9(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 1, 7)
}

/// res 7, D
pub fn opcode_cbba(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 2, 7)
}

/// res 7, E
pub fn opcode_cbbb(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 3, 7)
}

/// res 7, H
pub fn opcode_cbbc(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 4, 7)
}

/// res 7, L
pub fn opcode_cbbd(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 5, 7)
}

/// res 7, (HL)
pub fn opcode_cbbe(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 6, 7)
}

/// res 7, A
pub fn opcode_cbbf(cpu: &mut Cpu) -> InsnResult {
	cb_res(cpu, 7, 7)
}

/// set 0, B
pub fn opcode_cbc0(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 0, 0)
}

/// set 0, C
pub fn opcode_cbc1(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 1, 0)
}

/// set 0, D
pub fn opcode_cbc2(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 2, 0)
}

/// set 0, E
pub fn opcode_cbc3(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 3, 0)
}

/// set 0, H
pub fn opcode_cbc4(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 4, 0)
}

/// set 0, L
pub fn opcode_cbc5(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 5, 0)
}

/// set 0, (HL)
pub fn opcode_cbc6(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 6, 0)
}

/// set 0, A
pub fn opcode_cbc7(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 7, 0)
}

/// set 1, B
pub fn opcode_cbc8(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 0, 1)
}

/// set 1, C
pub fn opcode_cbc9(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 1, 1)
}

/// set 1, D
pub fn opcode_cbca(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 2, 1)
}

/// set 1, E
pub fn opcode_cbcb(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 3, 1)
}

/// set 1, H
pub fn opcode_cbcc(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 4, 1)
}

/// set 1, L
pub fn opcode_cbcd(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 5, 1)
}

/// set 1, (HL)
pub fn opcode_cbce(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 6, 1)
}

/// set 1, A
pub fn opcode_cbcf(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 7, 1)
}

/// set 2, B
pub fn opcode_cbd0(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 0, 2)
}

/// set 2, C
pub fn opcode_cbd1(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 1, 2)
}

/// set 2, D
pub fn opcode_cbd2(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 2, 2)
}

/// set 2, E
pub fn opcode_cbd3(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 3, 2)
}

/// set 2, H
pub fn opcode_cbd4(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 4, 2)
}

/// set 2, L
pub fn opcode_cbd5(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 5, 2)
}

/// set 2, (HL)
pub fn opcode_cbd6(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 6, 2)
}

/// set 2, A
pub fn opcode_cbd7(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 7, 2)
}

/// set 3, B
pub fn opcode_cbd8(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 0, 3)
}

/// set 3, C
pub fn opcode_cbd9(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 1, 3)
}

/// set 3, D
pub fn opcode_cbda(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 2, 3)
}

/// set 3, E
pub fn opcode_cbdb(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 3, 3)
}

/// set 3, H
pub fn opcode_cbdc(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 4, 3)
}

/// set 3, L
pub fn opcode_cbdd(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 5, 3)
}

/// set 3, (HL)
pub fn opcode_cbde(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 6, 3)
}

/// set 3, A
pub fn opcode_cbdf(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 7, 3)
}

/// set 4, B
pub fn opcode_cbe0(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 0, 4)
}

/// set 4, C
pub fn opcode_cbe1(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 1, 4)
}

/// set 4, D
pub fn opcode_cbe2(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 2, 4)
}

/// set 4, E
pub fn opcode_cbe3(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 3, 4)
}

/// set 4, H
pub fn opcode_cbe4(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 4, 4)
}

/// set 4, L
pub fn opcode_cbe5(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 5, 4)
}

/// set 4, (HL)
pub fn opcode_cbe6(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 6, 4)
}

/// set 4, A
pub fn opcode_cbe7(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 7, 4)
}

/// set 5, B
pub fn opcode_cbe8(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 0, 5)
}

/// set 5, C
pub fn opcode_cbe9(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 1, 5)
}

/// set 5, D
pub fn opcode_cbea(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 2, 5)
}

/// set 5, E
pub fn opcode_cbeb(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 3, 5)
}

/// set 5, H
pub fn opcode_cbec(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 4, 5)
}

/// set 5, L
pub fn opcode_cbed(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 5, 5)
}

/// set 5, (HL)
pub fn opcode_cbee(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 6, 5)
}

/// set 5, A
pub fn opcode_cbef(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 7, 5)
}

/// set 6, B
pub fn opcode_cbf0(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 0, 6)
}

/// set 6, C
pub fn opcode_cbf1(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 1, 6)
}

/// set 6, D
pub fn opcode_cbf2(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 2, 6)
}

/// set 6, E
pub fn opcode_cbf3(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 3, 6)
}

/// set 6, H
pub fn opcode_cbf4(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 4, 6)
}

/// set 6, L
pub fn opcode_cbf5(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 5, 6)
}

/// set 6, (HL)
pub fn opcode_cbf6(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 6, 6)
}

/// set 6, A
pub fn opcode_cbf7(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 7, 6)
}

/// set 7, B
pub fn opcode_cbf8(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 0, 7)
}

/// set 7, C
pub fn opcode_cbf9(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 1, 7)
}

/// set 7, D
pub fn opcode_cbfa(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 2, 7)
}

/// set 7, E
pub fn opcode_cbfb(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 3, 7)
}

/// set 7, H
pub fn opcode_cbfc(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 4, 7)
}

/// set 7, L
pub fn opcode_cbfd(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 5, 7)
}

/// set 7, (HL)
pub fn opcode_cbfe(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 6, 7)
}

/// set 7, A
pub fn opcode_cbff(cpu: &mut Cpu) -> InsnResult {
	cb_set(cpu, 7, 7)
}
#[cfg(test)]
#[allow(dead_code)]
pub mod tests {
	use super::*;

	#[test]
	fn test_push_pop() -> Result<(), GameboyError> {
		super::super::tests::with_cpu(|cpu| {
			cpu.registers.set(Register::PC, 0xA000);
			cpu.registers.set(Register::BC, 0x1234);

			let data: &[u8] = &[/* PUSH BC */ 0xc5,
								/* POP BC  */ 0xc1];

			cpu.mmap.write_all(cpu.registers.get(Register::PC), data)?;

			cpu.step()?;
			cpu.step()?;

			assert_eq!(0x1234, cpu.registers.get(Register::BC));

			Ok(())
		})
	}

	#[test]
	fn test_push_pop_af_masks_low_nibble() -> Result<(), GameboyError> {
		super::super::tests::with_cpu(|cpu| {
			cpu.registers.set(Register::PC, 0xA000);
			cpu.registers.set(Register::AF, 0x12F0);

			let data: &[u8] = &[/* PUSH AF */ 0xf5,
								/* POP AF  */ 0xf1];

			cpu.mmap.write_all(cpu.registers.get(Register::PC), data)?;

			cpu.step()?;
			cpu.step()?;

			assert_eq!(0x12, cpu.registers.get(Register::A));
			assert_eq!(0xF0, cpu.registers.get(Register::F));

			Ok(())
		})
	}

	#[test]
	fn test_inc_half_carry() -> Result<(), GameboyError> {
		super::super::tests::with_cpu(|cpu| {
			cpu.registers.set(Register::A, 0x0F);
			inc_r8(cpu, 7)?;

			assert_eq!(0x10, cpu.registers.get(Register::A));
			assert!(cpu.registers.flag(Flag::H));
			assert!(!cpu.registers.flag(Flag::Z));

			Ok(())
		})
	}

	#[test]
	fn test_daa_after_add() -> Result<(), GameboyError> {
		super::super::tests::with_cpu(|cpu| {
			// 0x15 + 0x27 in BCD should read as 42, not 0x3c.
			cpu.registers.set(Register::A, 0x15);
			apply_alu_for_test(cpu, AluOp::Add, 0x27);

			let a = cpu.registers.get(Register::A) as u8;
			let result = alu8::daa(cpu, a);
			cpu.registers.set(Register::A, result as u16);

			assert_eq!(0x42, cpu.registers.get(Register::A));
			assert!(!cpu.registers.flag(Flag::C));

			Ok(())
		})
	}

	#[test]
	fn test_cpl_involution() -> Result<(), GameboyError> {
		super::super::tests::with_cpu(|cpu| {
			cpu.registers.set(Register::A, 0x5A);

			let a = cpu.registers.get(Register::A) as u8;
			let once = alu8::cpl(cpu, a);
			let twice = alu8::cpl(cpu, once);

			assert_eq!(0x5A, twice);

			Ok(())
		})
	}

	#[test]
	fn test_swap_involution() -> Result<(), GameboyError> {
		super::super::tests::with_cpu(|cpu| {
			let once = alu8::swap(cpu, 0x4F);
			let twice = alu8::swap(cpu, once);

			assert_eq!(0x4F, twice);

			Ok(())
		})
	}

	#[test]
	fn test_bit_set_res_roundtrip() {
		let value: u8 = 0b1010_0000;
		let set = alu8::set(value, 0);
		assert_eq!(0b1010_0001, set);

		let res = alu8::res(set, 0);
		assert_eq!(value, res);
	}

	#[test]
	fn test_jr_nz_timing() -> Result<(), GameboyError> {
		super::super::tests::with_cpu(|cpu| {
			cpu.registers.set(Register::PC, 0xA000);
			cpu.registers.set_flag(Flag::Z, true);

			let data: &[u8] = &[0x20, 0x05]; // JR NZ, +5 (not taken, Z set)
			cpu.mmap.write_all(cpu.registers.get(Register::PC), data)?;

			let cycles = cpu.step()?;
			assert_eq!(8, cycles);

			cpu.registers.set(Register::PC, 0xA000);
			cpu.registers.set_flag(Flag::Z, false);
			let cycles = cpu.step()?;
			assert_eq!(12, cycles);

			Ok(())
		})
	}

	#[test]
	fn test_call_ret_roundtrip() -> Result<(), GameboyError> {
		super::super::tests::with_cpu(|cpu| {
			cpu.registers.set(Register::PC, 0xA000);
			cpu.registers.set(Register::SP, 0xA100);

			// CALL 0xA010; at 0xA010: RET
			let mut data: [u8; 16] = [0; 16];
			data[0] = 0xcd;
			data[1] = 0x10;
			data[2] = 0xa0;
			data[0x10] = 0xc9;

			cpu.mmap.write_all(0xA000, &data)?;

			let sp_before = cpu.registers.get(Register::SP);
			let pc_before = 0xA003; // address right after the CALL

			cpu.step()?; // CALL
			assert_eq!(0xA010, cpu.registers.get(Register::PC));

			cpu.step()?; // RET
			assert_eq!(pc_before, cpu.registers.get(Register::PC));
			assert_eq!(sp_before, cpu.registers.get(Register::SP));

			Ok(())
		})
	}

	fn apply_alu_for_test(cpu: &mut Cpu, op: AluOp, x: u8) {
		let a = cpu.registers.get(Register::A) as u8;
		let result = match op {
			AluOp::Add => alu8::add(cpu, a, x, false),
			_ => unreachable!(),
		};
		cpu.registers.set(Register::A, result as u16);
	}
}

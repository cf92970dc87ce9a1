// Copyright 2021 Nir H. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
//! The emulation library's front-end API.

use crate::cpu::*;
use crate::bus::cartridge::*;
use crate::bus::joypad::Controller;
use crate::config::Config;
use crate::GameboyError;

/// The complete emulator's state: the cpu, its memory bus and peripherals,
/// and the active configuration, tied together behind a single handle.
pub struct Emulator<'a> {
	/// The gameboy's processor (and, through it, the memory bus).
	cpu: Cpu<'a>,
}

impl<'a> Emulator<'a> {
	/// Create a new emulator at post-boot state, wired to the given cartridge.
	#[inline(always)]
	pub fn new(config: &'a Config, cartridge: &'a mut Cartridge<'a>) -> Self {
		Emulator {
			cpu: Cpu::new(config, cartridge),
		}
	}

	/// Advance exactly one cycle of emulation. See `Cpu::clock`.
	pub fn clock(&mut self) -> Result<usize, GameboyError> {
		self.cpu.clock()
	}

	/// Run one whole instruction (or interrupt dispatch) to completion.
	/// See `Cpu::step`.
	pub fn step(&mut self) -> Result<usize, GameboyError> {
		self.cpu.step()
	}

	/// Whether the instruction in flight (if any) has retired all its cycles.
	pub fn complete(&self) -> bool {
		self.cpu.complete()
	}

	/// Restore post-boot state. Only valid when `complete()` is true.
	pub fn reset(&mut self) {
		self.cpu.reset()
	}

	/// Apply the given closure to the joypad controller.
	pub fn with_controller<F>(&mut self, closure: F)
		where F: FnOnce(&mut dyn Controller) -> () {
		self.cpu.with_controller(closure)
	}

	/// Copy the most recently rendered frame into `frame_buffer`.
	pub fn flush(&mut self, frame_buffer: &mut [u32]) {
		self.cpu.flush(frame_buffer)
	}

	/// Direct access to the underlying cpu, for hosts that need registers,
	/// the disassembler, or other lower-level state.
	pub fn cpu(&mut self) -> &mut Cpu<'a> {
		&mut self.cpu
	}
}

#[cfg(test)]
#[cfg(feature = "alloc")]
mod tests {
	use super::*;
	use alloc::boxed::Box;
	use crate::bus::cartridge;

	#[test]
	fn test_emulator_runs_one_instruction() -> Result<(), GameboyError> {
		let config = Config::default();
		let mut rom: Box<[u8]> = Box::new(cartridge::tests::empty_rom());
		let mut ram: Box<[u8]> = Box::new([0_u8; 0x2000]);
		let mut cartridge = Cartridge::new(&mut rom, &mut ram);

		let mut emulator = Emulator::new(&config, &mut cartridge);

		// ROM is all zeroes, which decodes as NOP.
		let cycles = emulator.step()?;
		assert_eq!(4, cycles);
		assert!(emulator.complete());

		Ok(())
	}
}

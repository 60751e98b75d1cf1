// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Rotation state of the cube and its per-frame update rule.
//!
//! Angles are kept as raw degree counters. Every frame the counters tick
//! down by a fixed step and the radian values handed to the shader are
//! derived from them. The counters are never wrapped, so over a long run
//! they drift to large magnitudes; the rendered rotation stays periodic
//! because the shader only feeds them through `sin`/`cos`.

use std::f32::consts::PI;

pub const INITIAL_RAW_YAW: f32 = 20.0;
pub const INITIAL_RAW_PITCH: f32 = 0.0;
pub const INITIAL_RAW_ROLL: f32 = 0.0;
pub const CUBE_SCALE: f32 = 0.3;

/// Degrees subtracted from each raw counter per frame.
pub const YAW_STEP: f32 = 1.0;
pub const PITCH_STEP: f32 = 0.5;
pub const ROLL_STEP: f32 = 0.2;

const DEG_TO_RAD: f32 = PI / 180.0;

/// The four scalars pushed to the shader each frame,
/// in the order the `scaleMove` uniform expects them.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct SceneUniform {
	pub roll: f32,
	pub yaw: f32,
	pub pitch: f32,
	pub scale: f32,
}

impl SceneUniform {
	#[inline]
	pub fn as_array(&self) -> [f32; 4] {
		[self.roll, self.yaw, self.pitch, self.scale]
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct RotationState {
	raw_yaw: f32,
	raw_pitch: f32,
	raw_roll: f32,
	yaw: f32,
	pitch: f32,
	roll: f32,
	scale: f32,
}

impl RotationState {
	pub fn new() -> Self {
		Self::with_raw(INITIAL_RAW_YAW, INITIAL_RAW_PITCH, INITIAL_RAW_ROLL)
	}

	/// Start from arbitrary raw degree values.
	pub fn with_raw(raw_yaw: f32, raw_pitch: f32, raw_roll: f32) -> Self {
		let mut state = Self {
			raw_yaw,
			raw_pitch,
			raw_roll,
			yaw: 0.0,
			pitch: 0.0,
			roll: 0.0,
			scale: CUBE_SCALE,
		};
		state.update_radians();
		state
	}

	/// Step one frame: tick the raw counters down and
	/// return the uniform for this frame.
	pub fn advance(&mut self) -> SceneUniform {
		self.raw_yaw -= YAW_STEP;
		self.raw_pitch -= PITCH_STEP;
		self.raw_roll -= ROLL_STEP;
		self.update_radians();

		self.uniform()
	}

	/// Absolute override from a cursor position in window pixels.
	///
	/// Takes effect immediately; the next `advance` decrements
	/// from the assigned values.
	pub fn mouse_motion(&mut self, x: i32, y: i32) {
		self.raw_pitch = y as f32 / 2.0;
		self.raw_yaw = x as f32 / 2.0;
		self.update_radians();
	}

	pub fn uniform(&self) -> SceneUniform {
		SceneUniform {
			roll: self.roll,
			yaw: self.yaw,
			pitch: self.pitch,
			scale: self.scale,
		}
	}

	/// Raw counters as (yaw, pitch, roll), in degrees.
	pub fn raw_degrees(&self) -> (f32, f32, f32) {
		(self.raw_yaw, self.raw_pitch, self.raw_roll)
	}

	pub fn yaw(&self) -> f32 {
		self.yaw
	}

	pub fn pitch(&self) -> f32 {
		self.pitch
	}

	pub fn roll(&self) -> f32 {
		self.roll
	}

	pub fn scale(&self) -> f32 {
		self.scale
	}

	fn update_radians(&mut self) {
		self.yaw = self.raw_yaw * DEG_TO_RAD;
		self.pitch = self.raw_pitch * DEG_TO_RAD;
		self.roll = self.raw_roll * DEG_TO_RAD;
	}
}

impl Default for RotationState {
	fn default() -> Self {
		Self::new()
	}
}

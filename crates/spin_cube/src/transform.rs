// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! CPU mirror of the cube's vertex shader. Test-only: it checks what
//! the GPU will produce for a given uniform without a GL context.

use crate::scene::SceneUniform;

/// Offset applied along z after rotating.
pub const Z_OFFSET: f32 = -0.2;

/// Rotate `v` about the z axis by `angle` radians.
pub fn rotate_z(v: [f32; 3], angle: f32) -> [f32; 3] {
	let (s, c) = angle.sin_cos();
	[v[0] * c - v[1] * s, v[0] * s + v[1] * c, v[2]]
}

pub fn rotate_y(v: [f32; 3], angle: f32) -> [f32; 3] {
	let (s, c) = angle.sin_cos();
	[v[0] * c - v[2] * s, v[1], v[0] * s + v[2] * c]
}

pub fn rotate_x(v: [f32; 3], angle: f32) -> [f32; 3] {
	let (s, c) = angle.sin_cos();
	[v[0], v[1] * c - v[2] * s, v[1] * s + v[2] * c]
}

/// Clip-space position of a model-space vertex: scale, rotate about
/// z (roll), y (yaw) then x (pitch), push back along z, and divide
/// xy by `(z + 2) / 3`.
pub fn project(position: [f32; 3], uniform: &SceneUniform) -> [f32; 3] {
	let scaled = position.map(|c| c * uniform.scale);
	let rotated = rotate_x(rotate_y(rotate_z(scaled, uniform.roll), uniform.yaw), uniform.pitch);
	let [x, y, z] = [rotated[0], rotated[1], rotated[2] + Z_OFFSET];

	let depth = (z + 2.0) / 3.0;
	[x / depth, y / depth, z]
}

#[cfg(test)]
mod test;

// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl::types::GLenum;

use super::{Drawable, ShaderSource, Vec3, VertexPassable};
use crate::upload::VertexAttribute;

/// Name of the `vec4` uniform read by the cube's vertex shader,
/// packed as (roll, yaw, pitch, scale).
pub const SCALE_MOVE_UNIFORM: &str = "scaleMove";

const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const MINT: [f32; 3] = [0.5, 1.0, 0.5];

/// Each face as two triangles, paired with its colour.
#[rustfmt::skip]
const FACES: [([[f32; 3]; 6], [f32; 3]); 6] = [
	// bottom
	([[-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], [-1.0, -1.0,  1.0],
	  [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0]], CYAN),
	// top
	([[-1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0],
	  [ 1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0]], YELLOW),
	// front
	([[-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [-1.0,  1.0,  1.0],
	  [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0]], MINT),
	// back
	([[-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0], [ 1.0, -1.0, -1.0],
	  [ 1.0, -1.0, -1.0], [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0]], YELLOW),
	// left
	([[-1.0, -1.0,  1.0], [-1.0,  1.0, -1.0], [-1.0, -1.0, -1.0],
	  [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0], [-1.0,  1.0, -1.0]], YELLOW),
	// right
	([[ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0],
	  [ 1.0, -1.0,  1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0]], CYAN),
];

#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct ColoredVertex {
	pub pos: Vec3,
	pub color: Vec3,
}

impl VertexPassable for ColoredVertex {
	const VERTEX_ATTRIBUTES: &'static [VertexAttribute] =
		&[VertexAttribute::new::<f32>(3), VertexAttribute::new::<f32>(3)];
}

/// Unit cube spanning -1..1 on every axis, one flat colour per face.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColoredCube;

impl Drawable for ColoredCube {
	type Vertex = ColoredVertex;

	const GL_TYPE: GLenum = gl::TRIANGLES;
	const SHADER_SOURCE: ShaderSource = ShaderSource {
		vertex: include_str!("vertex.glsl"),
		fragment: include_str!("fragment.glsl"),
	};

	fn vertices(&self) -> Vec<Self::Vertex> {
		FACES
			.iter()
			.flat_map(|(corners, color)| {
				corners.iter().map(move |&pos| ColoredVertex {
					pos: pos.into(),
					color: (*color).into(),
				})
			})
			.collect()
	}
}

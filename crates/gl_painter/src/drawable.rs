// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl::types::GLenum;

use crate::{
	shader::{Shader, ShaderProgram, ShaderType},
	upload::VertexAttribute,
	PainterError,
};

pub mod cube;
pub use cube::*;

pub trait Drawable {
	type Vertex: bytemuck::Pod + VertexPassable;

	const GL_TYPE: GLenum;
	const SHADER_SOURCE: ShaderSource;

	fn vertices(&self) -> Vec<Self::Vertex>;
}

pub trait VertexPassable {
	const VERTEX_ATTRIBUTES: &'static [VertexAttribute];
}

pub struct ShaderSource {
	pub vertex: &'static str,
	pub fragment: &'static str,
}

impl ShaderSource {
	pub fn create_program(&self) -> Result<ShaderProgram, PainterError> {
		Ok(ShaderProgram::link(
			&Shader::compile(ShaderType::Vertex, self.vertex)?,
			&Shader::compile(ShaderType::Fragment, self.fragment)?,
		)?)
	}
}

#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vec3 {
	pub x: f32,
	pub y: f32,
	pub z: f32,
}

impl From<[f32; 3]> for Vec3 {
	fn from([x, y, z]: [f32; 3]) -> Self {
		Self { x, y, z }
	}
}

impl From<Vec3> for [f32; 3] {
	fn from(v: Vec3) -> Self {
		[v.x, v.y, v.z]
	}
}

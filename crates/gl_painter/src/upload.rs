// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::marker::PhantomData;

use gl::types::{GLsizei, GLuint};

pub use self::attribute::VertexAttribute;
use self::buffer::StaticBuffer;
use crate::{
	drawable::{Drawable, VertexPassable},
	shader::ShaderProgram,
	PainterError,
};

pub mod attribute;
pub mod buffer;

/// Owns everything needed to draw one static mesh:
/// its shader program, vertex buffer and vertex array.
pub struct StaticUploader<D: Drawable> {
	vao: GLuint,
	vertex_buffer: StaticBuffer<D::Vertex>,
	shader: ShaderProgram,
	_drawable: PhantomData<D>,
}

impl<D: Drawable> StaticUploader<D> {
	/// Compile the drawable's shaders and upload its vertices.
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn new(drawable: &D) -> Result<Self, PainterError> {
		let shader = D::SHADER_SOURCE.create_program()?;

		let mut vao = 0;
		gl::GenVertexArrays(1, &mut vao);
		gl::BindVertexArray(vao);

		let vertex_buffer = StaticBuffer::new(gl::ARRAY_BUFFER, &drawable.vertices());
		attribute::set_vertex_attributes(<D::Vertex as VertexPassable>::VERTEX_ATTRIBUTES);

		gl::BindVertexArray(0);

		Ok(Self {
			vao,
			vertex_buffer,
			shader,
			_drawable: PhantomData,
		})
	}

	/// Bind the program, VAO and VBO
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn bind(&self) {
		self.shader.bind();
		gl::BindVertexArray(self.vao);
		self.vertex_buffer.bind();
	}

	/// # SAFETY
	/// * must be called from GL thread, after `bind`
	pub unsafe fn draw(&self) {
		gl::DrawArrays(D::GL_TYPE, 0, self.vertex_buffer.len() as GLsizei);
	}

	pub fn vertex_count(&self) -> usize {
		self.vertex_buffer.len()
	}

	pub fn shader_program(&self) -> &ShaderProgram {
		&self.shader
	}
}

impl<D: Drawable> Drop for StaticUploader<D> {
	fn drop(&mut self) {
		unsafe { gl::DeleteVertexArrays(1, &self.vao) };
	}
}

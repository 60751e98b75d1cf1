// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ffi::c_void;

use gl::types::{GLenum, GLsizei, GLuint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
	pub ty: GLenum,
	pub count: usize,
	pub ty_size: usize,
	pub is_integer: bool,
}

impl VertexAttribute {
	pub const fn new<T: GLtype>(count: usize) -> Self {
		VertexAttribute {
			ty: T::GL_TYPE,
			count,
			ty_size: std::mem::size_of::<T>(),
			is_integer: T::IS_INTEGER,
		}
	}

	#[inline]
	pub const fn size(&self) -> usize {
		self.count * self.ty_size
	}
}

pub trait GLtype: Sized {
	const GL_TYPE: GLenum;
	const IS_INTEGER: bool;
}

macro_rules! gl_types {
	($($type:ident($gltype:expr, int: $int:literal);)*) => {
		$(
			impl GLtype for $type {
				const GL_TYPE: GLenum = $gltype;
				const IS_INTEGER: bool = $int;
			}
		)*
	}
}

gl_types! {
	f64(gl::DOUBLE, int: false);
	f32(gl::FLOAT, int: false);

	u32(gl::UNSIGNED_INT, int: true);
	u16(gl::UNSIGNED_SHORT, int: true);
	u8(gl::UNSIGNED_BYTE, int: true);

	i32(gl::INT, int: true);
	i16(gl::SHORT, int: true);
	i8(gl::BYTE, int: true);
}

/// Interleaved layout of a vertex: the stride and each attribute's byte offset.
pub fn layout(attributes: &[VertexAttribute]) -> (usize, Vec<usize>) {
	let mut offsets = Vec::with_capacity(attributes.len());
	let stride = attributes.iter().fold(0, |offset, attribute| {
		offsets.push(offset);
		offset + attribute.size()
	});

	(stride, offsets)
}

/// Point attribute `i` at its slot in the interleaved vertex.
///
/// # SAFETY
/// * VAO and VBO must be bound
pub unsafe fn set_vertex_attributes(attributes: &[VertexAttribute]) {
	let (stride, offsets) = layout(attributes);

	for (i, (attribute, offset)) in attributes.iter().zip(offsets).enumerate() {
		let index = i as GLuint;

		if attribute.is_integer {
			gl::VertexAttribIPointer(
				index,
				attribute.count as GLsizei,
				attribute.ty,
				stride as GLsizei,
				offset as *const c_void,
			);
		} else {
			gl::VertexAttribPointer(
				index,
				attribute.count as GLsizei,
				attribute.ty,
				gl::FALSE,
				stride as GLsizei,
				offset as *const c_void,
			);
		}

		gl::EnableVertexAttribArray(index);
	}
}

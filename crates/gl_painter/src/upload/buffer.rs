// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{ffi::c_void, marker::PhantomData, mem};

use gl::types::{GLenum, GLsizeiptr, GLuint};

/// GPU buffer written once and never modified.
pub struct StaticBuffer<T: bytemuck::Pod> {
	buffer_type: GLenum,
	gl_buffer: GLuint,
	len: usize,
	_marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> StaticBuffer<T> {
	/// Create a buffer holding `data`.
	///
	/// # SAFETY
	/// * must be called from GL thread
	///
	/// # SIDE EFFECTS
	/// * leaves the new buffer bound to `buffer_type`
	pub unsafe fn new(buffer_type: GLenum, data: &[T]) -> Self {
		let mut gl_buffer = 0;
		gl::GenBuffers(1, &mut gl_buffer);
		gl::BindBuffer(buffer_type, gl_buffer);

		let bytes = bytemuck::cast_slice::<T, u8>(data);
		gl::BufferData(
			buffer_type,
			bytes.len() as GLsizeiptr,
			bytes.as_ptr() as *const c_void,
			gl::STATIC_DRAW,
		);

		log::debug!(
			"uploaded {} elements ({} bytes) into buffer {gl_buffer}",
			data.len(),
			data.len() * mem::size_of::<T>(),
		);

		Self {
			buffer_type,
			gl_buffer,
			len: data.len(),
			_marker: PhantomData,
		}
	}

	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn bind(&self) {
		gl::BindBuffer(self.buffer_type, self.gl_buffer);
	}

	pub fn len(&self) -> usize {
		self.len
	}
}

impl<T: bytemuck::Pod> Drop for StaticBuffer<T> {
	fn drop(&mut self) {
		unsafe { gl::DeleteBuffers(1, &self.gl_buffer) };
	}
}

// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ffi::CString;

use gl::types::{GLchar, GLenum, GLint, GLuint};
use thiserror::Error;

use crate::uniform::{UniformError, UniformLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderType {
	Vertex,
	Fragment,
}

pub struct Shader {
	ty: ShaderType,
	shader_object: GLuint,
}

pub struct ShaderProgram {
	pub program_object: GLuint,
}

impl ShaderType {
	#[inline]
	pub fn gl_type(&self) -> GLenum {
		match self {
			Self::Vertex => gl::VERTEX_SHADER,
			Self::Fragment => gl::FRAGMENT_SHADER,
		}
	}
}

#[derive(Debug, Error)]
pub enum ShaderCompileError {
	#[error("could not create {0:?} shader (glCreateShader returned 0)")]
	CouldNotCreate(ShaderType),
	#[error("could not compile {0:?} shader - driver log:\n{1}\n")]
	Compile(ShaderType, String),
}

#[derive(Debug, Error)]
pub enum ShaderLinkError {
	#[error("expected a vertex shader and a fragment shader")]
	InvalidShader,
	#[error("could not create program (glCreateProgram returned 0)")]
	CouldNotCreate,
	#[error("could not link shader - driver log:\n{0}\n")]
	Link(String),
}

/// Turns a driver info log into a string.
///
/// `written` is the length reported by the driver, which excludes the
/// null terminator.
fn info_log(mut log: Vec<u8>, written: GLint) -> String {
	log.truncate(written.max(0) as usize);
	// Drivers should only hand back ASCII, but a lossy conversion keeps
	// a malformed log from hiding the actual failure.
	String::from_utf8_lossy(&log).trim_end().to_string()
}

impl Shader {
	pub fn compile(ty: ShaderType, source: &str) -> Result<Self, ShaderCompileError> {
		unsafe {
			let shader = gl::CreateShader(ty.gl_type());
			if shader == 0 {
				return Err(ShaderCompileError::CouldNotCreate(ty))
			}

			let src_ptr = source.as_bytes().as_ptr() as *const GLchar;
			let len = source.len() as GLint;
			gl::ShaderSource(shader, 1, &src_ptr, &len);

			gl::CompileShader(shader);

			let mut compile_status = 0 as GLint;
			gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut compile_status);

			if compile_status != gl::TRUE as GLint {
				let mut log_length = 0 as GLint;
				gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut log_length);

				let mut log = vec![0u8; log_length.max(1) as usize];
				let mut written = 0 as GLint;
				gl::GetShaderInfoLog(
					shader,
					log.len() as GLint,
					&mut written,
					log.as_mut_ptr() as *mut GLchar,
				);
				gl::DeleteShader(shader);

				return Err(ShaderCompileError::Compile(ty, info_log(log, written)))
			}

			Ok(Shader {
				shader_object: shader,
				ty,
			})
		}
	}
}

impl Drop for Shader {
	fn drop(&mut self) {
		// Reduces refcount for shader.
		// The OpenGL driver will only delete the backing shader object
		// when it is not attached to shader program.
		unsafe { gl::DeleteShader(self.shader_object) };
	}
}

impl ShaderProgram {
	pub fn link(vertex_shader: &Shader, fragment_shader: &Shader) -> Result<Self, ShaderLinkError> {
		check_pair(vertex_shader.ty, fragment_shader.ty)?;

		unsafe {
			let program = gl::CreateProgram();
			if program == 0 {
				return Err(ShaderLinkError::CouldNotCreate)
			}

			gl::AttachShader(program, vertex_shader.shader_object);
			gl::AttachShader(program, fragment_shader.shader_object);

			gl::LinkProgram(program);

			// allows earlier deletion of shader objects.
			gl::DetachShader(program, vertex_shader.shader_object);
			gl::DetachShader(program, fragment_shader.shader_object);

			let mut link_status = 0;
			gl::GetProgramiv(program, gl::LINK_STATUS, &mut link_status);

			if link_status != gl::TRUE as GLint {
				let mut log_length = 0 as GLint;
				gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut log_length);

				let mut log = vec![0u8; log_length.max(1) as usize];
				let mut written = 0 as GLint;
				gl::GetProgramInfoLog(
					program,
					log.len() as GLint,
					&mut written,
					log.as_mut_ptr() as *mut GLchar,
				);
				gl::DeleteProgram(program);

				return Err(ShaderLinkError::Link(info_log(log, written)))
			}

			Ok(ShaderProgram {
				program_object: program,
			})
		}
	}

	pub fn bind(&self) {
		unsafe { gl::UseProgram(self.program_object) };
	}

	/// Look up a uniform by name.
	///
	/// Uniforms the linker optimised out report as [`UniformError::NotFound`].
	pub fn uniform_location(&self, name: &str) -> Result<UniformLocation, UniformError> {
		let c_name = CString::new(name).map_err(|_| UniformError::InvalidName(name.to_string()))?;
		let location = unsafe { gl::GetUniformLocation(self.program_object, c_name.as_ptr()) };
		UniformLocation::from_raw(name, location)
	}
}

impl Drop for ShaderProgram {
	fn drop(&mut self) {
		// Reduces refcount for shader program.
		// The OpenGL driver will only delete the backing shader program
		// when it is not part of any renderin context.
		unsafe { gl::DeleteProgram(self.program_object) };
	}
}

fn check_pair(vertex: ShaderType, fragment: ShaderType) -> Result<(), ShaderLinkError> {
	match (vertex, fragment) {
		(ShaderType::Vertex, ShaderType::Fragment) => Ok(()),
		_ => Err(ShaderLinkError::InvalidShader),
	}
}

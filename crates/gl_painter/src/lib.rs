// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Minimal OpenGL plumbing for drawing a single static mesh
//! through one shader program and a handful of uniforms.

use std::ffi::CStr;

use thiserror::Error;

pub mod drawable;
pub mod shader;
pub mod uniform;
pub mod upload;

#[derive(Debug, Error)]
pub enum PainterError {
	#[error(transparent)]
	Compile(#[from] shader::ShaderCompileError),
	#[error(transparent)]
	Link(#[from] shader::ShaderLinkError),
	#[error(transparent)]
	Uniform(#[from] uniform::UniformError),
}

/// Version string reported by the current context's driver.
///
/// # SAFETY
/// * must be called from GL thread, after GL symbols are loaded
pub unsafe fn gl_version() -> String {
	let version = gl::GetString(gl::VERSION);
	if version.is_null() {
		return String::from("unknown")
	}

	CStr::from_ptr(version as *const _).to_string_lossy().into_owned()
}

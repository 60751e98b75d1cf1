// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl::types::GLint;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UniformError {
	#[error("uniform `{0}` is not an active uniform of the program")]
	NotFound(String),
	#[error("uniform name {0:?} contains a null byte")]
	InvalidName(String),
}

/// Location of an active uniform in a linked program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformLocation(GLint);

impl UniformLocation {
	pub fn from_raw(name: &str, location: GLint) -> Result<Self, UniformError> {
		match location {
			-1 => Err(UniformError::NotFound(name.to_string())),
			location => Ok(Self(location)),
		}
	}

	#[inline]
	pub fn raw(&self) -> GLint {
		self.0
	}
}

/// A `vec4` uniform.
#[derive(Debug, Clone, Copy)]
pub struct Uniform4f {
	location: UniformLocation,
}

impl Uniform4f {
	pub fn new(location: UniformLocation) -> Self {
		Self { location }
	}

	pub fn location(&self) -> UniformLocation {
		self.location
	}

	/// # SAFETY
	/// * must be called from GL thread
	/// * the owning program must be bound
	#[inline]
	pub unsafe fn set(&self, value: [f32; 4]) {
		let [x, y, z, w] = value;
		gl::Uniform4f(self.location.0, x, y, z, w);
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn missing_uniform() {
		assert_eq!(
			UniformLocation::from_raw("scaleMove", -1),
			Err(UniformError::NotFound("scaleMove".to_string()))
		);
	}

	#[test]
	fn active_uniform() {
		let location = UniformLocation::from_raw("scaleMove", 0).unwrap();
		assert_eq!(location.raw(), 0);
		assert_eq!(Uniform4f::new(location).location(), location);
	}
}

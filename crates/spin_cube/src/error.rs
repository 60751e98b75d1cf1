// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl_painter::PainterError;
use thiserror::Error;

/// Startup failures. Nothing after the first frame can fail.
#[derive(Debug, Error)]
pub enum AppError {
	#[error("could not initialize glfw: {0}")]
	GlfwInit(#[from] glfw::InitError),
	#[error("could not create a {width}x{height} window with an OpenGL 3.3 core context")]
	WindowCreation { width: u32, height: u32 },
	#[error("could not set up the cube renderer: {0}")]
	Painter(#[from] PainterError),
}

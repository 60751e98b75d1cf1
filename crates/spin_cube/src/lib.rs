// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

pub mod config;
pub mod debug;
pub mod error;
pub mod frame_loop;
pub mod pacing;
pub mod scene;
#[cfg(test)]
mod transform;
pub mod window;

use crate::{
	config::Args,
	error::AppError,
	frame_loop::FrameStats,
	pacing::FramePacer,
	scene::RotationState,
	window::GlfwFrontend,
};

/// Open the window and spin the cube until it is closed.
pub fn run(args: &Args) -> Result<FrameStats, AppError> {
	let mut frontend = GlfwFrontend::new(args)?;
	let mut scene = RotationState::new();
	let mut pacer = FramePacer::new(args.frame_interval());

	Ok(frame_loop::run(&mut frontend, &mut scene, &mut pacer))
}

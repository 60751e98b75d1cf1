// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use crate::{
	pacing::FramePacer,
	scene::{RotationState, SceneUniform},
};

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
	Quit,
	/// Absolute cursor position in window pixels.
	MouseMotion { x: i32, y: i32 },
	/// An input device became available.
	DeviceAdded {
		id: i32,
		name: Option<String>,
		is_gamepad: bool,
	},
}

/// Window side of the loop: where events come from and frames go to.
pub trait Frontend {
	/// Append every pending event to `events`.
	fn poll_events(&mut self, events: &mut Vec<InputEvent>);
	/// Clear and draw the scene with `uniform`.
	fn draw(&mut self, uniform: &SceneUniform);
	fn swap_buffers(&mut self);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
	pub frames: u64,
	pub mouse_events: u64,
	pub devices_added: u64,
}

/// Run frames until the frontend reports [`InputEvent::Quit`].
///
/// A quit ends the loop on the iteration it is polled in,
/// before the scene is advanced or drawn.
pub fn run<F: Frontend>(
	frontend: &mut F,
	scene: &mut RotationState,
	pacer: &mut FramePacer,
) -> FrameStats {
	let mut stats = FrameStats::default();
	let mut events = Vec::new();

	loop {
		events.clear();
		frontend.poll_events(&mut events);

		for event in events.drain(..) {
			match event {
				InputEvent::Quit => {
					log::info!("quit requested after {} frames", stats.frames);
					return stats
				},
				InputEvent::MouseMotion { x, y } => {
					log::debug!("mouse motion x:{x} y:{y}");
					scene.mouse_motion(x, y);
					stats.mouse_events += 1;
				},
				InputEvent::DeviceAdded { id, name, is_gamepad } => {
					log::info!(
						"input device {id} added: {} (gamepad: {is_gamepad})",
						name.as_deref().unwrap_or("<unnamed>"),
					);
					stats.devices_added += 1;
				},
			}
		}

		let uniform = scene.advance();
		frontend.draw(&uniform);
		frontend.swap_buffers();
		stats.frames += 1;

		pacer.frame_finished();
	}
}

// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::sync::mpsc::Receiver;

use gl_painter::{
	drawable::{ColoredCube, SCALE_MOVE_UNIFORM},
	uniform::Uniform4f,
	upload::StaticUploader,
	PainterError,
};
use glfw::{Context, JoystickId, OpenGlProfileHint, WindowEvent, WindowHint};

use crate::{
	config::Args,
	debug,
	error::AppError,
	frame_loop::{Frontend, InputEvent},
	scene::SceneUniform,
};

const CLEAR_COLOR: [f32; 4] = [0.0, 0.1, 0.0, 1.0];

#[rustfmt::skip]
const JOYSTICKS: [JoystickId; 16] = [
	JoystickId::Joystick1, JoystickId::Joystick2, JoystickId::Joystick3, JoystickId::Joystick4,
	JoystickId::Joystick5, JoystickId::Joystick6, JoystickId::Joystick7, JoystickId::Joystick8,
	JoystickId::Joystick9, JoystickId::Joystick10, JoystickId::Joystick11, JoystickId::Joystick12,
	JoystickId::Joystick13, JoystickId::Joystick14, JoystickId::Joystick15, JoystickId::Joystick16,
];

/// A glfw window drawing the cube.
pub struct GlfwFrontend {
	// GL objects go before the window so they are deleted while
	// the context still exists.
	cube: StaticUploader<ColoredCube>,
	scale_move: Uniform4f,
	joysticks_present: [bool; 16],
	events: Receiver<(f64, WindowEvent)>,
	window: glfw::Window,
	glfw: glfw::Glfw,
}

impl GlfwFrontend {
	pub fn new(args: &Args) -> Result<Self, AppError> {
		let mut glfw = glfw::init(glfw::LOG_ERRORS)?;
		glfw.window_hint(WindowHint::ContextVersion(3, 3));
		glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
		glfw.window_hint(WindowHint::OpenGlForwardCompat(true));
		glfw.window_hint(WindowHint::OpenGlDebugContext(!args.no_gl_debug));
		glfw.window_hint(WindowHint::DoubleBuffer(true));
		glfw.window_hint(WindowHint::DepthBits(Some(24)));

		let (mut window, events) = glfw
			.create_window(args.width, args.height, &args.title, glfw::WindowMode::Windowed)
			.ok_or(AppError::WindowCreation {
				width: args.width,
				height: args.height,
			})?;

		window.make_current();

		glfw.set_swap_interval(match args.vsync {
			true => glfw::SwapInterval::Sync(1),
			false => glfw::SwapInterval::None,
		});

		window.set_close_polling(true);
		window.set_cursor_pos_polling(true);
		window.set_framebuffer_size_polling(true);

		gl::load_with(|p| window.get_proc_address(p) as *const _);

		let (cube, scale_move) = unsafe {
			log::info!("OpenGL version {}", gl_painter::gl_version());

			if !args.no_gl_debug && !debug::setup_gl_debug() {
				log::warn!("context has no debug output, driver messages will not be logged");
			}

			let (width, height) = window.get_framebuffer_size();
			gl::Viewport(0, 0, width, height);

			let [r, g, b, a] = CLEAR_COLOR;
			gl::ClearColor(r, g, b, a);
			gl::Enable(gl::DEPTH_TEST);
			gl::DepthFunc(gl::LESS);
			gl::Enable(gl::BLEND);
			gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);

			let cube = StaticUploader::new(&ColoredCube)?;
			let location = cube
				.shader_program()
				.uniform_location(SCALE_MOVE_UNIFORM)
				.map_err(PainterError::from)?;
			log::info!("uniform `{SCALE_MOVE_UNIFORM}` bound at location {}", location.raw());
			log::debug!("cube uploaded with {} vertices", cube.vertex_count());

			(cube, Uniform4f::new(location))
		};

		// devices already plugged in at startup are reported on the first poll
		let joysticks_present = [false; 16];

		Ok(Self {
			cube,
			scale_move,
			joysticks_present,
			events,
			window,
			glfw,
		})
	}

	fn poll_joysticks(&mut self, out: &mut Vec<InputEvent>) {
		for (id, present) in JOYSTICKS.iter().zip(self.joysticks_present.iter_mut()) {
			let joystick = self.glfw.get_joystick(*id);
			let now_present = joystick.is_present();

			if now_present && !*present {
				out.push(InputEvent::DeviceAdded {
					id: *id as i32,
					name: joystick.get_name(),
					is_gamepad: joystick.is_gamepad(),
				});
			} else if !now_present && *present {
				log::info!("input device {} removed", *id as i32);
			}

			*present = now_present;
		}
	}
}

impl Frontend for GlfwFrontend {
	fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
		self.glfw.poll_events();

		for (_, event) in glfw::flush_messages(&self.events) {
			match event {
				WindowEvent::Close => out.push(InputEvent::Quit),
				WindowEvent::CursorPos(x, y) => out.push(InputEvent::MouseMotion {
					x: x as i32,
					y: y as i32,
				}),
				WindowEvent::FramebufferSize(width, height) => unsafe {
					gl::Viewport(0, 0, width, height);
				},
				_ => {},
			}
		}

		self.poll_joysticks(out);

		if self.window.should_close() && !out.contains(&InputEvent::Quit) {
			out.push(InputEvent::Quit);
		}
	}

	fn draw(&mut self, uniform: &SceneUniform) {
		unsafe {
			gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);

			self.cube.bind();
			self.scale_move.set(uniform.as_array());
			self.cube.draw();
		}
	}

	fn swap_buffers(&mut self) {
		self.window.swap_buffers();
	}
}

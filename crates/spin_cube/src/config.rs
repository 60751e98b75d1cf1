// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "spin_cube", version)]
#[command(about = "Spinning colour cube; move the mouse to steer it")]
pub struct Args {
	/// Window width in pixels
	#[arg(long, default_value_t = 640)]
	pub width: u32,
	/// Window height in pixels
	#[arg(long, default_value_t = 480)]
	pub height: u32,
	/// Window title
	#[arg(long, default_value = "OpenGL Shader")]
	pub title: String,
	/// Target time per frame in milliseconds, 0 to run unpaced
	#[arg(long, default_value_t = 50)]
	pub frame_ms: u64,
	/// Sync buffer swaps to the display refresh
	#[arg(long)]
	pub vsync: bool,
	/// Skip requesting a debug context and forwarding driver messages
	#[arg(long)]
	pub no_gl_debug: bool,
}

impl Args {
	pub fn frame_interval(&self) -> Duration {
		Duration::from_millis(self.frame_ms)
	}
}

#[cfg(test)]
mod test {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn defaults() {
		let args = Args::parse_from(["spin_cube"]);
		assert_eq!(args.width, 640);
		assert_eq!(args.height, 480);
		assert_eq!(args.title, "OpenGL Shader");
		assert_eq!(args.frame_interval(), Duration::from_millis(50));
		assert!(!args.vsync);
		assert!(!args.no_gl_debug);
	}

	#[test]
	fn overrides() {
		let args = Args::parse_from([
			"spin_cube",
			"--width",
			"800",
			"--frame-ms",
			"0",
			"--vsync",
			"--title",
			"cube",
		]);
		assert_eq!(args.width, 800);
		assert_eq!(args.height, 480);
		assert!(args.frame_interval().is_zero());
		assert!(args.vsync);
		assert_eq!(args.title, "cube");
	}

	#[test]
	fn rejects_negative_size() {
		assert!(Args::try_parse_from(["spin_cube", "--width", "-1"]).is_err());
	}

	#[test]
	fn command_is_consistent() {
		Args::command().debug_assert();
	}
}

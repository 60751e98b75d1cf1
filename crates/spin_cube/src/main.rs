// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::process::ExitCode;

use clap::Parser;
use spin_cube::config::Args;

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();
	log::debug!("{args:?}");

	match spin_cube::run(&args) {
		Ok(stats) => {
			log::info!(
				"drew {} frames ({} mouse events, {} devices added)",
				stats.frames,
				stats.mouse_events,
				stats.devices_added,
			);
			ExitCode::SUCCESS
		},
		Err(err) => {
			log::error!("{err}");
			ExitCode::FAILURE
		},
	}
}

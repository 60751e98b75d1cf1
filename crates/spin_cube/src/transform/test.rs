use std::f32::consts::FRAC_PI_2;

use super::*;
use crate::scene::RotationState;

fn assert_vec_close(actual: [f32; 3], expected: [f32; 3]) {
	for (a, e) in actual.iter().zip(expected) {
		assert!((a - e).abs() < 1e-5, "expected {expected:?}, got {actual:?}");
	}
}

fn uniform(roll: f32, yaw: f32, pitch: f32) -> SceneUniform {
	SceneUniform {
		roll,
		yaw,
		pitch,
		scale: 0.3,
	}
}

#[test]
fn identity_rotation() {
	// z = 0.3 - 0.2 = 0.1, so xy are divided by 2.1 / 3 = 0.7
	let projected = project([1.0, 1.0, 1.0], &uniform(0.0, 0.0, 0.0));
	assert_vec_close(projected, [0.3 / 0.7, 0.3 / 0.7, 0.1]);
}

#[test]
fn quarter_turns() {
	assert_vec_close(rotate_z([1.0, 0.0, 0.0], FRAC_PI_2), [0.0, 1.0, 0.0]);
	assert_vec_close(rotate_y([1.0, 0.0, 0.0], FRAC_PI_2), [0.0, 0.0, 1.0]);
	assert_vec_close(rotate_x([0.0, 1.0, 0.0], FRAC_PI_2), [0.0, 0.0, 1.0]);
}

#[test]
fn rotation_order_is_z_then_y_then_x() {
	// roll moves +x onto +y, pitch then carries +y onto +z
	let projected = project([1.0, 0.0, 0.0], &uniform(FRAC_PI_2, 0.0, FRAC_PI_2));
	let z = 0.3 + Z_OFFSET;
	assert_vec_close(projected, [0.0, 0.0, z]);

	// the other order would leave the vertex on the y axis
	let other = rotate_z(rotate_x([0.3, 0.0, 0.0], FRAC_PI_2), FRAC_PI_2);
	assert_vec_close(other, [0.0, 0.3, 0.0]);
}

#[test]
fn rotation_preserves_length() {
	let mut state = RotationState::new();
	for _ in 0..37 {
		state.advance();
	}
	let u = state.uniform();
	let v = rotate_x(rotate_y(rotate_z([1.0, -1.0, 1.0], u.roll), u.yaw), u.pitch);
	let len = v.iter().map(|c| c * c).sum::<f32>().sqrt();
	assert!((len - 3f32.sqrt()).abs() < 1e-5);
}

#[test]
fn cube_stays_in_front_of_camera() {
	// scaled cube corners reach at most sqrt(3) * 0.3 from the origin,
	// so the perspective divisor never reaches zero
	let mut state = RotationState::new();
	for frame in 0..720 {
		let u = state.advance();
		for corner in [[1.0, 1.0, 1.0], [-1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, 1.0, -1.0]] {
			let [x, y, z] = project(corner, &u);
			assert!(z + 2.0 > 1.0, "frame {frame}");
			assert!(x.is_finite() && y.is_finite());
		}
	}
}

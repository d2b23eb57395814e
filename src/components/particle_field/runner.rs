//! Frame scheduling for the particle canvases.
//!
//! The browser drives the loop through `requestAnimationFrame`; this
//! module adds the cancellation handle that guarantees a stale tick can
//! never run after the host component unmounts. The check itself is pure
//! ([`run_tick`]) so teardown behavior is testable off-browser.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// Shared liveness flag for one animation loop.
///
/// Cloned into the frame closure; cancelling from the component's cleanup
/// hook stops the loop at the top of the next tick.
#[derive(Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
	pub fn new() -> Self {
		Self(Rc::new(Cell::new(true)))
	}

	pub fn is_alive(&self) -> bool {
		self.0.get()
	}

	pub fn cancel(&self) {
		self.0.set(false);
	}
}

impl Default for Liveness {
	fn default() -> Self {
		Self::new()
	}
}

/// Run one tick if the loop is still alive. Returns whether the next
/// tick should be scheduled.
pub fn run_tick(liveness: &Liveness, tick: &mut dyn FnMut()) -> bool {
	if !liveness.is_alive() {
		return false;
	}
	tick();
	true
}

/// Start a `requestAnimationFrame` loop running `tick` until `liveness`
/// is cancelled.
///
/// The closure holds a handle to itself so it can reschedule; once the
/// loop is cancelled it simply stops rescheduling and the browser never
/// calls it again.
pub fn start_frame_loop(liveness: Liveness, mut tick: impl FnMut() + 'static) {
	let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let inner = handle.clone();

	*handle.borrow_mut() = Some(Closure::new(move || {
		if !run_tick(&liveness, &mut tick) {
			return;
		}
		if let Some(ref cb) = *inner.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));

	if let Some(ref cb) = *handle.borrow() {
		let _ = web_sys::window()
			.unwrap()
			.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::field::ParticleField;
	use crate::components::particle_field::style::FieldStyle;
	use crate::components::particle_field::surface::RecordingSurface;

	#[test]
	fn tick_runs_while_alive() {
		let liveness = Liveness::new();
		let mut count = 0;
		for _ in 0..3 {
			assert!(run_tick(&liveness, &mut || count += 1));
		}
		assert_eq!(count, 3);
	}

	#[test]
	fn cancelled_loop_emits_no_draw_calls() {
		let liveness = Liveness::new();
		let mut field = ParticleField::new(FieldStyle::default(), 640.0, 480.0);
		let mut surface = RecordingSurface::default();

		// One live frame draws.
		let scheduled = run_tick(&liveness, &mut || {
			field.frame(&mut surface, None);
		});
		assert!(scheduled);
		let drawn = surface.ops.len();
		assert!(drawn > 0);

		// Cancel, then advance the scheduler: nothing may draw.
		liveness.cancel();
		let scheduled = run_tick(&liveness, &mut || {
			field.frame(&mut surface, None);
		});
		assert!(!scheduled);
		assert_eq!(surface.ops.len(), drawn);
	}

	#[test]
	fn cancellation_is_visible_through_clones() {
		let liveness = Liveness::new();
		let other = liveness.clone();
		other.cancel();
		assert!(!liveness.is_alive());
	}
}

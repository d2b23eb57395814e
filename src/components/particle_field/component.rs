//! Leptos components wrapping the particle-field canvases.
//!
//! Each component creates a canvas element sized to its parent, runs the
//! simulation in a `requestAnimationFrame` loop, and tears the loop down
//! through a [`Liveness`] handle when it unmounts. The liveness flag and
//! listener closures hold JS values, so they live in thread-local
//! `StoredValue`s; `on_cleanup` only captures those handles. A missing
//! 2D context or a zero-sized canvas leaves the background empty instead
//! of failing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::depth::DepthField;
use super::field::ParticleField;
use super::runner::{Liveness, start_frame_loop};
use super::style::{DepthStyle, FieldStyle};
use super::surface::CanvasSurface;

/// Resolve the canvas 2D context, or `None` when the surface is
/// unavailable (headless environments, unsupported contexts).
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	let Ok(Some(obj)) = canvas.get_context("2d") else {
		warn!("particle field: no 2d context, skipping background");
		return None;
	};
	obj.dyn_into().ok()
}

/// Match the canvas backing buffer to its displayed size. Returns the
/// new dimensions.
fn sync_backing_buffer(canvas: &HtmlCanvasElement) -> (f64, f64) {
	let (w, h) = (canvas.offset_width() as f64, canvas.offset_height() as f64);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w, h)
}

/// Pointer-reactive 2D particle background.
///
/// Fills its parent element. Particles drift, wrap at the edges, react
/// to the cursor, and are joined by faint lines when close together.
#[component]
pub fn ParticleCanvas(#[prop(optional)] style: Option<FieldStyle>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let pointer: Rc<Cell<Option<(f64, f64)>>> = Rc::new(Cell::new(None));
	let resize_cb: StoredValue<Option<Closure<dyn FnMut()>>, LocalStorage> =
		StoredValue::new_local(None);
	let liveness = StoredValue::new_local(Liveness::new());

	let pointer_init = pointer.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = sync_backing_buffer(&canvas);
		let Some(ctx) = context_2d(&canvas) else {
			return;
		};

		let field = Rc::new(RefCell::new(ParticleField::new(
			style.clone().unwrap_or_default(),
			w,
			h,
		)));

		let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
		resize_cb.set_value(Some(Closure::new(move || {
			let (nw, nh) = sync_backing_buffer(&canvas_resize);
			field_resize.borrow_mut().resize(nw, nh);
		})));
		resize_cb.with_value(|cb| {
			if let Some(cb) = cb {
				let _ = web_sys::window()
					.unwrap()
					.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		});

		let pointer_tick = pointer_init.clone();
		start_frame_loop(liveness.get_value(), move || {
			let mut surface = CanvasSurface::new(&ctx);
			field.borrow_mut().frame(&mut surface, pointer_tick.get());
		});
	});

	let pointer_move = pointer.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		pointer_move.set(Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		)));
	};

	on_cleanup(move || {
		liveness.with_value(Liveness::cancel);
		resize_cb.with_value(|cb| {
			if let (Some(cb), Some(window)) = (cb.as_ref(), web_sys::window()) {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			on:mousemove=on_mousemove
		/>
	}
}

/// 3D falling-point background for the hero section.
#[component]
pub fn DepthCanvas(#[prop(optional)] style: Option<DepthStyle>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let resize_cb: StoredValue<Option<Closure<dyn FnMut()>>, LocalStorage> =
		StoredValue::new_local(None);
	let liveness = StoredValue::new_local(Liveness::new());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let dims = Rc::new(Cell::new(sync_backing_buffer(&canvas)));
		let Some(ctx) = context_2d(&canvas) else {
			return;
		};

		let field = Rc::new(RefCell::new(DepthField::new(
			style.clone().unwrap_or_default(),
		)));

		let (dims_resize, canvas_resize) = (dims.clone(), canvas.clone());
		resize_cb.set_value(Some(Closure::new(move || {
			dims_resize.set(sync_backing_buffer(&canvas_resize));
		})));
		resize_cb.with_value(|cb| {
			if let Some(cb) = cb {
				let _ = web_sys::window()
					.unwrap()
					.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		});

		start_frame_loop(liveness.get_value(), move || {
			let (w, h) = dims.get();
			let mut surface = CanvasSurface::new(&ctx);
			field.borrow_mut().frame(&mut surface, w, h);
		});
	});

	on_cleanup(move || {
		liveness.with_value(Liveness::cancel);
		resize_cb.with_value(|cb| {
			if let (Some(cb), Some(window)) = (cb.as_ref(), web_sys::window()) {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		});
	});

	view! { <canvas node_ref=canvas_ref class="particle-canvas" /> }
}

#[cfg(test)]
mod tests {
	use super::*;

	// Unmounting the owner must cancel a liveness flag parked in a
	// thread-local StoredValue, which is what the canvas components rely
	// on to stop their frame loops.
	#[test]
	fn owner_cleanup_cancels_parked_liveness() {
		let owner = Owner::new();
		let handle = owner.with(|| {
			let stored = StoredValue::new_local(Liveness::new());
			let handle = stored.get_value();
			on_cleanup(move || stored.with_value(Liveness::cancel));
			handle
		});

		assert!(handle.is_alive());
		drop(owner);
		assert!(!handle.is_alive());
	}
}

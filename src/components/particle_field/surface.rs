//! Drawing-surface contract for the particle fields.
//!
//! The simulations emit draw instructions through [`DrawSurface`] instead
//! of talking to the canvas directly, so the update/draw loop can run
//! (and be asserted on) without a browser.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::style::Color;

/// Receives per-frame draw instructions from a particle field.
pub trait DrawSurface {
	/// Clear the full surface ahead of a frame.
	fn clear(&mut self, width: f64, height: f64);
	/// Draw a filled circle.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Draw a straight line segment.
	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color);
}

/// [`DrawSurface`] adapter over a 2D canvas context.
pub struct CanvasSurface<'a> {
	ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl DrawSurface for CanvasSurface<'_> {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(x1, y1);
		self.ctx.line_to(x2, y2);
		self.ctx.stroke();
	}
}

/// A recorded draw instruction, for assertions in tests.
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	Clear,
	Circle { x: f64, y: f64, radius: f64 },
	Line { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// Test surface that records every instruction it receives.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSurface {
	pub ops: Vec<DrawOp>,
}

#[cfg(test)]
impl RecordingSurface {
	pub fn circles(&self) -> usize {
		self.ops
			.iter()
			.filter(|op| matches!(op, DrawOp::Circle { .. }))
			.count()
	}

	pub fn lines(&self) -> usize {
		self.ops
			.iter()
			.filter(|op| matches!(op, DrawOp::Line { .. }))
			.count()
	}
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
	fn clear(&mut self, _width: f64, _height: f64) {
		self.ops.push(DrawOp::Clear);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, _color: Color) {
		self.ops.push(DrawOp::Circle { x, y, radius });
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, _width: f64, _color: Color) {
		self.ops.push(DrawOp::Line { x1, y1, x2, y2 });
	}
}

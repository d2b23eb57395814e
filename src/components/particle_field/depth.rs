//! 3D falling point field for the hero background.
//!
//! Points live in a cube centered on the origin and sink at fixed
//! per-point speeds. A point leaving the bottom face is recycled to the
//! top face with freshly randomized horizontal and depth coordinates, so
//! the stream never thins out. Rendering projects the cube through a
//! simple pinhole camera onto the 2D canvas.

use super::style::{DepthStyle, Shuffle};
use super::surface::DrawSurface;

/// A single sinking point. No velocity vector: the vertical coordinate
/// is decremented by `speed` every tick.
#[derive(Clone, Debug)]
pub struct DepthPoint {
	pub x: f64,
	pub y: f64,
	pub z: f64,
	pub speed: f64,
}

/// Owns the point set and the recycling stream.
pub struct DepthField {
	pub points: Vec<DepthPoint>,
	style: DepthStyle,
	rng: Shuffle,
}

impl DepthField {
	pub fn new(style: DepthStyle) -> Self {
		let mut rng = Shuffle::new(style.seed);
		let r = style.half_extent;
		let points = (0..style.count)
			.map(|_| DepthPoint {
				x: rng.next_range(-r, 2.0 * r),
				y: rng.next_range(-r, 2.0 * r),
				z: rng.next_range(-r, 2.0 * r),
				speed: rng.next_range(style.speed_min, style.speed_span),
			})
			.collect();

		Self { points, style, rng }
	}

	/// Advance every point by one tick, recycling points that passed the
	/// bottom face back to the top with new x/z.
	pub fn step(&mut self) {
		let r = self.style.half_extent;
		for p in &mut self.points {
			p.y -= p.speed;
			if p.y < -r {
				p.y = r;
				p.x = self.rng.next_range(-r, 2.0 * r);
				p.z = self.rng.next_range(-r, 2.0 * r);
			}
		}
	}

	/// Project a world position onto a `width x height` surface.
	///
	/// Returns `(sx, sy, radius, alpha)`, or `None` when the point sits
	/// behind the near plane or the surface is degenerate.
	pub fn project(&self, p: &DepthPoint, width: f64, height: f64) -> Option<(f64, f64, f64, f64)> {
		if width <= 0.0 || height <= 0.0 {
			return None;
		}
		let depth = self.style.camera_z - p.z;
		if depth < 0.1 {
			return None;
		}

		let focal = (height / 2.0) / (self.style.fov / 2.0).tan();
		let sx = width / 2.0 + p.x * focal / depth;
		let sy = height / 2.0 - p.y * focal / depth;
		let radius = (self.style.point_size / 2.0) * focal / depth;

		// Farther points fade toward the background.
		let far = self.style.camera_z + self.style.half_extent;
		let alpha = self.style.color.a * (1.0 - depth / far).clamp(0.15, 1.0);
		Some((sx, sy, radius, alpha))
	}

	/// Emit one circle per visible point.
	pub fn draw(&self, surface: &mut dyn DrawSurface, width: f64, height: f64) {
		for p in &self.points {
			if let Some((sx, sy, radius, alpha)) = self.project(p, width, height) {
				surface.fill_circle(sx, sy, radius, self.style.color.with_alpha(alpha));
			}
		}
	}

	/// One full frame: clear, update, draw.
	pub fn frame(&mut self, surface: &mut dyn DrawSurface, width: f64, height: f64) {
		surface.clear(width, height);
		self.step();
		self.draw(surface, width, height);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::surface::RecordingSurface;

	fn small_field(count: usize) -> DepthField {
		let style = DepthStyle {
			count,
			..DepthStyle::default()
		};
		DepthField::new(style)
	}

	#[test]
	fn points_start_inside_the_cube() {
		let field = small_field(500);
		for p in &field.points {
			assert!(p.x.abs() <= 5.0 && p.y.abs() <= 5.0 && p.z.abs() <= 5.0);
			assert!(p.speed >= 0.002 && p.speed < 0.012);
		}
	}

	#[test]
	fn cube_bound_holds_over_many_ticks() {
		let mut field = small_field(200);
		for _ in 0..5000 {
			field.step();
			for p in &field.points {
				assert!(p.x.abs() <= 5.0);
				assert!(p.z.abs() <= 5.0);
				assert!((-5.0..=5.0).contains(&p.y), "y escaped: {}", p.y);
			}
		}
	}

	#[test]
	fn recycled_point_gets_fresh_horizontal_coordinates() {
		let mut field = small_field(1);
		field.points[0] = DepthPoint {
			x: 1.25,
			y: -4.999,
			z: -2.5,
			speed: 0.01,
		};

		field.step();
		let p = &field.points[0];
		assert_eq!(p.y, 5.0, "reset to the top face");
		assert_ne!(p.x, 1.25, "horizontal coordinate re-randomized");
		assert_ne!(p.z, -2.5, "depth coordinate re-randomized");
		assert!(p.x.abs() <= 5.0 && p.z.abs() <= 5.0);
	}

	#[test]
	fn origin_projects_to_surface_center() {
		let field = small_field(1);
		let origin = DepthPoint {
			x: 0.0,
			y: 0.0,
			z: 0.0,
			speed: 0.0,
		};
		let (sx, sy, radius, alpha) = field.project(&origin, 1920.0, 1080.0).unwrap();
		assert_eq!(sx, 960.0);
		assert_eq!(sy, 540.0);
		assert!(radius > 0.0);
		assert!(alpha > 0.0 && alpha <= 0.8);
	}

	#[test]
	fn point_behind_camera_is_culled() {
		let field = small_field(1);
		let behind = DepthPoint {
			x: 0.0,
			y: 0.0,
			z: 5.0,
			speed: 0.0,
		};
		assert!(field.project(&behind, 1920.0, 1080.0).is_none());
	}

	#[test]
	fn zero_sized_surface_draws_nothing() {
		let mut field = small_field(50);
		let mut surface = RecordingSurface::default();
		field.draw(&mut surface, 0.0, 0.0);
		assert_eq!(surface.ops.len(), 0);
		field.step();
	}

	#[test]
	fn frame_clears_then_draws() {
		let mut field = small_field(10);
		let mut surface = RecordingSurface::default();
		field.frame(&mut surface, 1280.0, 720.0);
		assert_eq!(
			surface.ops.first(),
			Some(&crate::components::particle_field::surface::DrawOp::Clear)
		);
		assert!(surface.circles() > 0);
	}
}

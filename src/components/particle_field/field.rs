//! 2D pointer-reactive particle field.
//!
//! A fixed set of particles drifts across the surface; the pointer pulls
//! nearby particles toward it, velocities decay multiplicatively every
//! tick, and positions wrap at the surface edges. Pairs closer than the
//! activation radius are joined by faint lines.

use super::style::{Color, FieldStyle, Shuffle};
use super::surface::DrawSurface;

/// A single drifting particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Radius, fixed at creation.
	pub size: f64,
	/// Color, fixed at creation.
	pub color: Color,
}

/// Owns the particle set and the surface bounds.
///
/// Created once when the host component mounts, then driven by the
/// animation loop: [`ParticleField::frame`] once per display refresh.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	style: FieldStyle,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Seed `style.count` particles at uniform random positions inside
	/// `width x height`. A degenerate surface yields an empty field that
	/// draws nothing.
	pub fn new(style: FieldStyle, width: f64, height: f64) -> Self {
		let mut particles = Vec::new();
		if width > 0.0 && height > 0.0 {
			let mut rng = Shuffle::new(style.seed);
			particles.reserve(style.count);
			for _ in 0..style.count {
				particles.push(Particle {
					x: rng.next_range(0.0, width),
					y: rng.next_range(0.0, height),
					vx: rng.next_range(-style.drift, style.drift * 2.0),
					vy: rng.next_range(-style.drift, style.drift * 2.0),
					size: rng.next_range(style.size_min, style.size_max - style.size_min),
					color: style.palette.sample(&mut rng),
				});
			}
		}

		Self {
			particles,
			style,
			width,
			height,
		}
	}

	/// Advance every particle by one tick.
	///
	/// `pointer` is the last-known cursor position in surface-local
	/// coordinates, or `None` before the first movement event.
	pub fn step(&mut self, pointer: Option<(f64, f64)>) {
		if self.particles.is_empty() {
			return;
		}
		let radius = self.style.activation_radius;

		for p in &mut self.particles {
			if let Some((mx, my)) = pointer {
				let (dx, dy) = (mx - p.x, my - p.y);
				let dist = (dx * dx + dy * dy).sqrt();
				if dist < radius && dist > 0.0 {
					let pull = (radius - dist) / radius * self.style.force;
					p.vx += dx / dist * pull;
					p.vy += dy / dist * pull;
				}
			}

			p.vx *= self.style.damping;
			p.vy *= self.style.damping;

			p.x = (p.x + p.vx).rem_euclid(self.width);
			p.y = (p.y + p.vy).rem_euclid(self.height);
		}
	}

	/// Emit draw instructions for the current state: one circle per
	/// particle, then one line per pair strictly inside the activation
	/// radius. The pair scan is O(N²), fine at the default count.
	pub fn draw(&self, surface: &mut dyn DrawSurface) {
		for p in &self.particles {
			surface.fill_circle(p.x, p.y, p.size, p.color);
		}

		let radius = self.style.activation_radius;
		for i in 0..self.particles.len() {
			for j in (i + 1)..self.particles.len() {
				let (a, b) = (&self.particles[i], &self.particles[j]);
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				if (dx * dx + dy * dy).sqrt() < radius {
					surface.stroke_line(
						a.x,
						a.y,
						b.x,
						b.y,
						self.style.link_width,
						self.style.link_color,
					);
				}
			}
		}
	}

	/// One full frame: clear, update, draw.
	pub fn frame(&mut self, surface: &mut dyn DrawSurface, pointer: Option<(f64, f64)>) {
		surface.clear(self.width, self.height);
		self.step(pointer);
		self.draw(surface);
	}

	/// Update the bounds after a surface resize. Positions are left
	/// untouched; out-of-bounds particles wrap back in on the next tick.
	pub fn resize(&mut self, width: f64, height: f64) {
		if width > 0.0 && height > 0.0 {
			self.width = width;
			self.height = height;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::surface::RecordingSurface;

	fn small_field(count: usize) -> ParticleField {
		let style = FieldStyle {
			count,
			..FieldStyle::default()
		};
		ParticleField::new(style, 800.0, 600.0)
	}

	fn place(field: &mut ParticleField, positions: &[(f64, f64)]) {
		field.particles.truncate(positions.len());
		for (p, &(x, y)) in field.particles.iter_mut().zip(positions) {
			p.x = x;
			p.y = y;
			p.vx = 0.0;
			p.vy = 0.0;
		}
	}

	#[test]
	fn positions_stay_in_bounds_under_forcing() {
		let mut field = small_field(50);
		for tick in 0..2000 {
			let pointer = Some((((tick * 13) % 800) as f64, ((tick * 7) % 600) as f64));
			field.step(pointer);
			for p in &field.particles {
				assert!((0.0..800.0).contains(&p.x), "x escaped: {}", p.x);
				assert!((0.0..600.0).contains(&p.y), "y escaped: {}", p.y);
			}
		}
	}

	#[test]
	fn velocity_decays_without_pointer() {
		let mut field = small_field(50);
		let mut prev: Vec<f64> = field
			.particles
			.iter()
			.map(|p| (p.vx * p.vx + p.vy * p.vy).sqrt())
			.collect();
		for _ in 0..100 {
			field.step(None);
			for (p, prev_mag) in field.particles.iter().zip(&mut prev) {
				let mag = (p.vx * p.vx + p.vy * p.vy).sqrt();
				assert!(mag <= *prev_mag + 1e-12);
				*prev_mag = mag;
			}
		}
	}

	#[test]
	fn pointer_outside_activation_radius_is_ignored() {
		let mut field = small_field(1);
		place(&mut field, &[(400.0, 300.0)]);
		field.particles[0].vx = 0.1;
		field.particles[0].vy = -0.1;

		// Exactly at the threshold: no force, damping only.
		field.step(Some((400.0, 300.0 - 100.0)));
		assert_eq!(field.particles[0].vx, 0.1 * 0.98);
		assert_eq!(field.particles[0].vy, -0.1 * 0.98);
	}

	#[test]
	fn pointer_inside_activation_radius_pulls_particle() {
		let mut field = small_field(1);
		place(&mut field, &[(400.0, 300.0)]);

		field.step(Some((450.0, 300.0)));
		let p = &field.particles[0];
		assert!(p.vx > 0.0, "particle should accelerate toward the pointer");
		assert_eq!(p.vy, 0.0);
		// Impulse (100 - 50) / 100 * 0.2 = 0.1, then damped once.
		assert!((p.vx - 0.1 * 0.98).abs() < 1e-12);
	}

	#[test]
	fn links_drawn_iff_strictly_inside_radius() {
		let mut field = small_field(2);
		place(&mut field, &[(100.0, 100.0), (200.0, 100.0)]);

		let mut surface = RecordingSurface::default();
		field.draw(&mut surface);
		assert_eq!(surface.lines(), 0, "distance exactly 100 draws no line");

		place(&mut field, &[(100.0, 100.0), (199.9, 100.0)]);
		let mut surface = RecordingSurface::default();
		field.draw(&mut surface);
		assert_eq!(surface.lines(), 1);
	}

	#[test]
	fn close_triangle_draws_all_three_links() {
		let mut field = small_field(3);
		place(
			&mut field,
			&[(100.0, 100.0), (110.0, 100.0), (105.0, 108.66)],
		);

		for pointer in [None, Some((0.0, 0.0)), Some((105.0, 103.0))] {
			let mut surface = RecordingSurface::default();
			field.frame(&mut surface, pointer);
			assert_eq!(surface.circles(), 3);
			assert_eq!(surface.lines(), 3, "pointer at {pointer:?}");
			// Keep the triangle tight for the next iteration.
			place(
				&mut field,
				&[(100.0, 100.0), (110.0, 100.0), (105.0, 108.66)],
			);
		}
	}

	#[test]
	fn zero_sized_surface_is_a_noop() {
		let field = ParticleField::new(FieldStyle::default(), 0.0, 0.0);
		assert!(field.particles.is_empty());

		let mut field = field;
		let mut surface = RecordingSurface::default();
		field.step(Some((10.0, 10.0)));
		field.draw(&mut surface);
		assert_eq!(surface.ops.len(), 0);
	}

	#[test]
	fn resize_keeps_positions_until_they_wrap() {
		let mut field = small_field(1);
		place(&mut field, &[(700.0, 500.0)]);
		field.resize(400.0, 300.0);

		// Position untouched by the resize itself.
		assert_eq!(field.particles[0].x, 700.0);

		// The next tick wraps it back inside the new bounds.
		field.step(None);
		let p = &field.particles[0];
		assert!((0.0..400.0).contains(&p.x));
		assert!((0.0..300.0).contains(&p.y));
	}
}

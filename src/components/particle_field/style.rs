//! Visual configuration for the particle fields.
//!
//! Colors are randomized per particle but constrained to fixed channel
//! ranges, so every run looks different in detail while keeping the same
//! overall palette.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Deterministic pseudo-random stream (xorshift64*).
///
/// Canvas effects do not need cryptographic randomness, and a seeded
/// stream keeps the simulation reproducible in tests. Used both for
/// initial placement and for re-randomizing recycled particles.
#[derive(Clone, Debug)]
pub struct Shuffle(u64);

impl Shuffle {
	pub fn new(seed: u64) -> Self {
		// Zero state would lock the generator at zero.
		Self(seed.max(1))
	}

	/// Next value uniform in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		let mut x = self.0;
		x ^= x >> 12;
		x ^= x << 25;
		x ^= x >> 27;
		self.0 = x;
		let bits = x.wrapping_mul(0x2545_F491_4F6C_DD1D);
		(bits >> 11) as f64 / (1u64 << 53) as f64
	}

	/// Next value uniform in `[min, min + span)`.
	pub fn next_range(&mut self, min: f64, span: f64) -> f64 {
		min + self.next_f64() * span
	}
}

/// Per-channel randomization ranges for particle colors.
///
/// Each channel is sampled uniformly from `[min, min + span]`.
#[derive(Clone, Copy, Debug)]
pub struct PaletteRange {
	pub r: (u8, u8),
	pub g: (u8, u8),
	pub b: (u8, u8),
	/// Alpha `(min, span)` as fractions.
	pub a: (f64, f64),
}

impl PaletteRange {
	/// Cool cyan/violet haze used by the about-section background.
	pub fn haze() -> Self {
		Self {
			r: (100, 100),
			g: (50, 200),
			b: (150, 100),
			a: (0.2, 0.5),
		}
	}

	pub fn sample(&self, rng: &mut Shuffle) -> Color {
		Color::rgba(
			self.r.0 + (rng.next_f64() * self.r.1 as f64) as u8,
			self.g.0 + (rng.next_f64() * self.g.1 as f64) as u8,
			self.b.0 + (rng.next_f64() * self.b.1 as f64) as u8,
			rng.next_range(self.a.0, self.a.1),
		)
	}
}

/// Configuration for the 2D pointer-reactive field.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Number of particles, fixed for the field's lifetime.
	pub count: usize,
	/// Particle radius range `[size_min, size_max)`.
	pub size_min: f64,
	pub size_max: f64,
	/// Initial velocity components are drawn from `[-drift, drift)`.
	pub drift: f64,
	/// Distance threshold for pointer force and pair linking.
	pub activation_radius: f64,
	/// Pointer impulse scale at zero distance.
	pub force: f64,
	/// Per-tick multiplicative velocity decay, strictly below 1.
	pub damping: f64,
	pub palette: PaletteRange,
	/// Color of the proximity-linking lines.
	pub link_color: Color,
	pub link_width: f64,
	/// Seed for the particle placement stream.
	pub seed: u64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			count: 50,
			size_min: 0.5,
			size_max: 2.5,
			drift: 0.25,
			activation_radius: 100.0,
			force: 0.2,
			damping: 0.98,
			palette: PaletteRange::haze(),
			link_color: Color::rgba(0, 255, 255, 0.05),
			link_width: 0.5,
			seed: 0x5eed_cafe,
		}
	}
}

/// Configuration for the 3D falling point field.
#[derive(Clone, Debug)]
pub struct DepthStyle {
	pub count: usize,
	/// Half-extent of the cubic bound; positions stay in `[-r, r]³`.
	pub half_extent: f64,
	/// Fall speed range `[speed_min, speed_min + speed_span)`.
	pub speed_min: f64,
	pub speed_span: f64,
	/// Point diameter in world units.
	pub point_size: f64,
	pub color: Color,
	/// Camera distance from the origin along +z.
	pub camera_z: f64,
	/// Vertical field of view in radians.
	pub fov: f64,
	pub seed: u64,
}

impl Default for DepthStyle {
	fn default() -> Self {
		Self {
			count: 2000,
			half_extent: 5.0,
			speed_min: 0.002,
			speed_span: 0.01,
			point_size: 0.05,
			color: Color::rgba(0, 255, 255, 0.8),
			camera_z: 5.0,
			fov: 60.0_f64.to_radians(),
			seed: 0xfa11_1357,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shuffle_stays_in_unit_interval() {
		let mut rng = Shuffle::new(7);
		for _ in 0..10_000 {
			let v = rng.next_f64();
			assert!((0.0..1.0).contains(&v));
		}
	}

	#[test]
	fn shuffle_is_deterministic_per_seed() {
		let mut a = Shuffle::new(42);
		let mut b = Shuffle::new(42);
		for _ in 0..100 {
			assert_eq!(a.next_f64(), b.next_f64());
		}
	}

	#[test]
	fn shuffle_zero_seed_still_advances() {
		let mut rng = Shuffle::new(0);
		let first = rng.next_f64();
		let second = rng.next_f64();
		assert_ne!(first, second);
	}

	#[test]
	fn palette_sample_respects_channel_ranges() {
		let range = PaletteRange::haze();
		let mut rng = Shuffle::new(3);
		for _ in 0..1000 {
			let c = range.sample(&mut rng);
			assert!((100..200).contains(&c.r));
			assert!((50..=250).contains(&c.g));
			assert!((150..=250).contains(&c.b));
			assert!(c.a >= 0.2 && c.a < 0.7);
		}
	}

	#[test]
	fn color_css_formats() {
		assert_eq!(Color::rgb(0, 255, 255).to_css(), "#00ffff");
		assert_eq!(
			Color::rgba(0, 255, 255, 0.05).to_css(),
			"rgba(0, 255, 255, 0.05)"
		);
	}
}

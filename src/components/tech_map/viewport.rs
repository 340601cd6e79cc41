use super::config::TechMapConfig;
use super::types::Point;

/// Pan/zoom transform: `screen = world * scale + offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
	pub scale: f64,
	pub offset: Point,
	min_scale: f64,
	max_scale: f64,
	default_scale: f64,
	default_offset: Point,
}

impl Viewport {
	pub fn new(config: &TechMapConfig) -> Self {
		let (min_scale, max_scale) = scale_bounds(config);
		let default_scale = if config.default_scale.is_finite() && config.default_scale > 0.0 {
			config.default_scale
		} else {
			log::warn!("invalid default scale {}, using 1", config.default_scale);
			1.0
		}
		.clamp(min_scale, max_scale);
		Self {
			scale: default_scale,
			offset: config.default_offset,
			min_scale,
			max_scale,
			default_scale,
			default_offset: config.default_offset,
		}
	}

	pub fn world_to_screen(&self, p: Point) -> Point {
		p * self.scale + self.offset
	}

	pub fn screen_to_world(&self, p: Point) -> Point {
		(p - self.offset) * (1.0 / self.scale)
	}

	/// Scales by `factor` around `pivot` (screen space), keeping the world
	/// point under the pivot fixed. Returns whether the scale changed.
	pub fn zoom(&mut self, factor: f64, pivot: Point) -> bool {
		if !factor.is_finite() || factor <= 0.0 {
			return false;
		}
		let anchor = self.screen_to_world(pivot);
		let new_scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
		if new_scale == self.scale {
			return false;
		}
		self.scale = new_scale;
		self.offset = pivot - anchor * new_scale;
		true
	}

	pub fn pan(&mut self, delta: Point) {
		self.offset = self.offset + delta;
	}

	pub fn reset(&mut self) {
		self.scale = self.default_scale;
		self.offset = self.default_offset;
	}

	#[cfg(test)]
	pub fn bounds(&self) -> (f64, f64) {
		(self.min_scale, self.max_scale)
	}
}

/// Usable `(min, max)` scale bounds: reversed bounds are swapped, anything
/// non-finite or non-positive falls back to the defaults.
fn scale_bounds(config: &TechMapConfig) -> (f64, f64) {
	let (min, max) = (config.min_scale, config.max_scale);
	let usable = |v: f64| v.is_finite() && v > 0.0;
	if !usable(min) || !usable(max) {
		let defaults = TechMapConfig::default();
		log::warn!("invalid scale bounds [{min}, {max}], using defaults");
		return (defaults.min_scale, defaults.max_scale);
	}
	if min > max {
		log::warn!("scale bounds [{min}, {max}] reversed");
		return (max, min);
	}
	(min, max)
}

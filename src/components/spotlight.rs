use std::time::Duration;

use leptos::prelude::*;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

/// Cycles a single active index through `len` cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpotlightRotation {
	len: usize,
	active: usize,
}

impl SpotlightRotation {
	pub fn new(len: usize) -> Self {
		Self { len, active: 0 }
	}

	pub fn active(&self) -> Option<usize> {
		(self.len > 0).then_some(self.active)
	}

	pub fn is_active(&self, idx: usize) -> bool {
		self.active() == Some(idx)
	}

	pub fn advance(&mut self) -> Option<usize> {
		if self.len == 0 {
			return None;
		}
		self.active = (self.active + 1) % self.len;
		Some(self.active)
	}
}

/// Drives a [`SpotlightRotation`] from one interval timer, cleared when the
/// calling component is disposed.
pub fn use_spotlight(len: usize, interval: Duration) -> ReadSignal<SpotlightRotation> {
	let (rotation, set_rotation) = signal(SpotlightRotation::new(len));
	if len < 2 {
		return rotation;
	}

	match set_interval_with_handle(
		move || {
			set_rotation.update(|r| {
				r.advance();
			})
		},
		interval,
	) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => log::warn!("spotlight timer unavailable: {err:?}"),
	}
	rotation
}

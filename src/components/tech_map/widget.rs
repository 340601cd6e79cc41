use super::detail::{DetailBinder, DetailSurface};
use super::render::render;
use super::state::{Mode, Outcome, TechMapState};
use super::surface::Canvas2d;
use super::types::Point;

/// One live technology map: state plus the host surfaces it draws to and
/// reports selection on. Every input handler mutates state, then redraws,
/// then notifies the detail binder.
pub struct TechMap<C, D> {
	state: TechMapState,
	surface: Option<C>,
	detail: DetailBinder<D>,
}

impl<C: Canvas2d, D: DetailSurface> TechMap<C, D> {
	pub fn new(state: TechMapState, surface: Option<C>, detail: Option<D>) -> Self {
		if surface.is_none() {
			log::warn!("no drawing surface; technology map will not render");
		}
		let map = Self {
			state,
			surface,
			detail: DetailBinder::new(detail),
		};
		log::info!(
			"technology map ready: {} nodes, {} groups",
			map.state.model.nodes().len(),
			map.state.model.groups().len()
		);
		map.redraw();
		map
	}

	#[cfg(test)]
	pub fn state(&self) -> &TechMapState {
		&self.state
	}

	#[cfg(test)]
	pub fn surface(&self) -> Option<&C> {
		self.surface.as_ref()
	}

	#[cfg(test)]
	pub fn detail_surface(&self) -> Option<&D> {
		self.detail.surface()
	}

	pub fn redraw(&self) {
		if let Some(ctx) = &self.surface {
			render(ctx, &self.state);
		}
	}

	pub fn cursor(&self) -> &'static str {
		match self.state.interaction.mode() {
			Mode::Dragging => "grabbing",
			Mode::Hovering => "pointer",
			Mode::Idle => "grab",
		}
	}

	fn apply(&mut self, outcome: Outcome) {
		if outcome.redraw {
			self.redraw();
		}
		if outcome.selection_changed {
			self.detail.sync(self.state.selected_node());
		}
	}

	pub fn pointer_down(&mut self, p: Point) {
		let outcome = self.state.pointer_down(p);
		self.apply(outcome);
	}

	pub fn pointer_move(&mut self, p: Point) {
		let outcome = self.state.pointer_move(p);
		self.apply(outcome);
	}

	pub fn pointer_up(&mut self) {
		let outcome = self.state.pointer_up();
		self.apply(outcome);
	}

	pub fn pointer_leave(&mut self) {
		let outcome = self.state.pointer_leave();
		self.apply(outcome);
	}

	pub fn wheel(&mut self, delta_y: f64, p: Point) {
		let outcome = self.state.wheel(delta_y, p);
		self.apply(outcome);
	}

	pub fn click(&mut self, p: Point) {
		let outcome = self.state.click(p);
		self.apply(outcome);
	}

	pub fn zoom_in(&mut self) {
		let outcome = self.state.zoom_in();
		self.apply(outcome);
	}

	pub fn zoom_out(&mut self) {
		let outcome = self.state.zoom_out();
		self.apply(outcome);
	}

	pub fn reset_view(&mut self) {
		let outcome = self.state.reset_view();
		self.apply(outcome);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		let outcome = self.state.resize(width, height);
		self.apply(outcome);
	}
}

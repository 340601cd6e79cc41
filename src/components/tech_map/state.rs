use super::config::TechMapConfig;
use super::hit::hit_test;
use super::types::{GraphModel, NodeIdx, Point, TechNode};
use super::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	Idle,
	Dragging,
	Hovering,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragState {
	/// Pointer position minus offset at press time.
	pub anchor: Point,
	pub origin: Point,
	pub moved: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interaction {
	pub hovered: Option<NodeIdx>,
	pub selected: Option<NodeIdx>,
	pub drag: Option<DragState>,
	suppress_click: bool,
}

impl Interaction {
	pub fn mode(&self) -> Mode {
		if self.drag.is_some() {
			Mode::Dragging
		} else if self.hovered.is_some() {
			Mode::Hovering
		} else {
			Mode::Idle
		}
	}

	pub fn is_hovered(&self, idx: NodeIdx) -> bool {
		self.hovered == Some(idx)
	}

	pub fn is_selected(&self, idx: NodeIdx) -> bool {
		self.selected == Some(idx)
	}
}

/// Side effects a transition asks of its owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
	pub redraw: bool,
	pub selection_changed: bool,
}

impl Outcome {
	const NONE: Outcome = Outcome {
		redraw: false,
		selection_changed: false,
	};

	fn redraw_if(changed: bool) -> Self {
		Outcome {
			redraw: changed,
			selection_changed: false,
		}
	}
}

pub struct TechMapState {
	pub model: GraphModel,
	pub config: TechMapConfig,
	pub viewport: Viewport,
	pub interaction: Interaction,
	pub width: f64,
	pub height: f64,
}

impl TechMapState {
	pub fn new(model: GraphModel, config: TechMapConfig, width: f64, height: f64) -> Self {
		Self {
			viewport: Viewport::new(&config),
			model,
			config,
			interaction: Interaction::default(),
			width,
			height,
		}
	}

	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}

	pub fn node_at_position(&self, screen: Point) -> Option<NodeIdx> {
		let world = self.viewport.screen_to_world(screen);
		hit_test(&self.model, self.config.node_size(), world)
	}

	pub fn selected_node(&self) -> Option<&TechNode> {
		self.interaction
			.selected
			.and_then(|idx| self.model.node(idx))
	}

	pub fn pointer_down(&mut self, p: Point) -> Outcome {
		self.interaction.drag = Some(DragState {
			anchor: p - self.viewport.offset,
			origin: p,
			moved: false,
		});
		self.interaction.suppress_click = false;
		Outcome::NONE
	}

	pub fn pointer_move(&mut self, p: Point) -> Outcome {
		if let Some(drag) = self.interaction.drag.as_mut() {
			if p.distance(drag.origin) > self.config.drag_threshold {
				drag.moved = true;
			}
			let delta = (p - drag.anchor) - self.viewport.offset;
			self.viewport.pan(delta);
			return Outcome::redraw_if(delta != Point::default());
		}

		let hovered = self.node_at_position(p);
		if hovered == self.interaction.hovered {
			return Outcome::NONE;
		}
		self.interaction.hovered = hovered;
		Outcome::redraw_if(true)
	}

	pub fn pointer_up(&mut self) -> Outcome {
		if let Some(drag) = self.interaction.drag.take() {
			self.interaction.suppress_click = drag.moved;
		}
		Outcome::NONE
	}

	pub fn pointer_leave(&mut self) -> Outcome {
		if self.interaction.drag.take().is_some() {
			self.interaction.suppress_click = true;
		}
		let changed = self.interaction.hovered.take().is_some();
		Outcome::redraw_if(changed)
	}

	/// Negative `delta_y` zooms in, positive zooms out, zero is ignored.
	pub fn wheel(&mut self, delta_y: f64, p: Point) -> Outcome {
		let step = self.config.zoom_step;
		let factor = if delta_y < 0.0 {
			step
		} else if delta_y > 0.0 {
			1.0 / step
		} else {
			return Outcome::NONE;
		};
		self.zoom_by(factor, Some(p))
	}

	/// Toggles selection on the node under `p`. A press that turned into a
	/// drag does not count as a click.
	pub fn click(&mut self, p: Point) -> Outcome {
		if std::mem::take(&mut self.interaction.suppress_click) {
			return Outcome::NONE;
		}
		let Some(idx) = self.node_at_position(p) else {
			return Outcome::NONE;
		};

		self.interaction.selected = if self.interaction.is_selected(idx) {
			None
		} else {
			Some(idx)
		};
		log::debug!(
			"selection -> {:?}",
			self.selected_node().map(|n| n.id.as_str())
		);
		Outcome {
			redraw: true,
			selection_changed: true,
		}
	}

	pub fn zoom_by(&mut self, factor: f64, pivot: Option<Point>) -> Outcome {
		let pivot = pivot.unwrap_or_else(|| self.center());
		let changed = self.viewport.zoom(factor, pivot);
		if !changed {
			log::debug!("zoom clamped at scale {}", self.viewport.scale);
		}
		Outcome::redraw_if(changed)
	}

	pub fn zoom_in(&mut self) -> Outcome {
		self.zoom_by(self.config.zoom_step, None)
	}

	pub fn zoom_out(&mut self) -> Outcome {
		self.zoom_by(1.0 / self.config.zoom_step, None)
	}

	/// Default transform, no selection, any drag in progress abandoned.
	pub fn reset_view(&mut self) -> Outcome {
		self.viewport.reset();
		if self.interaction.drag.take().is_some() {
			self.interaction.suppress_click = true;
		}
		let had_selection = self.interaction.selected.take().is_some();
		log::debug!("view reset");
		Outcome {
			redraw: true,
			selection_changed: had_selection,
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) -> Outcome {
		self.width = width;
		self.height = height;
		Outcome::redraw_if(true)
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::fixtures::{model, node};
	use super::*;

	fn state() -> TechMapState {
		TechMapState::new(
			model(vec![
				node("a", 0.0, 0.0, &["b"]),
				node("b", 200.0, 0.0, &["a"]),
			]),
			TechMapConfig::default(),
			800.0,
			600.0,
		)
	}

	fn tap(s: &mut TechMapState, p: Point) -> Outcome {
		s.pointer_down(p);
		s.pointer_up();
		s.click(p)
	}

	#[test]
	fn click_at_origin_selects_node_at_origin() {
		let mut s = state();
		let outcome = tap(&mut s, Point::new(0.0, 0.0));
		assert!(outcome.selection_changed);
		assert_eq!(s.interaction.selected, Some(0));
	}

	#[test]
	fn second_click_on_same_node_deselects() {
		let mut s = state();
		tap(&mut s, Point::new(0.0, 0.0));
		let outcome = tap(&mut s, Point::new(10.0, 5.0));
		assert!(outcome.selection_changed);
		assert_eq!(s.interaction.selected, None);
	}

	#[test]
	fn clicking_other_node_switches_directly() {
		let mut s = state();
		tap(&mut s, Point::new(0.0, 0.0));
		tap(&mut s, Point::new(200.0, 0.0));
		assert_eq!(s.interaction.selected, Some(1));
	}

	#[test]
	fn click_on_empty_space_changes_nothing() {
		let mut s = state();
		tap(&mut s, Point::new(0.0, 0.0));
		let outcome = tap(&mut s, Point::new(100.0, 200.0));
		assert_eq!(outcome, Outcome::default());
		assert_eq!(s.interaction.selected, Some(0));
	}

	#[test]
	fn drag_pans_and_swallows_the_click() {
		let mut s = state();
		s.pointer_down(Point::new(10.0, 10.0));
		assert_eq!(s.interaction.mode(), Mode::Dragging);
		let outcome = s.pointer_move(Point::new(60.0, 30.0));
		assert!(outcome.redraw);
		assert_eq!(s.viewport.offset, Point::new(50.0, 20.0));
		s.pointer_up();
		assert_eq!(s.interaction.mode(), Mode::Idle);

		let outcome = s.click(Point::new(60.0, 30.0));
		assert_eq!(outcome, Outcome::default());
		assert_eq!(s.interaction.selected, None);
	}

	#[test]
	fn drag_released_off_canvas_does_not_swallow_next_tap() {
		let mut s = state();
		s.pointer_down(Point::new(400.0, 400.0));
		s.pointer_move(Point::new(450.0, 420.0));
		s.pointer_leave();
		assert_eq!(s.interaction.mode(), Mode::Idle);
		assert_eq!(s.viewport.offset, Point::new(50.0, 20.0));

		let outcome = tap(&mut s, Point::new(50.0, 20.0));
		assert!(outcome.selection_changed);
		assert_eq!(s.interaction.selected, Some(0));
	}

	#[test]
	fn drag_does_not_touch_hover() {
		let mut s = state();
		s.pointer_move(Point::new(0.0, 0.0));
		assert_eq!(s.interaction.hovered, Some(0));
		s.pointer_down(Point::new(0.0, 0.0));
		s.pointer_move(Point::new(300.0, 300.0));
		assert_eq!(s.interaction.hovered, Some(0));
		s.pointer_up();
		assert_eq!(s.interaction.hovered, Some(0));
		assert_eq!(s.interaction.mode(), Mode::Hovering);
	}

	#[test]
	fn hover_redraws_only_on_change() {
		let mut s = state();
		assert!(s.pointer_move(Point::new(0.0, 0.0)).redraw);
		assert!(!s.pointer_move(Point::new(5.0, 5.0)).redraw);
		assert!(s.pointer_move(Point::new(200.0, 0.0)).redraw);
		assert_eq!(s.interaction.hovered, Some(1));
		assert!(s.pointer_move(Point::new(100.0, 100.0)).redraw);
		assert_eq!(s.interaction.hovered, None);
	}

	#[test]
	fn hover_follows_the_transform() {
		let mut s = state();
		s.viewport.pan(Point::new(100.0, 100.0));
		s.pointer_move(Point::new(0.0, 0.0));
		assert_eq!(s.interaction.hovered, None);
		s.pointer_move(Point::new(100.0, 100.0));
		assert_eq!(s.interaction.hovered, Some(0));
	}

	#[test]
	fn pointer_leave_clears_hover() {
		let mut s = state();
		s.pointer_move(Point::new(0.0, 0.0));
		assert!(s.pointer_leave().redraw);
		assert_eq!(s.interaction.hovered, None);
		assert!(!s.pointer_leave().redraw);
	}

	#[test]
	fn wheel_zoom_in_increases_until_bound() {
		let mut s = state();
		let pointer = Point::new(320.0, 240.0);
		let mut last = s.viewport.scale;
		for _ in 0..3 {
			assert!(s.wheel(-100.0, pointer).redraw);
			assert!(s.viewport.scale > last);
			last = s.viewport.scale;
		}
		for _ in 0..40 {
			s.wheel(-100.0, pointer);
		}
		assert_eq!(s.viewport.scale, s.config.max_scale);
		assert!(!s.wheel(-100.0, pointer).redraw);
		assert_eq!(s.viewport.scale, s.config.max_scale);
	}

	#[test]
	fn wheel_direction_and_zero_delta() {
		let mut s = state();
		s.wheel(120.0, Point::new(0.0, 0.0));
		assert!(s.viewport.scale < 1.0);
		let scale = s.viewport.scale;
		assert_eq!(s.wheel(0.0, Point::new(0.0, 0.0)), Outcome::default());
		assert_eq!(s.viewport.scale, scale);
	}

	#[test]
	fn zoom_buttons_pivot_on_canvas_center() {
		let mut s = state();
		let center = s.center();
		let before = s.viewport.screen_to_world(center);
		s.zoom_in();
		let after = s.viewport.screen_to_world(center);
		assert!((before.x - after.x).abs() < 1e-9 && (before.y - after.y).abs() < 1e-9);
		s.zoom_out();
		assert!((s.viewport.scale - 1.0).abs() < 1e-9);
	}

	#[test]
	fn reset_mid_drag_restores_scale_and_clears_selection() {
		let mut s = state();
		tap(&mut s, Point::new(0.0, 0.0));
		s.wheel(-1.0, Point::new(50.0, 50.0));
		s.pointer_down(Point::new(10.0, 10.0));
		s.pointer_move(Point::new(90.0, 40.0));

		let outcome = s.reset_view();
		assert!(outcome.redraw && outcome.selection_changed);
		assert_eq!(s.viewport.scale, 1.0);
		assert_eq!(s.viewport.offset, Point::new(0.0, 0.0));
		assert_eq!(s.interaction.selected, None);

		// the abandoned gesture can no longer move the view or select
		s.pointer_move(Point::new(200.0, 200.0));
		assert_eq!(s.viewport.offset, Point::new(0.0, 0.0));
		s.pointer_up();
		assert_eq!(s.click(Point::new(0.0, 0.0)), Outcome::default());
	}

	#[test]
	fn reset_without_selection_reports_no_selection_change() {
		let mut s = state();
		assert!(!s.reset_view().selection_changed);
	}
}

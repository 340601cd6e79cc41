use super::types::Point;

/// Tunables for the technology map widget.
#[derive(Clone, Debug, PartialEq)]
pub struct TechMapConfig {
	pub min_scale: f64,
	pub max_scale: f64,
	pub default_scale: f64,
	pub default_offset: Point,
	/// Multiplicative step for one wheel notch or zoom button press.
	pub zoom_step: f64,
	pub node_width: f64,
	pub node_height: f64,
	pub node_radius: f64,
	/// Badge center, measured from the node's left edge.
	pub badge_offset: f64,
	pub badge_radius: f64,
	/// Centers closer than this (world units) get no connector.
	pub min_edge_length: f64,
	pub arrow_size: f64,
	/// Screen pixels of travel before a press counts as a drag, not a click.
	pub drag_threshold: f64,
	pub background: &'static str,
	pub edge_color: &'static str,
	pub edge_highlight: &'static str,
	pub label_color: &'static str,
	pub font_family: &'static str,
}

impl Default for TechMapConfig {
	fn default() -> Self {
		Self {
			min_scale: 0.3,
			max_scale: 3.0,
			default_scale: 1.0,
			default_offset: Point::new(0.0, 0.0),
			zoom_step: 1.1,
			node_width: 140.0,
			node_height: 56.0,
			node_radius: 10.0,
			badge_offset: 22.0,
			badge_radius: 14.0,
			min_edge_length: 20.0,
			arrow_size: 9.0,
			drag_threshold: 3.0,
			background: "#0b1020",
			edge_color: "rgba(148, 163, 184, 0.55)",
			edge_highlight: "rgba(250, 204, 21, 0.9)",
			label_color: "#f8fafc",
			font_family: "Inter, system-ui, sans-serif",
		}
	}
}

impl TechMapConfig {
	pub fn node_size(&self) -> (f64, f64) {
		(self.node_width, self.node_height)
	}
}

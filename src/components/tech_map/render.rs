use std::f64::consts::PI;

use super::state::TechMapState;
use super::surface::Canvas2d;
use super::types::Point;

const SELECTED_BORDER: &str = "#ffffff";
const IDLE_BORDER: &str = "rgba(255, 255, 255, 0.18)";
const BADGE_FILL: &str = "rgba(15, 23, 42, 0.35)";
const HOVER_LIGHTEN: f64 = 0.25;

pub fn render<C: Canvas2d + ?Sized>(ctx: &C, state: &TechMapState) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.set_fill_style(state.config.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let vp = &state.viewport;
	ctx.translate(vp.offset.x, vp.offset.y);
	ctx.scale(vp.scale, vp.scale);
	draw_groups(ctx, state);
	draw_connections(ctx, state);
	draw_nodes(ctx, state);
	ctx.restore();
}

fn draw_groups<C: Canvas2d + ?Sized>(ctx: &C, state: &TechMapState) {
	let font = format!("600 12px {}", state.config.font_family);
	for group in state.model.groups() {
		if group.width <= 0.0 || group.height <= 0.0 {
			continue;
		}
		let Point { x, y } = group.position;
		ctx.set_fill_style(&group.fill);
		ctx.fill_rect(x, y, group.width, group.height);

		ctx.set_stroke_style(&group.border);
		ctx.set_line_width(1.5);
		ctx.set_line_dash(&[6.0, 4.0]);
		ctx.stroke_rect(x, y, group.width, group.height);
		ctx.set_line_dash(&[]);

		ctx.set_fill_style(&group.border);
		ctx.set_font(&font);
		ctx.set_text_align("left");
		ctx.set_text_baseline("top");
		ctx.fill_text(&group.title, x + 12.0, y + 10.0);
	}
}

fn draw_connections<C: Canvas2d + ?Sized>(ctx: &C, state: &TechMapState) {
	let config = &state.config;
	let selected = state.interaction.selected;

	for conn in state.model.connections() {
		let (Some(source), Some(target)) =
			(state.model.node(conn.source), state.model.node(conn.target))
		else {
			continue;
		};
		let (from, to) = (source.position, target.position);
		let dist = from.distance(to);
		if dist < config.min_edge_length {
			continue;
		}

		let highlighted = selected.is_some_and(|idx| conn.touches(idx));
		let (color, width) = if highlighted {
			(config.edge_highlight, 2.5)
		} else {
			(config.edge_color, 1.5)
		};

		ctx.set_stroke_style(color);
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();

		// arrowhead, tip on the target center
		let (ux, uy) = ((to.x - from.x) / dist, (to.y - from.y) / dist);
		let size = config.arrow_size;
		let (back_x, back_y) = (to.x - ux * size, to.y - uy * size);
		let (px, py) = (-uy * size * 0.5, ux * size * 0.5);
		ctx.set_fill_style(color);
		ctx.begin_path();
		ctx.move_to(to.x, to.y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_nodes<C: Canvas2d + ?Sized>(ctx: &C, state: &TechMapState) {
	let config = &state.config;
	let (width, height) = config.node_size();
	let glyph_font = format!("14px {}", config.font_family);
	let (regular_font, bold_font) = (
		format!("500 13px {}", config.font_family),
		format!("bold 13px {}", config.font_family),
	);

	for (idx, node) in state.model.nodes().iter().enumerate() {
		let hovered = state.interaction.is_hovered(idx);
		let selected = state.interaction.is_selected(idx);
		let Point { x, y } = node.position;
		let (left, top) = (x - width / 2.0, y - height / 2.0);

		rounded_rect(ctx, left, top, width, height, config.node_radius);
		if hovered {
			ctx.set_fill_style(&lighten(&node.color, HOVER_LIGHTEN));
		} else {
			ctx.set_fill_style(&node.color);
		}
		ctx.fill();
		if selected {
			ctx.set_stroke_style(SELECTED_BORDER);
			ctx.set_line_width(3.0);
		} else {
			ctx.set_stroke_style(IDLE_BORDER);
			ctx.set_line_width(1.0);
		}
		ctx.stroke();

		let badge_x = left + config.badge_offset;
		ctx.begin_path();
		ctx.arc(badge_x, y, config.badge_radius, 0.0, 2.0 * PI);
		ctx.set_fill_style(BADGE_FILL);
		ctx.fill();

		ctx.set_fill_style(config.label_color);
		ctx.set_text_baseline("middle");
		ctx.set_text_align("center");
		ctx.set_font(&glyph_font);
		ctx.fill_text(node.category.glyph(), badge_x, y);

		ctx.set_text_align("left");
		let font = if hovered || selected {
			bold_font.as_str()
		} else {
			regular_font.as_str()
		};
		ctx.set_font(font);
		ctx.fill_text(&node.name, badge_x + config.badge_radius + 8.0, y);
	}
}

fn rounded_rect<C: Canvas2d + ?Sized>(ctx: &C, x: f64, y: f64, w: f64, h: f64, r: f64) {
	let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	ctx.arc_to(x + w, y, x + w, y + h, r);
	ctx.arc_to(x + w, y + h, x, y + h, r);
	ctx.arc_to(x, y + h, x, y, r);
	ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}

/// Mixes a `#rgb`/`#rrggbb` color toward white. Anything else is returned
/// unchanged.
pub fn lighten(color: &str, amount: f64) -> String {
	let Some(hex) = color.strip_prefix('#') else {
		return color.to_string();
	};
	let channels = match hex.len() {
		3 => hex
			.chars()
			.map(|c| u8::from_str_radix(&format!("{c}{c}"), 16).ok())
			.collect::<Option<Vec<_>>>(),
		6 => (0..3)
			.map(|i| hex.get(i * 2..i * 2 + 2).and_then(|s| u8::from_str_radix(s, 16).ok()))
			.collect::<Option<Vec<_>>>(),
		_ => None,
	};
	let Some(channels) = channels else {
		return color.to_string();
	};

	let amount = amount.clamp(0.0, 1.0);
	let mixed: Vec<u8> = channels
		.iter()
		.map(|&c| (c as f64 + (255.0 - c as f64) * amount).round() as u8)
		.collect();
	format!("#{:02x}{:02x}{:02x}", mixed[0], mixed[1], mixed[2])
}

#[cfg(test)]
mod tests {
	use super::super::config::TechMapConfig;
	use super::super::data::technology_map;
	use super::super::surface::recording::{Command, Recorder};
	use super::super::types::fixtures::{model, node};
	use super::super::types::{GraphModel, GroupBox};
	use super::*;

	fn state_for(graph: GraphModel) -> TechMapState {
		TechMapState::new(graph, TechMapConfig::default(), 800.0, 600.0)
	}

	fn draw(state: &TechMapState) -> Vec<Command> {
		let recorder = Recorder::default();
		render(&recorder, state);
		recorder.take()
	}

	/// (from, to) of every straight move/line pair whose endpoints are both
	/// node centers.
	fn center_segments(state: &TechMapState, commands: &[Command]) -> Vec<(Point, Point)> {
		let centers: Vec<Point> = state.model.nodes().iter().map(|n| n.position).collect();
		commands
			.windows(2)
			.filter_map(|pair| match pair {
				[Command::MoveTo(x1, y1), Command::LineTo(x2, y2)] => {
					let (a, b) = (Point::new(*x1, *y1), Point::new(*x2, *y2));
					(centers.contains(&a) && centers.contains(&b)).then_some((a, b))
				}
				_ => None,
			})
			.collect()
	}

	#[test]
	fn mutual_pair_draws_one_segment_with_arrow_at_target() {
		let state = state_for(model(vec![
			node("a", 0.0, 0.0, &["b"]),
			node("b", 200.0, 0.0, &["a"]),
		]));
		let commands = draw(&state);

		assert_eq!(
			center_segments(&state, &commands),
			vec![(Point::new(0.0, 0.0), Point::new(200.0, 0.0))]
		);

		let tip = commands
			.iter()
			.position(|c| *c == Command::MoveTo(200.0, 0.0))
			.expect("arrowhead starts at the target center");
		assert_eq!(commands[tip + 1], Command::LineTo(191.0, 4.5));
		assert_eq!(commands[tip + 2], Command::LineTo(191.0, -4.5));
		assert_eq!(commands[tip + 3], Command::ClosePath);
	}

	#[test]
	fn no_pair_is_drawn_twice_on_the_full_map() {
		let state = state_for(technology_map());
		let commands = draw(&state);
		let segments = center_segments(&state, &commands);

		let mut keys: Vec<_> = segments
			.iter()
			.map(|(a, b)| {
				let (a, b) = ((a.x, a.y), (b.x, b.y));
				if a <= b { (a, b) } else { (b, a) }
			})
			.collect();
		let total = keys.len();
		keys.sort_by(|l, r| l.partial_cmp(r).expect("finite coordinates"));
		keys.dedup();
		assert_eq!(keys.len(), total);
		assert_eq!(total, state.model.connections().len());
	}

	#[test]
	fn near_coincident_nodes_get_no_connector() {
		let state = state_for(model(vec![
			node("a", 0.0, 0.0, &["b"]),
			node("b", 5.0, 5.0, &[]),
		]));
		assert!(center_segments(&state, &draw(&state)).is_empty());
	}

	#[test]
	fn identical_state_renders_identically() {
		let mut state = state_for(technology_map());
		state.interaction.hovered = Some(2);
		state.interaction.selected = Some(4);
		state.viewport.zoom(1.3, Point::new(120.0, 80.0));
		assert_eq!(draw(&state), draw(&state));
	}

	#[test]
	fn layers_draw_groups_then_connections_then_nodes() {
		let mut graph_nodes = vec![node("a", 0.0, 0.0, &["b"]), node("b", 200.0, 0.0, &[])];
		graph_nodes[0].color = "#112233".into();
		let group = GroupBox {
			position: Point::new(-100.0, -60.0),
			width: 420.0,
			height: 120.0,
			fill: "rgba(1, 2, 3, 0.1)".into(),
			border: "#445566".into(),
			title: "Pipeline".into(),
			members: vec!["a".into(), "b".into()],
		};
		let state = state_for(GraphModel::new(graph_nodes, vec![group]));
		let commands = draw(&state);

		let find = |wanted: &Command| commands.iter().position(|c| c == wanted).unwrap();
		let group_fill = find(&Command::FillRect(-100.0, -60.0, 420.0, 120.0));
		let title = find(&Command::FillText("Pipeline".into(), -88.0, -50.0));
		let edge = find(&Command::MoveTo(0.0, 0.0));
		let node_fill = find(&Command::FillStyle("#112233".into()));
		assert!(group_fill < title && title < edge && edge < node_fill);

		assert!(matches!(commands[0], Command::ClearRect(..)));
		assert_eq!(commands[3], Command::Save);
		assert_eq!(commands.last(), Some(&Command::Restore));
	}

	#[test]
	fn zero_size_groups_are_skipped() {
		let group = GroupBox {
			position: Point::new(0.0, 0.0),
			width: 0.0,
			height: 80.0,
			fill: "red".into(),
			border: "blue".into(),
			title: "Empty".into(),
			members: Vec::new(),
		};
		let state = state_for(GraphModel::new(Vec::new(), vec![group]));
		assert!(
			!draw(&state)
				.iter()
				.any(|c| matches!(c, Command::FillText(t, ..) if t == "Empty"))
		);
	}

	#[test]
	fn viewport_is_applied_before_drawing() {
		let mut state = state_for(model(vec![node("a", 0.0, 0.0, &[])]));
		state.viewport.pan(Point::new(30.0, 40.0));
		state.viewport.zoom(2.0, Point::new(30.0, 40.0));
		let commands = draw(&state);
		assert_eq!(commands[4], Command::Translate(30.0, 40.0));
		assert_eq!(commands[5], Command::Scale(2.0, 2.0));
	}

	#[test]
	fn hovered_node_is_lightened_and_bold() {
		let mut state = state_for(model(vec![node("a", 0.0, 0.0, &[])]));
		state.interaction.hovered = Some(0);
		let commands = draw(&state);
		assert!(commands.contains(&Command::FillStyle(lighten("#3b82f6", HOVER_LIGHTEN))));
		assert!(!commands.contains(&Command::FillStyle("#3b82f6".into())));
		let font = format!("bold 13px {}", state.config.font_family);
		assert!(commands.contains(&Command::Font(font)));
		assert!(!commands.contains(&Command::StrokeStyle(SELECTED_BORDER.into())));
	}

	#[test]
	fn selected_node_gets_full_border_and_tinted_edges() {
		let mut state = state_for(model(vec![
			node("a", 0.0, 0.0, &["b"]),
			node("b", 200.0, 0.0, &[]),
			node("c", 0.0, 300.0, &[]),
		]));
		state.interaction.selected = Some(1);
		let commands = draw(&state);
		assert!(commands.contains(&Command::StrokeStyle(SELECTED_BORDER.into())));
		assert!(commands.contains(&Command::LineWidth(3.0)));
		assert!(commands.contains(&Command::StrokeStyle(state.config.edge_highlight.into())));
	}

	#[test]
	fn node_text_and_badge_positions() {
		let state = state_for(model(vec![node("a", 0.0, 0.0, &[])]));
		let commands = draw(&state);
		assert!(commands.contains(&Command::Arc(-48.0, 0.0, 14.0, 0.0, 2.0 * PI)));
		assert!(commands.contains(&Command::FillText("◉".into(), -48.0, 0.0)));
		assert!(commands.contains(&Command::FillText("A".into(), -26.0, 0.0)));
	}

	#[test]
	fn lighten_handles_short_long_and_foreign_colors() {
		assert_eq!(lighten("#000000", 0.5), "#808080");
		assert_eq!(lighten("#fff", 0.3), "#ffffff");
		assert_eq!(lighten("#3b82f6", 0.0), "#3b82f6");
		assert_eq!(lighten("rgb(1, 2, 3)", 0.5), "rgb(1, 2, 3)");
		assert_eq!(lighten("#12345", 0.5), "#12345");
	}
}

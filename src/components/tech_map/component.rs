use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::config::TechMapConfig;
use super::detail::NodeDetail;
use super::state::TechMapState;
use super::types::{GraphModel, Point};
use super::widget::TechMap;

type CanvasMap = TechMap<CanvasRenderingContext2d, WriteSignal<Option<NodeDetail>>>;
type SharedMap = Rc<RefCell<Option<CanvasMap>>>;

const FALLBACK_SIZE: (f64, f64) = (800.0, 600.0);

/// Canvas size from the parent's width and the requested height, falling
/// back to `FALLBACK_SIZE` for whatever is missing or collapsed.
fn canvas_size(parent_width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	(
		parent_width
			.filter(|w| *w > 0.0)
			.unwrap_or(FALLBACK_SIZE.0),
		height.filter(|h| *h > 0.0).unwrap_or(FALLBACK_SIZE.1),
	)
}

fn parent_size(canvas: &HtmlCanvasElement, height: Option<f64>) -> (f64, f64) {
	let parent_width = canvas.parent_element().map(|p| p.client_width() as f64);
	canvas_size(parent_width, height)
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?;
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn sync_cursor(canvas_ref: NodeRef<leptos::html::Canvas>, map: &CanvasMap) {
	if let Some(canvas) = canvas_ref.get() {
		let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", map.cursor());
	}
}

/// Runs `f` on the live map under `ev`'s canvas-local position, then updates
/// the cursor.
fn with_map_at(
	map: &SharedMap,
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
	f: impl FnOnce(&mut CanvasMap, Point),
) {
	let Some(p) = local_point(canvas_ref, ev) else {
		return;
	};
	if let Some(ref mut m) = *map.borrow_mut() {
		f(m, p);
		sync_cursor(canvas_ref, m);
	}
}

#[component]
pub fn TechMapCanvas(
	#[prop(into)] model: Signal<GraphModel>,
	#[prop(optional)] config: Option<TechMapConfig>,
	#[prop(optional)] detail: Option<WriteSignal<Option<NodeDetail>>>,
	#[prop(optional)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let map: SharedMap = Rc::new(RefCell::new(None));
	let config = config.unwrap_or_default();

	let map_init = map.clone();
	Effect::new(move |_| {
		let graph = model.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};

		let (w, h) = parent_size(&canvas, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
		if ctx.is_none() {
			log::warn!("canvas has no 2d context");
		}

		let state = TechMapState::new(graph, config.clone(), w, h);
		let m = TechMap::new(state, ctx, detail);
		sync_cursor(canvas_ref, &m);
		// a replaced dataset starts with nothing selected
		if let Some(detail) = detail {
			detail.set(None);
		}
		*map_init.borrow_mut() = Some(m);
	});

	let map_resize = map.clone();
	let resize = window_event_listener(leptos::ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (w, h) = parent_size(&canvas, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		if let Some(ref mut m) = *map_resize.borrow_mut() {
			m.resize(w, h);
		}
	});
	on_cleanup(move || resize.remove());

	let map_md = map.clone();
	let on_mousedown = move |ev: MouseEvent| {
		with_map_at(&map_md, canvas_ref, &ev, |m, p| m.pointer_down(p));
	};

	let map_mm = map.clone();
	let on_mousemove = move |ev: MouseEvent| {
		with_map_at(&map_mm, canvas_ref, &ev, |m, p| m.pointer_move(p));
	};

	let map_mu = map.clone();
	let on_mouseup = move |ev: MouseEvent| {
		with_map_at(&map_mu, canvas_ref, &ev, |m, _| m.pointer_up());
	};

	let map_click = map.clone();
	let on_click = move |ev: MouseEvent| {
		with_map_at(&map_click, canvas_ref, &ev, |m, p| m.click(p));
	};

	let map_ml = map.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut m) = *map_ml.borrow_mut() {
			m.pointer_leave();
			sync_cursor(canvas_ref, m);
		}
	};

	let map_wh = map.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let delta = ev.delta_y();
		with_map_at(&map_wh, canvas_ref, &ev, |m, p| m.wheel(delta, p));
	};

	let map_zi = map.clone();
	let zoom_in = move |_| {
		if let Some(ref mut m) = *map_zi.borrow_mut() {
			m.zoom_in();
		}
	};

	let map_zo = map.clone();
	let zoom_out = move |_| {
		if let Some(ref mut m) = *map_zo.borrow_mut() {
			m.zoom_out();
		}
	};

	let map_reset = map;
	let reset = move |_| {
		if let Some(ref mut m) = *map_reset.borrow_mut() {
			m.reset_view();
			sync_cursor(canvas_ref, m);
		}
	};

	view! {
		<div class="tech-map">
			<canvas
				node_ref=canvas_ref
				class="tech-map-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:click=on_click
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			<div class="tech-map-controls">
				<button type="button" title="Zoom in" on:click=zoom_in>
					"+"
				</button>
				<button type="button" title="Zoom out" on:click=zoom_out>
					"−"
				</button>
				<button type="button" title="Reset view" on:click=reset>
					"Reset"
				</button>
			</div>
		</div>
	}
}

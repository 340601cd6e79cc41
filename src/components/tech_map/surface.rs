use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// The slice of the 2D canvas API the renderer draws with.
pub trait Canvas2d {
	fn save(&self);
	fn restore(&self);
	fn translate(&self, x: f64, y: f64);
	fn scale(&self, x: f64, y: f64);
	fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64);
	fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64);
	fn stroke_rect(&self, x: f64, y: f64, w: f64, h: f64);
	fn set_fill_style(&self, style: &str);
	fn set_stroke_style(&self, style: &str);
	fn set_line_width(&self, width: f64);
	fn set_line_dash(&self, segments: &[f64]);
	fn set_font(&self, font: &str);
	fn set_text_align(&self, align: &str);
	fn set_text_baseline(&self, baseline: &str);
	fn begin_path(&self);
	fn move_to(&self, x: f64, y: f64);
	fn line_to(&self, x: f64, y: f64);
	fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64);
	fn arc_to(&self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64);
	fn close_path(&self);
	fn fill(&self);
	fn stroke(&self);
	fn fill_text(&self, text: &str, x: f64, y: f64);
}

impl Canvas2d for CanvasRenderingContext2d {
	fn save(&self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn translate(&self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::translate(self, x, y);
	}

	fn scale(&self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::scale(self, x, y);
	}

	fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
	}

	fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64) {
		CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
	}

	fn stroke_rect(&self, x: f64, y: f64, w: f64, h: f64) {
		CanvasRenderingContext2d::stroke_rect(self, x, y, w, h);
	}

	fn set_fill_style(&self, style: &str) {
		self.set_fill_style_str(style);
	}

	fn set_stroke_style(&self, style: &str) {
		self.set_stroke_style_str(style);
	}

	fn set_line_width(&self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn set_line_dash(&self, segments: &[f64]) {
		let array = js_sys::Array::new();
		for &segment in segments {
			array.push(&JsValue::from_f64(segment));
		}
		let _ = CanvasRenderingContext2d::set_line_dash(self, &array);
	}

	fn set_font(&self, font: &str) {
		CanvasRenderingContext2d::set_font(self, font);
	}

	fn set_text_align(&self, align: &str) {
		CanvasRenderingContext2d::set_text_align(self, align);
	}

	fn set_text_baseline(&self, baseline: &str) {
		CanvasRenderingContext2d::set_text_baseline(self, baseline);
	}

	fn begin_path(&self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn move_to(&self, x: f64, y: f64) {
		CanvasRenderingContext2d::move_to(self, x, y);
	}

	fn line_to(&self, x: f64, y: f64) {
		CanvasRenderingContext2d::line_to(self, x, y);
	}

	fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
		let _ = CanvasRenderingContext2d::arc(self, x, y, radius, start, end);
	}

	fn arc_to(&self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) {
		let _ = CanvasRenderingContext2d::arc_to(self, x1, y1, x2, y2, radius);
	}

	fn close_path(&self) {
		CanvasRenderingContext2d::close_path(self);
	}

	fn fill(&self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn stroke(&self) {
		CanvasRenderingContext2d::stroke(self);
	}

	fn fill_text(&self, text: &str, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::fill_text(self, text, x, y);
	}
}

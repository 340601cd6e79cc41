use leptos::prelude::*;

use crate::components::spotlight::{DEFAULT_INTERVAL, use_spotlight};
use crate::components::tech_map::data::technology_map;
use crate::components::tech_map::{
	CategoryLegend, DetailPanel, GraphModel, NodeDetail, TechMapCanvas, TechMapConfig,
};

/// Gestures the classifier recognises: (glyph, name, example action).
const GESTURES: &[(&str, &str, &str)] = &[
	("✊", "Fist", "Open the terminal"),
	("👍", "Thumbs up", "Launch the browser"),
	("☝", "Pointing", "Open the file manager"),
	("✌", "Peace sign", "Start the music player"),
	("✋", "Open palm", "Show the launcher"),
];

#[component]
fn GesturePreviews() -> impl IntoView {
	let rotation = use_spotlight(GESTURES.len(), DEFAULT_INTERVAL);

	view! {
		<div class="gesture-previews">
			{GESTURES
				.iter()
				.enumerate()
				.map(|(idx, (glyph, name, action))| {
					view! {
						<article
							class="gesture-card"
							class:active=move || rotation.with(|r| r.is_active(idx))
						>
							<span class="gesture-glyph">{*glyph}</span>
							<h4>{*name}</h4>
							<p>{*action}</p>
						</article>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Landing page: pitch, technology map and gesture previews.
#[component]
pub fn Home() -> impl IntoView {
	let graph: Signal<GraphModel> = Signal::derive(technology_map);
	let (detail, set_detail) = signal(None::<NodeDetail>);

	view! {
		<main>
			<header class="hero">
				<h1>"Gesture Launcher"</h1>
				<p class="subtitle">
					"Open your favourite apps with a wave of the hand. Everything runs locally on your webcam."
				</p>
			</header>

			<section class="tech-section">
				<h2>"How it fits together"</h2>
				<p class="hint">"Drag to pan. Scroll to zoom. Click a component for details."</p>
				<div class="tech-layout">
					<TechMapCanvas
						model=graph
						config=TechMapConfig::default()
						detail=set_detail
						height=560.0
					/>
					<DetailPanel detail=detail />
				</div>
				<CategoryLegend />
			</section>

			<section class="gesture-section">
				<h2>"Gestures"</h2>
				<GesturePreviews />
			</section>
		</main>
	}
}

use leptos::prelude::*;

use super::types::Category;

#[component]
pub fn CategoryLegend() -> impl IntoView {
	view! {
		<ul class="tech-legend">
			{Category::ALL
				.into_iter()
				.map(|category| {
					view! {
						<li class="tech-legend-item">
							<span class="tech-legend-glyph">{category.glyph()}</span>
							<span>{category.label()}</span>
						</li>
					}
				})
				.collect_view()}
		</ul>
	}
}

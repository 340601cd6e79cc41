use leptos::prelude::*;

use super::types::TechNode;

/// What the detail surface shows for a selected node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDetail {
	pub title: String,
	pub lines: Vec<String>,
}

impl NodeDetail {
	pub fn from_node(node: &TechNode) -> Self {
		Self {
			title: node.name.clone(),
			lines: node.description.clone(),
		}
	}

	pub fn text_block(&self) -> String {
		self.lines.join("\n")
	}
}

/// Host-provided surface with a title, a description block and a visibility
/// toggle.
pub trait DetailSurface {
	fn show(&self, detail: NodeDetail);
	fn hide(&self);
}

impl DetailSurface for WriteSignal<Option<NodeDetail>> {
	fn show(&self, detail: NodeDetail) {
		self.set(Some(detail));
	}

	fn hide(&self) {
		self.set(None);
	}
}

pub struct DetailBinder<D> {
	surface: Option<D>,
}

impl<D: DetailSurface> DetailBinder<D> {
	pub fn new(surface: Option<D>) -> Self {
		if surface.is_none() {
			log::warn!("no detail surface; selection details will not be shown");
		}
		Self { surface }
	}

	#[cfg(test)]
	pub fn surface(&self) -> Option<&D> {
		self.surface.as_ref()
	}

	pub fn sync(&self, selected: Option<&TechNode>) {
		let Some(surface) = &self.surface else {
			return;
		};
		match selected {
			Some(node) => surface.show(NodeDetail::from_node(node)),
			None => surface.hide(),
		}
	}
}

#[component]
pub fn DetailPanel(detail: ReadSignal<Option<NodeDetail>>) -> impl IntoView {
	view! {
		<aside class="tech-detail" class:hidden=move || detail.with(Option::is_none)>
			{move || {
				detail
					.get()
					.map(|detail| {
						view! {
							<h3 class="tech-detail-title">{detail.title.clone()}</h3>
							<p class="tech-detail-body" style="white-space: pre-line;">
								{detail.text_block()}
							</p>
						}
					})
			}}
		</aside>
	}
}

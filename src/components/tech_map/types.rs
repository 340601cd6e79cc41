use std::collections::{HashMap, HashSet};
use std::ops::{Add, Mul, Sub};

pub type NodeIdx = usize;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Point {
	type Output = Point;

	fn mul(self, k: f64) -> Point {
		Point::new(self.x * k, self.y * k)
	}
}

/// Kind of technology a node stands for. Drives the badge glyph and the
/// legend label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	Capture,
	Vision,
	Recognition,
	Automation,
	Storage,
	Interface,
	Tooling,
}

impl Category {
	pub const ALL: [Category; 7] = [
		Category::Capture,
		Category::Vision,
		Category::Recognition,
		Category::Automation,
		Category::Storage,
		Category::Interface,
		Category::Tooling,
	];

	pub fn glyph(self) -> &'static str {
		match self {
			Category::Capture => "◉",
			Category::Vision => "✋",
			Category::Recognition => "◆",
			Category::Automation => "▶",
			Category::Storage => "▤",
			Category::Interface => "▣",
			Category::Tooling => "⚙",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Category::Capture => "Camera input",
			Category::Vision => "Hand tracking",
			Category::Recognition => "Gesture recognition",
			Category::Automation => "App automation",
			Category::Storage => "Configuration",
			Category::Interface => "Desktop UI",
			Category::Tooling => "Build & tooling",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct TechNode {
	pub id: String,
	pub name: String,
	pub category: Category,
	pub position: Point,
	pub color: String,
	pub description: Vec<String>,
	pub connections: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupBox {
	/// Top-left corner in world space.
	pub position: Point,
	pub width: f64,
	pub height: f64,
	pub fill: String,
	pub border: String,
	pub title: String,
	pub members: Vec<String>,
}

/// Undirected edge between two nodes, oriented by its first declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
	pub source: NodeIdx,
	pub target: NodeIdx,
}

impl Connection {
	pub fn touches(&self, idx: NodeIdx) -> bool {
		self.source == idx || self.target == idx
	}
}

/// Read-only graph loaded once per widget. Replacing the data means building
/// a new model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphModel {
	nodes: Vec<TechNode>,
	groups: Vec<GroupBox>,
	id_to_idx: HashMap<String, NodeIdx>,
}

impl GraphModel {
	pub fn new(nodes: Vec<TechNode>, groups: Vec<GroupBox>) -> Self {
		let mut id_to_idx = HashMap::with_capacity(nodes.len());
		for (idx, node) in nodes.iter().enumerate() {
			// first declaration keeps the id
			id_to_idx.entry(node.id.clone()).or_insert(idx);
		}
		Self {
			nodes,
			groups,
			id_to_idx,
		}
	}

	pub fn nodes(&self) -> &[TechNode] {
		&self.nodes
	}

	pub fn groups(&self) -> &[GroupBox] {
		&self.groups
	}

	pub fn node(&self, idx: NodeIdx) -> Option<&TechNode> {
		self.nodes.get(idx)
	}

	pub fn index_of(&self, id: &str) -> Option<NodeIdx> {
		self.id_to_idx.get(id).copied()
	}

	/// Every unordered node pair named in any connection list, once, in
	/// declaration order. Unknown target ids are skipped.
	pub fn connections(&self) -> Vec<Connection> {
		let mut seen: HashSet<(&str, &str)> = HashSet::new();
		let mut out = Vec::new();

		for (source, node) in self.nodes.iter().enumerate() {
			for target_id in &node.connections {
				let Some(target) = self.index_of(target_id) else {
					log::debug!("skipping dangling connection {} -> {}", node.id, target_id);
					continue;
				};
				let a = node.id.as_str();
				let b = self.nodes[target].id.as_str();
				let key = if a <= b { (a, b) } else { (b, a) };
				if seen.insert(key) {
					out.push(Connection { source, target });
				}
			}
		}
		out
	}
}

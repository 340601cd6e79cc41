use super::types::{GraphModel, NodeIdx, Point};

/// First node, in declaration order, whose `width` x `height` box centered
/// on its position contains `world`. Box edges count as inside.
pub fn hit_test(model: &GraphModel, (width, height): (f64, f64), world: Point) -> Option<NodeIdx> {
	let (hw, hh) = (width / 2.0, height / 2.0);
	model.nodes().iter().position(|node| {
		(world.x - node.position.x).abs() <= hw && (world.y - node.position.y).abs() <= hh
	})
}

//! The technology map shown on the landing page: the planned gesture
//! launcher's pipeline from camera to launched application.

use super::types::{Category, GraphModel, GroupBox, Point, TechNode};

const COLUMN_X: [f64; 5] = [110.0, 330.0, 550.0, 770.0, 990.0];
const ROW_Y: [f64; 4] = [110.0, 230.0, 350.0, 470.0];
const GROUP_TOP: f64 = 50.0;
const GROUP_WIDTH: f64 = 180.0;

fn node(
	id: &str,
	name: &str,
	category: Category,
	(column, row): (usize, usize),
	color: &str,
	description: &[&str],
	connections: &[&str],
) -> TechNode {
	TechNode {
		id: id.into(),
		name: name.into(),
		category,
		position: Point::new(COLUMN_X[column], ROW_Y[row]),
		color: color.into(),
		description: description.iter().map(|s| s.to_string()).collect(),
		connections: connections.iter().map(|s| s.to_string()).collect(),
	}
}

fn group(column: usize, rows: usize, title: &str, tint: (u8, u8, u8), members: &[&str]) -> GroupBox {
	let (r, g, b) = tint;
	GroupBox {
		position: Point::new(COLUMN_X[column] - GROUP_WIDTH / 2.0, GROUP_TOP),
		width: GROUP_WIDTH,
		height: ROW_Y[rows - 1] + 50.0 - GROUP_TOP,
		fill: format!("rgba({r}, {g}, {b}, 0.08)"),
		border: format!("rgba({r}, {g}, {b}, 0.6)"),
		title: title.into(),
		members: members.iter().map(|s| s.to_string()).collect(),
	}
}

pub fn technology_map() -> GraphModel {
	let nodes = vec![
		node(
			"camera",
			"Webcam",
			Category::Capture,
			(0, 0),
			"#0ea5e9",
			&[
				"Default device index 0",
				"640x480 capture at 30 fps",
				"Lists every camera that opens",
			],
			&["opencv"],
		),
		node(
			"opencv",
			"OpenCV capture",
			Category::Capture,
			(0, 1),
			"#0284c7",
			&[
				"Frames read on a background capture thread",
				"Mirrored for a natural preview",
				"FPS counted over one-second windows",
			],
			&["mediapipe", "preview"],
		),
		node(
			"mediapipe",
			"MediaPipe Hands",
			Category::Vision,
			(1, 0),
			"#8b5cf6",
			&[
				"Tracks up to two hands",
				"21 landmarks per hand",
				"Detection and tracking confidence 0.5",
			],
			&["landmarks"],
		),
		node(
			"landmarks",
			"Landmark features",
			Category::Vision,
			(1, 1),
			"#7c3aed",
			&[
				"Flattened x, y, z per landmark",
				"Finger extension from tip versus joint",
				"Thumb compared against its base joint",
			],
			&["classifier"],
		),
		node(
			"classifier",
			"Gesture classifier",
			Category::Recognition,
			(1, 2),
			"#db2777",
			&[
				"Fist, thumbs up and pointing",
				"Peace sign and open palm",
				"Confidence from agreeing finger states",
			],
			&["debounce", "trainer"],
		),
		node(
			"debounce",
			"Trigger debounce",
			Category::Automation,
			(2, 0),
			"#d97706",
			&[
				"Confidence threshold before acting",
				"Cooldown between launches",
				"Holding a gesture fires once",
			],
			&["launcher"],
		),
		node(
			"launcher",
			"App launcher",
			Category::Automation,
			(2, 1),
			"#ea580c",
			&[
				"startfile on Windows",
				"open -a on macOS",
				"xdg-open or direct exec on Linux",
				"Checks whether an app is already running",
			],
			&["discovery", "config"],
		),
		node(
			"discovery",
			"App discovery",
			Category::Automation,
			(2, 2),
			"#c2410c",
			&[
				"Start Menu shortcuts on Windows",
				"Application bundles on macOS",
				"Desktop entries on Linux",
			],
			&[],
		),
		node(
			"preview",
			"Camera preview",
			Category::Interface,
			(3, 0),
			"#16a34a",
			&[
				"Live feed with landmark overlay",
				"Current gesture and confidence",
			],
			&["mainwindow"],
		),
		node(
			"mainwindow",
			"Main window",
			Category::Interface,
			(3, 1),
			"#15803d",
			&[
				"Start and stop detection",
				"Gesture list and app mapper",
				"Status bar with FPS",
			],
			&["settings", "preview"],
		),
		node(
			"settings",
			"Settings dialog",
			Category::Interface,
			(3, 2),
			"#166534",
			&[
				"Camera, detection and application tabs",
				"Applies changes without a restart",
			],
			&["config"],
		),
		node(
			"trainer",
			"Gesture trainer",
			Category::Interface,
			(3, 3),
			"#22c55e",
			&[
				"Records samples for custom gestures",
				"Reviews captured landmarks before saving",
			],
			&["config"],
		),
		node(
			"config",
			"Config manager",
			Category::Storage,
			(4, 0),
			"#0d9488",
			&[
				"JSON user config in the home directory",
				"Gesture to application mappings",
				"Import, export and reset to defaults",
			],
			&["launcher"],
		),
		node(
			"logging",
			"Logging",
			Category::Tooling,
			(4, 1),
			"#64748b",
			&[
				"Rotating log files",
				"Level taken from the user config",
			],
			&["config"],
		),
		node(
			"packaging",
			"Installers",
			Category::Tooling,
			(4, 2),
			"#475569",
			&[
				"Single-file builds per platform",
				"Installers for Windows, macOS and Linux",
				"Release manifest kept in sync",
			],
			&["mainwindow"],
		),
	];

	let groups = vec![
		group(0, 2, "Capture", (14, 165, 233), &["camera", "opencv"]),
		group(
			1,
			3,
			"Recognition",
			(139, 92, 246),
			&["mediapipe", "landmarks", "classifier"],
		),
		group(
			2,
			3,
			"Actions",
			(249, 115, 22),
			&["debounce", "launcher", "discovery"],
		),
		group(
			3,
			4,
			"Desktop app",
			(34, 197, 94),
			&["preview", "mainwindow", "settings", "trainer"],
		),
		group(
			4,
			3,
			"Platform",
			(100, 116, 139),
			&["config", "logging", "packaging"],
		),
	];

	GraphModel::new(nodes, groups)
}

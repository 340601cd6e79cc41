mod component;
mod config;
pub mod data;
mod detail;
mod hit;
mod legend;
mod render;
mod state;
mod surface;
mod types;
mod viewport;
mod widget;

pub use component::TechMapCanvas;
pub use config::TechMapConfig;
pub use detail::{DetailPanel, NodeDetail};
pub use legend::CategoryLegend;
pub use types::GraphModel;

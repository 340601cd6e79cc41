pub mod spotlight;
pub mod tech_map;

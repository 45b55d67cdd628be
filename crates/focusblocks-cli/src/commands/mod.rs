pub mod config;
pub mod day;
pub mod heatmap;
pub mod impact;
pub mod link;
pub mod odds;
pub mod params;
pub mod persona;
pub mod simulate;

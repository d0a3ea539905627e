pub mod app;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod layout;
pub mod render;
pub mod theme;

pub use app::run;

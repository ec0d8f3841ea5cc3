pub mod app;
pub mod gallery_grid;
pub mod viewer_overlay;

pub mod constants;
pub mod dropdown;
pub mod input;
pub mod render;

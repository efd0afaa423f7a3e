pub mod animation_plan;
pub mod colour;
pub mod complex;
pub mod escape_result;
pub mod fractal_params;
pub mod image_size;
pub mod metadata;
pub mod point;
pub mod raster;

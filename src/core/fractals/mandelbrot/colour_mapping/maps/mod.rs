pub mod smooth_hsv;
pub mod theme_interpolated;

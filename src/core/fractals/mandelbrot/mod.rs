pub mod algorithm;
pub mod colour_map;
pub mod escape_sample;
pub mod mandelbrot_config;
pub mod viewport;

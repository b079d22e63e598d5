pub mod generate_fractal_columns;
pub mod generate_fractal_serial;
pub mod ports;

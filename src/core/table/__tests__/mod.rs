mod generator_test;
mod params_test;

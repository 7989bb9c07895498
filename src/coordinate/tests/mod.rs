mod latlng_tests;
mod locations_tests;

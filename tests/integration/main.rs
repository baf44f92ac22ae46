mod engine_test;
mod helpers;
mod property_test;

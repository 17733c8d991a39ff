//! Integration test suites

mod engine_tests;
mod reload_tests;
mod selector_tests;

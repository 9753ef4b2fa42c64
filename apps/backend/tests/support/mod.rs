#![allow(dead_code)]

pub mod factory;

pub use app_builder::test_app;
pub use carrier::MapCarrier;
pub use factory::{build_test_harness, TestHarness};

//! Tests for the league engine

#[path = "../common/mod.rs"]
mod common;

mod college_tests;

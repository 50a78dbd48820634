//! Tests for the dashboard summarizer

#[path = "../common/mod.rs"]
mod common;

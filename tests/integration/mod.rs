//! Integration tests for robot token listing

mod token_list_cli;

pub use test_utils::*;

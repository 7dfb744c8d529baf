//! Core capability and its supporting utilities

pub mod clear;
pub mod sync;

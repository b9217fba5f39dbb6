#![allow(clippy::needless_pass_by_value)]

pub mod catalog;
pub mod render;

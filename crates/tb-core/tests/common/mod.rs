#![allow(dead_code)]

pub(crate) mod recording_store;

pub use recording_store::*;

//! Integration test modules

mod fetcher;
mod render;
mod selection;

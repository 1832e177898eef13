pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod text;

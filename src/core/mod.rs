pub mod config;
pub mod converter;
pub mod engine;
pub mod normalizer;
pub mod segmenter;
pub mod types;

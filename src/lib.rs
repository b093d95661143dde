pub mod analyzers;
pub mod charts;
pub mod config;
pub mod decoder;
pub mod loader;
pub mod normalizer;
pub mod output;
pub mod population;
pub mod stats;

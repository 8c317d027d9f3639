pub mod tokenizer;
pub mod matcher;
pub mod cluster;
pub mod wildcard;
pub mod census;
pub mod ranker;
pub mod config;
pub mod view;
pub mod render;

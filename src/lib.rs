pub mod api;
pub mod builder;
pub mod config;
pub mod corpus;
pub mod data_models;
pub mod fetcher;
pub mod generator;
pub mod matcher;
pub mod ranker;

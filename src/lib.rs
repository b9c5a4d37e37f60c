pub mod aggregate;
pub mod cli;
pub mod commits;
pub mod config;
pub mod contributors;
pub mod error;
pub mod export;
pub mod fetch;
pub mod github;
pub mod model;
pub mod render;
pub mod report;
pub mod run;
pub mod score;

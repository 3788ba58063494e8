pub mod http_source;
pub mod seeder;

pub use http_source::HttpSeedSource;
pub use seeder::{seed_if_empty, RemoteTodo, SeedOutcome, SeedSource};

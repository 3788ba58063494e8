pub mod seed;
pub mod task;

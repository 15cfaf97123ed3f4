pub mod rng;
pub mod scene;
pub mod scheduler;
pub mod time;

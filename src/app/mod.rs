pub mod demos;
pub mod engine;
pub mod observers;
pub mod strategies;

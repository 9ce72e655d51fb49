//! Generation clients for the summary text
//!
//! A [`Generator`] turns one prompt into one reply. Providers are chosen from
//! configuration and constructed once per process by the engine.

mod generator;
mod providers;

pub use generator::Generator;
pub use providers::create_generator;

pub mod activities;

pub use activities::{ActivityRegistry, SharedRegistry};

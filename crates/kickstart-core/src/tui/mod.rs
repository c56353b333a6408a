//! Charm-style interactive CLI flow (cliclack)

mod prompts;

pub use prompts::{run, CreateArgs};

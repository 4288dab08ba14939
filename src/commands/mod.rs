pub mod cli;
pub mod env;
pub mod lockfiles;
pub mod secrets;
pub mod setup;

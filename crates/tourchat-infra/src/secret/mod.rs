//! Secret resolution.
//!
//! API keys are read from environment variables and held as
//! [`secrecy::SecretString`] so they never reach logs or `Debug` output.

pub mod env;

pub use env::EnvSecretProvider;

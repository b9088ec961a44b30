mod client;

pub use client::{ValidationClient, ValidationOutcome};

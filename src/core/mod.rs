// src/core/mod.rs

pub mod alphabet;
pub mod engine;
pub mod fixed_substitution;
pub mod key_length;
pub mod polyalphabetic;
pub mod rotation;
pub mod shift;
pub mod statistics;
pub mod types;

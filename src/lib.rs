// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod ranking;
pub mod request;

pub use crate::config::AnalysisConfig;
pub use crate::core::alphabet::{detect_profile, AlphabetProfile, Direction};
pub use crate::core::engine::CryptanalysisEngine;
pub use crate::core::types::{Candidate, CandidateSet, Method, Parameter};
pub use crate::error::CryptanalysisError;

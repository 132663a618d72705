//! PostVelocity - AI-powered social media management platform backend

pub mod config;
pub mod error;
pub mod types;

pub mod content;
pub mod demo;
pub mod api;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;

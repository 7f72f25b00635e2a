//! Executive metrics check
//!
//! Prints the most recently updated row of the Supabase `executive_metrics`
//! table.
//!
//! This crate provides:
//! - `.env.local` loading merged with the process environment
//! - Supabase credential resolution
//! - A small PostgREST client for table reads
//! - The latest-row query and its output rendering

pub mod client;
pub mod config;
pub mod env_file;
pub mod error;
pub mod metrics;

pub use client::SupabaseClient;
pub use config::SupabaseConfig;
pub use error::CheckError;

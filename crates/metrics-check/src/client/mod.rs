//! HTTP clients.

pub mod supabase;

pub use supabase::{Rows, SupabaseClient, TableQuery};

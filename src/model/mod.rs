//! Model module - records, remote data access and persisted preferences
//!
//! - `row`: alias-aware field access on raw query rows
//! - `release` / `note`: the immutable records the views render
//! - `query`: query description and the `QueryClient` seam
//! - `supabase_client`: reqwest-backed PostgREST client
//! - `gateway`: error-absorbing fetch operations used by the page
//! - `storage`: persisted key-value preferences
//! - `theme`: theme preference, OS signal and the store combining both

mod row;
mod release;
mod note;
mod query;
mod supabase_client;
mod gateway;
mod storage;
mod theme;

pub use release::{Release, StreamingUrls};
pub use note::Note;
pub use query::QueryClient;
pub use supabase_client::SupabaseClient;
pub use gateway::RemoteReleaseGateway;
pub use storage::FileStore;
pub use theme::{ColorSchemeSignal, ThemePreference, ThemeStore};

#[cfg(test)]
pub use release::StreamingPlatform;
#[cfg(test)]
pub use query::{Query, QueryError};
#[cfg(test)]
pub use row::Row;
#[cfg(test)]
pub use storage::{KeyValueStore, MemoryStore};

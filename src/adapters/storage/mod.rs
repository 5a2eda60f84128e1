//! Storage adapters - profile persistence implementations.

mod fs_profile_store;

pub use fs_profile_store::FsProfileStore;

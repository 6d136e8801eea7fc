//! Game repository for the Fraglog ingestion service.
//!
//! The repository owns every [`Game`](fraglog_types::Game) produced by
//! ingestion, keyed by uid, and tracks which game is currently active
//! (the most recently created one -- the default mutation target for
//! kill and shutdown events). [`GameRepository`] is the contract;
//! [`MemoryGameRepository`] is the in-process implementation. A
//! persistent backend would implement the same trait and hook its
//! transaction into [`GameRepository::update`].

pub mod error;
pub mod memory;
pub mod repository;

pub use error::StoreError;
pub use memory::MemoryGameRepository;
pub use repository::GameRepository;

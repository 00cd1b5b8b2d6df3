//! In-memory storage for the link table.

pub mod memory_link_repository;

pub use memory_link_repository::MemoryLinkRepository;

//! Product repository implementations (storage collaborators).

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryProductRepository;
pub use json_file::JsonFileProductRepository;

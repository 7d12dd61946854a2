pub mod removal;

pub use removal::remove_indices;

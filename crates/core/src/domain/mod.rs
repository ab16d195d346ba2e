pub mod donor;
pub mod collection;
pub mod format;

// Re-exports for convenience
pub use donor::*;
pub use collection::*;
pub use format::*;

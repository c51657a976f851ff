pub mod hashing;
pub mod linear;

// Re-export all modules
pub use hashing::*;
pub use linear::*;

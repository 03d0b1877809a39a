/// Packer constants and runtime configuration defaults
pub mod config;
/// Error types for packing operations
pub mod error;
/// Fallible conversion of external voxel/deck records into core types
pub mod loader;

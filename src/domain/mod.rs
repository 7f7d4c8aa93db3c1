// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits that describe what a paired
// audio dataset IS, independent of how files are read.
//
// Rules for this layer:
//   - NO file I/O
//   - NO burn types; hound and serde_json appear only as
//     error sources wrapped by DatasetError
//   - Only structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One manifest row: a path plus its length in frames
pub mod file_entry;

// The matching modes understood by the matcher
pub mod strategy;

// Error taxonomy shared by the data and infra layers
pub mod error;

// Key extraction and sequenced collection abstractions
pub mod traits;

// Windowing parameters shared by both sides of a dataset
pub mod window;

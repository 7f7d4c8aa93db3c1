// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Filesystem work that the split use case needs but that does
// not belong to the data pipeline itself:
//
//   split_layout.rs — creates the train_*/val_* sibling
//                     directories, lists input directories,
//                     and copies files with their timestamps.
//
// Reference: Rust Book §7 (Modules)

/// Train/validation directory creation and file copying
pub mod split_layout;

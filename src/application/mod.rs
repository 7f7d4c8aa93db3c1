// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Each use case turns a config struct into a finished job by
// calling the data and infra layers in order. No matching or
// windowing logic lives here, and nothing is printed; that is
// Layer 1's job.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Build noisy.json / clean.json from two audio directories
pub mod manifest_use_case;

// Copy matched pairs into train_* and val_* directories
pub mod split_use_case;

// Open a paired dataset and report on it
pub mod inspect_use_case;

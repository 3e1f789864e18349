// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and enums that define the core concepts of the pipeline.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO CSV or HTTP handling (errors may wrap their causes)
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no fixtures needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The in-memory table the pipeline operates on
pub mod dataset;

// Every way the pipeline can fail
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;

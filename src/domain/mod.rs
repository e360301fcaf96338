// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO charting or CSV machinery
//   - Only plain Rust structs, enums, traits, and pure functions
//
// Why keep this layer pure?
//   - Easy to unit test (no files, no network)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// The pivot lives here too: it is a pure aggregation from
// classified records to summary rows, and keeping it free of
// I/O is what makes its invariants directly testable.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Headline records, truth labels, and classified records
pub mod headline;

// The per-emotion pivot summary and its aggregation
pub mod summary;

// Core abstractions (traits) that other layers implement
pub mod traits;

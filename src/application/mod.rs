// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (one ingestion run).
//
// Rules for this layer:
//   - No CSV or HTTP handling here (that's Layer 4)
//   - No UI or printing here (that's Layer 1)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The ingestion workflow
pub mod ingest_use_case;

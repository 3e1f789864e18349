// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Handles cross-cutting concerns that don't belong in any
// specific business layer:
//
//   logging.rs — Process-wide logging context
//                Creates the log directory, opens the
//                append-mode log file, installs the tracing
//                subscriber with a console sink and a file
//                sink, and hands main a guard that syncs the
//                file on shutdown.
//
// Why is this a separate layer?
//   The pipeline layers emit events but never decide where
//   they go. Keeping sink setup here means swapping the file
//   sink for something else touches exactly one module.
//
// Reference: Rust Book §7 (Modules)
//            tracing crate documentation

/// Logging context construction and the log line format
pub mod logging;

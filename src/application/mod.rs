// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (classifying, summarising, or visualizing).
//
// Rules for this layer:
//   - No classification logic here (that's Layer 5)
//   - No UI or printing here (that's Layer 1)
//   - No direct file parsing here (that's Layer 4)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The classification workflow
pub mod classify_use_case;

// The summary/pivot workflow
pub mod summarize_use_case;

// The chart-rendering workflow
pub mod visualize_use_case;

// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles cross-cutting concerns that don't belong in any
// specific business layer:
//
//   theme.rs — Chart theme cache
//              Fetches the rose-pine style files on first use,
//              keeps them in a style directory, and parses the
//              active one into a chart palette. Falls back to
//              the built-in palette when offline.
//
// Why is this a separate layer?
//   The theme cache touches the network and the filesystem but
//   has nothing to do with classifying or summarising. Keeping
//   it here:
//   - Leaves the rendering layer purely computational
//   - Makes the fallback behaviour one store's concern
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Chart theme fetching, caching, and parsing
pub mod theme;

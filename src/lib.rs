//! Public library API for inspecting control-system parameter documents.

/// Parameter document loading, value-tree parsing, and indexed leaf traversal.
pub mod param;

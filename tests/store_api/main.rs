//! Store adapter tests: pass-through operations, lazy scans, the
//! multi-store registry, and the partition-scoped view.

mod common;

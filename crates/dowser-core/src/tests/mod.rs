//! Unit tests for `dowser_core` types.

mod serde_tests;

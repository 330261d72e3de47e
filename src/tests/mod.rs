//! # Problems shared by tests throughout the crate.
//!
//! Convention for function names:
//!
//! * `const COST_FILE_STRING` and `const CONSTRAINT_FILE_STRING`
//! * `fn create()`: the problem as read
//! * `fn augmented()`: the initial partition and the problem with artificial variables

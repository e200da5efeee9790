//! End-to-end analysis tests.
//!
//! - `scenarios`: complete methods and the models built from them
//! - `names`: marker arguments and result type names
//!
//! Stage modules carry their own unit tests.

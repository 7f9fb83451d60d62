/// Assignments and single-formula evaluation.
///
/// Defines the bitfield encoding of assignments and evaluates a formula
/// under one of them.
pub mod core;

/// Validity checking.
///
/// Enumerates every assignment of an argument's variables and looks for one
/// that satisfies all premises but falsifies the conclusion.
pub mod validity;

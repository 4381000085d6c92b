// ============================================================
// Domain Layer
// ============================================================
// Pure Rust types and traits that define the core concepts
// of the library.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no GPU needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)

// Named axes of a hyperparameter search
pub mod param_space;

// One fully-specified assignment, one value per parameter
pub mod combination;

// Core abstractions (traits) that other layers implement
pub mod traits;

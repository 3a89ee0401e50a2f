/// Dependency migration core
///
/// Pure translation of legacy manifest dependency declarations into build
/// items. Nothing in this module performs I/O; the only outward edge is the
/// `BuildDocument` port the walker appends to.
pub mod domain;
pub mod services;

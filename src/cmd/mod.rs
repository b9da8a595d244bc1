/// Single-parameter lookup command.
pub mod get;
/// Parameter overview command.
pub mod list;
/// Parameter value display command.
pub mod show;
/// Aligned two-dimensional array rendering.
pub mod table;
pub(crate) mod util;

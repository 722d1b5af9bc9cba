/// Binary-to-JSON decode command.
pub mod decode;
/// JSON-to-binary encode command.
pub mod encode;
/// Document structure summary command.
pub mod info;
/// Shared CLI helpers.
pub(crate) mod util;


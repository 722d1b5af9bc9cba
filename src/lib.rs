//! Compact tagged binary encoding for JSON-like documents.

/// Wire format, value model, encoder/decoder, and file/stream adapters.
pub mod codec;

/*!
 * Markdown analysis used by the translation pipeline:
 * - `chunker`: structure-aware splitting of a document into bounded chunks
 * - `fingerprint`: structural marker counts used to compare source and
 *   translated output
 */

pub mod chunker;
pub mod fingerprint;

pub use chunker::{split, Chunk, ChunkKind, DEFAULT_CHUNK_SIZE};
pub use fingerprint::{fingerprint, Marker, Mismatch, StructuralFingerprint};

/*!
 * Translation of documents through external LLM providers.
 *
 * - `core`: the `TranslationService` and the `ChunkTranslator` seam
 * - `orchestrator`: per-document chunk/translate/reassemble driver with
 *   optional chunk observers for debug dumps
 */

pub mod core;
pub mod orchestrator;

pub use self::core::{ChunkTranslator, TranslationService};
pub use orchestrator::{ChunkObserver, DebugDumpObserver, DocumentTranslator, NoopObserver};

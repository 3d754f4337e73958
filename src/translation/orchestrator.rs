/*!
 * Per-document translation orchestration.
 *
 * The orchestrator splits a document into structure-aware chunks, translates
 * them strictly in order through a [`ChunkTranslator`], and joins the results
 * with a single newline. The first chunk failure aborts the whole document,
 * so partial output never escapes.
 *
 * Debug artifact dumping is factored out as a [`ChunkObserver`] so the
 * orchestration logic has no filesystem dependency of its own.
 */

use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::errors::TranslationError;
use crate::file_utils::FileManager;
use crate::markdown::chunker;
use crate::translation::ChunkTranslator;

/// Observer invoked for every source chunk and every translated chunk.
/// Observers are side-effect-only; failures inside them never affect
/// the translation result.
pub trait ChunkObserver {
    /// Called with each source chunk before it is translated
    fn on_source_chunk(&self, index: usize, text: &str);

    /// Called with each translated chunk as it is produced
    fn on_translated_chunk(&self, index: usize, text: &str);
}

/// Observer that does nothing
pub struct NoopObserver;

impl ChunkObserver for NoopObserver {
    fn on_source_chunk(&self, _index: usize, _text: &str) {}
    fn on_translated_chunk(&self, _index: usize, _text: &str) {}
}

/// Observer that persists every chunk to a `debug` directory beside the
/// target document, named by source filename and chunk index.
pub struct DebugDumpObserver {
    debug_dir: PathBuf,
    base_name: String,
}

impl DebugDumpObserver {
    /// Create a dump observer for one document. The debug directory is
    /// created up front so later writes only fail for real I/O reasons.
    pub fn new(target_path: &Path, source_path: &Path) -> anyhow::Result<Self> {
        let debug_dir = target_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("debug");
        FileManager::ensure_dir(&debug_dir)?;
        let base_name = source_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "document".to_string());
        Ok(Self {
            debug_dir,
            base_name,
        })
    }

    fn dump(&self, file_name: String, text: &str) {
        let path = self.debug_dir.join(file_name);
        if let Err(e) = FileManager::write_to_file(&path, text) {
            warn!("Failed to write debug chunk {:?}: {}", path, e);
        }
    }
}

impl ChunkObserver for DebugDumpObserver {
    fn on_source_chunk(&self, index: usize, text: &str) {
        self.dump(format!("{}_chunk_{}.md", self.base_name, index), text);
    }

    fn on_translated_chunk(&self, index: usize, text: &str) {
        self.dump(
            format!("{}_translated_chunk_{}.md", self.base_name, index),
            text,
        );
    }
}

/// Drives the chunker and a chunk translator over a single document.
pub struct DocumentTranslator<'a, T: ChunkTranslator> {
    translator: &'a T,
    chunk_size: usize,
}

impl<'a, T: ChunkTranslator> DocumentTranslator<'a, T> {
    /// Create an orchestrator with the given chunk size bound
    pub fn new(translator: &'a T, chunk_size: usize) -> Self {
        Self {
            translator,
            chunk_size,
        }
    }

    /// Translate a whole document: chunk, translate each chunk in order,
    /// join with a single newline. Any chunk failure aborts the document.
    pub async fn translate_document(
        &self,
        content: &str,
        observer: &dyn ChunkObserver,
    ) -> Result<String, TranslationError> {
        let chunks = chunker::split(content, self.chunk_size);
        let total = chunks.len();
        let mut translated = Vec::with_capacity(total);

        for (index, chunk) in chunks.iter().enumerate() {
            observer.on_source_chunk(index, &chunk.text);
            info!("Translating chunk {}/{}...", index + 1, total);

            let output = self.translator.translate_chunk(&chunk.text).await?;
            observer.on_translated_chunk(index, &output);
            translated.push(output);
        }

        Ok(translated.join("\n"))
    }
}

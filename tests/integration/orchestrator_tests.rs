/*!
 * Tests for per-document translation orchestration
 */

use std::fs;
use std::sync::Mutex;

use anyhow::Result;
use mdtrans::markdown::chunker;
use mdtrans::translation::{ChunkObserver, DebugDumpObserver, DocumentTranslator, NoopObserver};

use crate::common;
use crate::common::mock_translators::{EchoTranslator, FailingTranslator, RecordingTranslator};

/// Observer that records every callback for ordering assertions
#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<(usize, bool)>>,
}

impl ChunkObserver for RecordingObserver {
    fn on_source_chunk(&self, index: usize, _text: &str) {
        self.events.lock().unwrap().push((index, false));
    }

    fn on_translated_chunk(&self, index: usize, _text: &str) {
        self.events.lock().unwrap().push((index, true));
    }
}

/// Test that a single-chunk document round-trips unchanged through an echo
/// translator
#[tokio::test]
async fn test_translate_document_withSingleChunk_shouldReturnContent() -> Result<()> {
    let content = "# Title\n\nshort body\n";
    let orchestrator = DocumentTranslator::new(&EchoTranslator, 10 * 1024);

    let translated = orchestrator
        .translate_document(content, &NoopObserver)
        .await?;

    assert_eq!(translated, content);
    Ok(())
}

/// Test that multiple chunks are translated in order and joined with a
/// single newline
#[tokio::test]
async fn test_translate_document_withMultipleChunks_shouldJoinInOrder() -> Result<()> {
    let content = "aaaaaaaaa\n".repeat(5);
    let bound = 25;
    let chunks = chunker::split(&content, bound);
    assert!(chunks.len() > 1);

    let translator = RecordingTranslator::default();
    let orchestrator = DocumentTranslator::new(&translator, bound);
    let translated = orchestrator
        .translate_document(&content, &NoopObserver)
        .await?;

    let expected: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
    assert_eq!(*translator.chunks.lock().unwrap(), expected);
    assert_eq!(translated, expected.join("\n"));
    Ok(())
}

/// Test that a chunk failure aborts the document immediately
#[tokio::test]
async fn test_translate_document_withFailingChunk_shouldAbortDocument() {
    let content = "aaaaaaaaa\n".repeat(5);
    let translator = FailingTranslator::new(1);
    let orchestrator = DocumentTranslator::new(&translator, 25);

    let result = orchestrator.translate_document(&content, &NoopObserver).await;

    assert!(result.is_err());
    // The failing call is the last one made; later chunks are never sent
    assert_eq!(translator.calls(), 2);
}

/// Test that observers see each source chunk before its translation, in
/// chunk order
#[tokio::test]
async fn test_translate_document_withObserver_shouldEmitOrderedEvents() -> Result<()> {
    let content = "aaaaaaaaa\n".repeat(5);
    let observer = RecordingObserver::default();
    let orchestrator = DocumentTranslator::new(&EchoTranslator, 25);

    orchestrator.translate_document(&content, &observer).await?;

    let events = observer.events.lock().unwrap();
    let chunk_count = chunker::split(&content, 25).len();
    assert_eq!(events.len(), chunk_count * 2);
    for index in 0..chunk_count {
        assert_eq!(events[index * 2], (index, false));
        assert_eq!(events[index * 2 + 1], (index, true));
    }
    Ok(())
}

/// Test that the debug observer dumps source and translated chunks named by
/// source filename and chunk index
#[tokio::test]
async fn test_debug_dump_observer_withTwoChunks_shouldWriteArtifacts() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target_path = temp_dir.path().join("out").join("doc.md");
    let source_path = temp_dir.path().join("doc.md");
    fs::create_dir_all(temp_dir.path().join("out"))?;

    let observer = DebugDumpObserver::new(&target_path, &source_path)?;
    let content = "aaaaaaaaa\n".repeat(5);
    let orchestrator = DocumentTranslator::new(&EchoTranslator, 25);
    orchestrator.translate_document(&content, &observer).await?;

    let debug_dir = temp_dir.path().join("out").join("debug");
    assert!(debug_dir.join("doc.md_chunk_0.md").is_file());
    assert!(debug_dir.join("doc.md_translated_chunk_0.md").is_file());
    assert!(debug_dir.join("doc.md_chunk_1.md").is_file());

    let first = fs::read_to_string(debug_dir.join("doc.md_chunk_0.md"))?;
    assert_eq!(first, chunker::split(&content, 25)[0].text);
    Ok(())
}

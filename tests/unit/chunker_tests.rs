/*!
 * Tests for the structure-aware chunker
 */

use mdtrans::markdown::chunker::{split, ChunkKind, DEFAULT_CHUNK_SIZE};

/// Concatenating all chunks must reproduce the input exactly
fn concat(chunks: &[mdtrans::markdown::Chunk]) -> String {
    chunks.iter().map(|c| c.text.as_str()).collect()
}

/// Test that short plain content stays in a single chunk
#[test]
fn test_split_withShortPlainContent_shouldReturnSingleChunk() {
    let content = "Line one.\nLine two.\nLine three.\n";
    assert!(content.len() < 1024);

    let chunks = split(content, 1024);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, content);
    assert_eq!(chunks[0].kind, ChunkKind::Plain);
}

/// Test that empty content yields no chunks
#[test]
fn test_split_withEmptyContent_shouldReturnNoChunks() {
    assert!(split("", 1024).is_empty());
    assert!(split("", DEFAULT_CHUNK_SIZE).is_empty());
}

/// Test that a final line without a terminator is kept
#[test]
fn test_split_withUnterminatedFinalLine_shouldKeepIt() {
    let content = "first\nsecond";
    let chunks = split(content, 1024);

    assert_eq!(chunks.len(), 1);
    assert_eq!(concat(&chunks), content);
}

/// Test that plain-mode splitting is lossless and respects the bound
#[test]
fn test_split_withPlainOverflow_shouldBoundChunksAndStayLossless() {
    // Five lines of 10 bytes each against a 25 byte bound
    let line = "aaaaaaaaa\n";
    let content = line.repeat(5);

    let chunks = split(&content, 25);

    assert_eq!(concat(&chunks), content);
    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.text.len() <= 25, "plain chunk exceeded the bound");
        assert_eq!(chunk.kind, ChunkKind::Plain);
        // Boundaries fall between lines, never inside one
        assert!(chunk.text.ends_with('\n'));
    }
}

/// Test that a code block that fits the bound is never split
#[test]
fn test_split_withSmallCodeBlock_shouldKeepBlockWhole() {
    let content = "intro\n```\nlet x = 1;\nlet y = 2;\n```\noutro\n";
    let chunks = split(content, 1024);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, content);
}

/// Test the oversized-construct exception inside an unterminated fence:
/// chunks may exceed the bound but lines stay whole and nothing is lost
#[test]
fn test_split_withOversizedFencedLines_shouldViolateBoundNotStructure() {
    let long_line = format!("{}\n", "x".repeat(1199));
    let content = format!("```\n{}", long_line.repeat(20));

    let chunks = split(&content, 1024);

    assert_eq!(concat(&chunks), content);
    assert!(chunks.len() > 1);
    assert!(
        chunks.iter().any(|c| c.text.len() > 1024),
        "expected at least one oversized chunk"
    );
    for chunk in &chunks {
        // The fence never closes, so every chunk closes in code-block mode
        assert_eq!(chunk.kind, ChunkKind::CodeBlock);
    }
    // Only the first chunk carries the fence token
    assert!(chunks[0].text.starts_with("```"));
    assert!(chunks[1..].iter().all(|c| !c.text.contains("```")));
}

/// Test that table rows split only between rows
#[test]
fn test_split_withLongTable_shouldBreakBetweenRows() {
    // Rows of 10 bytes against a 25 byte bound
    let row = "| a | bc |\n";
    assert_eq!(row.len(), 11);
    let content = row.repeat(6);

    let chunks = split(&content, 25);

    assert_eq!(concat(&chunks), content);
    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert_eq!(chunk.kind, ChunkKind::Table);
        assert!(chunk.text.starts_with('|'), "chunk must begin on a row");
    }
}

/// Test that a line leaving a table flips the mode back to plain
#[test]
fn test_split_withTableThenProse_shouldCloseTableMode() {
    let content = "| a |\n| b |\nafter\n";
    let chunks = split(content, 1024);

    assert_eq!(chunks.len(), 1);
    // The chunk closed after a non-table line
    assert_eq!(chunks[0].kind, ChunkKind::Plain);
}

/// Test that an odd number of fences leaves the rest of the document in
/// code-block mode
#[test]
fn test_split_withUnterminatedFence_shouldStayInCodeBlockMode() {
    let content = "```\ncode to the end\nmore\n";
    let chunks = split(content, 1024);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].kind, ChunkKind::CodeBlock);
}

/// Lossless property over a mixed document at several bounds
#[test]
fn test_split_withMixedContent_shouldAlwaysConcatenateBack() {
    let content = "# Head\n\
text paragraph that runs a little longer than most\n\
```\nfn main() {}\n```\n\
| col | col |\n| 1 | 2 |\n\
- bullet\n- bullet\n\
tail\n";

    for bound in [1, 8, 16, 48, 256, DEFAULT_CHUNK_SIZE] {
        let chunks = split(content, bound);
        assert_eq!(concat(&chunks), content, "lossy split at bound {}", bound);
    }
}

/*!
 * Structure-aware splitting of Markdown content into bounded-size chunks.
 *
 * The splitter scans line by line (lines keep their trailing terminator) and
 * tracks whether the scan is currently inside a fenced code block or a table
 * row run. Chunk boundaries are only placed between lines, and while inside a
 * code block or table the line that would overflow the bound is carried whole
 * into the next chunk rather than dropped or cut. Concatenating the returned
 * chunks in order always reproduces the input exactly.
 */

/// Default chunk size bound in bytes (10 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 10 * 1024;

/// Structural mode a chunk was accumulated under when it was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    /// Ordinary prose
    Plain,
    /// Inside a fenced code block
    CodeBlock,
    /// Inside a run of table rows
    Table,
}

/// A contiguous slice of a document's content, produced in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk text, terminators included
    pub text: String,
    /// Structural mode active when the chunk was closed
    pub kind: ChunkKind,
}

/// Per-line scan state for structural mode tracking.
///
/// Code fences toggle on every line starting with the fence token, so an
/// unterminated fence leaves the rest of the document in code-block mode.
/// Table detection is a plain per-line prefix check, not a paired construct.
/// Both rules are deliberately heuristic; the fingerprint comparison relies
/// on the same heuristics, so consistency matters more than strict Markdown
/// correctness.
#[derive(Debug, Default, Clone, Copy)]
struct ScanState {
    in_code_block: bool,
    in_table: bool,
}

impl ScanState {
    /// Update the state for a line. Mode is evaluated after this update, so
    /// the line that opens or closes a construct counts under the new mode.
    fn observe(&mut self, line: &str) {
        if line.starts_with("```") {
            self.in_code_block = !self.in_code_block;
        }
        if line.starts_with('|') && !self.in_table {
            self.in_table = true;
        } else if !line.starts_with('|') && self.in_table {
            self.in_table = false;
        }
    }

    fn structural(&self) -> bool {
        self.in_code_block || self.in_table
    }

    fn kind(&self) -> ChunkKind {
        if self.in_code_block {
            ChunkKind::CodeBlock
        } else if self.in_table {
            ChunkKind::Table
        } else {
            ChunkKind::Plain
        }
    }
}

/// Split `content` into chunks of at most `chunk_size` bytes, except that a
/// single line inside a code block or table is never split even when it alone
/// exceeds the bound.
pub fn split(content: &str, chunk_size: usize) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut state = ScanState::default();

    for line in content.split_inclusive('\n') {
        state.observe(line);

        if state.structural() {
            if current.len() + line.len() > chunk_size {
                chunks.push(Chunk {
                    text: std::mem::take(&mut current),
                    kind: state.kind(),
                });
                // Oversized-construct exception: seed the next chunk with the
                // line so structural content is never cut or dropped.
                current.push_str(line);
            } else {
                current.push_str(line);
            }
        } else {
            if current.len() + line.len() > chunk_size {
                chunks.push(Chunk {
                    text: std::mem::take(&mut current),
                    kind: ChunkKind::Plain,
                });
            }
            current.push_str(line);
        }
    }

    if !current.is_empty() {
        chunks.push(Chunk {
            text: current,
            kind: state.kind(),
        });
    }

    chunks
}

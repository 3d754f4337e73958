/*!
 * Structural fingerprinting of Markdown content.
 *
 * A fingerprint is a count per structural marker (headings, fences, bullets,
 * links, ...) over the whole document. Comparing the source fingerprint with
 * the translated one is a cheap sanity check that translation preserved the
 * document structure. It is a heuristic: a translation can legitimately shift
 * a count (e.g. by introducing a literal `**`), so mismatches are reported,
 * never enforced.
 */

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Bold spans: `**...**` with no embedded asterisk or newline.
static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*[^*\n]+?\*\*").expect("bold span pattern is valid")
});

/// The fixed set of structural markers counted by [`fingerprint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Marker {
    CodeBlocks,
    HorizontalRules,
    H1,
    H2,
    H3,
    BulletPoints,
    Notice,
    Hyperlinks,
    Emphasis,
    Bold,
}

impl Marker {
    /// All markers, in reporting order.
    pub const ALL: [Marker; 10] = [
        Marker::CodeBlocks,
        Marker::HorizontalRules,
        Marker::H1,
        Marker::H2,
        Marker::H3,
        Marker::BulletPoints,
        Marker::Notice,
        Marker::Hyperlinks,
        Marker::Emphasis,
        Marker::Bold,
    ];

    /// Human-readable marker name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Marker::CodeBlocks => "Code blocks",
            Marker::HorizontalRules => "Horizontal rules",
            Marker::H1 => "H1",
            Marker::H2 => "H2",
            Marker::H3 => "H3",
            Marker::BulletPoints => "Bullet points",
            Marker::Notice => "Notice",
            Marker::Hyperlinks => "Hyperlinks",
            Marker::Emphasis => "Emphasis",
            Marker::Bold => "Bold",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Count-per-marker summary of a document's structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralFingerprint {
    counts: BTreeMap<Marker, usize>,
}

/// A single per-marker difference between two fingerprints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub marker: Marker,
    pub source: usize,
    pub target: usize,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: source={}, target={}",
            self.marker, self.source, self.target
        )
    }
}

impl StructuralFingerprint {
    /// Count for a single marker.
    pub fn count(&self, marker: Marker) -> usize {
        self.counts.get(&marker).copied().unwrap_or(0)
    }

    /// True iff every marker count is equal in both fingerprints.
    pub fn matches(&self, other: &StructuralFingerprint) -> bool {
        self.counts == other.counts
    }

    /// Per-marker differences against a target fingerprint, in reporting order.
    pub fn mismatches(&self, target: &StructuralFingerprint) -> Vec<Mismatch> {
        Marker::ALL
            .iter()
            .filter_map(|&marker| {
                let source = self.count(marker);
                let found = target.count(marker);
                if source != found {
                    Some(Mismatch {
                        marker,
                        source,
                        target: found,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Compute the structural fingerprint of `content`. Pure function: the same
/// content always yields the same counts.
pub fn fingerprint(content: &str) -> StructuralFingerprint {
    let mut counts = BTreeMap::new();
    for &marker in &Marker::ALL {
        let count = match marker {
            Marker::CodeBlocks => content.matches("```").count(),
            Marker::HorizontalRules => content.matches("\n---").count(),
            Marker::H1 => content.matches("\n# ").count(),
            Marker::H2 => content.matches("\n## ").count(),
            Marker::H3 => content.matches("\n### ").count(),
            Marker::BulletPoints => content.matches("\n- ").count(),
            Marker::Notice => content.matches(":::").count(),
            Marker::Hyperlinks => content.matches("](").count(),
            Marker::Emphasis => count_inline_code_spans(content),
            Marker::Bold => BOLD_SPAN.find_iter(content).count(),
        };
        counts.insert(marker, count);
    }
    StructuralFingerprint { counts }
}

/// Count single-backtick inline code spans.
///
/// A span is delimited by two backtick runs of length exactly one with no
/// backtick or newline in between, which distinguishes inline code from
/// triple-backtick fences. Implemented as a scan over backtick runs because
/// the regex crate has no lookaround.
fn count_inline_code_spans(content: &str) -> usize {
    let bytes = content.as_bytes();
    let mut runs: Vec<(usize, usize)> = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'`' {
            let start = i;
            while i < bytes.len() && bytes[i] == b'`' {
                i += 1;
            }
            runs.push((start, i - start));
        } else {
            i += 1;
        }
    }

    let mut count = 0;
    let mut r = 0;
    while r + 1 < runs.len() {
        let (open_start, open_len) = runs[r];
        let (close_start, _) = runs[r + 1];
        let inner = &content[open_start + open_len..close_start];
        if open_len == 1 && runs[r + 1].1 == 1 && !inner.contains('\n') {
            count += 1;
            // The closing run is consumed and cannot open the next span.
            r += 2;
        } else {
            r += 1;
        }
    }
    count
}

use crate::block::Block;
use crate::classify::{classify_line, strip_leading_stage_direction, LineKind};

/// Split text on every line boundary a PDF text layer may produce.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        matches!(
            c,
            '\n' | '\u{1C}'..='\u{1E}' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    })
}

/// The open dialogue block: who is speaking and what they said so far.
///
/// An empty string in `lines` marks a paragraph break.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Accumulator {
    name: Option<String>,
    lines: Vec<String>,
}

impl Accumulator {
    /// Open a block for `name`, seeded with `first_line` when it is not empty.
    pub fn open(name: String, first_line: &str) -> Self {
        let mut acc = Accumulator {
            name: Some(name),
            lines: Vec::new(),
        };
        acc.push_line(first_line);
        acc
    }

    pub fn is_open(&self) -> bool {
        self.name.is_some()
    }

    pub fn push_line(&mut self, line: &str) {
        if !line.is_empty() {
            self.lines.push(line.to_string());
        }
    }

    /// Record a paragraph break, never two in a row and never before the
    /// first line.
    pub fn push_blank(&mut self) {
        if !self.is_open() {
            return;
        }
        if matches!(self.lines.last(), Some(last) if !last.is_empty()) {
            self.lines.push(String::new());
        }
    }

    /// Close the block, returning it if it has any text. The accumulator is
    /// always left empty.
    pub fn flush(&mut self) -> Option<Block> {
        let Accumulator { name, lines } = std::mem::take(self);
        let name = name?;
        let joined = lines.join("\n");
        let text = joined.trim();
        if text.is_empty() {
            return None;
        }
        Some(Block::new(name, text))
    }
}

/// Line-by-line state machine turning normalized text into raw blocks.
///
/// Build a fresh one per document.
#[derive(Debug, Default)]
pub struct Segmenter {
    current: Accumulator,
    blocks: Vec<Block>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, raw: &str) {
        let line = raw.trim();
        match classify_line(line) {
            LineKind::Blank => self.current.push_blank(),
            LineKind::Heading | LineKind::StageDirection => {
                self.flush();
                self.blocks.push(Block::scene(line));
            }
            LineKind::Speaker { name, rest } => {
                self.flush();
                self.current = Accumulator::open(name, strip_leading_stage_direction(rest));
            }
            LineKind::Continuation => {
                if self.current.is_open() {
                    self.current.push_line(strip_leading_stage_direction(line));
                } else {
                    self.blocks.push(Block::scene(line));
                }
            }
        }
    }

    fn flush(&mut self) {
        if let Some(block) = self.current.flush() {
            self.blocks.push(block);
        }
    }

    /// Flush the open block and return everything produced, in order.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

/// Segment normalized text into uncompacted blocks.
pub fn segment(text: &str) -> Vec<Block> {
    let mut segmenter = Segmenter::new();
    for line in split_lines(text) {
        segmenter.push_line(line);
    }
    segmenter.finish()
}

//! Core library for copione
//!
//! This crate implements the **Functional Core** of the copione application:
//! it turns the raw text of a theatrical script into an ordered list of
//! [`Block`]s, each either a line of dialogue attributed to a character or a
//! non-dialogue unit (scene heading, stage direction, stray text) tagged with
//! the [`block::SCENE`] sentinel.
//!
//! # Architecture Overview
//!
//! - **`copione_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pdf`**: Page text extraction from PDF documents
//! - **`copione`**: File I/O, orchestration and the command line (the Imperative Shell)
//!
//! # Pipeline
//!
//! ```text
//! per-page text ──join──▶ normalize ──▶ segment ──▶ compact ──▶ Vec<Block>
//! ```
//!
//! - [`normalize`]: strips PDF extraction artifacts (emphasis markers,
//!   underscores, escaped parentheses, colon spacing, odd blanks)
//! - [`classify`]: decides what each line is (heading, speaker line, stage
//!   direction, continuation)
//! - [`segment`]: walks the lines and accumulates dialogue into blocks
//! - [`compact`]: merges adjacent non-dialogue blocks
//! - [`roster`]: lists the characters that speak
//!
//! Every call builds its own parser state, so the functions here can be
//! called concurrently for different documents.
//!
//! # Example Usage
//!
//! ```rust
//! use copione_core::{parse_text, Block};
//!
//! let blocks = parse_text("SCENA 1\n(Buio in sala)\nMARIO: (sorridendo) Ciao");
//!
//! assert_eq!(
//!     blocks,
//!     vec![
//!         Block::scene("SCENA 1\n(Buio in sala)"),
//!         Block::new("MARIO", "Ciao"),
//!     ]
//! );
//! ```

pub mod block;
pub mod classify;
pub mod compact;
pub mod normalize;
pub mod roster;
pub mod segment;

pub use block::{Block, SCENE};

/// Parse a whole script document into blocks.
pub fn parse_text(text: &str) -> Vec<Block> {
    let normalized = normalize::normalize_text(text);
    let raw = segment::segment(&normalized);
    let raw_count = raw.len();
    let blocks = compact::compact_blocks(raw);

    log::debug!(
        "parsed {} characters into {} blocks ({} before compaction)",
        text.len(),
        blocks.len(),
        raw_count
    );

    blocks
}

/// Parse per-page text as returned by a document text extractor.
pub fn parse_pages<S: AsRef<str>>(pages: &[S]) -> Vec<Block> {
    parse_text(&normalize::join_pages(pages))
}

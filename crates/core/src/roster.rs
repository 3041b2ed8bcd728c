//! Character roster: who speaks in a parsed script.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::block::{Block, SCENE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    /// Number of dialogue blocks attributed to this character.
    pub blocks: usize,
}

/// Sentinel comparison ignores case and surrounding whitespace.
fn is_scene_character(character: &str) -> bool {
    character.trim().eq_ignore_ascii_case(SCENE)
}

/// Unique speakers sorted by name, with their block counts.
pub fn build_roster(blocks: &[Block]) -> Vec<RosterEntry> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for block in blocks
        .iter()
        .filter(|b| !is_scene_character(&b.character))
    {
        *counts.entry(block.character.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(name, blocks)| RosterEntry {
            name: name.to_string(),
            blocks,
        })
        .collect()
}

/// Unique speaker names, sorted.
pub fn characters(blocks: &[Block]) -> Vec<String> {
    build_roster(blocks).into_iter().map(|e| e.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Block> {
        vec![
            Block::scene("SCENA 1"),
            Block::new("MARIO", "Ciao"),
            Block::new("LUCIA", "Ehi"),
            Block::new("MARIO", "Come va?"),
            Block::new(" scena ", "(edited by hand)"),
        ]
    }

    #[test]
    fn test_roster_counts_and_order() {
        assert_eq!(
            build_roster(&sample()),
            vec![
                RosterEntry {
                    name: "LUCIA".to_string(),
                    blocks: 1
                },
                RosterEntry {
                    name: "MARIO".to_string(),
                    blocks: 2
                },
            ]
        );
    }

    #[test]
    fn test_characters_excludes_scene() {
        assert_eq!(characters(&sample()), vec!["LUCIA", "MARIO"]);
    }

    #[test]
    fn test_roster_empty() {
        assert!(build_roster(&[]).is_empty());
        assert!(characters(&[Block::scene("SCENA 1")]).is_empty());
    }
}

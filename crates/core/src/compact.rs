use crate::block::Block;

/// Merge runs of adjacent non-dialogue blocks into one.
///
/// Dialogue blocks are never merged, neither with each other nor with scene
/// blocks.
pub fn compact_blocks(blocks: Vec<Block>) -> Vec<Block> {
    let mut compact: Vec<Block> = Vec::with_capacity(blocks.len());

    for block in blocks {
        if let Some(last) = compact.last_mut() {
            if block.is_scene() && last.is_scene() {
                let merged = format!("{}\n{}", last.text, block.text);
                last.text = merged.trim().to_string();
                continue;
            }
        }
        compact.push(block);
    }

    compact
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_empty() {
        assert!(compact_blocks(Vec::new()).is_empty());
    }

    #[test]
    fn test_adjacent_scenes_merged() {
        let blocks = vec![Block::scene("SCENA 1"), Block::scene("(Buio in sala)")];
        assert_eq!(
            compact_blocks(blocks),
            vec![Block::scene("SCENA 1\n(Buio in sala)")]
        );
    }

    #[test]
    fn test_long_scene_run_merged() {
        let blocks = vec![
            Block::scene("PERSONAGGI"),
            Block::scene("Mario, il cuoco"),
            Block::scene("Lucia, la cameriera"),
        ];
        assert_eq!(
            compact_blocks(blocks),
            vec![Block::scene("PERSONAGGI\nMario, il cuoco\nLucia, la cameriera")]
        );
    }

    #[test]
    fn test_dialogue_never_merged() {
        let blocks = vec![
            Block::new("MARIO", "Ciao"),
            Block::new("MARIO", "Ancora io"),
            Block::scene("(esce)"),
            Block::new("LUCIA", "Finalmente"),
        ];
        assert_eq!(compact_blocks(blocks.clone()), blocks);
    }

    #[test]
    fn test_scene_separated_by_dialogue_not_merged() {
        let blocks = vec![
            Block::scene("SCENA 1"),
            Block::new("MARIO", "Ciao"),
            Block::scene("SCENA 2"),
        ];
        assert_eq!(compact_blocks(blocks.clone()), blocks);
    }

    #[test]
    fn test_compact_is_idempotent() {
        let blocks = vec![
            Block::scene("SCENA 1"),
            Block::scene("(Buio)"),
            Block::new("MARIO", "Ciao"),
            Block::scene("(esce)"),
            Block::scene("SCENA 2"),
        ];
        let once = compact_blocks(blocks);
        let twice = compact_blocks(once.clone());
        assert_eq!(once, twice);
    }
}

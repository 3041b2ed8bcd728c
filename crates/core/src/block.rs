use serde::{Deserialize, Serialize};

/// Character value for blocks that are not attributed dialogue
/// (scene headings, stage directions, stray text).
pub const SCENE: &str = "SCENA";

/// One parsed unit of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub character: String,
    pub text: String,
}

impl Block {
    pub fn new(character: impl Into<String>, text: impl Into<String>) -> Self {
        Block {
            character: character.into(),
            text: text.into(),
        }
    }

    /// Build a non-dialogue block.
    pub fn scene(text: impl Into<String>) -> Self {
        Block::new(SCENE, text)
    }

    pub fn is_scene(&self) -> bool {
        self.character == SCENE
    }
}

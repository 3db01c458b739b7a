use crate::components::appearance::Appearance;

/// One still image of an animation, cut from a sprite sheet.
///
/// The frame number orders frames inside their animation; frames are sorted
/// by it when the owning template is committed.
#[derive(Debug, Clone)]
pub struct Frame {
    number: u32,
    appearance: Appearance,
}

impl Frame {
    pub fn new(number: u32, appearance: Appearance) -> Self {
        Self { number, appearance }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }
}

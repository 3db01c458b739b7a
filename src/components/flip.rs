/// Mirror flags applied when a sprite image is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Flip {
    pub const NONE: Flip = Flip {
        horizontal: false,
        vertical: false,
    };
    pub const HORIZONTAL: Flip = Flip {
        horizontal: true,
        vertical: false,
    };
    pub const VERTICAL: Flip = Flip {
        horizontal: false,
        vertical: true,
    };
    pub const BOTH: Flip = Flip {
        horizontal: true,
        vertical: true,
    };

    pub fn is_none(&self) -> bool {
        !self.horizontal && !self.vertical
    }
}

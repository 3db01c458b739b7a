//! Shared handles to live sprites.
//!
//! The manager and the game code both hold a [`SpriteRef`] to the same
//! sprite: the game moves it and toggles visibility, the manager updates and
//! draws it. Equality is identity, so two handles compare equal only when
//! they point at the same sprite, never because two sprites look alike.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::components::animatedsprite::AnimatedSprite;
use crate::components::staticsprite::StaticSprite;

#[derive(Debug)]
pub struct SpriteRef<T>(Rc<RefCell<T>>);

pub type StaticSpriteRef = SpriteRef<StaticSprite>;
pub type AnimatedSpriteRef = SpriteRef<AnimatedSprite>;

impl<T> SpriteRef<T> {
    pub fn new(sprite: T) -> Self {
        Self(Rc::new(RefCell::new(sprite)))
    }

    /// Panics if the sprite is currently borrowed mutably.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Panics if the sprite is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for SpriteRef<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for SpriteRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for SpriteRef<T> {}

/// A drawable instance of either kind, as kept in the manager's draw list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drawable {
    Static(StaticSpriteRef),
    Animated(AnimatedSpriteRef),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality() {
        let a = SpriteRef::new(5_u32);
        let b = SpriteRef::new(5_u32);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_clones_share_state() {
        let a = SpriteRef::new(1_u32);
        let b = a.clone();
        *b.borrow_mut() = 9;
        assert_eq!(*a.borrow(), 9);
    }
}

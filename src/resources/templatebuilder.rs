//! Staged construction of animated sprite templates.
//!
//! A template's shape is declared up front (how many animations, how many
//! frames each) and then filled in piece by piece:
//!
//! 1. [`TemplateBuilder::new`] fixes the name, layer and animation count
//! 2. [`TemplateBuilder::add_animation`] fills the next animation slot
//! 3. [`TemplateBuilder::add_frame`] fills the next frame slot of a named
//!    animation; frames for different animations may be interleaved
//! 4. the manager commits the builder, which runs [`TemplateBuilder::validate`]
//!    and publishes the result
//!
//! Nothing is checked structurally until commit, so a half-built template
//! can be inspected through [`TemplateBuilder::animations`].

use log::warn;

use crate::components::animatedsprite::AnimatedSprite;
use crate::components::animation::{Animation, check_delay};
use crate::components::appearance::SpriteDef;
use crate::components::frame::Frame;
use crate::error::{Result, SpriteError};

/// A frame added to a pending animation, not yet validated.
#[derive(Debug, Clone)]
pub struct PendingFrame {
    number: u32,
    def: SpriteDef,
}

impl PendingFrame {
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn def(&self) -> &SpriteDef {
        &self.def
    }
}

/// An animation slot that has been declared but may still miss frames.
#[derive(Debug, Clone)]
pub struct PendingAnimation {
    name: String,
    frame_slots: usize,
    delay: f32,
    loops: u32,
    frames: Vec<PendingFrame>,
}

impl PendingAnimation {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared number of frames.
    pub fn frame_slots(&self) -> usize {
        self.frame_slots
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn loops(&self) -> u32 {
        self.loops
    }

    /// Frames in the order they were added.
    pub fn frames(&self) -> &[PendingFrame] {
        &self.frames
    }

    pub fn empty_frame_slots(&self) -> usize {
        self.frame_slots - self.frames.len()
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() == self.frame_slots
    }

    fn build(&self) -> Result<Animation> {
        let mut pending: Vec<&PendingFrame> = self.frames.iter().collect();
        // stable: equal frame numbers keep their insertion order
        pending.sort_by_key(|f| f.number);
        let frames = pending
            .into_iter()
            .map(|f| -> Result<Frame> {
                Ok(Frame::new(f.number, f.def.clone().into_appearance()?))
            })
            .collect::<Result<Vec<_>>>()?;
        Animation::new(self.name.clone(), frames, self.delay, self.loops)
    }
}

/// An animated sprite template under construction.
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    name: String,
    layer: f32,
    animation_slots: usize,
    animations: Vec<PendingAnimation>,
}

impl TemplateBuilder {
    /// Start a template with room for exactly `animation_count` animations.
    ///
    /// Fails with [`SpriteError::InvalidArgument`] when the count is zero.
    pub fn new(name: impl Into<String>, layer: f32, animation_count: usize) -> Result<Self> {
        let name = name.into();
        if animation_count < 1 {
            warn!("Template '{}' declared with no animations", name);
            return Err(SpriteError::InvalidArgument(format!(
                "template '{name}' needs at least one animation"
            )));
        }
        Ok(Self {
            name,
            layer: layer.clamp(0.0, 1.0),
            animation_slots: animation_count,
            animations: Vec::with_capacity(animation_count),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layer(&self) -> f32 {
        self.layer
    }

    /// Declared number of animations.
    pub fn animation_slots(&self) -> usize {
        self.animation_slots
    }

    /// Filled animation slots, in the order they were added.
    pub fn animations(&self) -> &[PendingAnimation] {
        &self.animations
    }

    pub fn empty_animation_slots(&self) -> usize {
        self.animation_slots - self.animations.len()
    }

    /// Fill the next free animation slot.
    ///
    /// Fails with [`SpriteError::PreconditionViolation`] once every declared
    /// slot is taken, and with [`SpriteError::InvalidArgument`] for a zero
    /// `frame_count` or a delay that is not a positive number of seconds.
    ///
    /// Names are not checked for duplicates; lookups on the finished sprite
    /// resolve to the first animation with a given name.
    pub fn add_animation(
        &mut self,
        name: impl Into<String>,
        frame_count: usize,
        delay: f32,
        loops: u32,
    ) -> Result<()> {
        let name = name.into();
        if self.animations.len() == self.animation_slots {
            warn!(
                "Template '{}' already has all {} animations, cannot add '{}'",
                self.name, self.animation_slots, name
            );
            return Err(SpriteError::PreconditionViolation(format!(
                "template '{}' has no free animation slot for '{name}'",
                self.name
            )));
        }
        if frame_count < 1 {
            warn!("Animation '{}' declared with no frames", name);
            return Err(SpriteError::InvalidArgument(format!(
                "animation '{name}' needs at least one frame"
            )));
        }
        if let Err(e) = check_delay(&name, delay) {
            warn!("{}", e);
            return Err(e);
        }
        self.animations.push(PendingAnimation {
            name,
            frame_slots: frame_count,
            delay,
            loops,
            frames: Vec::with_capacity(frame_count),
        });
        Ok(())
    }

    /// Fill the next free frame slot of the animation called `animation`.
    ///
    /// When several animations share the name, the first one with a free slot
    /// receives the frame. Fails with [`SpriteError::PreconditionViolation`]
    /// if no animation of that name has been added yet, or if every one of
    /// them is already full.
    pub fn add_frame(&mut self, animation: &str, number: u32, def: SpriteDef) -> Result<()> {
        let mut matched = false;
        for pending in self.animations.iter_mut().filter(|a| a.name == animation) {
            matched = true;
            if !pending.is_full() {
                pending.frames.push(PendingFrame { number, def });
                return Ok(());
            }
        }

        if matched {
            warn!(
                "Animation '{}' of template '{}' has no free frame slot for frame {}",
                animation, self.name, number
            );
            Err(SpriteError::PreconditionViolation(format!(
                "animation '{animation}' has no free frame slot"
            )))
        } else {
            warn!(
                "Template '{}' has no animation '{}' to add frame {} to",
                self.name, animation, number
            );
            Err(SpriteError::PreconditionViolation(format!(
                "animation '{animation}' has not been added to template '{}'",
                self.name
            )))
        }
    }

    /// Structural checks run on commit, in order: at least one animation slot,
    /// no empty animation slot, no empty frame slot, every frame textured.
    pub fn validate(&self) -> Result<()> {
        if self.animation_slots < 1 {
            return Err(self.invalid("it declares no animations".to_string()));
        }
        if self.animations.len() < self.animation_slots {
            return Err(self.invalid(format!(
                "{} of {} animation slots are empty",
                self.empty_animation_slots(),
                self.animation_slots
            )));
        }
        if let Some(a) = self.animations.iter().find(|a| !a.is_full()) {
            return Err(self.invalid(format!(
                "animation '{}' has {} of {} frame slots empty",
                a.name,
                a.empty_frame_slots(),
                a.frame_slots
            )));
        }
        for a in &self.animations {
            if let Some(f) = a.frames.iter().find(|f| !f.def.has_texture()) {
                return Err(self.invalid(format!(
                    "frame {} of animation '{}' has no texture",
                    f.number, a.name
                )));
            }
        }
        Ok(())
    }

    /// Validate and assemble the sprite, frames sorted by number. The builder
    /// itself is left untouched either way.
    pub(crate) fn build(&self) -> Result<AnimatedSprite> {
        self.validate()?;
        let animations = self
            .animations
            .iter()
            .map(PendingAnimation::build)
            .collect::<Result<Vec<_>>>()?;
        AnimatedSprite::new(self.layer, animations)
    }

    fn invalid(&self, reason: String) -> SpriteError {
        SpriteError::ValidationError(format!("template '{}': {reason}", self.name))
    }
}

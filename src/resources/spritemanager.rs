//! Template registry and live sprite collections.
//!
//! [`SpriteManager`] keeps four independent collections:
//!
//! - static templates by name
//! - animated templates by name
//! - drawable instances, in registration order (the draw order for equal layers)
//! - updatable instances (animated sprites only)
//!
//! Templates are stencils: they are never drawn or updated. Instances are deep
//! copies of a template and share no mutable state with it or with each other.
//! The manager is meant to live in the world as a non-send resource and be
//! driven once per tick by [`crate::systems::sprites::update_sprites`] and
//! [`crate::systems::render::render_sprites`].
//!
//! # Building an animated template
//!
//! ```
//! use spritekit::components::appearance::SpriteDef;
//! use spritekit::resources::spritemanager::SpriteManager;
//!
//! let mut manager = SpriteManager::new();
//! manager.start_animated_template("coin", 0.5, 1)?;
//! manager.add_animation("spin", 2, 0.1, 0)?;
//! manager.add_frame("spin", 1, SpriteDef::new().texture("coins").source(16, 0, 16, 16))?;
//! manager.add_frame("spin", 0, SpriteDef::new().texture("coins").source(0, 0, 16, 16))?;
//! manager.end_animated_template()?;
//!
//! let coin = manager.new_animated_sprite("coin")?;
//! coin.borrow_mut().select_animation("spin")?;
//! coin.borrow_mut().set_visible(true);
//! # Ok::<(), spritekit::SpriteError>(())
//! ```

use std::rc::Rc;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::components::animatedsprite::AnimatedSprite;
use crate::components::appearance::SpriteDef;
use crate::components::spriteref::{AnimatedSpriteRef, Drawable, SpriteRef, StaticSpriteRef};
use crate::components::staticsprite::StaticSprite;
use crate::error::{RejectedTemplate, Result, SpriteError};
use crate::resources::templatebuilder::TemplateBuilder;
use crate::systems::render::SpriteBatch;

/// Named stencil for static sprites.
#[derive(Debug)]
pub struct StaticSpriteTemplate {
    name: String,
    sprite: StaticSprite,
}

impl StaticSpriteTemplate {
    /// Fails with [`SpriteError::ValidationError`] if `def` has no texture.
    pub fn new(name: impl Into<String>, def: SpriteDef, layer: f32) -> Result<Self> {
        let name = name.into();
        let appearance = def.into_appearance().map_err(|_| {
            SpriteError::ValidationError(format!("static template '{name}' has no texture"))
        })?;
        Ok(Self {
            name,
            sprite: StaticSprite::new(appearance, layer),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sprite(&self) -> &StaticSprite {
        &self.sprite
    }
}

/// Named, committed stencil for animated sprites.
#[derive(Debug)]
pub struct AnimatedSpriteTemplate {
    name: String,
    sprite: AnimatedSprite,
}

impl AnimatedSpriteTemplate {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sprite(&self) -> &AnimatedSprite {
        &self.sprite
    }
}

#[derive(Debug, Default)]
pub struct SpriteManager {
    static_templates: FxHashMap<String, Rc<StaticSpriteTemplate>>,
    animated_templates: FxHashMap<String, Rc<AnimatedSpriteTemplate>>,
    drawable: Vec<Drawable>,
    updatable: Vec<AnimatedSpriteRef>,
    pending: Option<TemplateBuilder>,
}

impl SpriteManager {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Per-tick passes
    // ---------------------------------------------------------------------

    /// Advance every updatable sprite by `dt` seconds.
    pub fn update(&self, dt: f32) {
        for sprite in &self.updatable {
            sprite.borrow_mut().update(dt);
        }
    }

    /// Submit every visible sprite to `batch`, in registration order.
    pub fn draw(&self, batch: &mut dyn SpriteBatch) {
        for drawable in &self.drawable {
            match drawable {
                Drawable::Static(s) => s.borrow().draw(batch),
                Drawable::Animated(s) => s.borrow().draw(batch),
            }
        }
    }

    // ---------------------------------------------------------------------
    // Static templates
    // ---------------------------------------------------------------------

    /// Register a static template.
    ///
    /// Fails with [`SpriteError::ValidationError`] when the name is taken or
    /// `def` has no texture.
    pub fn create_static_template(
        &mut self,
        name: impl Into<String>,
        def: SpriteDef,
        layer: f32,
    ) -> Result<()> {
        let name = name.into();
        if self.static_templates.contains_key(&name) {
            warn!("Static template '{}' already exists", name);
            return Err(SpriteError::ValidationError(format!(
                "static template '{name}' already exists"
            )));
        }
        let template = StaticSpriteTemplate::new(name.clone(), def, layer).inspect_err(|e| {
            warn!("{}", e);
        })?;
        debug!("Static template '{}' registered", name);
        self.static_templates.insert(name, Rc::new(template));
        Ok(())
    }

    /// Instantiate the static template `name` and register the copy for drawing.
    pub fn new_static_sprite(&mut self, name: &str) -> Result<StaticSpriteRef> {
        let Some(template) = self.static_templates.get(name) else {
            warn!("No static template named '{}'", name);
            return Err(SpriteError::NotFound(format!("static template '{name}'")));
        };
        let sprite = SpriteRef::new(template.sprite.clone());
        self.drawable.push(Drawable::Static(sprite.clone()));
        debug!("Static sprite instantiated from '{}'", name);
        Ok(sprite)
    }

    /// The registered template, shared rather than copied. Hand it back with
    /// [`SpriteManager::add_static_template`] after clearing or removing it.
    pub fn copy_static_template(&self, name: &str) -> Option<Rc<StaticSpriteTemplate>> {
        self.static_templates.get(name).cloned()
    }

    /// Register `template` unless this exact template is already present.
    ///
    /// Returns true once the template is registered. A different template
    /// holding the same name is not replaced and yields false.
    pub fn add_static_template(&mut self, template: Rc<StaticSpriteTemplate>) -> bool {
        match self.static_templates.get(template.name()) {
            Some(existing) if Rc::ptr_eq(existing, &template) => true,
            Some(_) => {
                warn!(
                    "Another static template named '{}' is already registered",
                    template.name()
                );
                false
            }
            None => {
                self.static_templates
                    .insert(template.name().to_string(), template);
                true
            }
        }
    }

    pub fn remove_static_template(&mut self, name: &str) -> bool {
        let removed = self.static_templates.remove(name).is_some();
        if removed {
            debug!("Static template '{}' removed", name);
        } else {
            warn!("Cannot remove static template '{}': not registered", name);
        }
        removed
    }

    pub fn clear_static_templates(&mut self) -> bool {
        self.static_templates.clear();
        self.static_templates.shrink_to_fit();
        self.static_templates.is_empty()
    }

    pub fn contains_static_template(&self, name: &str) -> bool {
        self.static_templates.contains_key(name)
    }

    pub fn static_template_count(&self) -> usize {
        self.static_templates.len()
    }

    // ---------------------------------------------------------------------
    // Animated templates: staged builder
    // ---------------------------------------------------------------------

    /// Begin a new animated template with room for `animation_count` animations.
    ///
    /// Any unfinished template from an earlier `start` is discarded. On error
    /// the earlier pending template, if any, is kept.
    pub fn start_animated_template(
        &mut self,
        name: impl Into<String>,
        layer: f32,
        animation_count: usize,
    ) -> Result<()> {
        let builder = TemplateBuilder::new(name, layer, animation_count)?;
        if let Some(old) = self.pending.replace(builder) {
            debug!("Discarding unfinished template '{}'", old.name());
        }
        Ok(())
    }

    /// Fill the next animation slot of the pending template.
    pub fn add_animation(
        &mut self,
        name: impl Into<String>,
        frame_count: usize,
        delay: f32,
        loops: u32,
    ) -> Result<()> {
        self.pending_mut("add an animation")?
            .add_animation(name, frame_count, delay, loops)
    }

    /// Fill the next frame slot of `animation` on the pending template.
    pub fn add_frame(&mut self, animation: &str, number: u32, def: SpriteDef) -> Result<()> {
        self.pending_mut("add a frame")?.add_frame(animation, number, def)
    }

    /// Validate and publish the pending template.
    ///
    /// On failure the pending template stays in place so it can be inspected
    /// with [`SpriteManager::pending_template`], completed, or discarded.
    pub fn end_animated_template(&mut self) -> Result<()> {
        let Some(builder) = self.pending.take() else {
            warn!("No animated template is being built");
            return Err(SpriteError::PreconditionViolation(
                "no animated template is being built".to_string(),
            ));
        };
        match self.commit_template(builder) {
            Ok(()) => Ok(()),
            Err(RejectedTemplate { error, builder }) => {
                self.pending = Some(builder);
                Err(error)
            }
        }
    }

    /// Validate and publish an explicitly built template.
    ///
    /// The builder is returned untouched inside [`RejectedTemplate`] when a
    /// structural check fails or the name is already registered.
    pub fn commit_template(
        &mut self,
        builder: TemplateBuilder,
    ) -> std::result::Result<(), RejectedTemplate> {
        let sprite = match builder.build() {
            Ok(sprite) => sprite,
            Err(error) => {
                warn!("{}", error);
                return Err(RejectedTemplate { error, builder });
            }
        };
        if self.animated_templates.contains_key(builder.name()) {
            warn!("Animated template '{}' already exists", builder.name());
            let error = SpriteError::ValidationError(format!(
                "animated template '{}' already exists",
                builder.name()
            ));
            return Err(RejectedTemplate { error, builder });
        }

        let name = builder.name().to_string();
        debug!(
            "Animated template '{}' registered with {} animations",
            name,
            sprite.animations().len()
        );
        self.animated_templates
            .insert(name.clone(), Rc::new(AnimatedSpriteTemplate { name, sprite }));
        Ok(())
    }

    /// The template currently being built through the staged calls.
    pub fn pending_template(&self) -> Option<&TemplateBuilder> {
        self.pending.as_ref()
    }

    /// Drop the pending template, returning it.
    pub fn discard_pending_template(&mut self) -> Option<TemplateBuilder> {
        self.pending.take()
    }

    fn pending_mut(&mut self, action: &str) -> Result<&mut TemplateBuilder> {
        match self.pending.as_mut() {
            Some(builder) => Ok(builder),
            None => {
                warn!("Cannot {}: no animated template is being built", action);
                Err(SpriteError::PreconditionViolation(format!(
                    "cannot {action} before starting an animated template"
                )))
            }
        }
    }

    // ---------------------------------------------------------------------
    // Animated templates: registry
    // ---------------------------------------------------------------------

    /// Instantiate the animated template `name`, registering the copy for
    /// drawing and updating.
    pub fn new_animated_sprite(&mut self, name: &str) -> Result<AnimatedSpriteRef> {
        let Some(template) = self.animated_templates.get(name) else {
            warn!("No animated template named '{}'", name);
            return Err(SpriteError::NotFound(format!("animated template '{name}'")));
        };
        let sprite = SpriteRef::new(template.sprite.clone());
        self.drawable.push(Drawable::Animated(sprite.clone()));
        self.updatable.push(sprite.clone());
        debug!("Animated sprite instantiated from '{}'", name);
        Ok(sprite)
    }

    /// The registered template, shared rather than copied.
    pub fn copy_animated_template(&self, name: &str) -> Option<Rc<AnimatedSpriteTemplate>> {
        self.animated_templates.get(name).cloned()
    }

    /// Register `template` unless this exact template is already present.
    ///
    /// Same contract as [`SpriteManager::add_static_template`].
    pub fn add_animated_template(&mut self, template: Rc<AnimatedSpriteTemplate>) -> bool {
        match self.animated_templates.get(template.name()) {
            Some(existing) if Rc::ptr_eq(existing, &template) => true,
            Some(_) => {
                warn!(
                    "Another animated template named '{}' is already registered",
                    template.name()
                );
                false
            }
            None => {
                self.animated_templates
                    .insert(template.name().to_string(), template);
                true
            }
        }
    }

    pub fn remove_animated_template(&mut self, name: &str) -> bool {
        let removed = self.animated_templates.remove(name).is_some();
        if removed {
            debug!("Animated template '{}' removed", name);
        } else {
            warn!("Cannot remove animated template '{}': not registered", name);
        }
        removed
    }

    pub fn clear_animated_templates(&mut self) -> bool {
        self.animated_templates.clear();
        self.animated_templates.shrink_to_fit();
        self.animated_templates.is_empty()
    }

    /// Clear both template registries.
    pub fn clear_templates(&mut self) -> bool {
        let static_cleared = self.clear_static_templates();
        let animated_cleared = self.clear_animated_templates();
        static_cleared && animated_cleared
    }

    pub fn contains_animated_template(&self, name: &str) -> bool {
        self.animated_templates.contains_key(name)
    }

    pub fn animated_template_count(&self) -> usize {
        self.animated_templates.len()
    }

    // ---------------------------------------------------------------------
    // Instances
    // ---------------------------------------------------------------------

    /// Stop drawing `sprite`. Returns whether it was registered.
    pub fn remove_static_sprite(&mut self, sprite: &StaticSpriteRef) -> bool {
        let pos = self
            .drawable
            .iter()
            .position(|d| matches!(d, Drawable::Static(s) if s == sprite));
        match pos {
            Some(i) => {
                self.drawable.remove(i);
                debug!("Static sprite removed ({} drawables left)", self.drawable.len());
                true
            }
            None => {
                warn!("Cannot remove static sprite: not registered for drawing");
                false
            }
        }
    }

    /// Stop drawing and updating `sprite`. Returns true only if it was
    /// registered in both collections.
    pub fn remove_animated_sprite(&mut self, sprite: &AnimatedSpriteRef) -> bool {
        let drawable_pos = self
            .drawable
            .iter()
            .position(|d| matches!(d, Drawable::Animated(s) if s == sprite));
        let removed_drawable = drawable_pos.map(|i| self.drawable.remove(i)).is_some();
        let updatable_pos = self.updatable.iter().position(|s| s == sprite);
        let removed_updatable = updatable_pos.map(|i| self.updatable.remove(i)).is_some();
        match (removed_drawable, removed_updatable) {
            (true, true) => debug!(
                "Animated sprite removed ({} drawables, {} updatables left)",
                self.drawable.len(),
                self.updatable.len()
            ),
            (false, false) => warn!("Cannot remove animated sprite: not registered"),
            (true, false) => warn!("Animated sprite was drawn but not registered for updates"),
            (false, true) => warn!("Animated sprite was updated but not registered for drawing"),
        }
        removed_drawable && removed_updatable
    }

    /// Register `sprite` for drawing unless it already is.
    pub fn add_static_sprite(&mut self, sprite: &StaticSpriteRef) -> bool {
        let present = self
            .drawable
            .iter()
            .any(|d| matches!(d, Drawable::Static(s) if s == sprite));
        if !present {
            self.drawable.push(Drawable::Static(sprite.clone()));
        }
        true
    }

    /// Register `sprite` for drawing and updating, skipping whichever
    /// collection already holds it.
    pub fn add_animated_sprite(&mut self, sprite: &AnimatedSpriteRef) -> bool {
        let drawable = self
            .drawable
            .iter()
            .any(|d| matches!(d, Drawable::Animated(s) if s == sprite));
        if !drawable {
            self.drawable.push(Drawable::Animated(sprite.clone()));
        }
        if !self.updatable.contains(sprite) {
            self.updatable.push(sprite.clone());
        }
        true
    }

    /// Drop every live instance from both collections.
    pub fn clear_sprites(&mut self) -> bool {
        self.drawable.clear();
        self.drawable.shrink_to_fit();
        self.updatable.clear();
        self.updatable.shrink_to_fit();
        self.drawable.is_empty() && self.updatable.is_empty()
    }

    /// Drawable instances in draw order.
    pub fn drawables(&self) -> &[Drawable] {
        &self.drawable
    }

    pub fn drawable_count(&self) -> usize {
        self.drawable.len()
    }

    pub fn updatable_count(&self) -> usize {
        self.updatable.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::render::DrawCall;

    fn def(x: i32) -> SpriteDef {
        SpriteDef::new().texture("sheet").source(x, 0, 16, 16)
    }

    fn manager_with_walker() -> SpriteManager {
        let mut m = SpriteManager::new();
        m.start_animated_template("walker", 0.5, 1).unwrap();
        m.add_animation("walk", 3, 1.0, 0).unwrap();
        m.add_frame("walk", 3, def(32)).unwrap();
        m.add_frame("walk", 1, def(0)).unwrap();
        m.add_frame("walk", 2, def(16)).unwrap();
        m.end_animated_template().unwrap();
        m
    }

    #[test]
    fn test_staged_calls_need_start() {
        let mut m = SpriteManager::new();
        assert!(matches!(
            m.add_animation("walk", 1, 1.0, 0),
            Err(SpriteError::PreconditionViolation(_))
        ));
        assert!(matches!(
            m.add_frame("walk", 0, def(0)),
            Err(SpriteError::PreconditionViolation(_))
        ));
        assert!(matches!(
            m.end_animated_template(),
            Err(SpriteError::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_start_rejects_zero_animations_and_keeps_pending() {
        let mut m = SpriteManager::new();
        m.start_animated_template("first", 0.0, 1).unwrap();
        assert!(matches!(
            m.start_animated_template("second", 0.0, 0),
            Err(SpriteError::InvalidArgument(_))
        ));
        assert_eq!(m.pending_template().unwrap().name(), "first");
    }

    #[test]
    fn test_start_discards_unfinished_template() {
        let mut m = SpriteManager::new();
        m.start_animated_template("first", 0.0, 1).unwrap();
        m.add_animation("a", 1, 1.0, 0).unwrap();
        m.start_animated_template("second", 0.0, 2).unwrap();
        let pending = m.pending_template().unwrap();
        assert_eq!(pending.name(), "second");
        assert!(pending.animations().is_empty());
    }

    #[test]
    fn test_commit_sorts_frames() {
        let m = manager_with_walker();
        assert!(m.pending_template().is_none());
        let template = m.copy_animated_template("walker").unwrap();
        let numbers: Vec<u32> = template.sprite().animations()[0]
            .frames()
            .iter()
            .map(|f| f.number())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_commit_keeps_pending_intact() {
        let mut m = SpriteManager::new();
        m.start_animated_template("hero", 0.5, 2).unwrap();
        m.add_animation("walk", 2, 1.0, 0).unwrap();
        m.add_frame("walk", 1, def(16)).unwrap();

        let err = m.end_animated_template().unwrap_err();
        assert!(matches!(err, SpriteError::ValidationError(_)));
        let pending = m.pending_template().unwrap();
        assert_eq!(pending.animations().len(), 1);
        assert_eq!(pending.animations()[0].frames().len(), 1);
        assert!(!m.contains_animated_template("hero"));

        // finish it and commit again
        m.add_animation("idle", 1, 1.0, 0).unwrap();
        m.add_frame("idle", 0, def(0)).unwrap();
        m.add_frame("walk", 0, def(0)).unwrap();
        m.end_animated_template().unwrap();
        assert!(m.contains_animated_template("hero"));
    }

    #[test]
    fn test_commit_rejects_missing_texture() {
        let mut m = SpriteManager::new();
        m.start_animated_template("hero", 0.5, 1).unwrap();
        m.add_animation("walk", 1, 1.0, 0).unwrap();
        m.add_frame("walk", 0, SpriteDef::new().source(0, 0, 4, 4)).unwrap();
        assert!(matches!(
            m.end_animated_template(),
            Err(SpriteError::ValidationError(_))
        ));
        assert!(m.pending_template().is_some());
    }

    #[test]
    fn test_commit_rejects_duplicate_name() {
        let mut m = manager_with_walker();
        let mut b = TemplateBuilder::new("walker", 0.0, 1).unwrap();
        b.add_animation("x", 1, 1.0, 0).unwrap();
        b.add_frame("x", 0, def(0)).unwrap();
        let rejected = m.commit_template(b).unwrap_err();
        assert!(matches!(rejected.error, SpriteError::ValidationError(_)));
        assert_eq!(rejected.builder.animations()[0].name(), "x");
        let template = m.copy_animated_template("walker").unwrap();
        assert_eq!(template.sprite().animations()[0].name(), "walk");
    }

    #[test]
    fn test_instantiate_unknown_template() {
        let mut m = SpriteManager::new();
        assert!(matches!(
            m.new_animated_sprite("ghost"),
            Err(SpriteError::NotFound(_))
        ));
        assert!(matches!(
            m.new_static_sprite("ghost"),
            Err(SpriteError::NotFound(_))
        ));
    }

    #[test]
    fn test_instances_are_isolated() {
        let mut m = manager_with_walker();
        let a = m.new_animated_sprite("walker").unwrap();
        {
            let mut s = a.borrow_mut();
            s.select_animation("walk").unwrap();
            s.set_visible(true);
            s.update(1.0);
            s.update(1.0);
        }
        let b = m.new_animated_sprite("walker").unwrap();
        assert_eq!(a.borrow().current_animation().unwrap().current_frame_index(), 2);
        assert!(b.borrow().current_animation().is_none());
        assert!(!b.borrow().visible());
        b.borrow_mut().select_animation("walk").unwrap();
        assert_eq!(b.borrow().current_animation().unwrap().current_frame_index(), 0);

        let template = m.copy_animated_template("walker").unwrap();
        assert!(template.sprite().current_animation().is_none());
        assert_eq!(template.sprite().animations()[0].time_to_next_frame(), 1.0);
    }

    #[test]
    fn test_instantiate_registers_collections() {
        let mut m = manager_with_walker();
        m.create_static_template("rock", def(0), 0.9).unwrap();
        let _walker = m.new_animated_sprite("walker").unwrap();
        let _rock = m.new_static_sprite("rock").unwrap();
        assert_eq!(m.drawable_count(), 2);
        assert_eq!(m.updatable_count(), 1);
    }

    #[test]
    fn test_static_template_rules() {
        let mut m = SpriteManager::new();
        m.create_static_template("rock", def(0), 0.2).unwrap();
        assert!(matches!(
            m.create_static_template("rock", def(16), 0.2),
            Err(SpriteError::ValidationError(_))
        ));
        assert!(matches!(
            m.create_static_template("bush", SpriteDef::new(), 0.2),
            Err(SpriteError::ValidationError(_))
        ));
        assert_eq!(m.static_template_count(), 1);
    }

    #[test]
    fn test_remove_and_add_back_animated() {
        let mut m = manager_with_walker();
        let s = m.new_animated_sprite("walker").unwrap();
        assert!(m.remove_animated_sprite(&s));
        assert!(!m.remove_animated_sprite(&s));
        assert_eq!((m.drawable_count(), m.updatable_count()), (0, 0));

        assert!(m.add_animated_sprite(&s));
        assert!(m.add_animated_sprite(&s));
        assert_eq!((m.drawable_count(), m.updatable_count()), (1, 1));
    }

    #[test]
    fn test_remove_animated_reports_partial_registration() {
        let mut m = manager_with_walker();
        let s = m.new_animated_sprite("walker").unwrap();
        m.updatable.clear();
        assert!(!m.remove_animated_sprite(&s));
        assert_eq!((m.drawable_count(), m.updatable_count()), (0, 0));

        m.updatable.push(s.clone());
        assert!(!m.remove_animated_sprite(&s));
        assert_eq!(m.updatable_count(), 0);
    }

    #[test]
    fn test_add_back_static_is_idempotent() {
        let mut m = SpriteManager::new();
        m.create_static_template("rock", def(0), 0.2).unwrap();
        let s = m.new_static_sprite("rock").unwrap();
        assert!(m.add_static_sprite(&s));
        assert!(m.add_static_sprite(&s));
        assert_eq!(m.drawable_count(), 1);
        assert!(m.remove_static_sprite(&s));
        assert!(!m.remove_static_sprite(&s));
    }

    #[test]
    fn test_remove_identifies_by_reference() {
        let mut m = SpriteManager::new();
        m.create_static_template("rock", def(0), 0.2).unwrap();
        let a = m.new_static_sprite("rock").unwrap();
        let b = m.new_static_sprite("rock").unwrap();
        assert!(m.remove_static_sprite(&b));
        assert_eq!(m.drawable_count(), 1);
        assert!(matches!(&m.drawables()[0], Drawable::Static(s) if *s == a));
    }

    #[test]
    fn test_template_copy_and_add_back() {
        let mut m = manager_with_walker();
        let template = m.copy_animated_template("walker").unwrap();
        assert!(m.copy_animated_template("nope").is_none());
        assert!(m.add_animated_template(Rc::clone(&template)));
        assert_eq!(m.animated_template_count(), 1);

        assert!(m.clear_animated_templates());
        assert!(!m.contains_animated_template("walker"));
        assert!(m.add_animated_template(template));
        assert!(m.new_animated_sprite("walker").is_ok());
    }

    #[test]
    fn test_add_back_different_template_same_name() {
        let mut m = SpriteManager::new();
        m.create_static_template("rock", def(0), 0.2).unwrap();
        let other = Rc::new(StaticSpriteTemplate::new("rock", def(16), 0.2).unwrap());
        assert!(!m.add_static_template(other));
        let kept = m.copy_static_template("rock").unwrap();
        assert_eq!(kept.sprite().appearance().source().x, 0.0);
    }

    #[test]
    fn test_remove_templates() {
        let mut m = manager_with_walker();
        m.create_static_template("rock", def(0), 0.2).unwrap();
        assert!(m.remove_static_template("rock"));
        assert!(!m.remove_static_template("rock"));
        assert!(m.remove_animated_template("walker"));
        assert!(!m.remove_animated_template("walker"));
    }

    #[test]
    fn test_clears_report_empty() {
        let mut m = manager_with_walker();
        m.create_static_template("rock", def(0), 0.2).unwrap();
        m.new_animated_sprite("walker").unwrap();
        m.new_static_sprite("rock").unwrap();

        assert!(m.clear_sprites());
        assert!(m.clear_sprites());
        assert_eq!((m.drawable_count(), m.updatable_count()), (0, 0));
        assert_eq!(m.static_template_count(), 1);

        assert!(m.clear_static_templates());
        assert_eq!(m.animated_template_count(), 1);
        assert!(m.clear_templates());
        assert_eq!(m.animated_template_count(), 0);
    }

    #[test]
    fn test_update_and_draw_passes() {
        let mut m = manager_with_walker();
        m.create_static_template("rock", def(64), 0.9).unwrap();
        let walker = m.new_animated_sprite("walker").unwrap();
        let rock = m.new_static_sprite("rock").unwrap();
        let hidden = m.new_animated_sprite("walker").unwrap();
        walker.borrow_mut().select_animation("walk").unwrap();
        walker.borrow_mut().set_visible(true);
        hidden.borrow_mut().select_animation("walk").unwrap();
        rock.borrow_mut().set_visible(true);

        m.update(1.0);
        assert_eq!(walker.borrow().current_animation().unwrap().current_frame_index(), 1);
        assert_eq!(hidden.borrow().current_animation().unwrap().current_frame_index(), 0);

        let mut calls: Vec<DrawCall> = Vec::new();
        m.draw(&mut calls);
        assert_eq!(calls.len(), 2);
        // frame number 2 sits at x=16 after sorting
        assert_eq!(calls[0].source.x, 16.0);
        assert_eq!(calls[1].source.x, 64.0);
        assert_eq!(calls[1].layer, 0.9);
    }
}

//! Timed, loopable frame sequences.
//!
//! An [`Animation`] owns its frames and the countdown that decides when the
//! next one is shown. It is driven once per tick by [`Animation::update`].
//!
//! # Looping
//!
//! - `loops == 0` plays forever, wrapping from the last frame back to the
//!   first. `finished` never becomes true.
//! - `loops > 0` plays the sequence that many times and then freezes on the
//!   last frame with `finished` set.
//!
//! At most one frame advance happens per `update` call, however large the
//! delta. A countdown that overshoots is clamped to zero, not carried over.

use crate::components::frame::Frame;
use crate::error::{Result, SpriteError};

#[derive(Debug, Clone)]
pub struct Animation {
    name: String,
    frames: Vec<Frame>,
    delay: f32,
    loops: u32,
    current_frame: usize,
    loops_left: u32,
    time_to_next_frame: f32,
    finished: bool,
}

impl Animation {
    /// Create an animation over `frames`, shown `delay` seconds each.
    ///
    /// Frames are kept in the given order. Fails with
    /// [`SpriteError::InvalidArgument`] if `frames` is empty or `delay` is not
    /// a positive number of seconds.
    pub fn new(name: impl Into<String>, frames: Vec<Frame>, delay: f32, loops: u32) -> Result<Self> {
        let name = name.into();
        if frames.is_empty() {
            return Err(SpriteError::InvalidArgument(format!(
                "animation '{name}' needs at least one frame"
            )));
        }
        check_delay(&name, delay)?;
        Ok(Self {
            name,
            frames,
            delay,
            loops,
            current_frame: 0,
            loops_left: loops,
            time_to_next_frame: delay,
            finished: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Seconds each frame stays on screen.
    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Configured loop count, `0` meaning forever.
    pub fn loops(&self) -> u32 {
        self.loops
    }

    pub fn loops_left(&self) -> u32 {
        self.loops_left
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current_frame]
    }

    pub fn time_to_next_frame(&self) -> f32 {
        self.time_to_next_frame
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn is_infinite(&self) -> bool {
        self.loops == 0
    }

    /// Restart from the first frame with the full loop count.
    ///
    /// The frame countdown is left running, so the first frame after a replay
    /// may be shown for less than a full `delay`.
    pub fn play(&mut self) {
        self.finished = false;
        self.current_frame = 0;
        self.loops_left = self.loops;
    }

    /// Count down `dt` seconds and advance at most one frame.
    pub fn update(&mut self, dt: f32) {
        self.time_to_next_frame = (self.time_to_next_frame - dt).max(0.0);
        if self.time_to_next_frame > 0.0 {
            return;
        }

        let last = self.frames.len() - 1;
        if self.loops == 0 {
            self.current_frame = if self.current_frame == last {
                0
            } else {
                self.current_frame + 1
            };
            self.time_to_next_frame = self.delay;
            return;
        }

        // finished animations keep the countdown parked at zero
        if self.loops_left == 0 {
            return;
        }

        if self.current_frame == last {
            if self.loops_left > 1 {
                self.current_frame = 0;
            }
            self.loops_left -= 1;
            if self.loops_left == 0 {
                self.finished = true;
            }
        } else {
            self.current_frame += 1;
        }
        self.time_to_next_frame = self.delay;
    }
}

pub(crate) fn check_delay(name: &str, delay: f32) -> Result<()> {
    if delay.is_finite() && delay > 0.0 {
        Ok(())
    } else {
        Err(SpriteError::InvalidArgument(format!(
            "animation '{name}' needs a positive frame delay, got {delay}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::appearance::SpriteDef;

    fn frames(count: u32) -> Vec<Frame> {
        (0..count)
            .map(|n| {
                let appearance = SpriteDef::new()
                    .texture("sheet")
                    .source(n as i32 * 16, 0, 16, 16)
                    .into_appearance()
                    .unwrap();
                Frame::new(n, appearance)
            })
            .collect()
    }

    fn anim(count: u32, delay: f32, loops: u32) -> Animation {
        Animation::new("test", frames(count), delay, loops).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_frames() {
        let err = Animation::new("empty", Vec::new(), 1.0, 0).unwrap_err();
        assert!(matches!(err, SpriteError::InvalidArgument(_)));
    }

    #[test]
    fn test_new_rejects_non_positive_delay() {
        for delay in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = Animation::new("bad", frames(1), delay, 0).unwrap_err();
            assert!(matches!(err, SpriteError::InvalidArgument(_)), "{delay}");
        }
    }

    #[test]
    fn test_new_state() {
        let a = anim(3, 0.25, 2);
        assert_eq!(a.current_frame_index(), 0);
        assert_eq!(a.loops_left(), 2);
        assert_eq!(a.time_to_next_frame(), 0.25);
        assert!(!a.finished());
    }

    #[test]
    fn test_infinite_wraps_and_never_finishes() {
        let mut a = anim(3, 1.0, 0);
        a.play();
        let mut seen = vec![a.current_frame_index()];
        for _ in 0..4 {
            a.update(1.0);
            seen.push(a.current_frame_index());
            assert!(!a.finished());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_finite_plays_loops_then_freezes() {
        let mut a = anim(2, 1.0, 2);
        a.play();
        let mut seen = vec![(a.current_frame_index(), a.finished())];
        for _ in 0..4 {
            a.update(1.0);
            seen.push((a.current_frame_index(), a.finished()));
        }
        assert_eq!(
            seen,
            vec![(0, false), (1, false), (0, false), (1, false), (1, true)]
        );

        for _ in 0..5 {
            a.update(1.0);
            assert_eq!(a.current_frame_index(), 1);
            assert!(a.finished());
        }
        assert_eq!(a.loops_left(), 0);
    }

    #[test]
    fn test_single_loop_single_frame_finishes_on_first_expiry() {
        let mut a = anim(1, 0.5, 1);
        a.update(0.25);
        assert!(!a.finished());
        a.update(0.25);
        assert!(a.finished());
        assert_eq!(a.current_frame_index(), 0);
    }

    #[test]
    fn test_partial_ticks_accumulate() {
        let mut a = anim(3, 1.0, 0);
        a.update(0.4);
        a.update(0.4);
        assert_eq!(a.current_frame_index(), 0);
        a.update(0.4);
        assert_eq!(a.current_frame_index(), 1);
        assert_eq!(a.time_to_next_frame(), 1.0);
    }

    #[test]
    fn test_large_delta_advances_one_frame_only() {
        let mut a = anim(4, 0.1, 0);
        a.update(10.0);
        assert_eq!(a.current_frame_index(), 1);
        assert_eq!(a.time_to_next_frame(), 0.1);
    }

    #[test]
    fn test_zero_delta_does_not_advance() {
        let mut a = anim(2, 1.0, 0);
        a.update(0.0);
        assert_eq!(a.current_frame_index(), 0);
        assert_eq!(a.time_to_next_frame(), 1.0);
    }

    #[test]
    fn test_play_restarts_but_keeps_countdown() {
        let mut a = anim(3, 1.0, 1);
        a.update(1.0);
        a.update(0.75);
        assert_eq!(a.current_frame_index(), 1);
        a.play();
        assert_eq!(a.current_frame_index(), 0);
        assert_eq!(a.time_to_next_frame(), 0.25);
        a.update(0.25);
        assert_eq!(a.current_frame_index(), 1);
    }

    #[test]
    fn test_play_clears_finished() {
        let mut a = anim(1, 1.0, 1);
        a.update(1.0);
        assert!(a.finished());
        a.play();
        assert!(!a.finished());
        assert_eq!(a.loops_left(), 1);
        a.update(0.5);
        assert!(!a.finished());
        a.update(0.5);
        assert!(a.finished());
    }
}

//! Card hover transitions using iced_anim
//!
//! Only one card can be under the cursor at a time, so the tracker keeps
//! two transitions: the card being hovered (fading in) and the card the
//! cursor just left (fading out). Every other key reports zero progress.

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover transition duration
const HOVER_DURATION: Duration = Duration::from_millis(180);

fn easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// One keyed transition towards 0.0 or 1.0
#[derive(Debug)]
struct Fade<K> {
    key: K,
    value: Animated<f32>,
}

impl<K> Fade<K> {
    fn towards(key: K, from: f32, to: f32) -> Self {
        let mut value = Animated::transition(from, easing());
        value.update(to.into());
        Self { key, value }
    }

    fn progress(&self) -> f32 {
        *self.value.value()
    }

    fn settled_out(&self) -> bool {
        !self.value.is_animating() && self.progress() < 0.01
    }
}

/// Hover tracker for a collection of cards keyed by `K`
#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Hash + Clone> {
    entering: Option<Fade<K>>,
    leaving: Option<Fade<K>>,
}

impl<K: Eq + Hash + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self {
            entering: None,
            leaving: None,
        }
    }
}

impl<K: Eq + Hash + Clone> HoverAnimations<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the hover to `key`, or clear it with `None`
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.hovered() == key.as_ref() {
            return;
        }

        if let Some(previous) = self.entering.take() {
            let from = previous.progress();
            self.leaving = Some(Fade::towards(previous.key, from, 0.0));
        }

        self.entering = key.map(|key| {
            // Re-entering the card that is still fading out resumes from its current value
            let from = match &self.leaving {
                Some(fade) if fade.key == key => fade.progress(),
                _ => 0.0,
            };
            Fade::towards(key, from, 1.0)
        });

        if let (Some(entering), Some(leaving)) = (&self.entering, &self.leaving) {
            if entering.key == leaving.key {
                self.leaving = None;
            }
        }
    }

    /// The card currently under the cursor
    pub fn hovered(&self) -> Option<&K> {
        self.entering.as_ref().map(|fade| &fade.key)
    }

    /// Hover progress for `key` in `0.0..=1.0`
    pub fn progress(&self, key: &K) -> f32 {
        [&self.entering, &self.leaving]
            .into_iter()
            .flatten()
            .find(|fade| &fade.key == key)
            .map(Fade::progress)
            .unwrap_or(0.0)
            .clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        [&self.entering, &self.leaving]
            .into_iter()
            .flatten()
            .any(|fade| fade.value.is_animating())
    }

    /// Advance both transitions; drops the fade-out once it has finished
    pub fn tick(&mut self, now: Instant) {
        for fade in [&mut self.entering, &mut self.leaving].into_iter().flatten() {
            fade.value.tick(now);
        }
        if self.leaving.as_ref().is_some_and(Fade::settled_out) {
            self.leaving = None;
        }
    }
}

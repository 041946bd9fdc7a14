//! Entrance animations and the hero typing effect.
//!
//! Nothing in here touches the DOM: the section components feed visibility
//! fractions and timer ticks in, and render the CSS that comes out.

use std::fmt::Write;

/// One-shot "has this section been seen" latch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    threshold: f64,
    revealed: bool,
}

impl Reveal {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    /// Feed the currently visible fraction of the section.
    ///
    /// Returns `true` only for the observation that flips the latch.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.revealed {
            return false;
        }
        if visible_fraction > 0.0 && visible_fraction >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// A child's transition from its hidden pose to its resting pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            duration_ms: 800,
            delay_ms: 0,
        }
    }
}

impl Entrance {
    pub fn fade() -> Self {
        Self::default()
    }

    /// Rises into place from `px` below.
    pub fn fade_up(px: f64) -> Self {
        Self {
            y: px,
            ..Self::default()
        }
    }

    /// Slides in horizontally; negative values come from the left.
    pub fn slide_x(px: f64) -> Self {
        Self {
            x: px,
            ..Self::default()
        }
    }

    pub fn zoom(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn duration_ms(self, duration_ms: u32) -> Self {
        Self {
            duration_ms,
            ..self
        }
    }

    pub fn delay_ms(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// `base_ms + index * step_ms`, for lists that cascade in.
    pub fn stagger(self, base_ms: u32, step_ms: u32, index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_ms(base_ms.saturating_add(step_ms.saturating_mul(index)))
    }

    /// Inline style for the hidden pose or the resting pose.
    pub fn style(&self, revealed: bool) -> String {
        let mut css = String::with_capacity(160);
        if revealed {
            css.push_str("opacity:1;transform:none;");
        } else {
            let _ = write!(
                css,
                "opacity:0;transform:translate({}px,{}px) scale({});",
                self.x, self.y, self.scale
            );
        }
        let _ = write!(
            css,
            "transition:opacity {d}ms ease-out {l}ms,transform {d}ms ease-out {l}ms;",
            d = self.duration_ms,
            l = self.delay_ms
        );
        css
    }
}

/// Inline style for a bar that grows from zero to `percent` once revealed.
pub fn grow_width(percent: u8, revealed: bool, delay_ms: u32) -> String {
    let width = if revealed { percent.min(100) } else { 0 };
    format!("width:{width}%;transition:width 1500ms ease-out {delay_ms}ms;")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypePhase {
    Typing,
    Holding(u32),
    Deleting,
}

/// Types each word, holds it, deletes it, and moves on forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<&'static str>,
    word: usize,
    shown: usize,
    phase: TypePhase,
    hold_ticks: u32,
}

impl Typewriter {
    pub fn new(words: &[&'static str], hold_ticks: u32) -> Self {
        Self {
            words: words.to_vec(),
            word: 0,
            shown: 0,
            phase: TypePhase::Typing,
            hold_ticks,
        }
    }

    pub fn text(&self) -> &str {
        let Some(word) = self.words.get(self.word) else {
            return "";
        };
        match word.char_indices().nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    #[cfg(test)]
    pub fn word_index(&self) -> usize {
        self.word
    }

    pub fn tick(&mut self) {
        let Some(word) = self.words.get(self.word) else {
            return;
        };
        let len = word.chars().count();
        self.phase = match self.phase {
            TypePhase::Typing if self.shown < len => {
                self.shown += 1;
                if self.shown == len {
                    TypePhase::Holding(self.hold_ticks)
                } else {
                    TypePhase::Typing
                }
            }
            TypePhase::Typing => TypePhase::Holding(self.hold_ticks),
            TypePhase::Holding(0) => TypePhase::Deleting,
            TypePhase::Holding(n) => TypePhase::Holding(n - 1),
            TypePhase::Deleting if self.shown > 0 => {
                self.shown -= 1;
                TypePhase::Deleting
            }
            TypePhase::Deleting => {
                self.word = (self.word + 1) % self.words.len();
                TypePhase::Typing
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_shot() {
        let mut reveal = Reveal::new(0.2);
        assert!(!reveal.observe(0.0));
        assert!(!reveal.observe(0.19));
        assert!(!reveal.is_revealed());

        assert!(reveal.observe(0.25));
        assert!(reveal.is_revealed());

        // scrolled away and back again
        for fraction in [0.0, 0.5, 0.0, 1.0, 0.0] {
            assert!(!reveal.observe(fraction));
            assert!(reveal.is_revealed());
        }
    }

    #[test]
    fn test_reveal_visible_at_load() {
        // first observation arrives before any scroll
        let mut reveal = Reveal::new(0.1);
        assert!(reveal.observe(1.0));
    }

    #[test]
    fn test_reveal_zero_threshold_needs_some_visibility() {
        let mut reveal = Reveal::new(0.0);
        assert!(!reveal.observe(0.0));
        assert!(reveal.observe(0.01));
    }

    #[test]
    fn test_reveal_threshold_clamped() {
        assert_eq!(Reveal::new(3.0).threshold(), 1.0);
        assert_eq!(Reveal::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn test_entrance_styles() {
        let entrance = Entrance::fade_up(30.0).delay_ms(200);
        let hidden = entrance.style(false);
        assert!(hidden.starts_with("opacity:0;transform:translate(0px,30px) scale(1);"));
        assert!(hidden.contains("ease-out 200ms"));

        let shown = entrance.style(true);
        assert!(shown.starts_with("opacity:1;transform:none;"));
        assert!(shown.contains("opacity 800ms"));
    }

    #[test]
    fn test_entrance_stagger() {
        let e = Entrance::slide_x(-30.0).stagger(500, 100, 3);
        assert_eq!(e.delay_ms, 800);
        assert_eq!(e.x, -30.0);
        let e = Entrance::fade().stagger(u32::MAX, 100, 2);
        assert_eq!(e.delay_ms, u32::MAX);
    }

    #[test]
    fn test_grow_width() {
        assert!(grow_width(85, false, 300).starts_with("width:0%;"));
        assert!(grow_width(85, true, 300).starts_with("width:85%;"));
        assert!(grow_width(250, true, 0).starts_with("width:100%;"));
    }

    #[test]
    fn test_typewriter_cycle() {
        let mut tw = Typewriter::new(&["AB", "C"], 2);
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "A");
        tw.tick();
        assert_eq!(tw.text(), "AB");
        // hold for two ticks, then one more to start deleting
        for _ in 0..3 {
            tw.tick();
            assert_eq!(tw.text(), "AB");
        }
        tw.tick();
        assert_eq!(tw.text(), "A");
        tw.tick();
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.word_index(), 1);
        tw.tick();
        assert_eq!(tw.text(), "C");
    }

    #[test]
    fn test_typewriter_wraps_around() {
        let mut tw = Typewriter::new(&["X", "Y"], 0);
        let mut seen = Vec::new();
        for _ in 0..20 {
            tw.tick();
            seen.push(tw.word_index());
        }
        assert!(seen.contains(&0));
        assert!(seen.contains(&1));
        assert!(seen.windows(2).any(|w| w == [1, 0]));
    }

    #[test]
    fn test_typewriter_multibyte() {
        let mut tw = Typewriter::new(&["héllo"], 1);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn test_typewriter_empty() {
        let mut tw = Typewriter::new(&[], 1);
        tw.tick();
        assert_eq!(tw.text(), "");
    }
}

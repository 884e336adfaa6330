use std::ops::ControlFlow;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Reveals a fixed string one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    target: String,
    revealed: usize,
    len: usize,
}

impl Typewriter {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let len = target.chars().count();
        Self {
            target,
            revealed: 0,
            len,
        }
    }

    /// Reveals one more character. Breaks once the whole target is visible,
    /// and keeps breaking on every later call.
    pub fn tick(&mut self) -> ControlFlow<()> {
        if self.revealed < self.len {
            self.revealed += 1;
        }
        if self.is_done() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    pub fn text(&self) -> &str {
        let end = self
            .target
            .char_indices()
            .nth(self.revealed)
            .map(|(i, _)| i)
            .unwrap_or(self.target.len());
        &self.target[..end]
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_done(&self) -> bool {
        self.revealed == self.len
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorBlink {
    pub fn tick(&mut self) -> ControlFlow<()> {
        self.visible = !self.visible;
        ControlFlow::Continue(())
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

/// A background dot. Positions are percentages, timings are seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub delay: f64,
    pub duration: f64,
}

impl Dot {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            delay: rng.gen_range(0.0..3.0),
            duration: rng.gen_range(2.0..5.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; animation-delay: {:.3}s; animation-duration: {:.3}s",
            self.x, self.y, self.delay, self.duration
        )
    }
}

/// Scatters `count` dots, or none when the viewport was narrower than `min_viewport` at start.
pub fn scatter<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    viewport_width: Option<u32>,
    min_viewport: Option<u32>,
) -> Vec<Dot> {
    let too_narrow = match (viewport_width, min_viewport) {
        (Some(w), Some(min)) => w < min,
        _ => false,
    };
    if too_narrow {
        return Vec::new();
    }
    (0..count).map(|_| Dot::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    const TARGET: &str = "Jane Doe > Security";

    #[test]
    fn test_typewriter_prefixes() {
        let mut tw = Typewriter::new(TARGET);
        assert_eq!(tw.text(), "");
        for t in 1..TARGET.len() {
            assert_eq!(tw.tick(), ControlFlow::Continue(()));
            assert_eq!(tw.text(), &TARGET[..t]);
        }
        assert_eq!(tw.tick(), ControlFlow::Break(()));
        assert_eq!(tw.text(), TARGET);
    }

    #[test]
    fn test_typewriter_stays_done() {
        let mut tw = Typewriter::new(TARGET);
        for _ in 0..TARGET.len() * 3 {
            let _ = tw.tick();
        }
        assert!(tw.is_done());
        assert_eq!(tw.revealed(), TARGET.len());
        assert_eq!(tw.text(), TARGET);
        assert_eq!(tw.tick(), ControlFlow::Break(()));
    }

    #[test]
    fn test_typewriter_multibyte() {
        let mut tw = Typewriter::new("é→x");
        assert_eq!(tw.tick(), ControlFlow::Continue(()));
        assert_eq!(tw.text(), "é");
        assert_eq!(tw.tick(), ControlFlow::Continue(()));
        assert_eq!(tw.text(), "é→");
        assert_eq!(tw.tick(), ControlFlow::Break(()));
        assert_eq!(tw.text(), "é→x");
    }

    #[test]
    fn test_typewriter_empty_target() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_done());
        assert_eq!(tw.tick(), ControlFlow::Break(()));
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_cursor_parity() {
        let mut cursor = CursorBlink::default();
        let initial = cursor.visible();
        for n in 1..=10 {
            assert_eq!(cursor.tick(), ControlFlow::Continue(()));
            assert_eq!(cursor.visible(), if n % 2 == 0 { initial } else { !initial });
        }
    }

    #[test]
    fn test_scatter_seeded() {
        let a = scatter(&mut SmallRng::seed_from_u64(7), 50, Some(1280), None);
        let b = scatter(&mut SmallRng::seed_from_u64(7), 50, Some(1280), None);
        assert_eq!(a.len(), 50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scatter_ranges() {
        let dots = scatter(&mut SmallRng::seed_from_u64(1), 200, None, Some(768));
        assert_eq!(dots.len(), 200);
        for d in dots {
            assert!((0.0..100.0).contains(&d.x));
            assert!((0.0..100.0).contains(&d.y));
            assert!((0.0..3.0).contains(&d.delay));
            assert!((2.0..5.0).contains(&d.duration));
        }
    }

    #[test]
    fn test_scatter_below_breakpoint() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert!(scatter(&mut rng, 40, Some(500), Some(768)).is_empty());
        assert_eq!(scatter(&mut rng, 40, Some(768), Some(768)).len(), 40);
    }
}

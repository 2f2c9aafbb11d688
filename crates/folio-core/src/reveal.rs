//! One-shot reveal of sections as they scroll into view.

use crate::constants::REVEAL_VISIBLE_FRACTION;
use crate::section::{SectionId, ViewportProbe, SECTION_COUNT};
use smallvec::SmallVec;

pub type Revealed = SmallVec<[SectionId; SECTION_COUNT]>;

#[derive(Debug)]
pub struct RevealTracker {
    visible_fraction: f64,
    revealed: [bool; SECTION_COUNT],
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(REVEAL_VISIBLE_FRACTION)
    }
}

impl RevealTracker {
    pub fn new(visible_fraction: f64) -> Self {
        Self {
            visible_fraction: visible_fraction.clamp(0.0, 1.0),
            revealed: [false; SECTION_COUNT],
        }
    }

    #[inline]
    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed[id as usize]
    }

    #[inline]
    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }

    /// Mark sections that are now sufficiently on screen. Returns only the
    /// ones revealed by this call.
    pub fn update(&mut self, probe: &impl ViewportProbe) -> Revealed {
        let viewport_height = probe.viewport_height();
        let mut fresh = Revealed::new();
        for id in SectionId::ALL {
            if self.revealed[id as usize] {
                continue;
            }
            let Some(rect) = probe.section_rect(id) else {
                continue;
            };
            let height = rect.height();
            if height <= 0.0 {
                continue;
            }
            if rect.visible_height(viewport_height) / height >= self.visible_fraction {
                self.revealed[id as usize] = true;
                fresh.push(id);
            }
        }
        fresh
    }
}

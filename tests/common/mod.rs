// Fake DOM geometry shared by the host-side tests.

#![allow(dead_code)]
use folio_core::{SectionId, SectionRect, ViewportProbe, SECTION_COUNT};

#[derive(Clone, Debug)]
pub struct FakeProbe {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
    pub header: f64,
    pub rects: [Option<SectionRect>; SECTION_COUNT],
}

impl FakeProbe {
    pub fn desktop() -> Self {
        Self {
            scroll_y: 0.0,
            width: 1280.0,
            height: 800.0,
            header: 64.0,
            rects: [None; SECTION_COUNT],
        }
    }

    pub fn mobile() -> Self {
        Self {
            width: 375.0,
            height: 700.0,
            ..Self::desktop()
        }
    }

    /// Lay every section out back to back from document offset 0 with the
    /// given heights, then scroll to `scroll_y`.
    pub fn stacked(mut self, heights: [f64; SECTION_COUNT], scroll_y: f64) -> Self {
        let mut doc_top = 0.0;
        for (i, h) in heights.iter().enumerate() {
            let top = doc_top - scroll_y;
            self.rects[i] = Some(SectionRect::new(top, top + h));
            doc_top += h;
        }
        self.scroll_y = scroll_y;
        self
    }

    pub fn with_rect(mut self, id: SectionId, top: f64, bottom: f64) -> Self {
        self.rects[id as usize] = Some(SectionRect::new(top, bottom));
        self
    }

    pub fn without(mut self, id: SectionId) -> Self {
        self.rects[id as usize] = None;
        self
    }

    pub fn scrolled_to(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    pub fn with_header(mut self, header: f64) -> Self {
        self.header = header;
        self
    }
}

impl ViewportProbe for FakeProbe {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
    fn viewport_width(&self) -> f64 {
        self.width
    }
    fn viewport_height(&self) -> f64 {
        self.height
    }
    fn section_rect(&self, id: SectionId) -> Option<SectionRect> {
        self.rects[id as usize]
    }
    fn header_height(&self) -> f64 {
        self.header
    }
}

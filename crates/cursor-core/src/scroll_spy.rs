use crate::constants::{SCROLL_SPY_OFFSET, SCROLL_SPY_TOP_THRESHOLD};

/// A page section and its document offset; `None` if the element is missing.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub offset_top: Option<f32>,
}

impl Section {
    pub fn new(id: impl Into<String>, offset_top: Option<f32>) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

/// Tracks which section the reader is currently in.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpy {
    pub offset: f32,
    pub top_threshold: f32,
    active: Option<String>,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(SCROLL_SPY_OFFSET)
    }
}

impl ScrollSpy {
    pub fn new(offset: f32) -> Self {
        Self {
            offset,
            top_threshold: SCROLL_SPY_TOP_THRESHOLD,
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Forget the active section, returning it.
    pub fn reset(&mut self) -> Option<String> {
        self.active.take()
    }

    /// Recompute the active section. Returns true if it changed.
    pub fn update(&mut self, sections: &[Section], scroll_y: f32) -> bool {
        let marker = scroll_y + self.offset;
        if sections.is_empty() && marker < self.top_threshold {
            // near the top with nothing to point at: no active section
            return self.active.take().is_some();
        }
        let hit = sections
            .iter()
            .rev()
            .find(|s| s.offset_top.is_some_and(|top| marker >= top))
            .or_else(|| {
                if marker < self.top_threshold {
                    sections.first()
                } else {
                    None
                }
            });
        match hit {
            Some(s) if self.active.as_deref() != Some(s.id.as_str()) => {
                self.active = Some(s.id.clone());
                true
            }
            _ => false,
        }
    }
}

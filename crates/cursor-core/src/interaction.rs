//! Hover/press state for the cursor follower.

use crate::constants::{INTERACTIVE_CLASSES, INTERACTIVE_TAGS};
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovering,
    Pressing,
}

impl InteractionState {
    /// Column used by per-state appearance tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            InteractionState::Idle => 0,
            InteractionState::Hovering => 1,
            InteractionState::Pressing => 2,
        }
    }
}

/// Raw input delivered to the animator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { x: f32, y: f32 },
    /// Pointer entered an element; `interactive` is the matcher's verdict.
    Enter { interactive: bool },
    Leave,
    Down,
    Up,
}

/// Tracks the hover and press flags and resolves them to one state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionMachine {
    hovering: bool,
    pressing: bool,
}

impl InteractionMachine {
    pub fn state(&self) -> InteractionState {
        if self.pressing {
            InteractionState::Pressing
        } else if self.hovering {
            InteractionState::Hovering
        } else {
            InteractionState::Idle
        }
    }

    pub fn pointer_enter(&mut self, interactive: bool) {
        if interactive {
            self.hovering = true;
        }
    }

    // Leaving any element clears hover; moving onto a child of an interactive
    // element re-enters through the ancestor check.
    pub fn pointer_leave(&mut self) {
        self.hovering = false;
    }

    pub fn pointer_down(&mut self) {
        self.pressing = true;
    }

    pub fn pointer_up(&mut self) {
        self.pressing = false;
    }

    /// Apply a non-move event and return the resulting state.
    pub fn apply(&mut self, event: PointerEvent) -> InteractionState {
        match event {
            PointerEvent::Enter { interactive } => self.pointer_enter(interactive),
            PointerEvent::Leave => self.pointer_leave(),
            PointerEvent::Down => self.pointer_down(),
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Move { .. } => {}
        }
        self.state()
    }
}

/// Minimal view of a DOM-like node used by [`InteractiveMatcher`].
pub trait ElementLike: Sized {
    /// Upper-case tag name, e.g. `"A"`.
    fn tag_name(&self) -> String;
    fn has_class(&self, class: &str) -> bool;
    fn parent(&self) -> Option<Self>;
}

/// Decides whether an element counts as interactive for hover purposes.
#[derive(Clone, Debug)]
pub struct InteractiveMatcher {
    tags: FnvHashSet<String>,
    classes: FnvHashSet<String>,
}

impl Default for InteractiveMatcher {
    fn default() -> Self {
        Self::new(INTERACTIVE_TAGS, INTERACTIVE_CLASSES)
    }
}

impl InteractiveMatcher {
    pub fn new<T, C>(tags: T, classes: C) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|t| t.as_ref().to_ascii_uppercase())
                .collect(),
            classes: classes.into_iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    fn matches_self<E: ElementLike>(&self, el: &E) -> bool {
        self.tags.contains(&el.tag_name().to_ascii_uppercase())
            || self.classes.iter().any(|c| el.has_class(c))
    }

    /// True if `el` or any of its ancestors matches.
    pub fn is_interactive<E: ElementLike>(&self, el: &E) -> bool {
        if self.matches_self(el) {
            return true;
        }
        let mut cur = el.parent();
        while let Some(node) = cur {
            if self.matches_self(&node) {
                return true;
            }
            cur = node.parent();
        }
        false
    }
}

// Visibility reveal decisions. The observer wiring feeds visible fractions
// in; this gate owns the per-slot revealed flags and answers what to do.

/// Visible-fraction threshold and whether each slot reveals only once.
#[derive(Clone, Copy, Debug)]
pub struct RevealOptions {
    pub threshold: f32,
    pub animate_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            animate_once: true,
        }
    }
}

/// What the wiring should do in response to a visibility sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Leave the element as it is.
    Ignore,
    /// Transition the element in; with `stop_observing`, no further samples
    /// for this slot are wanted.
    Reveal { stop_observing: bool },
}

/// Tracks the revealed flag for a set of observed slots.
pub struct RevealGate {
    options: RevealOptions,
    revealed: Vec<bool>,
}

impl RevealGate {
    pub fn new(slots: usize, options: RevealOptions) -> Self {
        Self {
            options,
            revealed: vec![false; slots],
        }
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    pub fn is_revealed(&self, slot: usize) -> bool {
        self.revealed.get(slot).copied().unwrap_or(false)
    }

    /// Decide on a visibility sample for `slot`; `visible_fraction` is the
    /// portion of the element currently inside the viewport.
    pub fn on_visibility(&mut self, slot: usize, visible_fraction: f32) -> RevealAction {
        let Some(flag) = self.revealed.get_mut(slot) else {
            return RevealAction::Ignore;
        };
        if visible_fraction < self.options.threshold {
            return RevealAction::Ignore;
        }
        if *flag && self.options.animate_once {
            return RevealAction::Ignore;
        }
        *flag = true;
        RevealAction::Reveal {
            stop_observing: self.options.animate_once,
        }
    }
}

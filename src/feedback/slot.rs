/// Tracks the single active effect owned by one request predicate.
///
/// An effect is (re)started only when the derived request changes to a
/// new distinct value; re-deriving an equal request is a no-op.
#[derive(Debug)]
pub struct EffectSlot<R> {
    active: Option<R>,
}

/// Outcome of feeding a freshly derived request into an [`EffectSlot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotChange<R> {
    /// A new request became active; the previous effect, if any, is superseded.
    Start(R),
    /// The predicate stopped yielding a request.
    Stop,
    Unchanged,
}

impl<R: PartialEq + Clone> EffectSlot<R> {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn active(&self) -> Option<&R> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn update(&mut self, request: Option<R>) -> SlotChange<R> {
        if self.active == request {
            return SlotChange::Unchanged;
        }
        self.active = request.clone();
        match request {
            Some(request) => SlotChange::Start(request),
            None => SlotChange::Stop,
        }
    }
}

impl<R: PartialEq + Clone> Default for EffectSlot<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-slot row selection (radio semantics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<Id> {
    current: Option<Id>,
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<Id: PartialEq> Selection<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, replacing any previous selection.
    pub fn select(&mut self, id: Id) {
        self.current = Some(id);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_selected(&self, id: &Id) -> bool {
        self.current.as_ref() == Some(id)
    }

    pub fn current(&self) -> Option<&Id> {
        self.current.as_ref()
    }

    /// Clear the slot when the held id fails `keep`. Returns true if cleared.
    pub fn retain_if(&mut self, keep: impl FnOnce(&Id) -> bool) -> bool {
        let clear = self.current.as_ref().is_some_and(|id| !keep(id));
        if clear {
            self.current = None;
        }
        clear
    }
}

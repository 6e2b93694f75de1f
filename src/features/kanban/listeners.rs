/// Listener handles acquired by one `attach`.
///
/// Handles release their listener when dropped, so clearing the registry is
/// the whole of detaching.
pub struct ListenerRegistry<L> {
    handles: Vec<L>,
}

impl<L> Default for ListenerRegistry<L> {
    fn default() -> Self {
        Self { handles: Vec::new() }
    }
}

impl<L> ListenerRegistry<L> {
    pub fn push(&mut self, handle: L) {
        self.handles.push(handle);
    }

    /// Releases every handle; returns how many there were.
    pub fn release(&mut self) -> usize {
        let released = self.handles.len();
        self.handles.clear();
        released
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

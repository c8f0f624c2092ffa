use super::Event;

/// Stable identity of a registered event.
///
/// Positions shift when earlier events are removed; ids do not. Ids increase in
/// registration order, so the entry list stays sorted by id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct EventId(u64);

#[derive(Debug)]
struct Entry {
    id: EventId,
    event: Event,
    active: bool,
}

/// Ordered event list. Insertion order is evaluation order.
///
/// Index-based accessors never panic: an out-of-range index reads as `None` and
/// removes nothing.
#[derive(Debug, Default)]
pub struct EventRegistry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            event,
            active: false,
        });
        id
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.entries.get(index).map(|e| &e.event)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.entries.iter().map(|e| &e.event)
    }

    pub fn remove(&mut self, index: usize) -> Option<Event> {
        if index < self.entries.len() {
            Some(self.entries.remove(index).event)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies the current order for one evaluation pass.
    pub fn snapshot(&self) -> Vec<(EventId, Event)> {
        self.entries
            .iter()
            .map(|e| (e.id, e.event.clone()))
            .collect()
    }

    /// Whether the event fired and stayed satisfied. `None` once it is removed.
    pub fn is_active(&self, id: EventId) -> Option<bool> {
        self.entry(id).map(|e| e.active)
    }

    /// Updates the flag of a still-registered event.
    pub fn set_active(&mut self, id: EventId, active: bool) {
        if let Some(slot) = self.slot(id) {
            self.entries[slot].active = active;
        }
    }

    fn entry(&self, id: EventId) -> Option<&Entry> {
        self.slot(id).map(|slot| &self.entries[slot])
    }

    fn slot(&self, id: EventId) -> Option<usize> {
        self.entries.binary_search_by_key(&id, |e| e.id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Event {
        Event::new(|| false, || {})
    }

    #[test]
    fn push_starts_inactive() {
        let mut reg = EventRegistry::new();
        let id = reg.push(noop());
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.is_active(id), Some(false));
    }

    #[test]
    fn out_of_range_is_absorbed() {
        let mut reg = EventRegistry::new();
        reg.push(noop());

        assert!(reg.get(1).is_none());
        assert!(reg.remove(5).is_none());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn ids_survive_index_shifts() {
        let mut reg = EventRegistry::new();
        let a = reg.push(noop());
        let b = reg.push(noop().run_while(true));
        reg.set_active(b, true);

        reg.remove(0);
        assert_eq!(reg.is_active(a), None);
        assert_eq!(reg.is_active(b), Some(true));
        assert!(reg.get(0).is_some_and(Event::runs_while));
    }

    #[test]
    fn set_active_ignores_removed_events() {
        let mut reg = EventRegistry::new();
        let id = reg.push(noop());
        reg.clear();
        reg.set_active(id, true);
        assert!(reg.is_empty());
    }

    #[test]
    fn lookup_after_interleaved_removals() {
        let mut reg = EventRegistry::new();
        let ids: Vec<_> = (0..8).map(|_| reg.push(noop())).collect();
        reg.remove(6);
        reg.remove(3);
        reg.remove(0);
        let late = reg.push(noop());

        for (n, id) in ids.iter().enumerate() {
            let expected = if [0, 3, 6].contains(&n) { None } else { Some(false) };
            assert_eq!(reg.is_active(*id), expected);
        }

        reg.set_active(ids[5], true);
        reg.set_active(late, true);
        assert_eq!(reg.is_active(ids[5]), Some(true));
        assert_eq!(reg.is_active(ids[4]), Some(false));
        assert_eq!(reg.is_active(late), Some(true));
    }

    #[test]
    fn snapshot_keeps_order() {
        let mut reg = EventRegistry::new();
        let a = reg.push(noop());
        let b = reg.push(noop());
        let ids: Vec<_> = reg.snapshot().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
    }
}

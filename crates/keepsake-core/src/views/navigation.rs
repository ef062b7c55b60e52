//! Position of the open memory within the filtered sequence.
//!
//! The viewer steps through whatever the current filter shows. Stepping
//! stops at both ends instead of wrapping.

use keepsake_models::{Memory, MemoryId};

/// Where the selected memory sits in the visible sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerPosition {
    pub index: usize,
    pub total: usize,
}

impl ViewerPosition {
    /// Locates `selected` in `visible`. Returns `None` if it is not shown.
    pub fn locate(visible: &[&Memory], selected: &MemoryId) -> Option<Self> {
        visible
            .iter()
            .position(|m| &m.id == selected)
            .map(|index| Self {
                index,
                total: visible.len(),
            })
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total
    }

    /// Id of the memory after the selected one, if any.
    pub fn next_id(&self, visible: &[&Memory]) -> Option<MemoryId> {
        if !self.has_next() {
            return None;
        }
        visible.get(self.index + 1).map(|m| m.id.clone())
    }

    /// Id of the memory before the selected one, if any.
    pub fn previous_id(&self, visible: &[&Memory]) -> Option<MemoryId> {
        if !self.has_previous() {
            return None;
        }
        visible.get(self.index - 1).map(|m| m.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn memories() -> Vec<Memory> {
        let date = Utc.with_ymd_and_hms(2020, 6, 12, 0, 0, 0).unwrap();
        ["a", "b", "c"]
            .iter()
            .map(|id| Memory::builder(*id, *id, date).build())
            .collect()
    }

    #[test]
    fn test_middle() {
        let all = memories();
        let visible: Vec<&Memory> = all.iter().collect();
        let pos = ViewerPosition::locate(&visible, &"b".into()).unwrap();

        assert_eq!(pos.index, 1);
        assert!(pos.has_next());
        assert!(pos.has_previous());
        assert_eq!(pos.next_id(&visible), Some(MemoryId::from("c")));
        assert_eq!(pos.previous_id(&visible), Some(MemoryId::from("a")));
    }

    #[test]
    fn test_no_wrap_at_ends() {
        let all = memories();
        let visible: Vec<&Memory> = all.iter().collect();

        let first = ViewerPosition::locate(&visible, &"a".into()).unwrap();
        assert!(!first.has_previous());
        assert_eq!(first.previous_id(&visible), None);

        let last = ViewerPosition::locate(&visible, &"c".into()).unwrap();
        assert!(!last.has_next());
        assert_eq!(last.next_id(&visible), None);
    }

    #[test]
    fn test_hidden_selection() {
        let all = memories();
        let visible: Vec<&Memory> = all.iter().take(1).collect();
        assert!(ViewerPosition::locate(&visible, &"c".into()).is_none());
    }
}

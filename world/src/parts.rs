//! Installed-part registry and the fastening state machine.

use std::collections::BTreeMap;

use pc_workshop_core::{ItemId, PartId, PartKind, ZoneId, FASTENER_COUNT};

/// State of a part installed into a chassis zone.
#[derive(Clone, Debug)]
pub(crate) struct PartState {
    pub(crate) id: PartId,
    pub(crate) item: ItemId,
    pub(crate) kind: PartKind,
    pub(crate) zone: ZoneId,
    pub(crate) fasteners: [bool; FASTENER_COUNT],
    announced: bool,
}

impl PartState {
    /// Reports whether every fastening point is tight.
    pub(crate) fn secured(&self) -> bool {
        self.fasteners.iter().all(|tight| *tight)
    }
}

/// Result of a single tightening attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TightenOutcome {
    /// The point transitioned from loose to tight.
    Tightened,
    /// The point transitioned and it was the last loose one; the part is
    /// now fully installed and the completion announcement is due.
    Completed,
    /// The point was already tight; nothing changed.
    AlreadyTight,
    /// The index does not address a fastening point.
    OutOfRange,
}

/// Registry that stores installed parts and manages identifier allocation.
#[derive(Debug, Default)]
pub(crate) struct PartRegistry {
    entries: BTreeMap<PartId, PartState>,
    next_part_id: u32,
}

impl PartRegistry {
    /// Installs a part with every fastening point loose.
    pub(crate) fn insert_loose(&mut self, item: ItemId, kind: PartKind, zone: ZoneId) -> PartId {
        self.insert(item, kind, zone, [false; FASTENER_COUNT], false)
    }

    /// Installs a part directly in the fully-fastened state.
    ///
    /// Used when reconstructing from a save; the completion announcement is
    /// marked as already spent so it never fires again.
    pub(crate) fn insert_secured(&mut self, item: ItemId, kind: PartKind, zone: ZoneId) -> PartId {
        self.insert(item, kind, zone, [true; FASTENER_COUNT], true)
    }

    fn insert(
        &mut self,
        item: ItemId,
        kind: PartKind,
        zone: ZoneId,
        fasteners: [bool; FASTENER_COUNT],
        announced: bool,
    ) -> PartId {
        let id = PartId::new(self.next_part_id);
        self.next_part_id = self.next_part_id.wrapping_add(1);
        let _ = self.entries.insert(
            id,
            PartState {
                id,
                item,
                kind,
                zone,
                fasteners,
                announced,
            },
        );
        id
    }

    /// Attempts to tighten one fastening point of a part.
    ///
    /// Returns `None` when the part id is unknown. Tightening is one-way:
    /// a tight point never loosens, and re-tightening reports
    /// [`TightenOutcome::AlreadyTight`] without touching the state.
    pub(crate) fn tighten(&mut self, part: PartId, fastener: usize) -> Option<TightenOutcome> {
        let state = self.entries.get_mut(&part)?;
        if fastener >= FASTENER_COUNT {
            return Some(TightenOutcome::OutOfRange);
        }
        if state.fasteners[fastener] {
            return Some(TightenOutcome::AlreadyTight);
        }

        state.fasteners[fastener] = true;
        if state.secured() && !state.announced {
            state.announced = true;
            return Some(TightenOutcome::Completed);
        }
        Some(TightenOutcome::Tightened)
    }

    /// Iterator over installed parts in identifier order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &PartState> {
        self.entries.values()
    }

    /// Destroys every installed part at once.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tightening_every_point_completes_exactly_once() {
        let mut registry = PartRegistry::default();
        let part = registry.insert_loose(ItemId::new("cpu1"), PartKind::Cpu, ZoneId::new(0));

        assert_eq!(registry.tighten(part, 0), Some(TightenOutcome::Tightened));
        assert_eq!(registry.tighten(part, 1), Some(TightenOutcome::Tightened));
        assert_eq!(registry.tighten(part, 2), Some(TightenOutcome::Tightened));
        assert_eq!(registry.tighten(part, 3), Some(TightenOutcome::Completed));
        assert_eq!(registry.tighten(part, 3), Some(TightenOutcome::AlreadyTight));
    }

    #[test]
    fn re_tightening_never_reports_completion_again() {
        let mut registry = PartRegistry::default();
        let part = registry.insert_loose(ItemId::new("ram1"), PartKind::Ram, ZoneId::new(1));
        for fastener in 0..FASTENER_COUNT {
            let _ = registry.tighten(part, fastener);
        }

        for fastener in 0..FASTENER_COUNT {
            assert_eq!(
                registry.tighten(part, fastener),
                Some(TightenOutcome::AlreadyTight)
            );
        }
    }

    #[test]
    fn secured_parts_restore_without_pending_announcement() {
        let mut registry = PartRegistry::default();
        let part = registry.insert_secured(ItemId::new("gpu1"), PartKind::Gpu, ZoneId::new(2));

        let state = registry.iter().find(|state| state.id == part).expect("part exists");
        assert!(state.secured());
        assert_eq!(registry.tighten(part, 0), Some(TightenOutcome::AlreadyTight));
    }

    #[test]
    fn out_of_range_fastener_is_reported_without_mutation() {
        let mut registry = PartRegistry::default();
        let part = registry.insert_loose(ItemId::new("hdd1"), PartKind::Hdd, ZoneId::new(3));

        assert_eq!(
            registry.tighten(part, FASTENER_COUNT),
            Some(TightenOutcome::OutOfRange)
        );
        let state = registry.iter().next().expect("part exists");
        assert!(!state.secured());
    }

    #[test]
    fn unknown_part_yields_none() {
        let mut registry = PartRegistry::default();
        assert_eq!(registry.tighten(PartId::new(9), 0), None);
    }

    #[test]
    fn identifiers_allocate_in_insertion_order() {
        let mut registry = PartRegistry::default();
        let first = registry.insert_loose(ItemId::new("cpu1"), PartKind::Cpu, ZoneId::new(0));
        let second = registry.insert_loose(ItemId::new("ram1"), PartKind::Ram, ZoneId::new(1));

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }
}

//! Zone board and placement resolution for the active chassis.

use pc_workshop_core::{ChassisLayout, ChassisTransform, PartKind, WorldPoint, ZoneId, ZoneRect};

/// Mutable zone state held inside the workshop.
#[derive(Clone, Debug)]
pub(crate) struct Zone {
    pub(crate) id: ZoneId,
    pub(crate) kind: PartKind,
    pub(crate) rect: ZoneRect,
    pub(crate) occupied: bool,
}

/// Registration-ordered collection of zones plus the chassis transform.
#[derive(Clone, Debug)]
pub(crate) struct ZoneBoard {
    transform: ChassisTransform,
    zones: Vec<Zone>,
}

impl ZoneBoard {
    /// Builds the board from a chassis layout, allocating zone identities
    /// in registration order.
    pub(crate) fn from_layout(layout: &ChassisLayout) -> Self {
        let zones = layout
            .zones()
            .iter()
            .enumerate()
            .map(|(index, spec)| Zone {
                id: ZoneId::new(index as u32),
                kind: spec.kind,
                rect: spec.rect,
                occupied: false,
            })
            .collect();
        Self {
            transform: layout.transform(),
            zones,
        }
    }

    /// Resolves the unique eligible zone for a drop.
    ///
    /// The world point is converted into chassis-local space first; a zone
    /// qualifies when its accepted kind matches, it is unoccupied, and the
    /// local point lies inside its rectangle. The first qualifying zone in
    /// registration order wins.
    pub(crate) fn resolve(&self, at: WorldPoint, kind: PartKind) -> Option<ZoneId> {
        let local = self.transform.to_local(at);
        self.zones
            .iter()
            .find(|zone| zone.kind == kind && !zone.occupied && zone.rect.contains(local))
            .map(|zone| zone.id)
    }

    /// Returns the first unoccupied zone accepting the provided kind.
    ///
    /// Used when rebuilding placements from a save, where no drop point
    /// exists.
    pub(crate) fn first_free(&self, kind: PartKind) -> Option<ZoneId> {
        self.zones
            .iter()
            .find(|zone| zone.kind == kind && !zone.occupied)
            .map(|zone| zone.id)
    }

    /// Marks the zone as occupied.
    pub(crate) fn occupy(&mut self, id: ZoneId) {
        if let Some(zone) = self.zones.iter_mut().find(|zone| zone.id == id) {
            zone.occupied = true;
        }
    }

    /// Frees every zone at once, as happens when the build is sold.
    pub(crate) fn clear_all(&mut self) {
        for zone in &mut self.zones {
            zone.occupied = false;
        }
    }

    /// Zones in registration order.
    pub(crate) fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Transform applied to the chassis within the world.
    pub(crate) fn transform(&self) -> ChassisTransform {
        self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_workshop_core::{ChassisTransform, ZoneSpec};

    fn board_with(zones: Vec<ZoneSpec>) -> ZoneBoard {
        let layout = ChassisLayout::new(
            ChassisTransform::new(WorldPoint::new(100.0, 100.0), 1.0),
            zones,
        );
        ZoneBoard::from_layout(&layout)
    }

    #[test]
    fn resolve_matches_kind_occupancy_and_bounds() {
        let mut board = board_with(vec![
            ZoneSpec::new(PartKind::Cpu, ZoneRect::new(0.0, 0.0, 50.0, 50.0)),
            ZoneSpec::new(PartKind::Ram, ZoneRect::new(100.0, 0.0, 50.0, 50.0)),
        ]);
        let inside_cpu = WorldPoint::new(110.0, 90.0);

        assert_eq!(board.resolve(inside_cpu, PartKind::Cpu), Some(ZoneId::new(0)));
        assert_eq!(board.resolve(inside_cpu, PartKind::Ram), None);
        assert_eq!(board.resolve(WorldPoint::new(300.0, 100.0), PartKind::Cpu), None);

        board.occupy(ZoneId::new(0));
        assert_eq!(board.resolve(inside_cpu, PartKind::Cpu), None);
    }

    #[test]
    fn resolve_prefers_first_registered_zone_on_overlap() {
        let board = board_with(vec![
            ZoneSpec::new(PartKind::Gpu, ZoneRect::new(0.0, 0.0, 60.0, 60.0)),
            ZoneSpec::new(PartKind::Gpu, ZoneRect::new(0.0, 0.0, 60.0, 60.0)),
        ]);

        assert_eq!(
            board.resolve(WorldPoint::new(100.0, 100.0), PartKind::Gpu),
            Some(ZoneId::new(0))
        );
    }

    #[test]
    fn resolve_honours_the_chassis_transform() {
        let layout = ChassisLayout::new(
            ChassisTransform::new(WorldPoint::new(200.0, 0.0), 2.0),
            vec![ZoneSpec::new(PartKind::Hdd, ZoneRect::new(10.0, 10.0, 20.0, 20.0))],
        );
        let board = ZoneBoard::from_layout(&layout);

        // Local (10, 10) scaled by 2 and offset by (200, 0).
        assert_eq!(
            board.resolve(WorldPoint::new(220.0, 20.0), PartKind::Hdd),
            Some(ZoneId::new(0))
        );
        assert_eq!(board.resolve(WorldPoint::new(10.0, 10.0), PartKind::Hdd), None);
    }

    #[test]
    fn clear_all_frees_every_zone() {
        let mut board = board_with(vec![
            ZoneSpec::new(PartKind::Cpu, ZoneRect::new(0.0, 0.0, 50.0, 50.0)),
            ZoneSpec::new(PartKind::Ram, ZoneRect::new(100.0, 0.0, 50.0, 50.0)),
        ]);
        board.occupy(ZoneId::new(0));
        board.occupy(ZoneId::new(1));

        board.clear_all();

        assert!(board.zones().iter().all(|zone| !zone.occupied));
    }

    #[test]
    fn first_free_skips_occupied_zones_of_the_kind() {
        let mut board = board_with(vec![
            ZoneSpec::new(PartKind::Ram, ZoneRect::new(0.0, 0.0, 40.0, 120.0)),
            ZoneSpec::new(PartKind::Ram, ZoneRect::new(60.0, 0.0, 40.0, 120.0)),
        ]);
        board.occupy(ZoneId::new(0));

        assert_eq!(board.first_free(PartKind::Ram), Some(ZoneId::new(1)));
        assert_eq!(board.first_free(PartKind::Cpu), None);
    }
}

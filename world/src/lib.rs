#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative game-state management for PC Workshop.
//!
//! The [`Workshop`] owns the single source of truth: balance, owned items,
//! placements, and the active order, together with the per-session
//! projections derived from them (zones and installed parts). Adapters
//! submit [`Command`] values through [`apply`]; every command executes
//! synchronously and atomically, writes the new state through to the save
//! store, and then broadcasts [`Event`] values for systems and presentation
//! layers to consume in emission order.

mod chassis;
mod orders;
mod parts;
mod rules;
mod save;

pub use save::{FileStore, MemoryStore, SaveData, SaveError, SaveStore, SAVE_KEY, STARTING_MONEY};

use std::collections::BTreeMap;

use pc_workshop_core::{
    Catalog, ChassisLayout, Command, Event, ItemId, Order, PartId, PartKind, PlacementError,
    PlacementRecord, PurchaseError, SaleError, StateSnapshot, WorldPoint,
};

use chassis::ZoneBoard;
use orders::OrderDesk;
use parts::{PartRegistry, TightenOutcome};

const ORDER_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Represents the authoritative PC Workshop game state.
#[derive(Debug)]
pub struct Workshop {
    catalog: Catalog,
    board: ZoneBoard,
    parts: PartRegistry,
    money: u32,
    owned: Vec<ItemId>,
    placements: BTreeMap<ItemId, PartKind>,
    order: Option<Order>,
    desk: OrderDesk,
    store: Box<dyn SaveStore>,
}

impl Workshop {
    /// Creates a workshop from the catalog, chassis layout, and save store.
    ///
    /// The previous session is restored from the store when a snapshot
    /// exists; a missing or unreadable snapshot falls back to a fresh
    /// session. When no order survives the restore a new one is generated
    /// immediately, so callers always observe an active order.
    #[must_use]
    pub fn new(catalog: Catalog, layout: &ChassisLayout, store: Box<dyn SaveStore>) -> Self {
        Self::with_order_seed(catalog, layout, store, ORDER_SEED)
    }

    /// Creates a workshop whose order generation uses the provided seed.
    #[must_use]
    pub fn with_order_seed(
        catalog: Catalog,
        layout: &ChassisLayout,
        mut store: Box<dyn SaveStore>,
        seed: u64,
    ) -> Self {
        let loaded = match store.load() {
            Ok(loaded) => loaded,
            Err(error) => {
                log::warn!("save store unreadable, starting a fresh session: {error}");
                None
            }
        };
        let data = loaded.unwrap_or_default();

        let mut workshop = Self {
            catalog,
            board: ZoneBoard::from_layout(layout),
            parts: PartRegistry::default(),
            money: data.money,
            owned: data.inventory,
            placements: BTreeMap::new(),
            order: data.current_order,
            desk: OrderDesk::new(seed),
            store,
        };
        workshop.restore_placements(data.installed_parts);
        if workshop.order.is_none() {
            workshop.order = Some(workshop.desk.draft());
            workshop.persist();
        }
        workshop
    }

    /// Rebuilds the chassis projection from saved placement records.
    ///
    /// Parts restore directly in the fully-fastened state and never re-fire
    /// their completion announcement. Records that no longer make sense
    /// (unknown catalog item, unowned item, no free zone of the kind) are
    /// skipped so one stale entry cannot abort the whole restore.
    fn restore_placements(&mut self, records: Vec<PlacementRecord>) {
        for record in records {
            if self.catalog.get(&record.item).is_none() {
                log::warn!(
                    "skipping saved placement for unknown catalog item '{}'",
                    record.item.as_str()
                );
                continue;
            }
            if !self.owned.contains(&record.item) {
                log::warn!(
                    "skipping saved placement for unowned item '{}'",
                    record.item.as_str()
                );
                continue;
            }
            if self.placements.contains_key(&record.item) {
                continue;
            }
            let Some(zone) = self.board.first_free(record.kind) else {
                log::warn!(
                    "skipping saved placement for '{}': no free {} zone",
                    record.item.as_str(),
                    record.kind.as_str()
                );
                continue;
            };
            self.board.occupy(zone);
            let _ = self
                .parts
                .insert_secured(record.item.clone(), record.kind, zone);
            let _ = self.placements.insert(record.item, record.kind);
        }
    }

    fn buy_item(&mut self, item: ItemId, out_events: &mut Vec<Event>) {
        let Some(price) = self.catalog.get(&item).map(|definition| definition.price) else {
            out_events.push(Event::PurchaseRejected {
                item,
                reason: PurchaseError::UnknownItem,
            });
            return;
        };
        if self.owned.contains(&item) {
            out_events.push(Event::PurchaseRejected {
                item,
                reason: PurchaseError::AlreadyOwned,
            });
            return;
        }
        if self.money < price {
            out_events.push(Event::PurchaseRejected {
                item,
                reason: PurchaseError::InsufficientFunds,
            });
            return;
        }

        self.money -= price;
        self.owned.push(item.clone());
        self.persist();
        out_events.push(Event::ItemPurchased { item, price });
        out_events.push(Event::StateChanged {
            snapshot: self.snapshot(),
        });
    }

    fn place_item(&mut self, item: ItemId, at: WorldPoint, out_events: &mut Vec<Event>) {
        let Some(kind) = self.catalog.get(&item).map(|definition| definition.kind) else {
            out_events.push(Event::PlacementRejected {
                item,
                reason: PlacementError::UnknownItem,
            });
            return;
        };
        if !self.owned.contains(&item) {
            out_events.push(Event::PlacementRejected {
                item,
                reason: PlacementError::NotOwned,
            });
            return;
        }
        if self.placements.contains_key(&item) {
            // Already recorded; duplicate bookkeeping is a silent no-op.
            return;
        }
        let Some(zone) = self.board.resolve(at, kind) else {
            out_events.push(Event::PlacementRejected {
                item,
                reason: PlacementError::NoEligibleZone,
            });
            return;
        };

        self.board.occupy(zone);
        let part = self.parts.insert_loose(item.clone(), kind, zone);
        let _ = self.placements.insert(item.clone(), kind);
        self.persist();
        out_events.push(Event::ItemInstalled { part, item, zone });
        out_events.push(Event::StateChanged {
            snapshot: self.snapshot(),
        });
    }

    /// Fastening mutates only the session projection; the persisted
    /// snapshot carries no tightness, so no write-through happens here.
    fn tighten_fastener(&mut self, part: PartId, fastener: usize, out_events: &mut Vec<Event>) {
        match self.parts.tighten(part, fastener) {
            Some(TightenOutcome::Tightened) => {
                out_events.push(Event::FastenerTightened { part, fastener });
            }
            Some(TightenOutcome::Completed) => {
                out_events.push(Event::FastenerTightened { part, fastener });
                out_events.push(Event::PartSecured { part });
            }
            Some(TightenOutcome::AlreadyTight) | Some(TightenOutcome::OutOfRange) | None => {}
        }
    }

    fn check_build(&self, out_events: &mut Vec<Event>) {
        out_events.push(Event::BuildChecked {
            result: rules::validate_build(&self.parts),
        });
    }

    fn sell_build(&mut self, out_events: &mut Vec<Event>) {
        if let Err(error) = rules::validate_build(&self.parts) {
            out_events.push(Event::SaleRejected {
                reason: SaleError::InvalidBuild(error),
            });
            return;
        }
        let Some(order) = self.order.as_ref() else {
            out_events.push(Event::SaleRejected {
                reason: SaleError::NoActiveOrder,
            });
            return;
        };
        let reward = match rules::completion_reward(order, &self.parts, &self.catalog) {
            Ok(reward) => reward,
            Err(reason) => {
                out_events.push(Event::SaleRejected { reason });
                return;
            }
        };
        let fulfilled = order.id();

        // Installed components are consumed by the sale, not returned to
        // the inventory.
        self.money = self.money.saturating_add(reward);
        self.owned.retain(|item| !self.placements.contains_key(item));
        self.placements.clear();
        self.parts.clear();
        self.board.clear_all();

        // The replacement order is drafted before persisting so a snapshot
        // without an active order is never written.
        let replacement = self.desk.draft();
        self.order = Some(replacement.clone());
        self.persist();

        out_events.push(Event::BuildSold {
            order: fulfilled,
            reward,
        });
        out_events.push(Event::OrderChanged {
            order: Some(replacement),
        });
        out_events.push(Event::StateChanged {
            snapshot: self.snapshot(),
        });
    }

    fn set_order(&mut self, order: Option<Order>, out_events: &mut Vec<Event>) {
        self.order = order.clone();
        self.persist();
        out_events.push(Event::OrderChanged { order });
        out_events.push(Event::StateChanged {
            snapshot: self.snapshot(),
        });
    }

    fn persist(&mut self) {
        let data = self.save_data();
        if let Err(error) = self.store.save(&data) {
            log::warn!("failed to persist game state: {error}");
        }
    }

    fn save_data(&self) -> SaveData {
        SaveData {
            money: self.money,
            inventory: self.owned.clone(),
            installed_parts: self.placement_records(),
            current_order: self.order.clone(),
        }
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            money: self.money,
            inventory: self.owned.clone(),
            placements: self.placement_records(),
            order: self.order.clone(),
        }
    }

    fn placement_records(&self) -> Vec<PlacementRecord> {
        self.placements
            .iter()
            .map(|(item, kind)| PlacementRecord {
                item: item.clone(),
                kind: *kind,
            })
            .collect()
    }
}

/// Applies the provided command to the workshop, mutating state atomically.
pub fn apply(workshop: &mut Workshop, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::BuyItem { item } => workshop.buy_item(item, out_events),
        Command::PlaceItem { item, at } => workshop.place_item(item, at, out_events),
        Command::TightenFastener { part, fastener } => {
            workshop.tighten_fastener(part, fastener, out_events);
        }
        Command::CheckBuild => workshop.check_build(out_events),
        Command::SellBuild => workshop.sell_build(out_events),
        Command::SetOrder { order } => workshop.set_order(order, out_events),
    }
}

/// Query functions that provide read-only access to the workshop state.
pub mod query {
    use pc_workshop_core::{
        Catalog, ChassisTransform, ItemId, Order, PartKind, PartSnapshot, PartView, StateSnapshot,
        WorldPoint, ZoneId, ZoneSnapshot, ZoneView,
    };

    use super::{SaveData, Workshop};

    /// Current balance.
    #[must_use]
    pub fn balance(workshop: &Workshop) -> u32 {
        workshop.money
    }

    /// Every owned item id in purchase order, placed or not.
    #[must_use]
    pub fn inventory(workshop: &Workshop) -> &[ItemId] {
        &workshop.owned
    }

    /// Owned items that are not placed into the chassis yet.
    #[must_use]
    pub fn available_inventory(workshop: &Workshop) -> Vec<ItemId> {
        workshop
            .owned
            .iter()
            .filter(|item| !workshop.placements.contains_key(*item))
            .cloned()
            .collect()
    }

    /// The active order, if any.
    #[must_use]
    pub fn current_order(workshop: &Workshop) -> Option<&Order> {
        workshop.order.as_ref()
    }

    /// Read-only access to the session catalog.
    #[must_use]
    pub fn catalog(workshop: &Workshop) -> &Catalog {
        &workshop.catalog
    }

    /// Transform applied to the chassis within the world.
    ///
    /// Presentation layers need it to project local zone rectangles into
    /// world space.
    #[must_use]
    pub fn chassis_transform(workshop: &Workshop) -> ChassisTransform {
        workshop.board.transform()
    }

    /// Resolves the eligible zone for a drop without mutating anything.
    ///
    /// This is the placement preview surface; the authoritative resolution
    /// happens again inside the placement command.
    #[must_use]
    pub fn resolve_zone(workshop: &Workshop, at: WorldPoint, kind: PartKind) -> Option<ZoneId> {
        workshop.board.resolve(at, kind)
    }

    /// Captures a read-only view of the chassis zones.
    #[must_use]
    pub fn zone_view(workshop: &Workshop) -> ZoneView {
        ZoneView::from_snapshots(
            workshop
                .board
                .zones()
                .iter()
                .map(|zone| ZoneSnapshot {
                    id: zone.id,
                    kind: zone.kind,
                    rect: zone.rect,
                    occupied: zone.occupied,
                })
                .collect(),
        )
    }

    /// Captures a read-only view of the installed parts.
    #[must_use]
    pub fn part_view(workshop: &Workshop) -> PartView {
        PartView::from_snapshots(
            workshop
                .parts
                .iter()
                .map(|part| PartSnapshot {
                    id: part.id,
                    item: part.item.clone(),
                    kind: part.kind,
                    zone: part.zone,
                    fasteners: part.fasteners,
                    secured: part.secured(),
                })
                .collect(),
        )
    }

    /// Full state snapshot, as broadcast by `StateChanged` events.
    #[must_use]
    pub fn state_snapshot(workshop: &Workshop) -> StateSnapshot {
        workshop.snapshot()
    }

    /// The snapshot that would be written to the save store right now.
    #[must_use]
    pub fn save_snapshot(workshop: &Workshop) -> SaveData {
        workshop.save_data()
    }
}

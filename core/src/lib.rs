#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the PC Workshop engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative workshop, and pure systems. Adapters submit [`Command`]
//! values describing desired mutations, the workshop executes those commands
//! via its `apply` entry point, and then broadcasts [`Event`] values for
//! systems and presentation layers to react to in emission order. Systems
//! consume event slices, query immutable snapshots, and respond exclusively
//! with new command batches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of fastening points securing every installed part.
pub const FASTENER_COUNT: usize = 4;

/// Component categories recognised by the workshop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartKind {
    /// Central processing unit.
    Cpu,
    /// Memory module.
    Ram,
    /// Graphics card.
    Gpu,
    /// Hard disk drive.
    Hdd,
}

impl PartKind {
    /// Returns the canonical catalog spelling of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Ram => "RAM",
            Self::Gpu => "GPU",
            Self::Hdd => "HDD",
        }
    }
}

/// Unique identifier assigned to a catalog item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new item identifier from the provided catalog id.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Retrieves the string representation of the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique identifier assigned to an installed part by the workshop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartId(u32);

impl PartId {
    /// Creates a new part identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Identity of a chassis zone, stable in zone registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(u32);

impl ZoneId {
    /// Creates a new zone identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a customer order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(u64);

impl OrderId {
    /// Creates a new order identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Point expressed in world coordinates, as delivered by input adapters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPoint {
    x: f32,
    y: f32,
}

impl WorldPoint {
    /// Creates a new world-space point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal world coordinate.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical world coordinate.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }
}

/// Point expressed in the chassis's local coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalPoint {
    x: f32,
    y: f32,
}

impl LocalPoint {
    /// Creates a new chassis-local point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal local coordinate.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical local coordinate.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }
}

/// Center-anchored axis-aligned rectangle in chassis-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneRect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl ZoneRect {
    /// Creates a new rectangle centered on `(x, y)`.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal center of the rectangle.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical center of the rectangle.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Width of the rectangle.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the rectangle.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Reports whether the local point lies inside the rectangle.
    ///
    /// Bounds are inclusive on every edge so a drop exactly on a border
    /// still resolves.
    #[must_use]
    pub fn contains(&self, point: LocalPoint) -> bool {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        point.x() >= self.x - half_width
            && point.x() <= self.x + half_width
            && point.y() >= self.y - half_height
            && point.y() <= self.y + half_height
    }
}

/// Translation and uniform scale applied to the chassis within the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChassisTransform {
    offset: WorldPoint,
    scale: f32,
}

impl ChassisTransform {
    /// Creates a new transform with the provided offset and uniform scale.
    #[must_use]
    pub const fn new(offset: WorldPoint, scale: f32) -> Self {
        Self { offset, scale }
    }

    /// World-space position of the chassis origin.
    #[must_use]
    pub const fn offset(&self) -> WorldPoint {
        self.offset
    }

    /// Uniform scale applied to the chassis.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Converts a world-space point into the chassis's local space.
    ///
    /// A zero or negative scale is treated as identity so callers never
    /// observe infinite coordinates.
    #[must_use]
    pub fn to_local(&self, point: WorldPoint) -> LocalPoint {
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        LocalPoint::new(
            (point.x() - self.offset.x()) / scale,
            (point.y() - self.offset.y()) / scale,
        )
    }
}

/// Purchasable item record sourced from the external item database.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique catalog identifier.
    pub id: ItemId,
    /// Component category the item belongs to.
    #[serde(rename = "type")]
    pub kind: PartKind,
    /// Purchase price deducted on buying.
    pub price: u32,
    /// Display colour, opaque to the engine.
    pub color: String,
    /// Localisation key for the display name, opaque to the engine.
    #[serde(rename = "nameKey")]
    pub name_key: String,
}

/// Immutable, validated collection of purchasable items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: Vec<ItemDefinition>,
}

impl Catalog {
    /// Builds a catalog from item records, rejecting empty and duplicate
    /// identifiers.
    pub fn new(items: Vec<ItemDefinition>) -> Result<Self, CatalogError> {
        for (index, item) in items.iter().enumerate() {
            if item.id.as_str().is_empty() {
                return Err(CatalogError::EmptyItemId);
            }
            if items
                .iter()
                .take(index)
                .any(|earlier| earlier.id == item.id)
            {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Looks up an item definition by identifier.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Iterator over every item in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    /// Number of items in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Reports whether the catalog holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reasons a catalog may be rejected at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two records share the same identifier.
    DuplicateItem(ItemId),
    /// A record carries an empty identifier.
    EmptyItemId,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateItem(id) => {
                write!(f, "catalog id '{}' appears more than once", id.as_str())
            }
            Self::EmptyItemId => write!(f, "catalog record carries an empty id"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Declarative description of a single chassis zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneSpec {
    /// Component category the zone accepts.
    pub kind: PartKind,
    /// Local rectangle occupied by the zone.
    pub rect: ZoneRect,
}

impl ZoneSpec {
    /// Creates a new zone description.
    #[must_use]
    pub const fn new(kind: PartKind, rect: ZoneRect) -> Self {
        Self { kind, rect }
    }
}

/// Complete chassis description: placement transform plus zone layout.
#[derive(Clone, Debug, PartialEq)]
pub struct ChassisLayout {
    transform: ChassisTransform,
    zones: Vec<ZoneSpec>,
}

impl ChassisLayout {
    /// Creates a layout from a transform and zone descriptions.
    ///
    /// Zone order is significant: it defines the deterministic first-match
    /// policy used by placement resolution.
    #[must_use]
    pub fn new(transform: ChassisTransform, zones: Vec<ZoneSpec>) -> Self {
        Self { transform, zones }
    }

    /// The standard mid-tower chassis centered in a 1280x720 world.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            ChassisTransform::new(WorldPoint::new(640.0, 360.0), 1.0),
            vec![
                ZoneSpec::new(PartKind::Cpu, ZoneRect::new(0.0, -120.0, 100.0, 100.0)),
                ZoneSpec::new(PartKind::Ram, ZoneRect::new(120.0, -120.0, 40.0, 120.0)),
                ZoneSpec::new(PartKind::Gpu, ZoneRect::new(0.0, 50.0, 300.0, 60.0)),
                ZoneSpec::new(PartKind::Hdd, ZoneRect::new(180.0, 180.0, 120.0, 80.0)),
            ],
        )
    }

    /// Transform applied to the chassis within the world.
    #[must_use]
    pub const fn transform(&self) -> ChassisTransform {
        self.transform
    }

    /// Zone descriptions in registration order.
    #[must_use]
    pub fn zones(&self) -> &[ZoneSpec] {
        &self.zones
    }
}

/// Customer order the player fulfils to earn money.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    title: String,
    description: String,
    #[serde(rename = "requiredType")]
    required: PartKind,
    #[serde(rename = "baseBudget")]
    base_budget: u32,
}

impl Order {
    /// Creates a new order record.
    #[must_use]
    pub fn new(
        id: OrderId,
        title: impl Into<String>,
        description: impl Into<String>,
        required: PartKind,
        base_budget: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            required,
            base_budget,
        }
    }

    /// Identifier assigned to the order.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Headline shown to the player.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Requirement description shown to the player.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Component category that must appear among installed parts.
    #[must_use]
    pub const fn required(&self) -> PartKind {
        self.required
    }

    /// Payment floor before installed parts are counted.
    #[must_use]
    pub const fn base_budget(&self) -> u32 {
        self.base_budget
    }
}

/// Recorded association between an owned item and the zone kind it occupies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Identifier of the placed item.
    #[serde(rename = "itemId")]
    pub item: ItemId,
    /// Zone kind the item occupies.
    #[serde(rename = "type")]
    pub kind: PartKind,
}

/// Full game-state snapshot broadcast after every successful mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Current balance.
    pub money: u32,
    /// Every owned item id in purchase order, placed or not.
    pub inventory: Vec<ItemId>,
    /// Current placements in item-id order.
    pub placements: Vec<PlacementRecord>,
    /// Active order, if any.
    pub order: Option<Order>,
}

/// Immutable representation of a single installed part used for queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartSnapshot {
    /// Identifier allocated to the part by the workshop.
    pub id: PartId,
    /// Catalog item installed as this part.
    pub item: ItemId,
    /// Component category of the part.
    pub kind: PartKind,
    /// Zone the part occupies.
    pub zone: ZoneId,
    /// Tightness of each fastening point in index order.
    pub fasteners: [bool; FASTENER_COUNT],
    /// Derived flag: every fastening point is tight.
    pub secured: bool,
}

/// Read-only snapshot describing all parts installed into the chassis.
#[derive(Clone, Debug, Default)]
pub struct PartView {
    snapshots: Vec<PartSnapshot>,
}

impl PartView {
    /// Creates a new part view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<PartSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured part snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &PartSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<PartSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single zone used for queries.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneSnapshot {
    /// Identity of the zone in registration order.
    pub id: ZoneId,
    /// Component category the zone accepts.
    pub kind: PartKind,
    /// Local rectangle occupied by the zone.
    pub rect: ZoneRect,
    /// Indicates whether a part currently occupies the zone.
    pub occupied: bool,
}

/// Read-only snapshot describing all zones of the chassis.
#[derive(Clone, Debug, Default)]
pub struct ZoneView {
    snapshots: Vec<ZoneSnapshot>,
}

impl ZoneView {
    /// Creates a new zone view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<ZoneSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured zone snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &ZoneSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<ZoneSnapshot> {
        self.snapshots
    }
}

/// Commands that express all permissible workshop mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Requests the purchase of a catalog item.
    BuyItem {
        /// Identifier of the item to purchase.
        item: ItemId,
    },
    /// Requests installation of an owned item at a drop location.
    PlaceItem {
        /// Identifier of the owned item being dropped.
        item: ItemId,
        /// World-space release point of the drag.
        at: WorldPoint,
    },
    /// Requests that one fastening point of a part be tightened.
    TightenFastener {
        /// Identifier of the installed part.
        part: PartId,
        /// Zero-based fastening point index.
        fastener: usize,
    },
    /// Requests a validation pass over the assembled build.
    CheckBuild,
    /// Requests the sale of the assembled build against the active order.
    SellBuild,
    /// Replaces the active order wholesale.
    SetOrder {
        /// Order to activate, or `None` to clear.
        order: Option<Order>,
    },
}

/// Events broadcast by the workshop after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that an item was purchased and the balance debited.
    ItemPurchased {
        /// Identifier of the purchased item.
        item: ItemId,
        /// Price deducted from the balance.
        price: u32,
    },
    /// Reports that a purchase request was rejected.
    PurchaseRejected {
        /// Identifier of the item requested for purchase.
        item: ItemId,
        /// Specific reason the purchase failed.
        reason: PurchaseError,
    },
    /// Confirms that an item snapped into a zone as a loose part.
    ItemInstalled {
        /// Identifier assigned to the new part by the workshop.
        part: PartId,
        /// Identifier of the installed item.
        item: ItemId,
        /// Zone now occupied by the part.
        zone: ZoneId,
    },
    /// Reports that a placement request was rejected.
    PlacementRejected {
        /// Identifier of the item that failed to place.
        item: ItemId,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Confirms that a fastening point transitioned from loose to tight.
    FastenerTightened {
        /// Identifier of the part being fastened.
        part: PartId,
        /// Index of the fastening point that tightened.
        fastener: usize,
    },
    /// Announces that every fastening point of a part is tight.
    ///
    /// Fires exactly once per part lifetime; reconstruction from a save
    /// suppresses it.
    PartSecured {
        /// Identifier of the fully installed part.
        part: PartId,
    },
    /// Reports the outcome of a build validation pass.
    BuildChecked {
        /// Verdict of the validator.
        result: Result<(), BuildError>,
    },
    /// Confirms that the build was sold and the reward paid out.
    BuildSold {
        /// Identifier of the fulfilled order.
        order: OrderId,
        /// Amount credited to the balance.
        reward: u32,
    },
    /// Reports that a sale request was rejected.
    SaleRejected {
        /// Specific reason the sale failed.
        reason: SaleError,
    },
    /// Announces that the active order was replaced or cleared.
    OrderChanged {
        /// Order now active, if any.
        order: Option<Order>,
    },
    /// Broadcasts the full state snapshot after a successful mutation.
    StateChanged {
        /// Snapshot of the authoritative game state.
        snapshot: StateSnapshot,
    },
}

/// Reasons a purchase request may be rejected by the workshop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseError {
    /// The requested id does not exist in the catalog.
    UnknownItem,
    /// The item was already purchased this session.
    AlreadyOwned,
    /// The balance does not cover the item price.
    InsufficientFunds,
}

/// Reasons a placement request may be rejected by the workshop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// The requested id does not exist in the catalog.
    UnknownItem,
    /// The item has not been purchased.
    NotOwned,
    /// No unoccupied zone of the matching kind contains the drop point.
    NoEligibleZone,
}

/// Reasons an assembled build fails validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildError {
    /// A mandatory component category has no installed part.
    ///
    /// Reports only the first missing kind in the declared required order.
    MissingComponent(PartKind),
    /// At least one installed part still has loose fastening points.
    LooseFasteners,
}

/// Reasons a sale request may be rejected by the workshop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleError {
    /// The build did not pass validation.
    InvalidBuild(BuildError),
    /// There is no active order to fulfil.
    NoActiveOrder,
    /// No installed part matches the order's required kind.
    RequirementNotMet(PartKind),
}

#[cfg(test)]
mod tests {
    use super::{
        Catalog, CatalogError, ChassisLayout, ChassisTransform, ItemDefinition, ItemId, LocalPoint,
        Order, OrderId, PartKind, PlacementError, PlacementRecord, SaleError, WorldPoint, ZoneRect,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    fn item(id: &str, kind: PartKind) -> ItemDefinition {
        ItemDefinition {
            id: ItemId::new(id),
            kind,
            price: 100,
            color: "#ff8800".to_owned(),
            name_key: "ITEM_TEST".to_owned(),
        }
    }

    #[test]
    fn zone_rect_contains_inclusive_bounds() {
        let rect = ZoneRect::new(0.0, -120.0, 100.0, 100.0);
        assert!(rect.contains(LocalPoint::new(0.0, -120.0)));
        assert!(rect.contains(LocalPoint::new(-50.0, -170.0)));
        assert!(rect.contains(LocalPoint::new(50.0, -70.0)));
        assert!(!rect.contains(LocalPoint::new(50.1, -120.0)));
        assert!(!rect.contains(LocalPoint::new(0.0, -69.9)));
    }

    #[test]
    fn transform_maps_world_into_local_space() {
        let transform = ChassisTransform::new(WorldPoint::new(640.0, 360.0), 2.0);
        let local = transform.to_local(WorldPoint::new(740.0, 160.0));
        assert_eq!(local, LocalPoint::new(50.0, -100.0));
    }

    #[test]
    fn transform_treats_zero_scale_as_identity() {
        let transform = ChassisTransform::new(WorldPoint::new(10.0, 10.0), 0.0);
        let local = transform.to_local(WorldPoint::new(15.0, 5.0));
        assert_eq!(local, LocalPoint::new(5.0, -5.0));
    }

    #[test]
    fn catalog_rejects_duplicate_identifiers() {
        let result = Catalog::new(vec![item("cpu1", PartKind::Cpu), item("cpu1", PartKind::Cpu)]);
        assert_eq!(
            result.err(),
            Some(CatalogError::DuplicateItem(ItemId::new("cpu1")))
        );
    }

    #[test]
    fn catalog_lookup_finds_items_by_id() {
        let catalog =
            Catalog::new(vec![item("cpu1", PartKind::Cpu), item("gpu1", PartKind::Gpu)])
                .expect("catalog builds");
        assert_eq!(
            catalog.get(&ItemId::new("gpu1")).map(|item| item.kind),
            Some(PartKind::Gpu)
        );
        assert!(catalog.get(&ItemId::new("ram1")).is_none());
    }

    #[test]
    fn standard_layout_registers_one_zone_per_kind() {
        let layout = ChassisLayout::standard();
        let kinds: Vec<PartKind> = layout.zones().iter().map(|zone| zone.kind).collect();
        assert_eq!(
            kinds,
            vec![PartKind::Cpu, PartKind::Ram, PartKind::Gpu, PartKind::Hdd]
        );
    }

    #[test]
    fn part_kind_round_trips_through_bincode() {
        assert_round_trip(&PartKind::Gpu);
    }

    #[test]
    fn item_definition_round_trips_through_bincode() {
        assert_round_trip(&item("hdd1", PartKind::Hdd));
    }

    #[test]
    fn order_round_trips_through_bincode() {
        let order = Order::new(
            OrderId::new(7),
            "Gaming PC",
            "Build a PC with at least one Graphics Card.",
            PartKind::Gpu,
            420,
        );
        assert_round_trip(&order);
    }

    #[test]
    fn placement_record_round_trips_through_bincode() {
        let record = PlacementRecord {
            item: ItemId::new("cpu1"),
            kind: PartKind::Cpu,
        };
        assert_round_trip(&record);
    }

    #[test]
    fn placement_error_round_trips_through_bincode() {
        assert_round_trip(&PlacementError::NoEligibleZone);
    }

    #[test]
    fn sale_error_round_trips_through_bincode() {
        assert_round_trip(&SaleError::RequirementNotMet(PartKind::Ram));
    }
}

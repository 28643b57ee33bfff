#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure assembly system that translates player intent into workshop commands.
//!
//! Adapters distil raw pointer and menu interaction into one
//! [`AssemblyInput`] per frame; this system turns it into a command batch.
//! It never touches the workshop directly. Drops are pre-checked through a
//! caller-provided resolver so a missed drop simply cancels, and the
//! workshop revalidates everything again when the commands are applied.

use pc_workshop_core::{Command, ItemId, PartId, WorldPoint, ZoneId};

/// A drag released over the world, carrying the dragged item.
#[derive(Clone, Debug, PartialEq)]
pub struct DropRequest {
    /// Inventory item that was dragged.
    pub item: ItemId,
    /// World-space release point.
    pub at: WorldPoint,
}

/// A click on one fastening point of an installed part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FastenRequest {
    /// Part whose fastening point was clicked.
    pub part: PartId,
    /// Zero-based fastening point index.
    pub fastener: usize,
}

/// Input snapshot distilled from adapter-provided frame input data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssemblyInput {
    /// Shop item the player asked to buy this frame.
    pub buy: Option<ItemId>,
    /// Drag release over the chassis this frame.
    pub place: Option<DropRequest>,
    /// Fastening point clicked this frame.
    pub fasten: Option<FastenRequest>,
    /// Indicates whether the player requested a build check this frame.
    pub check_action: bool,
    /// Indicates whether the player requested a sale this frame.
    pub sell_action: bool,
}

/// Assembly system that translates input snapshots into command batches.
#[derive(Clone, Copy, Debug, Default)]
pub struct Assembly;

impl Assembly {
    /// Creates a new assembly system instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Consumes one frame of input and emits the resulting commands.
    ///
    /// The `zone_at` closure should mirror the semantics of the workshop's
    /// `query::resolve_zone` helper so drops that miss every eligible zone
    /// cancel without emitting a command. Commands are emitted in a fixed
    /// order: purchase, placement, fastening, check, sale.
    pub fn handle<F>(&self, input: AssemblyInput, mut zone_at: F, out: &mut Vec<Command>)
    where
        F: FnMut(&ItemId, WorldPoint) -> Option<ZoneId>,
    {
        if let Some(item) = input.buy {
            out.push(Command::BuyItem { item });
        }

        if let Some(request) = input.place {
            if zone_at(&request.item, request.at).is_some() {
                out.push(Command::PlaceItem {
                    item: request.item,
                    at: request.at,
                });
            }
        }

        if let Some(request) = input.fasten {
            out.push(Command::TightenFastener {
                part: request.part,
                fastener: request.fastener,
            });
        }

        if input.check_action {
            out.push(Command::CheckBuild);
        }

        if input.sell_action {
            out.push(Command::SellBuild);
        }
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives the PC Workshop experience.
//!
//! The binary owns everything the engine treats as external: reading the
//! item database, choosing the save location, initialising logging, and
//! narrating events back to the player. The `demo` subcommand walks one
//! full session (buy, place, fasten, check, sell) through the same
//! command/event surface a graphical front end would use.

mod config;
mod save_transfer;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pc_workshop_core::{
    BuildError, ChassisLayout, Event, ItemId, PartKind, PlacementError, PurchaseError, SaleError,
    WorldPoint, FASTENER_COUNT,
};
use pc_workshop_system_assembly::{Assembly, AssemblyInput, DropRequest, FastenRequest};
use pc_workshop_system_catalog::load_catalog;
use pc_workshop_world::{apply, query, FileStore, SaveStore, Workshop};

use config::{SessionFile, SessionSettings};

const DEFAULT_ITEMS: &str = include_str!("../data/items.json");

/// PC assembly workshop: buy components, build, and fulfil orders.
#[derive(Debug, Parser)]
#[command(name = "pc-workshop")]
struct Cli {
    /// Optional TOML session configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Path of the save snapshot (overrides the config file).
    #[arg(long)]
    save: Option<PathBuf>,
    /// Path of the item database JSON (overrides the config file).
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Seed for order generation (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Runs a scripted session: buy, place, fasten, check, sell.
    Demo,
    /// Prints the current session state.
    Status,
    /// Prints the save as a single-line transfer string.
    Export,
    /// Replaces the save with a decoded transfer string.
    Import {
        /// Transfer string produced by `export`.
        payload: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => SessionFile::load(path)?,
        None => SessionFile::default(),
    };
    let settings = SessionSettings::resolve(file, cli.save, cli.catalog, cli.seed);

    match cli.command.unwrap_or(CliCommand::Demo) {
        CliCommand::Demo => run_demo(&settings),
        CliCommand::Status => show_status(&settings),
        CliCommand::Export => export_save(&settings),
        CliCommand::Import { payload } => import_save(&settings, &payload),
    }
}

fn boot_workshop(settings: &SessionSettings) -> Result<Workshop> {
    let json = match &settings.catalog_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("could not read item database '{}'", path.display()))?,
        None => DEFAULT_ITEMS.to_owned(),
    };
    let catalog = load_catalog(&json).context("item database rejected")?;
    let store = Box::new(FileStore::new(&settings.save_path));
    let layout = ChassisLayout::standard();

    Ok(match settings.order_seed {
        Some(seed) => Workshop::with_order_seed(catalog, &layout, store, seed),
        None => Workshop::new(catalog, &layout, store),
    })
}

/// Runs one frame of the assembly system and applies the resulting commands.
fn drive(workshop: &mut Workshop, assembly: &Assembly, input: AssemblyInput) -> Vec<Event> {
    let mut commands = Vec::new();
    assembly.handle(
        input,
        |item, at| {
            query::catalog(workshop)
                .get(item)
                .and_then(|definition| query::resolve_zone(workshop, at, definition.kind))
        },
        &mut commands,
    );

    let mut events = Vec::new();
    for command in commands {
        apply(workshop, command, &mut events);
    }
    events
}

fn run_demo(settings: &SessionSettings) -> Result<()> {
    let mut workshop = boot_workshop(settings)?;
    let assembly = Assembly::new();

    println!("balance: ${}", query::balance(&workshop));
    if let Some(order) = query::current_order(&workshop) {
        println!(
            "active order: {}: {} (base ${})",
            order.title(),
            order.description(),
            order.base_budget()
        );
    }

    for id in ["cpu1", "ram1", "gpu1"] {
        let events = drive(
            &mut workshop,
            &assembly,
            AssemblyInput {
                buy: Some(ItemId::new(id)),
                ..AssemblyInput::default()
            },
        );
        narrate(&events);
    }

    let mut installed = Vec::new();
    for id in ["cpu1", "ram1", "gpu1"] {
        let item = ItemId::new(id);
        let Some(kind) = query::catalog(&workshop)
            .get(&item)
            .map(|definition| definition.kind)
        else {
            continue;
        };
        let Some(at) = free_zone_drop_point(&workshop, kind) else {
            println!("no free {} zone for '{id}'", kind.as_str());
            continue;
        };
        let events = drive(
            &mut workshop,
            &assembly,
            AssemblyInput {
                place: Some(DropRequest { item, at }),
                ..AssemblyInput::default()
            },
        );
        narrate(&events);
        installed.extend(events.iter().filter_map(|event| match event {
            Event::ItemInstalled { part, .. } => Some(*part),
            _ => None,
        }));
    }

    for part in installed {
        for fastener in 0..FASTENER_COUNT {
            let events = drive(
                &mut workshop,
                &assembly,
                AssemblyInput {
                    fasten: Some(FastenRequest { part, fastener }),
                    ..AssemblyInput::default()
                },
            );
            narrate(&events);
        }
    }

    let events = drive(
        &mut workshop,
        &assembly,
        AssemblyInput {
            check_action: true,
            ..AssemblyInput::default()
        },
    );
    narrate(&events);

    let events = drive(
        &mut workshop,
        &assembly,
        AssemblyInput {
            sell_action: true,
            ..AssemblyInput::default()
        },
    );
    narrate(&events);

    println!("balance: ${}", query::balance(&workshop));
    Ok(())
}

fn show_status(settings: &SessionSettings) -> Result<()> {
    let workshop = boot_workshop(settings)?;
    let snapshot = query::state_snapshot(&workshop);

    println!("balance: ${}", snapshot.money);

    if snapshot.inventory.is_empty() {
        println!("inventory: empty");
    } else {
        println!("inventory:");
        for item in &snapshot.inventory {
            let kind = query::catalog(&workshop)
                .get(item)
                .map_or("?", |definition| definition.kind.as_str());
            let placed = if snapshot
                .placements
                .iter()
                .any(|placement| &placement.item == item)
            {
                " (installed)"
            } else {
                ""
            };
            println!("  {} [{kind}]{placed}", item.as_str());
        }
    }

    match &snapshot.order {
        Some(order) => println!(
            "active order: {}: {} (base ${})",
            order.title(),
            order.description(),
            order.base_budget()
        ),
        None => println!("active order: none"),
    }
    Ok(())
}

fn export_save(settings: &SessionSettings) -> Result<()> {
    let mut store = FileStore::new(&settings.save_path);
    let data = store
        .load()
        .context("could not read the save snapshot")?
        .unwrap_or_default();
    println!("{}", save_transfer::encode(&data));
    Ok(())
}

fn import_save(settings: &SessionSettings, payload: &str) -> Result<()> {
    let data = save_transfer::decode(payload).context("could not decode the transfer string")?;
    let mut store = FileStore::new(&settings.save_path);
    store
        .save(&data)
        .context("could not write the save snapshot")?;
    println!(
        "imported save: ${} and {} owned item(s)",
        data.money,
        data.inventory.len()
    );
    Ok(())
}

/// World-space center of the first free zone accepting the kind.
fn free_zone_drop_point(workshop: &Workshop, kind: PartKind) -> Option<WorldPoint> {
    let transform = query::chassis_transform(workshop);
    query::zone_view(workshop)
        .iter()
        .find(|zone| zone.kind == kind && !zone.occupied)
        .map(|zone| {
            WorldPoint::new(
                transform.offset().x() + zone.rect.x() * transform.scale(),
                transform.offset().y() + zone.rect.y() * transform.scale(),
            )
        })
}

fn narrate(events: &[Event]) {
    for event in events {
        if let Some(line) = describe(event) {
            println!("{line}");
        }
    }
}

fn describe(event: &Event) -> Option<String> {
    match event {
        Event::ItemPurchased { item, price } => {
            Some(format!("bought '{}' for ${price}", item.as_str()))
        }
        Event::PurchaseRejected { item, reason } => Some(format!(
            "purchase of '{}' rejected: {}",
            item.as_str(),
            purchase_code(*reason)
        )),
        Event::ItemInstalled { item, zone, .. } => Some(format!(
            "installed '{}' into zone {}",
            item.as_str(),
            zone.get()
        )),
        Event::PlacementRejected { item, reason } => Some(format!(
            "could not place '{}': {}",
            item.as_str(),
            placement_reason(*reason)
        )),
        Event::FastenerTightened { part, fastener } => Some(format!(
            "tightened fastener {fastener} on part {}",
            part.get()
        )),
        Event::PartSecured { part } => Some(format!("part {} fully installed", part.get())),
        Event::BuildChecked { result } => Some(match result {
            Ok(()) => "build check passed".to_owned(),
            Err(error) => format!("build check failed: {}", build_code(error)),
        }),
        Event::BuildSold { reward, .. } => Some(format!("order fulfilled, earned ${reward}")),
        Event::SaleRejected { reason } => Some(format!("sale rejected: {}", sale_reason(reason))),
        Event::OrderChanged { order } => Some(match order {
            Some(order) => format!(
                "new order: {}: {} (base ${})",
                order.title(),
                order.description(),
                order.base_budget()
            ),
            None => "order cleared".to_owned(),
        }),
        Event::StateChanged { .. } => None,
    }
}

/// UI error codes kept aligned with the localisation table.
fn purchase_code(reason: PurchaseError) -> &'static str {
    match reason {
        PurchaseError::UnknownItem => "UI_UNKNOWN_ITEM",
        PurchaseError::AlreadyOwned => "UI_ALREADY_OWNED",
        PurchaseError::InsufficientFunds => "UI_NO_FUNDS",
    }
}

fn placement_reason(reason: PlacementError) -> &'static str {
    match reason {
        PlacementError::UnknownItem => "unknown item",
        PlacementError::NotOwned => "item not owned",
        PlacementError::NoEligibleZone => "no eligible zone under the drop",
    }
}

fn build_code(error: &BuildError) -> String {
    match error {
        BuildError::MissingComponent(kind) => format!("MISSING_{}", kind.as_str()),
        BuildError::LooseFasteners => "SCREWS_LOOSE".to_owned(),
    }
}

fn sale_reason(reason: &SaleError) -> String {
    match reason {
        SaleError::InvalidBuild(error) => build_code(error),
        SaleError::NoActiveOrder => "no active order".to_owned(),
        SaleError::RequirementNotMet(kind) => {
            format!("missing required component: {}", kind.as_str())
        }
    }
}

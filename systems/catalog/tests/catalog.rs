use pc_workshop_core::{ItemId, PartKind};
use pc_workshop_system_catalog::{load_catalog, CatalogLoadError};

const ITEMS_JSON: &str = r##"[
    { "id": "cpu1", "type": "CPU", "price": 200, "color": "#4488ff", "nameKey": "ITEM_CPU_BASIC" },
    { "id": "ram1", "type": "RAM", "price": 50, "color": "#44ff88", "nameKey": "ITEM_RAM_BASIC" },
    { "id": "gpu1", "type": "GPU", "price": 300, "color": "#ff8844", "nameKey": "ITEM_GPU_BASIC" }
]"##;

#[test]
fn well_formed_database_loads_every_record() {
    let catalog = load_catalog(ITEMS_JSON).expect("database loads");

    assert_eq!(catalog.len(), 3);
    let cpu = catalog.get(&ItemId::new("cpu1")).expect("cpu exists");
    assert_eq!(cpu.kind, PartKind::Cpu);
    assert_eq!(cpu.price, 200);
    assert_eq!(cpu.color, "#4488ff");
    assert_eq!(cpu.name_key, "ITEM_CPU_BASIC");
}

#[test]
fn duplicate_ids_are_rejected_at_load_time() {
    let json = r##"[
        { "id": "cpu1", "type": "CPU", "price": 200, "color": "#fff", "nameKey": "A" },
        { "id": "cpu1", "type": "CPU", "price": 250, "color": "#eee", "nameKey": "B" }
    ]"##;

    assert!(matches!(
        load_catalog(json),
        Err(CatalogLoadError::Invalid(_))
    ));
}

#[test]
fn empty_ids_are_rejected_at_load_time() {
    let json = r##"[
        { "id": "", "type": "RAM", "price": 50, "color": "#fff", "nameKey": "A" }
    ]"##;

    assert!(matches!(
        load_catalog(json),
        Err(CatalogLoadError::Invalid(_))
    ));
}

#[test]
fn unknown_component_types_fail_to_parse() {
    let json = r##"[
        { "id": "psu1", "type": "PSU", "price": 90, "color": "#fff", "nameKey": "A" }
    ]"##;

    assert!(matches!(
        load_catalog(json),
        Err(CatalogLoadError::Malformed(_))
    ));
}

#[test]
fn missing_fields_fail_to_parse() {
    let json = r##"[ { "id": "cpu1", "type": "CPU" } ]"##;

    assert!(matches!(
        load_catalog(json),
        Err(CatalogLoadError::Malformed(_))
    ));
}

#[test]
fn negative_prices_fail_to_parse() {
    let json = r##"[
        { "id": "cpu1", "type": "CPU", "price": -5, "color": "#fff", "nameKey": "A" }
    ]"##;

    assert!(matches!(
        load_catalog(json),
        Err(CatalogLoadError::Malformed(_))
    ));
}

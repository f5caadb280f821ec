use bulk_core::{
    Bulk, BulkConfig, ContainerGraph, ItemId, ItemRecord, Size, StackDefinitions,
    calculate_bulk, calculate_encumbrance, format_bulk, get_container_map, is_cycle,
    to_bulk_items,
};

fn total_bulk(records: &[ItemRecord], config: BulkConfig, actor_size: Size) -> Bulk {
    let items = to_bulk_items(records);
    let (bulk, _) =
        calculate_bulk(&items, &StackDefinitions::default(), &config, actor_size).unwrap();
    bulk
}

/// A travelling adventurer: worn backpack with gear, a quiver, a sword.
fn adventurer() -> Vec<ItemRecord> {
    vec![
        ItemRecord::new("backpack")
            .with_weight("L")
            .with_negate_bulk("2")
            .with_capacity("4")
            .equipped(true),
        ItemRecord::new("bedroll").with_weight("L").in_container("backpack"),
        ItemRecord::new("rope").with_weight("L").in_container("backpack"),
        ItemRecord::new("waterskin").with_weight("L").in_container("backpack"),
        ItemRecord::new("rations")
            .with_stack_group("rations")
            .with_quantity(14)
            .in_container("backpack"),
        ItemRecord::new("spare arrows")
            .with_stack_group("arrows")
            .with_quantity(5)
            .in_container("backpack"),
        ItemRecord::new("quiver arrows")
            .with_stack_group("arrows")
            .with_quantity(25),
        ItemRecord::new("longsword").with_weight("1").equipped(true),
    ]
}

#[test]
fn adventurer_inventory_totals() {
    let records = adventurer();
    let bulk = total_bulk(&records, BulkConfig::default(), Size::Medium);

    // Backpack contents (5L) are fully negated while worn; the 5 spare arrows
    // complete a stack with the quiver's 5 leftover arrows.
    assert_eq!(bulk, Bulk::new(1, 4));
    assert_eq!(format_bulk(bulk), "1; 4L");

    let encumbrance = calculate_encumbrance(1, 0, 0, bulk, Size::Medium);
    assert_eq!(encumbrance.encumbered_at, 60);
    assert_eq!(encumbrance.limit, 110);
    assert!(!encumbrance.is_encumbered());
    assert_eq!(encumbrance.encumbered_percentage(), 23);
    assert_eq!(encumbrance.limit_percentage(), 12);
}

#[test]
fn adventurer_backpack_fullness() {
    let records = adventurer();
    let containers = get_container_map(
        &records,
        &StackDefinitions::default(),
        &BulkConfig::default(),
        Size::Medium,
    )
    .unwrap();

    assert_eq!(containers.len(), records.len());
    let backpack = &containers[&ItemId::from("backpack")];
    assert_eq!(backpack.held_items.len(), 5);
    assert_eq!(backpack.held_item_bulk, Bulk::from_light(5));
    assert_eq!(backpack.formatted_held_item_bulk, "5L");
    assert_eq!(backpack.full_percentage(), 10);
    assert!(!backpack.is_overloaded());

    let rope = &containers[&ItemId::from("rope")];
    assert!(rope.is_in_container);
    assert!(!rope.is_container());
}

#[test]
fn coin_hoard_weighs_one_bulk_per_thousand() {
    let records = vec![
        ItemRecord::new("chest").with_weight("2"),
        ItemRecord::new("gold")
            .with_stack_group("coins")
            .with_quantity(100_000)
            .in_container("chest"),
    ];

    let bulk = total_bulk(&records, BulkConfig::default(), Size::Medium);
    assert_eq!(bulk, Bulk::from_normal(102));
    let encumbrance = calculate_encumbrance(0, 0, 0, bulk, Size::Medium);
    assert!(encumbrance.is_over_limit());
    assert_eq!(encumbrance.limit_percentage_max_100(), 100);

    let ignoring_coins = BulkConfig::new().with_ignore_coin_bulk(true);
    let bulk = total_bulk(&records, ignoring_coins, Size::Medium);
    assert_eq!(bulk, Bulk::from_normal(2));
}

#[test]
fn loose_coins_combine_unless_containers_keep_them() {
    let records = vec![
        ItemRecord::new("belt pouch"),
        ItemRecord::new("silver")
            .with_stack_group("coins")
            .with_quantity(700)
            .in_container("belt pouch"),
        ItemRecord::new("copper")
            .with_stack_group("coins")
            .with_quantity(300),
    ];

    let bulk = total_bulk(&records, BulkConfig::default(), Size::Medium);
    assert_eq!(bulk, Bulk::ONE);

    let config = BulkConfig::new().with_ignore_container_overflow(true);
    let bulk = total_bulk(&records, config, Size::Medium);
    assert_eq!(bulk, Bulk::NEGLIGIBLE);
}

#[test]
fn bags_of_holding_do_not_nest_their_reduction() {
    let bag = |id: &str| {
        ItemRecord::new(id)
            .with_weight("1")
            .with_negate_bulk("15")
            .with_capacity("25")
            .extradimensional(true)
    };
    let records = vec![
        bag("outer bag"),
        bag("inner bag").in_container("outer bag"),
        ItemRecord::new("statue")
            .with_weight("25")
            .in_container("inner bag"),
    ];

    let bulk = total_bulk(&records, BulkConfig::default(), Size::Medium);
    assert_eq!(bulk, Bulk::from_normal(12));
}

#[test]
fn oversized_items_shrink_for_smaller_carriers() {
    let weight_of = |weight: &str| {
        let records = vec![
            ItemRecord::new("siege shield")
                .with_weight(weight)
                .with_size(Size::Gargantuan),
        ];
        total_bulk(&records, BulkConfig::default(), Size::Medium)
    };

    assert_eq!(weight_of("2"), Bulk::NEGLIGIBLE);
    assert_eq!(weight_of("3"), Bulk::LIGHT);
    assert_eq!(weight_of("4"), Bulk::LIGHT);
    assert_eq!(weight_of("8"), Bulk::ONE);
}

#[test]
fn cycle_checks_guard_container_moves() {
    let mut records = vec![
        ItemRecord::new("chest"),
        ItemRecord::new("sack").in_container("chest"),
        ItemRecord::new("pouch").in_container("sack"),
    ];

    assert!(is_cycle("chest", "pouch", &records));
    assert!(!is_cycle("pouch", "chest", &records));

    let mut graph = ContainerGraph::from_records(&records);
    assert!(
        graph
            .assign_container(&ItemId::from("chest"), Some(ItemId::from("pouch")))
            .is_err()
    );
    graph
        .assign_container(&ItemId::from("pouch"), Some(ItemId::from("chest")))
        .unwrap();
    records[2].container_id = graph.container_of(&ItemId::from("pouch")).cloned();

    let items = to_bulk_items(&records);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].holds_items.len(), 2);
}

#[test]
fn looped_records_are_left_out_of_the_total() {
    let records = vec![
        ItemRecord::new("box a").with_weight("3").in_container("box b"),
        ItemRecord::new("box b").with_weight("3").in_container("box a"),
        ItemRecord::new("lantern").with_weight("L"),
    ];
    let bulk = total_bulk(&records, BulkConfig::default(), Size::Medium);
    assert_eq!(bulk, Bulk::LIGHT);
}

#[test]
fn records_deserialize_from_json() {
    let records: Vec<ItemRecord> = serde_json::from_str(
        r#"[
            { "id": "pack", "weight": "1", "capacity": "4" },
            { "id": "bolts", "stack_group": "bolts", "quantity": 20, "container_id": "pack" }
        ]"#,
    )
    .unwrap();
    let bulk = total_bulk(&records, BulkConfig::default(), Size::Medium);
    assert_eq!(bulk, Bulk::new(1, 2));
}

use {
    super::{components::*, events::*, reservation::*, systems::handle_spawn_requests},
    crate::{
        core::{events::LogEvent, resources::GameConfig},
        data::{
            schema::{CreatureDefinition, CreatureRole, ItemEntry},
            CreatureCatalog,
        },
        inventory::components::Inventory,
        player::Player,
        tasks::components::{HoldingMember, TaskAgent},
    },
    bevy::prelude::*,
};

fn creature(id: &str, role: CreatureRole, cost: Option<&[(&str, u32)]>) -> CreatureDefinition {
    CreatureDefinition {
        id: id.into(),
        name: id.to_uppercase(),
        role,
        items_to_consume: cost.map(|c| RequirementManifest::new(c.iter().copied()).unwrap()),
        max_intelligence: 100,
        max_strength: 100,
    }
}

fn block(id: &str) -> ItemEntry {
    ItemEntry {
        id: id.into(),
        name: id.into(),
        block: Some(id.into()),
        max_stack: 64,
    }
}

fn spawn_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_event::<LogEvent>()
        .add_event::<SpawnCreatureRequest>()
        .add_event::<CreatureSpawned>()
        .add_event::<SpawnRejected>()
        .insert_resource(GameConfig::default())
        .insert_resource(SpawnRng::from_seed(Some(42)))
        .insert_resource(CreatureCatalog {
            creatures: vec![
                creature("builder", CreatureRole::Builder, Some(&[("stone", 2), ("wood", 1)])),
                creature("guard", CreatureRole::Guard, Some(&[])),
                creature("king", CreatureRole::Worker, None),
            ],
        })
        .add_systems(Update, handle_spawn_requests);
    app
}

fn spawn_player(app: &mut App, items: &[(&str, u32)]) -> Entity {
    let mut inventory = Inventory::with_capacity(4);
    for (id, count) in items {
        inventory.give(&block(id), *count);
    }
    app.world_mut()
        .spawn((Player, Name::new("Tester"), inventory))
        .id()
}

fn request(app: &mut App, creature_id: &str) {
    app.world_mut().send_event(SpawnCreatureRequest {
        requester: Entity::PLACEHOLDER,
        creature_id: creature_id.into(),
        position: Vec3::new(1.0, 2.0, 3.0),
    });
    app.update();
}

fn spawned(app: &mut App) -> Vec<CreatureSpawned> {
    app.world_mut()
        .resource_mut::<Events<CreatureSpawned>>()
        .drain()
        .collect()
}

fn rejected(app: &mut App) -> Vec<SpawnRejected> {
    app.world_mut()
        .resource_mut::<Events<SpawnRejected>>()
        .drain()
        .collect()
}

fn creature_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query::<&Creature>();
    query.iter(app.world()).count()
}

#[test]
fn paying_player_gets_a_creature() {
    let mut app = spawn_app();
    let player = spawn_player(&mut app, &[("stone", 5), ("wood", 1)]);

    request(&mut app, "builder");

    let events = spawned(&mut app);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].requester, player);
    assert_eq!(events[0].creature_id, "builder");

    let entity = events[0].entity;
    let world = app.world();
    assert_eq!(world.get::<SpawnedBy>(entity), Some(&SpawnedBy(player)));
    assert_eq!(
        world.get::<HoldingMember>(entity),
        Some(&HoldingMember { holding: player })
    );
    assert_eq!(world.get::<TaskAgent>(entity), Some(&TaskAgent::default()));
    assert_eq!(
        world.get::<Transform>(entity).unwrap().translation,
        Vec3::new(1.0, 2.0, 3.0)
    );
    assert!(world.get::<CreatureAttributes>(entity).is_some());

    let inventory = world.get::<Inventory>(player).unwrap();
    assert_eq!(inventory.count_block("stone"), 3);
    assert_eq!(inventory.count_block("wood"), 0);
}

#[test]
fn missing_items_reject_without_spawning() {
    let mut app = spawn_app();
    let player = spawn_player(&mut app, &[("stone", 1)]);
    let before = app.world().get::<Inventory>(player).unwrap().clone();

    request(&mut app, "builder");

    let events = rejected(&mut app);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0].reason,
        ConsumeError::InsufficientItems { .. }
    ));
    assert_eq!(creature_count(&mut app), 0);
    assert_eq!(app.world().get::<Inventory>(player).unwrap(), &before);
}

#[test]
fn free_creature_spawns_without_inventory() {
    let mut app = spawn_app();
    app.world_mut().spawn(Player);

    request(&mut app, "guard");

    assert_eq!(spawned(&mut app).len(), 1);
    assert_eq!(creature_count(&mut app), 1);
}

#[test]
fn costly_creature_needs_an_inventory() {
    let mut app = spawn_app();
    app.world_mut().spawn(Player);

    request(&mut app, "builder");

    let events = rejected(&mut app);
    assert_eq!(events[0].reason, ConsumeError::NoInventory);
    assert_eq!(creature_count(&mut app), 0);
}

#[test]
fn definition_without_cost_is_not_spawnable() {
    let mut app = spawn_app();
    spawn_player(&mut app, &[("stone", 64)]);

    request(&mut app, "king");

    let events = rejected(&mut app);
    assert_eq!(events[0].reason, ConsumeError::NotSpawnable("KING".into()));
    assert_eq!(creature_count(&mut app), 0);
}

#[test]
fn unknown_creature_is_rejected() {
    let mut app = spawn_app();
    spawn_player(&mut app, &[]);

    request(&mut app, "dragon");

    let events = rejected(&mut app);
    assert_eq!(events[0].reason, ConsumeError::UnknownCreature("dragon".into()));
}

#[test]
fn requests_in_one_frame_share_the_same_inventory() {
    let mut app = spawn_app();
    let player = spawn_player(&mut app, &[("stone", 3), ("wood", 2)]);

    for _ in 0..2 {
        app.world_mut().send_event(SpawnCreatureRequest {
            requester: player,
            creature_id: "builder".into(),
            position: Vec3::ZERO,
        });
    }
    app.update();

    assert_eq!(spawned(&mut app).len(), 1);
    assert_eq!(rejected(&mut app).len(), 1);
    let inventory = app.world().get::<Inventory>(player).unwrap();
    assert_eq!(inventory.count_block("stone"), 1);
    assert_eq!(inventory.count_block("wood"), 1);
}

#[test]
fn request_without_player_spawns_nothing() {
    let mut app = spawn_app();

    request(&mut app, "guard");

    assert!(spawned(&mut app).is_empty());
    assert_eq!(creature_count(&mut app), 0);
}

#[test]
fn despawned_requester_spawns_nothing() {
    let mut app = spawn_app();
    let gone = app.world_mut().spawn(Name::new("Ghost")).id();
    app.world_mut().despawn(gone);

    app.world_mut().send_event(SpawnCreatureRequest {
        requester: gone,
        creature_id: "guard".into(),
        position: Vec3::ZERO,
    });
    app.update();

    assert!(spawned(&mut app).is_empty());
    let mut members = app.world_mut().query::<&HoldingMember>();
    assert_eq!(members.iter(app.world()).count(), 0);
}

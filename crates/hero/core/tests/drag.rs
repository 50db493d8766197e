mod common;

use common::{FakeEntity, World, run};
use hero_core::{
    Animation, Command, Direction4, Direction8, EntityId, Free, Grabbing, Hero, Point, Pulling,
    Pushing, Tick,
};

const BLOCK: EntityId = EntityId(3);

/// A hero at the origin facing a block on its right, already grabbing it.
fn grabbing_block_on_the_right(world: &World) -> Hero {
    world
        .map
        .add_entity(BLOCK, FakeEntity::block(Point::new(16, 0)));
    let mut hero = world.spawn_hero(Point::new(0, 0));
    hero.set_facing_entity(Some(BLOCK));

    world.commands.press(Command::Action);
    hero.notify_command_pressed(Command::Action);
    assert_eq!(hero.state_name(), Grabbing::NAME);
    hero
}

/// Starts pushing at t=10 and the drag itself at t=20.
fn start_pushing(world: &World, hero: &mut Hero) {
    world.commands.want(Some(Direction8::Right));
    hero.update(Tick(10));
    assert_eq!(hero.state_name(), Pushing::NAME);
    hero.update(Tick(20));
    assert!(hero.state().is_moving_grabbed_entity());
}

#[test]
fn grabbing_chooses_push_or_pull_from_the_wanted_direction() {
    let world = World::new();
    let mut hero = grabbing_block_on_the_right(&world);
    assert_eq!(world.sprites.animation(), Animation::Grabbing);
    assert!(hero.state().is_grabbing_or_pulling());

    world.commands.want(Some(Direction8::Left));
    hero.update(Tick(10));
    assert_eq!(hero.state_name(), Pulling::NAME);
    assert_eq!(world.sprites.animation(), Animation::Pulling);
}

#[test]
fn releasing_action_while_grabbing_frees_the_hero() {
    let world = World::new();
    let mut hero = grabbing_block_on_the_right(&world);

    world.commands.release(Command::Action);
    hero.update(Tick(10));

    assert_eq!(hero.state_name(), Free::NAME);
}

#[test]
fn push_moves_the_block_two_cells() {
    let world = World::new();
    let mut hero = grabbing_block_on_the_right(&world);
    start_pushing(&world, &mut hero);

    run(&mut hero, 20, 420, 5);

    assert_eq!(world.map.entity_position(BLOCK), Some(Point::new(32, 0)));
    assert_eq!(hero.position(), Point::new(16, 0));
    assert_eq!(hero.state_name(), Grabbing::NAME);
    assert!(!hero.context().has_movement());

    let events = world.map.events();
    assert!(events.contains(&"moving_by #3".to_owned()));
    assert!(events.contains(&"stop_movement_by_hero #3".to_owned()));
    assert_eq!(events.last().map(String::as_str), Some("moved_by #3"));
}

#[test]
fn drag_stops_only_past_eight_pixels() {
    let world = World::new();
    let mut hero = grabbing_block_on_the_right(&world);
    world.map.set_aligned(BLOCK, Some(true));
    start_pushing(&world, &mut hero);

    // Steps are due every 25ms from t=45: the 8th lands at t=220.
    run(&mut hero, 20, 220, 5);
    assert_eq!(hero.position(), Point::new(8, 0));
    assert!(hero.state().is_moving_grabbed_entity());
    assert!(!hero.state().can_be_hurt(None));

    hero.update(Tick(245));
    assert!(!hero.state().is_moving_grabbed_entity());
    assert_eq!(world.map.entity_position(BLOCK), Some(Point::new(25, 0)));
    assert_eq!(hero.position(), Point::new(9, 0));
}

#[test]
fn push_goes_on_while_its_direction_is_held() {
    let world = World::new();
    let mut hero = grabbing_block_on_the_right(&world);
    start_pushing(&world, &mut hero);
    assert!(!hero.state().is_grabbing_or_pulling());

    world.commands.release(Command::Action);
    run(&mut hero, 20, 420, 5);

    assert_eq!(hero.state_name(), Pushing::NAME);
    assert!(!hero.state().is_moving_grabbed_entity());
    assert_eq!(world.map.entity_position(BLOCK), Some(Point::new(32, 0)));
    assert_eq!(hero.position(), Point::new(16, 0));

    // The next update starts another drag right away.
    run(&mut hero, 420, 825, 5);
    assert_eq!(hero.state_name(), Pushing::NAME);
    assert_eq!(world.map.entity_position(BLOCK), Some(Point::new(48, 0)));
    assert_eq!(hero.position(), Point::new(32, 0));
}

#[test]
fn releasing_everything_during_a_push_ends_free() {
    let world = World::new();
    let mut hero = grabbing_block_on_the_right(&world);
    start_pushing(&world, &mut hero);

    world.commands.release(Command::Action);
    world.commands.want(None);
    run(&mut hero, 20, 420, 5);

    assert_eq!(hero.state_name(), Free::NAME);
    assert_eq!(world.map.entity_position(BLOCK), Some(Point::new(32, 0)));
}

#[test]
fn action_without_a_direction_ends_the_push_free() {
    let world = World::new();
    let mut hero = grabbing_block_on_the_right(&world);
    start_pushing(&world, &mut hero);

    world.commands.want(None);
    run(&mut hero, 20, 420, 5);

    assert_eq!(hero.state_name(), Free::NAME);
    assert_eq!(world.map.entity_position(BLOCK), Some(Point::new(32, 0)));
}

#[test]
fn pushing_gives_up_when_direction_changes() {
    let world = World::new();
    let mut hero = grabbing_block_on_the_right(&world);
    world.commands.want(Some(Direction8::Right));
    hero.update(Tick(10));
    assert_eq!(hero.state_name(), Pushing::NAME);
    assert!(hero.state().can_be_hurt(None));

    world.commands.want(None);
    hero.update(Tick(20));
    assert_eq!(hero.state_name(), Grabbing::NAME);
}

#[test]
fn refused_drag_leaves_no_trace() {
    let world = World::new();
    let mut hero = grabbing_block_on_the_right(&world);
    if let Some(block) = world.map.0.borrow_mut().entities.get_mut(&BLOCK) {
        block.accepts_drag = false;
    }

    world.commands.want(Some(Direction8::Right));
    run(&mut hero, 0, 200, 10);

    assert_eq!(hero.state_name(), Pushing::NAME);
    assert!(!hero.state().is_moving_grabbed_entity());
    assert!(!hero.context().has_movement());
    assert_eq!(hero.position(), Point::new(0, 0));
    assert_eq!(world.map.entity_position(BLOCK), Some(Point::new(16, 0)));
}

#[test]
fn pulling_survives_releasing_action_mid_drag() {
    let world = World::new();
    world
        .map
        .add_entity(BLOCK, FakeEntity::block(Point::new(0, 0)));
    let mut hero = world.spawn_hero(Point::new(16, 0));
    hero.set_direction(Direction4::Left);
    hero.set_facing_entity(Some(BLOCK));

    world.commands.press(Command::Action);
    hero.notify_command_pressed(Command::Action);
    world.commands.want(Some(Direction8::Right));
    hero.update(Tick(10));
    assert_eq!(hero.state_name(), Pulling::NAME);
    hero.update(Tick(20));
    assert!(hero.state().is_moving_grabbed_entity());

    world.commands.release(Command::Action);
    run(&mut hero, 20, 300, 5);
    assert_eq!(hero.state_name(), Pulling::NAME);
    assert!(hero.state().is_moving_grabbed_entity());

    run(&mut hero, 300, 420, 5);
    assert_eq!(world.map.entity_position(BLOCK), Some(Point::new(16, 0)));
    assert_eq!(hero.position(), Point::new(32, 0));
    assert_eq!(hero.state_name(), Free::NAME);
}

#[test]
fn collision_of_the_dragged_block_ends_the_drag() {
    let world = World::new();
    let mut hero = grabbing_block_on_the_right(&world);
    start_pushing(&world, &mut hero);
    run(&mut hero, 20, 95, 5);

    hero.notify_grabbed_entity_collision();

    assert_eq!(hero.state_name(), Grabbing::NAME);
    assert_eq!(world.map.entity_position(BLOCK), Some(Point::new(19, 0)));
    assert_eq!(hero.position(), Point::new(3, 0));
}

#[test]
fn removing_the_dragged_entity_stops_in_place() {
    let world = World::new();
    let mut hero = grabbing_block_on_the_right(&world);
    start_pushing(&world, &mut hero);
    run(&mut hero, 20, 95, 5);

    world.map.remove_entity(BLOCK);
    hero.notify_entity_removed(BLOCK);

    assert_eq!(hero.state_name(), Grabbing::NAME);
    assert_eq!(hero.position(), Point::new(3, 0));
    assert!(!hero.context().has_movement());
    assert_eq!(hero.context().facing_entity(), None);
}

#[test]
fn walking_against_an_obstacle_starts_pushing() {
    let world = World::new();
    world
        .map
        .add_entity(BLOCK, FakeEntity::block(Point::new(16, 0)));
    let mut hero = world.spawn_hero(Point::new(0, 0));

    world.commands.want(Some(Direction8::Right));
    run(&mut hero, 0, 800, 10);
    assert!(hero.state().is_free());

    run(&mut hero, 800, 820, 10);
    assert_eq!(hero.state_name(), Pushing::NAME);
}

/// A hero right of a block, facing it and pulling it with the action held.
fn pulling_block_on_the_left(world: &World) -> Hero {
    world
        .map
        .add_entity(BLOCK, FakeEntity::block(Point::new(0, 0)));
    let mut hero = world.spawn_hero(Point::new(16, 0));
    hero.set_direction(Direction4::Left);
    hero.set_facing_entity(Some(BLOCK));

    world.commands.press(Command::Action);
    hero.notify_command_pressed(Command::Action);
    world.commands.want(Some(Direction8::Right));
    hero.update(Tick(10));
    assert_eq!(hero.state_name(), Pulling::NAME);
    hero.update(Tick(20));
    assert!(hero.state().is_moving_grabbed_entity());
    hero
}

#[test]
fn pull_with_action_and_a_direction_ends_grabbing() {
    let world = World::new();
    let mut hero = pulling_block_on_the_left(&world);

    run(&mut hero, 20, 420, 5);

    assert_eq!(hero.state_name(), Grabbing::NAME);
    assert_eq!(world.map.entity_position(BLOCK), Some(Point::new(16, 0)));
    assert_eq!(hero.position(), Point::new(32, 0));
}

#[test]
fn pull_with_action_but_no_direction_ends_free() {
    let world = World::new();
    let mut hero = pulling_block_on_the_left(&world);

    world.commands.want(None);
    run(&mut hero, 20, 420, 5);

    assert_eq!(hero.state_name(), Free::NAME);
    assert_eq!(world.map.entity_position(BLOCK), Some(Point::new(16, 0)));
}

//! The skirmish map.
//!
//! ```text
//!        y
//!        ▲
//!   1200 ┤                  Sniper_0
//!        │        ██ wall
//!    600 ┤   ┌─────┐ ObjectiveMaj_North
//!    400 ┤   └─────┘               Grunt_1
//!        │
//!      0 ┼ P1 ───────────► Grunt_0         Turret_0
//!        └──┬─────┬─────┬─────┬─────┬──► x
//!           0    400   800  1200  1600
//! ```

use ec_core::{Aabb, ActorId, Vec3};
use ec_world::{ActorKind, Arena, ArenaBuilder, WorldResult};

/// Actor ids the scenario refers to.
pub struct Actors {
    pub player:     ActorId,
    pub objective:  ActorId,
    /// Present to show the marker filter; never cached.
    pub supply:     ActorId,
    /// `(actor, unit type)` in spawn order.
    pub units:      Vec<(ActorId, &'static str)>,
}

pub fn build_arena() -> WorldResult<(Arena, Actors)> {
    let mut b = ArenaBuilder::new();

    let player = b.add_actor(ActorKind::Player, "P1", Vec3::new(0.0, 0.0, 0.0));

    let objective = b.add_actor(ActorKind::Objective, "ObjectiveMaj_North", Vec3::new(500.0, 500.0, 0.0));
    b.add_guard_area(
        objective,
        Aabb::from_corners(Vec3::new(400.0, 400.0, 0.0), Vec3::new(600.0, 600.0, 0.0)),
    )?;
    let supply = b.add_actor(ActorKind::Objective, "SupplyCache", Vec3::new(-300.0, 200.0, 0.0));

    let units = vec![
        (b.add_actor(ActorKind::Unit, "Grunt_0", Vec3::new(900.0, 0.0, 0.0)), "Grunt"),
        (b.add_actor(ActorKind::Unit, "Grunt_1", Vec3::new(1400.0, 450.0, 0.0)), "Grunt"),
        (b.add_actor(ActorKind::Unit, "Sniper_0", Vec3::new(1300.0, 1200.0, 0.0)), "Sniper"),
        (b.add_actor(ActorKind::Unit, "Turret_0", Vec3::new(1700.0, 0.0, 0.0)), "Turret"),
    ];

    // Wall between the player's lane and the sniper's perch.
    b.add_occluder(Aabb::from_corners(
        Vec3::new(500.0, 800.0, -100.0),
        Vec3::new(1100.0, 850.0, 400.0),
    ))?;

    Ok((b.build(), Actors { player, objective, supply, units }))
}

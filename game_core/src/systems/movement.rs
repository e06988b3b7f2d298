use hecs::World;

use crate::components::{MoveIntent, Player};
use crate::config::Config;

/// Apply one tick of player physics: jump impulse or gravity, then the
/// horizontal run and the screen wrap.
///
/// The vertical motion is a discrete arc: while `jump` is positive it moves
/// the player up and decays by one; once it reaches zero `gravity` takes
/// over, growing by one per tick for an accelerating fall. The two counters
/// are never positive at the same time.
pub fn update_player(world: &mut World, config: &Config) {
    for (_entity, (player, intent)) in world.query_mut::<(&mut Player, &MoveIntent)>() {
        if player.jump == 0 {
            player.pos.y += player.gravity as f32;
            player.gravity += 1;
        } else {
            player.pos.y -= player.jump as f32;
            player.jump -= 1;
        }

        player.xmove = intent.dir as f32 * config.run_speed;
        player.pos.x += player.xmove;
        player.pos.x = config.wrap_x(player.pos.x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_player;
    use glam::Vec2;

    fn player_of(world: &World, entity: hecs::Entity) -> Player {
        *world.get::<&Player>(entity).unwrap()
    }

    #[test]
    fn test_fall_accelerates() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_player(&mut world, Vec2::new(400.0, 400.0));

        update_player(&mut world, &config);
        let p = player_of(&world, entity);
        assert_eq!(p.pos.y, 400.0, "First falling tick moves by the zero accumulator");
        assert_eq!(p.gravity, 1);

        update_player(&mut world, &config);
        update_player(&mut world, &config);
        let p = player_of(&world, entity);
        assert_eq!(p.pos.y, 403.0, "400 + 0 + 1 + 2");
        assert_eq!(p.gravity, 3);
    }

    #[test]
    fn test_jump_decays_then_gravity_takes_over() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_player(&mut world, Vec2::new(400.0, 400.0));
        {
            let mut p = world.get::<&mut Player>(entity).unwrap();
            p.jump = 3;
        }

        update_player(&mut world, &config);
        update_player(&mut world, &config);
        update_player(&mut world, &config);
        let p = player_of(&world, entity);
        assert_eq!(p.pos.y, 394.0, "400 - 3 - 2 - 1");
        assert_eq!(p.jump, 0);
        assert_eq!(p.gravity, 0, "Gravity only starts after the impulse is spent");

        update_player(&mut world, &config);
        let p = player_of(&world, entity);
        assert_eq!(p.gravity, 1);
    }

    #[test]
    fn test_never_jumping_and_falling_at_once() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_player(&mut world, Vec2::new(400.0, 400.0));
        {
            let mut p = world.get::<&mut Player>(entity).unwrap();
            p.jump = 20;
        }

        for _ in 0..60 {
            update_player(&mut world, &config);
            let p = player_of(&world, entity);
            assert!(
                !(p.jump > 0 && p.gravity > 0),
                "jump={} gravity={} must not both be positive",
                p.jump,
                p.gravity
            );
        }
    }

    #[test]
    fn test_horizontal_run() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_player(&mut world, Vec2::new(400.0, 400.0));
        {
            let mut intent = world.get::<&mut MoveIntent>(entity).unwrap();
            intent.dir = 1;
        }

        update_player(&mut world, &config);
        let p = player_of(&world, entity);
        assert_eq!(p.pos.x, 407.0);
        assert_eq!(p.xmove, 7.0);

        {
            let mut intent = world.get::<&mut MoveIntent>(entity).unwrap();
            intent.dir = 0;
        }
        update_player(&mut world, &config);
        let p = player_of(&world, entity);
        assert_eq!(p.pos.x, 407.0, "No intent, no horizontal motion");
        assert_eq!(p.xmove, 0.0);
    }

    #[test]
    fn test_screen_wrap_both_edges() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_player(&mut world, Vec2::new(798.0, 400.0));
        {
            let mut intent = world.get::<&mut MoveIntent>(entity).unwrap();
            intent.dir = 1;
        }
        update_player(&mut world, &config);
        assert_eq!(
            player_of(&world, entity).pos.x,
            -50.0,
            "798 + 7 crosses the right edge"
        );

        {
            let mut intent = world.get::<&mut MoveIntent>(entity).unwrap();
            intent.dir = -1;
        }
        update_player(&mut world, &config);
        assert_eq!(
            player_of(&world, entity).pos.x,
            800.0,
            "-50 - 7 crosses the left margin"
        );
    }
}

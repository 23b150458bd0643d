use crate::systems::contact::{detect_all, resolve_all};

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === KINEMATICS ===
    // Integration, pointer push and wall correction are per-bubble and
    // independent of each other, so one pass covers all three.
    if perf_on {
        let t0 = PerfTimer::start();
        integrate(world);
        world.perf_stats.integrate_ms = t0.elapsed_ms();
    } else {
        integrate(world);
    }

    // === DETECTION ===
    // Runs on the moved positions. Every contact is collected before any is resolved.
    if perf_on {
        let t0 = PerfTimer::start();
        world.contacts = detect_all(&world.bubbles);
        world.perf_stats.detect_ms = t0.elapsed_ms();
    } else {
        world.contacts = detect_all(&world.bubbles);
    }

    // === RESOLUTION ===
    if perf_on {
        let t0 = PerfTimer::start();
        resolve_all(&world.contacts, &mut world.bubbles);
        world.perf_stats.resolve_ms = t0.elapsed_ms();
    } else {
        resolve_all(&world.contacts, &mut world.bubbles);
    }

    if perf_on {
        world.perf_stats.bubble_count = world.bubbles.len() as u32;
        world.perf_stats.contact_count = world.contacts.len() as u32;
        world.perf_stats.max_speed = world
            .bubbles
            .iter()
            .map(|b| b.velocity.length())
            .fold(0.0f32, f32::max);
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    world.frame += 1;
}

/// Detection only. Nothing moves; the frame counter does not advance.
pub(super) fn inspect_contacts(world: &mut WorldCore) -> usize {
    world.contacts = detect_all(&world.bubbles);
    world.contacts.len()
}

fn integrate(world: &mut WorldCore) {
    let max_velocity = world.settings.max_velocity;
    let fix_force = world.settings.fix_force;
    let repel_radius = world.settings.repel_radius;
    let pointer = world.pointer;

    for bubble in world.bubbles.iter_mut() {
        bubble.move_step(max_velocity);
        if let Some(p) = pointer {
            bubble.repel_from(p, repel_radius);
        }
        bubble.collide_borders(fix_force);
    }
}

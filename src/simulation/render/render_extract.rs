use crate::render::Surface;

use super::WorldCore;

pub(super) fn draw<S: Surface + ?Sized>(world: &WorldCore, surface: &mut S) {
    for bubble in world.bubbles.iter() {
        surface.fill_circle(bubble.position, bubble.radius(), bubble.color);
    }
}

pub(super) fn render(world: &mut WorldCore) {
    let background = world.settings.background;

    // Split borrows: the buffers are written while bubbles are read
    let WorldCore { bubbles, contacts, render, .. } = world;

    render.frame_buffer.clear(background);
    render.circles.clear(background);
    for bubble in bubbles.iter() {
        render.frame_buffer.fill_circle(bubble.position, bubble.radius(), bubble.color);
        render.circles.fill_circle(bubble.position, bubble.radius(), bubble.color);
    }

    render.contact_overlay.clear();
    for contact in contacts.iter() {
        render.contact_overlay.extend_from_slice(&[
            contact.center.x,
            contact.center.y,
            contact.axis.x,
            contact.axis.y,
        ]);
    }
}

use super::Bubble;

/// Which viewport walls a bubble currently overlaps
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallContacts {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContacts {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

impl Bubble {
    /// Overlap test against each wall; touching counts.
    pub fn overlapped_walls(&self) -> WallContacts {
        let border = self.border();
        let r = self.radius();
        WallContacts {
            left: self.position.x - r <= 0.0,
            right: self.position.x + r >= border.width,
            top: self.position.y - r <= 0.0,
            bottom: self.position.y + r >= border.height,
        }
    }

    /// Steer the bubble back inside the border.
    ///
    /// Each overlapped wall pushes the velocity away from it by at least
    /// `fix_force`, or by a quarter of the current speed on that axis when the
    /// bubble is driving into the wall faster. The push applies even if the
    /// bubble is already leaving. Position is never touched.
    pub fn collide_borders(&mut self, fix_force: f32) {
        let walls = self.overlapped_walls();

        if walls.left {
            let change = (self.velocity.x * 0.25).min(-fix_force);
            self.velocity.x -= change;
        }
        if walls.right {
            let change = (self.velocity.x * 0.25).max(fix_force);
            self.velocity.x -= change;
        }
        if walls.top {
            let change = (self.velocity.y * 0.25).min(-fix_force);
            self.velocity.y -= change;
        }
        if walls.bottom {
            let change = (self.velocity.y * 0.25).max(fix_force);
            self.velocity.y -= change;
        }
    }
}

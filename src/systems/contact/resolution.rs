use crate::systems::bubble::Bubble;

use super::Contact;

impl Contact {
    /// Elastic exchange of momentum along the center line.
    ///
    /// Masses are `radius²`. Only the center-line component of each velocity
    /// changes; the tangential component along `axis` is kept as is. A pair
    /// already moving apart is left alone and separates by itself.
    pub fn resolve(&self, first: &mut Bubble, second: &mut Bubble) {
        let normal = self.center_line();

        let v1 = first.velocity.dot(normal);
        let v2 = second.velocity.dot(normal);

        // closing speed along first -> second
        if v1 - v2 <= 0.0 {
            return;
        }

        let m1 = first.mass();
        let m2 = second.mass();
        let total = m1 + m2;

        let v1_after = ((m1 - m2) * v1 + 2.0 * m2 * v2) / total;
        let v2_after = ((m2 - m1) * v2 + 2.0 * m1 * v1) / total;

        first.velocity += normal * (v1_after - v1);
        second.velocity += normal * (v2_after - v2);
    }
}

/// Apply `contacts` in order. Ids index into `bubbles`.
///
/// A bubble in several contacts picks up each resolution in turn.
pub fn resolve_all(contacts: &[Contact], bubbles: &mut [Bubble]) {
    for contact in contacts {
        let (i, j) = (contact.first as usize, contact.second as usize);
        if i == j || i >= bubbles.len() || j >= bubbles.len() {
            continue;
        }
        let (first, second) = if i < j {
            let (head, tail) = bubbles.split_at_mut(j);
            (&mut head[i], &mut tail[0])
        } else {
            let (head, tail) = bubbles.split_at_mut(i);
            (&mut tail[0], &mut head[j])
        };
        contact.resolve(first, second);
    }
}

#[cfg(test)]
mod tests {
    use super::super::detect;
    use super::*;
    use crate::core::Vec2;
    use crate::systems::bubble::Border;

    const EPS: f32 = 1e-4;

    fn bubble(id: u32, x: f32, y: f32, r: f32, vx: f32, vy: f32) -> Bubble {
        Bubble::new(id, Vec2::new(x, y), Vec2::new(vx, vy), r, 0, Border::new(800.0, 600.0))
    }

    #[test]
    fn head_on_unequal_masses() {
        let mut a = bubble(0, 100.0, 100.0, 10.0, 4.0, 0.0);
        let mut b = bubble(1, 125.0, 100.0, 20.0, -1.0, 0.0);
        assert_eq!(a.mass(), 100.0);
        assert_eq!(b.mass(), 400.0);

        let contact = detect(&a, &b).unwrap();
        assert!(contact.axis.x.abs() < EPS);
        assert!((contact.axis.y.abs() - 1.0).abs() < EPS);

        contact.resolve(&mut a, &mut b);
        assert!((a.velocity.x + 4.0).abs() < EPS);
        assert!((b.velocity.x - 1.0).abs() < EPS);
        assert!(a.velocity.y.abs() < EPS);
        assert!(b.velocity.y.abs() < EPS);
    }

    #[test]
    fn conserves_momentum_along_center_line() {
        let mut a = bubble(0, 200.0, 200.0, 18.0, 3.0, 1.5);
        let mut b = bubble(1, 225.0, 215.0, 23.0, -2.0, -0.5);
        let contact = detect(&a, &b).unwrap();
        let n = contact.center_line();

        let before = a.mass() * a.velocity.dot(n) + b.mass() * b.velocity.dot(n);
        contact.resolve(&mut a, &mut b);
        let after = a.mass() * a.velocity.dot(n) + b.mass() * b.velocity.dot(n);

        assert!((before - after).abs() < 1e-2 * before.abs().max(1.0));
    }

    #[test]
    fn tangential_component_is_untouched() {
        let mut a = bubble(0, 200.0, 200.0, 18.0, 3.0, 1.5);
        let mut b = bubble(1, 225.0, 215.0, 23.0, -2.0, -0.5);
        let contact = detect(&a, &b).unwrap();
        let t = contact.axis;

        let (ta, tb) = (a.velocity.dot(t), b.velocity.dot(t));
        contact.resolve(&mut a, &mut b);
        assert!((a.velocity.dot(t) - ta).abs() < EPS);
        assert!((b.velocity.dot(t) - tb).abs() < EPS);
    }

    #[test]
    fn equal_masses_swap_normal_speeds() {
        let mut a = bubble(0, 100.0, 100.0, 10.0, 2.0, 0.0);
        let mut b = bubble(1, 115.0, 100.0, 10.0, 0.0, 0.0);
        detect(&a, &b).unwrap().resolve(&mut a, &mut b);
        assert!(a.velocity.x.abs() < EPS);
        assert!((b.velocity.x - 2.0).abs() < EPS);
    }

    #[test]
    fn separating_pair_is_left_alone() {
        let mut a = bubble(0, 100.0, 100.0, 10.0, -1.0, 0.0);
        let mut b = bubble(1, 115.0, 100.0, 10.0, 1.0, 0.0);
        detect(&a, &b).unwrap().resolve(&mut a, &mut b);
        assert_eq!(a.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn resolve_all_accumulates_per_bubble() {
        // middle bubble hit from both sides in the same pass
        let mut bubbles = vec![
            bubble(0, 100.0, 100.0, 10.0, 2.0, 0.0),
            bubble(1, 118.0, 100.0, 10.0, 0.0, 0.0),
            bubble(2, 136.0, 100.0, 10.0, -2.0, 0.0),
        ];
        let contacts = super::super::detect_all(&bubbles);
        assert_eq!(contacts.len(), 2);
        resolve_all(&contacts, &mut bubbles);

        // (0,1): 0 stops, 1 takes +2. (1,2): 1 (+2) and 2 (-2) swap.
        assert!(bubbles[0].velocity.x.abs() < EPS);
        assert!((bubbles[1].velocity.x + 2.0).abs() < EPS);
        assert!((bubbles[2].velocity.x - 2.0).abs() < EPS);
    }
}

use crate::core::Vec2;
use crate::systems::bubble::Bubble;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::Contact;

/// Center line used when two centers coincide
const FALLBACK_CENTER_LINE: Vec2 = Vec2 { x: 1.0, y: 0.0 };

/// Overlap test between two bubbles; touching counts as contact.
pub fn detect(a: &Bubble, b: &Bubble) -> Option<Contact> {
    let diff = b.position - a.position;
    let distance = diff.length();

    if distance > a.radius() + b.radius() {
        return None;
    }

    let unit = if distance > 0.0 { diff / distance } else { FALLBACK_CENTER_LINE };

    let a_surface = a.position + unit * a.radius();
    let b_surface = b.position - unit * b.radius();

    Some(Contact {
        first: a.id,
        second: b.id,
        center: a_surface.midpoint(b_surface),
        axis: unit.rotate_90().normalize(),
    })
}

/// Every contact among `bubbles`, pairs `(i, j)` with `i < j` in index order.
#[cfg(feature = "parallel")]
pub fn detect_all(bubbles: &[Bubble]) -> Vec<Contact> {
    // collect() keeps the sequential pair order
    bubbles
        .par_iter()
        .enumerate()
        .flat_map_iter(move |(i, a)| bubbles[i + 1..].iter().filter_map(move |b| detect(a, b)))
        .collect()
}

/// Every contact among `bubbles`, pairs `(i, j)` with `i < j` in index order.
#[cfg(not(feature = "parallel"))]
pub fn detect_all(bubbles: &[Bubble]) -> Vec<Contact> {
    let mut contacts = Vec::new();
    for (i, a) in bubbles.iter().enumerate() {
        for b in bubbles[i + 1..].iter() {
            if let Some(contact) = detect(a, b) {
                contacts.push(contact);
            }
        }
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::bubble::Border;

    fn bubble(id: u32, x: f32, y: f32, r: f32) -> Bubble {
        Bubble::new(id, Vec2::new(x, y), Vec2::zero(), r, 0, Border::new(800.0, 600.0))
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn separated_bubbles_have_no_contact() {
        assert!(detect(&bubble(0, 100.0, 100.0, 10.0), &bubble(1, 131.0, 100.0, 20.0)).is_none());
    }

    #[test]
    fn touching_counts_as_contact() {
        assert!(detect(&bubble(0, 100.0, 100.0, 10.0), &bubble(1, 130.0, 100.0, 20.0)).is_some());
    }

    #[test]
    fn center_sits_between_surface_points() {
        let c = detect(&bubble(0, 100.0, 100.0, 10.0), &bubble(1, 125.0, 100.0, 20.0)).unwrap();
        // surfaces at x = 110 and x = 105
        assert!(close(c.center, Vec2::new(107.5, 100.0)));
        assert!(close(c.axis, Vec2::new(0.0, 1.0)));
        assert!(close(c.center_line(), Vec2::new(1.0, 0.0)));
        assert_eq!((c.first, c.second), (0, 1));
    }

    #[test]
    fn detection_is_symmetric() {
        let a = bubble(0, 50.0, 60.0, 12.0);
        let b = bubble(1, 70.0, 75.0, 15.0);
        let ab = detect(&a, &b).unwrap();
        let ba = detect(&b, &a).unwrap();
        assert!(close(ab.center, ba.center));
        assert!(close(ab.axis, -ba.axis));

        let far = bubble(2, 200.0, 200.0, 5.0);
        assert_eq!(detect(&a, &far).is_some(), detect(&far, &a).is_some());
    }

    #[test]
    fn coincident_centers_use_fallback_axis() {
        let c = detect(&bubble(0, 100.0, 100.0, 10.0), &bubble(1, 100.0, 100.0, 10.0)).unwrap();
        assert!(c.axis.x.is_finite() && c.axis.y.is_finite());
        assert!(close(c.axis, Vec2::new(0.0, 1.0)));
        assert!((c.axis.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn detect_all_orders_pairs_by_index() {
        let bubbles = vec![
            bubble(0, 100.0, 100.0, 20.0),
            bubble(1, 120.0, 100.0, 20.0),
            bubble(2, 140.0, 100.0, 20.0),
            bubble(3, 500.0, 500.0, 20.0),
        ];
        let pairs: Vec<(u32, u32)> = detect_all(&bubbles).iter().map(|c| (c.first, c.second)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }
}

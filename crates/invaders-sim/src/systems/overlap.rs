//! Built-in collision source: reports pairs whose bounds begin to overlap.
//!
//! Only category pairs that can contact are checked. A pair that stays
//! overlapping is reported once, when the overlap begins.

use std::collections::HashSet;

use hecs::{Entity, World};

use invaders_core::enums::EntityCategory;
use invaders_core::types::Bounds;

use crate::contact::ContactEvent;
use crate::registry;

#[derive(Debug, Default)]
pub struct ContactDetector {
    touching: HashSet<(Entity, Entity)>,
}

impl ContactDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all remembered overlaps (round teardown).
    pub fn reset(&mut self) {
        self.touching.clear();
    }

    /// Scan the world and return contacts that began since the last scan.
    pub fn detect(&mut self, world: &World, tick: u64) -> Vec<ContactEvent> {
        let bodies: Vec<(Entity, EntityCategory, Bounds)> = world
            .query::<&Bounds>()
            .iter()
            .filter_map(|(entity, bounds)| {
                registry::category_of(world, entity).map(|category| (entity, category, *bounds))
            })
            .collect();

        let mut now_touching = HashSet::new();
        let mut began = Vec::new();

        for (i, &(a, a_category, a_bounds)) in bodies.iter().enumerate() {
            for &(b, b_category, b_bounds) in &bodies[i + 1..] {
                if !a_category.can_contact(b_category) || !a_bounds.intersects(&b_bounds) {
                    continue;
                }
                let contact = ContactEvent::new(a, b, tick);
                let key = contact.key();
                if !self.touching.contains(&key) {
                    began.push(contact);
                }
                now_touching.insert(key);
            }
        }

        self.touching = now_touching;
        began
    }
}

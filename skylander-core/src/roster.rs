use crate::plane::Plane;
use glam::Vec3;
use thiserror::Error;

pub const MAX_PLANES: usize = 4;

pub type PlaneSlots = [Plane; MAX_PLANES];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("roster already holds {} planes", MAX_PLANES)]
    Full,
    #[error("plane index {index} out of range for {count} planes")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Fixed-capacity list of planes with one active (controlled) entry.
#[derive(Debug, Clone)]
pub struct Roster {
    slots: PlaneSlots,
    count: usize,
    active_index: usize,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            slots: [Plane::default(); MAX_PLANES],
            count: 0,
            active_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == MAX_PLANES
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn planes(&self) -> &[Plane] {
        &self.slots[..self.count]
    }

    pub fn planes_mut(&mut self) -> &mut [Plane] {
        &mut self.slots[..self.count]
    }

    pub fn get(&self, index: usize) -> Option<&Plane> {
        self.planes().get(index)
    }

    pub fn active(&self) -> Option<&Plane> {
        self.planes().get(self.active_index)
    }

    pub fn active_mut(&mut self) -> Option<&mut Plane> {
        let index = self.active_index;
        self.planes_mut().get_mut(index)
    }

    /// Appends a plane offset along x by `separation` per plane already present.
    pub fn add(&mut self, spawn: Vec3, separation: f32) -> Result<usize, RosterError> {
        if self.is_full() {
            return Err(RosterError::Full);
        }

        let index = self.count;
        let offset = Vec3::new(index as f32 * separation, 0.0, 0.0);
        self.slots[index] = Plane::spawn(spawn + offset);
        self.count += 1;
        Ok(index)
    }

    pub fn remove(&mut self, index: usize) -> Result<Plane, RosterError> {
        self.check_index(index)?;

        let removed = self.slots[index];
        let removed_active = index == self.active_index;

        self.slots[index..self.count].rotate_left(1);
        self.count -= 1;
        self.slots[self.count] = Plane::default();

        if self.count > 0 {
            if removed_active {
                self.active_index = 0;
            } else if index < self.active_index {
                self.active_index -= 1;
            }
        }

        Ok(removed)
    }

    pub fn select(&mut self, index: usize) -> Result<(), RosterError> {
        self.check_index(index)?;
        self.active_index = index;
        Ok(())
    }

    /// Clears every slot and spawns a single plane at `spawn`.
    pub fn reset(&mut self, spawn: Vec3) {
        self.slots = [Plane::default(); MAX_PLANES];
        self.slots[0] = Plane::spawn(spawn);
        self.count = 1;
        self.active_index = 0;
    }

    /// Flips autopilot on the active plane and returns the new state.
    pub fn toggle_autopilot(&mut self) -> Option<bool> {
        let plane = self.active_mut()?;
        plane.autopilot = !plane.autopilot;
        Some(plane.autopilot)
    }

    fn check_index(&self, index: usize) -> Result<(), RosterError> {
        if index >= self.count {
            return Err(RosterError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        Ok(())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPAWN: Vec3 = Vec3::new(-1000.0, 5500.0, 19000.0);
    const SEPARATION: f32 = 150.0;

    fn roster_with(count: usize) -> Roster {
        let mut roster = Roster::new();
        for _ in 0..count {
            roster.add(SPAWN, SEPARATION).unwrap();
        }
        roster
    }

    #[test]
    fn add_offsets_each_plane_along_x() {
        let roster = roster_with(3);

        let xs: Vec<f32> = roster.planes().iter().map(|plane| plane.position.x).collect();
        assert_eq!(xs, vec![-1000.0, -850.0, -700.0]);
        assert!(roster.planes().iter().all(|plane| plane.position.y == SPAWN.y));
        assert!(roster.planes().iter().all(|plane| plane.active));
    }

    #[test]
    fn add_beyond_capacity_is_a_no_op() {
        let mut roster = roster_with(MAX_PLANES);
        let before = roster.planes().to_vec();

        assert_eq!(roster.add(SPAWN, SEPARATION), Err(RosterError::Full));
        assert_eq!(roster.len(), MAX_PLANES);
        assert_eq!(roster.planes(), before.as_slice());
    }

    #[test]
    fn removing_active_plane_resets_selection_to_first() {
        let mut roster = roster_with(3);
        roster.select(2).unwrap();

        roster.remove(2).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.active_index(), 0);
    }

    #[test]
    fn removing_earlier_plane_keeps_selection_on_same_plane() {
        let mut roster = roster_with(4);
        roster.select(2).unwrap();
        let selected = roster.active().unwrap().position;

        roster.remove(0).unwrap();

        assert_eq!(roster.active_index(), 1);
        assert_eq!(roster.active().unwrap().position, selected);
    }

    #[test]
    fn removing_later_plane_leaves_selection_alone() {
        let mut roster = roster_with(3);
        roster.select(1).unwrap();

        roster.remove(2).unwrap();

        assert_eq!(roster.active_index(), 1);
    }

    #[test]
    fn remove_compacts_and_clears_vacated_slot() {
        let mut roster = roster_with(3);
        let third = roster.planes()[2].position;

        let removed = roster.remove(1).unwrap();

        assert_eq!(removed.position.x, -850.0);
        assert_eq!(roster.planes()[1].position, third);
        assert!(!roster.slots[2].active);
    }

    #[test]
    fn remove_keeps_active_index_in_range() {
        for count in 1..=MAX_PLANES {
            for active in 0..count {
                for removed in 0..count {
                    let mut roster = roster_with(count);
                    roster.select(active).unwrap();
                    roster.remove(removed).unwrap();

                    if !roster.is_empty() {
                        assert!(roster.active_index() < roster.len());
                    }
                }
            }
        }
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let mut roster = roster_with(2);

        assert_eq!(
            roster.select(2),
            Err(RosterError::IndexOutOfRange { index: 2, count: 2 })
        );
        assert!(roster.remove(5).is_err());
        assert_eq!(roster.len(), 2);
        assert!(Roster::new().select(0).is_err());
    }

    #[test]
    fn reset_leaves_single_manual_plane_at_spawn() {
        let mut roster = roster_with(4);
        roster.select(3).unwrap();
        roster.toggle_autopilot();

        roster.reset(SPAWN);

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.active_index(), 0);
        let plane = roster.active().unwrap();
        assert_eq!(plane.position, SPAWN);
        assert!(!plane.autopilot);
        assert!(roster.slots[1..].iter().all(|slot| !slot.active));
    }

    #[test]
    fn toggle_autopilot_targets_active_plane() {
        let mut roster = roster_with(2);
        roster.select(1).unwrap();

        assert_eq!(roster.toggle_autopilot(), Some(true));
        assert!(roster.planes()[1].autopilot);
        assert!(!roster.planes()[0].autopilot);
        assert_eq!(Roster::new().toggle_autopilot(), None);
    }
}

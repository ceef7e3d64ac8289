use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
            TimeSlot::Night => "Night",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }
}

/// `{ timeSlot: { day: bool } }`; cells are independent, a missing cell is
/// unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(BTreeMap<TimeSlot, BTreeMap<Day, bool>>);

impl WeeklySchedule {
    pub fn is_available(&self, slot: TimeSlot, day: Day) -> bool {
        self.0
            .get(&slot)
            .and_then(|days| days.get(&day))
            .copied()
            .unwrap_or(false)
    }

    /// Unavailable cells are dropped so equal grids compare equal
    pub fn set(&mut self, slot: TimeSlot, day: Day, available: bool) {
        if available {
            self.0.entry(slot).or_default().insert(day, true);
        } else if let Some(days) = self.0.get_mut(&slot) {
            days.remove(&day);
            if days.is_empty() {
                self.0.remove(&slot);
            }
        }
    }

    pub fn toggle(&mut self, slot: TimeSlot, day: Day) {
        let current = self.is_available(slot, day);
        self.set(slot, day, !current);
    }

    pub fn available_cells(&self) -> usize {
        self.0
            .values()
            .flat_map(|days| days.values())
            .filter(|v| **v)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_cell() {
        let mut schedule = WeeklySchedule::default();
        let before = schedule.is_available(TimeSlot::Morning, Day::Tue);
        schedule.toggle(TimeSlot::Morning, Day::Tue);
        assert_ne!(schedule.is_available(TimeSlot::Morning, Day::Tue), before);
        schedule.toggle(TimeSlot::Morning, Day::Tue);
        assert_eq!(schedule.is_available(TimeSlot::Morning, Day::Tue), before);
        assert_eq!(schedule, WeeklySchedule::default());
    }

    #[test]
    fn test_cells_are_independent() {
        let mut schedule = WeeklySchedule::default();
        schedule.toggle(TimeSlot::Night, Day::Sat);
        schedule.toggle(TimeSlot::Night, Day::Sun);
        schedule.toggle(TimeSlot::Morning, Day::Sat);
        assert!(schedule.is_available(TimeSlot::Night, Day::Sat));
        assert!(!schedule.is_available(TimeSlot::Evening, Day::Sat));
        assert_eq!(schedule.available_cells(), 3);
    }

    #[test]
    fn test_wire_shape() {
        let mut schedule = WeeklySchedule::default();
        schedule.set(TimeSlot::Morning, Day::Tue, true);
        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(json, r#"{"Morning":{"Tue":true}}"#);
        let back: WeeklySchedule =
            serde_json::from_str(r#"{"Evening":{"Fri":true,"Sat":false}}"#).unwrap();
        assert!(back.is_available(TimeSlot::Evening, Day::Fri));
        assert!(!back.is_available(TimeSlot::Evening, Day::Sat));
    }
}

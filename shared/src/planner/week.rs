//! Fixed seven-day container
//!
//! Every weekday always has a value. Serialized as a JSON object keyed by
//! day name in Monday..Sunday order; days missing from stored data load
//! as `T::default()`.

use super::weekday::Day;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyPlan<T> {
    days: [T; 7],
}

impl<T: Default> Default for WeeklyPlan<T> {
    fn default() -> Self {
        Self {
            days: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T> WeeklyPlan<T> {
    pub fn iter(&self) -> impl Iterator<Item = (Day, &T)> {
        Day::ALL.into_iter().zip(self.days.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.days.iter()
    }
}

impl<T> Index<Day> for WeeklyPlan<T> {
    type Output = T;

    fn index(&self, day: Day) -> &T {
        &self.days[day.index()]
    }
}

impl<T> IndexMut<Day> for WeeklyPlan<T> {
    fn index_mut(&mut self, day: Day) -> &mut T {
        &mut self.days[day.index()]
    }
}

impl<T: Serialize> Serialize for WeeklyPlan<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(7))?;
        for (day, value) in self.iter() {
            map.serialize_entry(day.name(), value)?;
        }
        map.end()
    }
}

impl<'de, T> Deserialize<'de> for WeeklyPlan<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut by_day: HashMap<Day, T> = HashMap::deserialize(deserializer)?;
        let mut plan = WeeklyPlan::default();
        for day in Day::ALL {
            if let Some(value) = by_day.remove(&day) {
                plan[day] = value;
            }
        }
        Ok(plan)
    }
}

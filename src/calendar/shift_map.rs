//! Shift category lookup by id.

use std::collections::HashMap;

use crate::models::ShiftCategory;

/// An id-to-category dictionary built once from the shift-category list.
///
/// # Example
///
/// ```
/// use shift_calendar_engine::calendar::ShiftMap;
/// use shift_calendar_engine::models::ShiftCategory;
/// use chrono::NaiveTime;
///
/// let map = ShiftMap::build(vec![ShiftCategory {
///     id: 3,
///     name: "Morning".to_string(),
///     work_start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     work_end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
/// }]);
///
/// assert_eq!(map.lookup(3).map(|c| c.name.as_str()), Some("Morning"));
/// assert!(map.lookup(99).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftMap {
    categories: HashMap<i64, ShiftCategory>,
}

impl ShiftMap {
    /// Builds the map from a list of categories.
    ///
    /// A later category with the same id replaces an earlier one.
    pub fn build<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = ShiftCategory>,
    {
        let categories = categories
            .into_iter()
            .map(|category| (category.id, category))
            .collect();
        Self { categories }
    }

    /// Looks up a category by id. `None` is treated as "no shift" by callers.
    pub fn lookup(&self, id: i64) -> Option<&ShiftCategory> {
        self.categories.get(&id)
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if no categories are loaded.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterates over all categories in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ShiftCategory> {
        self.categories.values()
    }
}

//! Staff directory records and their shift assignments.

use serde::{Deserialize, Serialize};

use super::ShiftAssignment;

/// A staff member as supplied by the staff directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Department the staff member belongs to.
    #[serde(default)]
    pub department: String,
    /// Job role or title.
    #[serde(default)]
    pub role: String,
}

impl Staff {
    /// Returns true if the staff member belongs to the named department.
    ///
    /// Comparison ignores ASCII case and surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calendar_engine::models::Staff;
    ///
    /// let staff = Staff {
    ///     id: "s-001".to_string(),
    ///     name: "Kim".to_string(),
    ///     department: "Nursing".to_string(),
    ///     role: "RN".to_string(),
    /// };
    /// assert!(staff.in_department("nursing"));
    /// assert!(!staff.in_department("Kitchen"));
    /// ```
    pub fn in_department(&self, department: &str) -> bool {
        self.department
            .trim()
            .eq_ignore_ascii_case(department.trim())
    }
}

/// A staff member together with the shift assignments configured for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffSchedule {
    /// The staff member.
    pub staff: Staff,
    /// The staff member's assignments, in the order the assignment service
    /// returned them.
    #[serde(default)]
    pub assignments: Vec<ShiftAssignment>,
}

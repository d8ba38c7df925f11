//! Employee reference model.

use serde::{Deserialize, Serialize};

/// The employee a set of time entries belongs to.
///
/// The engine only needs the identifier for grouping and the display name
/// for line items; the full employee record lives with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name used on rendered line items.
    pub name: String,
}

impl Employee {
    /// Creates a new employee reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use overtime_billing::models::Employee;
    ///
    /// let employee = Employee::new("emp_001", "Alex Martin");
    /// assert_eq!(employee.id, "emp_001");
    /// assert_eq!(employee.name, "Alex Martin");
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

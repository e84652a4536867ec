// 🎓 Student Entity - Roster record
//
// A student is created once at registration and never deleted. The room
// label and fee balance are the only fields that change afterwards, and
// only the registry is allowed to change them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Room label a student carries before any allocation.
pub const UNASSIGNED: &str = "Unassigned";

// ============================================================================
// STUDENT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Positive numeric identifier, unique across the roster
    pub id: u32,

    /// Display name; never empty, never contains digits
    pub name: String,

    /// Canonical label of the assigned room, or [`UNASSIGNED`]
    pub room_label: String,

    /// Check-in date exactly as the user typed it (free-form)
    pub check_in_date: String,

    /// Outstanding balance; never negative
    pub fees_due: f64,

    /// When this record entered the roster
    pub registered_at: DateTime<Utc>,
}

impl Student {
    /// Create a fresh, unassigned roster record.
    pub fn new(id: u32, name: String, check_in_date: String, fees_due: f64) -> Self {
        Student {
            id,
            name,
            room_label: UNASSIGNED.to_string(),
            check_in_date,
            fees_due,
            registered_at: Utc::now(),
        }
    }

    /// Whether this student currently holds a room.
    pub fn is_assigned(&self) -> bool {
        self.room_label != UNASSIGNED
    }

    /// Whether there is any balance left to pay.
    pub fn has_fees_due(&self) -> bool {
        self.fees_due > 0.0
    }

    /// One fixed-width roster line: id, name, room, check-in date, balance.
    pub fn display_line(&self) -> String {
        format!(
            "{:<5} {:<20} {:<15} {:<12} ${:<10.2}",
            self.id, self.name, self.room_label, self.check_in_date, self.fees_due
        )
    }
}

/// Validated registration input, assembled by the console port.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub id: u32,
    pub name: String,
    pub check_in_date: String,
    pub fees_due: f64,
}

// ============================================================================
// TESTS
// ============================================================================

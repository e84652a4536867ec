// 🚪 Room Entity - Fixed inventory slot
//
// The pool holds exactly [`ROOM_COUNT`] rooms, labelled "R1".."R100" at
// construction and never relabelled or resized. Occupancy and occupant are
// always written together by the registry, so no caller can observe a
// half-allocated room.

use serde::{Deserialize, Serialize};

use crate::error::AllocationError;

/// Size of the fixed room pool.
pub const ROOM_COUNT: u32 = 100;

/// Prefix letter every canonical room label starts with.
pub const LABEL_PREFIX: char = 'R';

// ============================================================================
// ROOM TYPE (advisory)
// ============================================================================

/// Seating class requested at allocation. Advisory only: it is recorded on
/// the room but never filters which rooms match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    OneSeater,
    TwoSeater,
    FourSeater,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::OneSeater => "1-seater",
            RoomType::TwoSeater => "2-seater",
            RoomType::FourSeater => "4-seater",
        }
    }

    /// Parse the menu's free-text room type, case-insensitively.
    pub fn parse(input: &str) -> Option<RoomType> {
        match input.trim().to_lowercase().as_str() {
            "1-seater" | "1" => Some(RoomType::OneSeater),
            "2-seater" | "2" => Some(RoomType::TwoSeater),
            "4-seater" | "4" => Some(RoomType::FourSeater),
            _ => None,
        }
    }
}

/// Advisory preferences captured with an allocation request. Pass-through
/// metadata: stored on the room, never consulted during matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomPreferences {
    pub room_type: RoomType,
    pub attached_washroom: bool,
}

// ============================================================================
// ROOM ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Canonical label, "R" + number in [1, 100]; fixed at construction
    pub label: String,

    /// Occupancy flag; true iff `occupant_id` is set
    pub occupied: bool,

    /// Id of the student holding this room, `None` when vacant
    pub occupant_id: Option<u32>,

    /// Advisory preferences recorded at allocation (extensible)
    pub metadata: serde_json::Value,
}

impl Room {
    /// Create a vacant room with the canonical label for `number`.
    pub fn new(number: u32) -> Self {
        Room {
            label: format!("{}{}", LABEL_PREFIX, number),
            occupied: false,
            occupant_id: None,
            metadata: serde_json::json!({}),
        }
    }

    pub fn is_vacant(&self) -> bool {
        !self.occupied
    }
}

// ============================================================================
// LABEL NORMALIZATION
// ============================================================================

/// Normalize a user-supplied room label into canonical "R{n}" form.
///
/// Accepts "5", "R5", "r5", or zero-padded digits ("R05" → "R5"). The prefix
/// is prepended when missing and uppercased when present.
///
/// # Errors
///
/// * `InvalidFormat` - remainder after the prefix is not a number
/// * `OutOfRange` - number is outside [1, 100]
pub fn normalize_room_label(input: &str) -> Result<String, AllocationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AllocationError::InvalidFormat(input.to_string()));
    }

    let digits = match trimmed.chars().next() {
        Some(c) if c.eq_ignore_ascii_case(&LABEL_PREFIX) => &trimmed[1..],
        Some(_) => trimmed,
        None => unreachable!("empty input handled above"),
    };

    let number: u32 = digits
        .parse()
        .map_err(|_| AllocationError::InvalidFormat(input.to_string()))?;

    if number < 1 || number > ROOM_COUNT {
        return Err(AllocationError::OutOfRange(number));
    }

    Ok(format!("{}{}", LABEL_PREFIX, number))
}

// ============================================================================
// TESTS
// ============================================================================

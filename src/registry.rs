// 🏠 Hostel Registry - Owns the roster and the room pool
//
// The registry is the only mutator of both collections. Construction gives
// an empty roster and exactly 100 vacant rooms; rooms are never added,
// removed, or relabelled afterwards. All lookups are linear scans, which is
// plenty at this scale (≤ a few hundred students, 100 rooms).

use crate::entities::{
    normalize_room_label, NewStudent, Room, RoomPreferences, Student, ROOM_COUNT,
};
use crate::error::{AllocationError, PaymentError, RegistrationError};

// ============================================================================
// OPERATION RESULTS
// ============================================================================

/// Successful allocation, ready for the console to report.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub student_id: u32,
    pub student_name: String,
    pub room_label: String,
}

/// What a fee payment did to the balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentOutcome {
    /// Balance was already zero; nothing was charged
    NoFeesDue,
    /// Payment covered the full balance; `change` may be zero
    Settled { change: f64 },
    /// Payment covered part of the balance
    Partial { remaining: f64 },
}

/// Everything the allocation screen needs in one request.
#[derive(Debug, Clone)]
pub struct AllocationRequest {
    pub student_id: u32,
    /// Raw label as typed; normalized by the registry
    pub desired_room: String,
    /// Advisory only, recorded but never used for matching
    pub preferences: RoomPreferences,
}

// ============================================================================
// HOSTEL REGISTRY
// ============================================================================

pub struct Hostel {
    students: Vec<Student>,
    rooms: Vec<Room>,
}

impl Hostel {
    /// Empty roster, full pool of vacant rooms R1..R100.
    pub fn new() -> Self {
        Hostel {
            students: Vec::new(),
            rooms: (1..=ROOM_COUNT).map(Room::new).collect(),
        }
    }

    // ========================================================================
    // REGISTRATION
    // ========================================================================

    /// Append a validated student to the roster.
    ///
    /// Duplicate ids are rejected so that every later lookup by id is
    /// unambiguous. Returns a copy of the stored record.
    pub fn register(&mut self, input: NewStudent) -> Result<Student, RegistrationError> {
        let name = input.name.trim();
        if name.is_empty() || name.chars().any(|c| c.is_ascii_digit()) {
            return Err(RegistrationError::InvalidName(input.name));
        }
        if !(input.fees_due >= 0.0) {
            // Also catches NaN
            return Err(RegistrationError::NegativeFees);
        }
        if self.students.iter().any(|s| s.id == input.id) {
            return Err(RegistrationError::DuplicateId(input.id));
        }

        let student = Student::new(input.id, name.to_string(), input.check_in_date, input.fees_due);
        self.students.push(student.clone());
        Ok(student)
    }

    // ========================================================================
    // ALLOCATION
    // ========================================================================

    /// Allocate a vacant room to an unassigned student.
    ///
    /// The room label is normalized first ("5", "r5", "R05" all mean "R5").
    /// The room is checked before the student, so an occupied room reports
    /// `Unavailable` even when the student id is unknown. On success the
    /// room's occupancy, its occupant id, and the student's room label are
    /// updated together; every failure leaves both entities untouched.
    pub fn allocate(&mut self, request: AllocationRequest) -> Result<Allocation, AllocationError> {
        let label = normalize_room_label(&request.desired_room)?;

        let room_idx = self
            .rooms
            .iter()
            .position(|r| r.label == label && r.is_vacant())
            .ok_or_else(|| AllocationError::Unavailable(label.clone()))?;

        let student_idx = self
            .students
            .iter()
            .position(|s| s.id == request.student_id)
            .ok_or(AllocationError::StudentNotFound(request.student_id))?;

        if self.students[student_idx].is_assigned() {
            return Err(AllocationError::AlreadyAssigned {
                student_id: request.student_id,
                room: self.students[student_idx].room_label.clone(),
            });
        }

        // Joint update: no caller can observe one side without the other
        let room = &mut self.rooms[room_idx];
        room.occupied = true;
        room.occupant_id = Some(request.student_id);
        room.metadata = serde_json::json!({
            "room_type": request.preferences.room_type.as_str(),
            "attached_washroom": request.preferences.attached_washroom,
        });
        self.students[student_idx].room_label = label.clone();

        Ok(Allocation {
            student_id: request.student_id,
            student_name: self.students[student_idx].name.clone(),
            room_label: label,
        })
    }

    // ========================================================================
    // FEES
    // ========================================================================

    /// Apply a payment to a student's balance.
    ///
    /// The balance is clamped at zero: paying more than is due reports the
    /// difference as change, and no sequence of payments can drive the
    /// balance negative.
    pub fn pay_fees(&mut self, student_id: u32, amount: f64) -> Result<PaymentOutcome, PaymentError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == student_id)
            .ok_or(PaymentError::StudentNotFound(student_id))?;

        if !student.has_fees_due() {
            return Ok(PaymentOutcome::NoFeesDue);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(PaymentError::InvalidAmount(amount));
        }

        if amount >= student.fees_due {
            let change = amount - student.fees_due;
            student.fees_due = 0.0;
            Ok(PaymentOutcome::Settled { change })
        } else {
            student.fees_due -= amount;
            Ok(PaymentOutcome::Partial {
                remaining: student.fees_due,
            })
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// All students, in registration order. Empty roster is a normal state.
    pub fn list_students(&self) -> &[Student] {
        &self.students
    }

    /// First student with this id (ids are unique once registered).
    pub fn find_student(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Labels of all vacant rooms, in fixed pool order R1..R100.
    pub fn available_rooms(&self) -> Vec<&str> {
        self.rooms
            .iter()
            .filter(|r| r.is_vacant())
            .map(|r| r.label.as_str())
            .collect()
    }

    pub fn vacant_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.is_vacant()).count()
    }

    /// Room by canonical label, occupied or not.
    pub fn find_room(&self, label: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.label == label)
    }
}

impl Default for Hostel {
    fn default() -> Self {
        Hostel::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{RoomType, UNASSIGNED};

    fn new_student(id: u32, name: &str, fees: f64) -> NewStudent {
        NewStudent {
            id,
            name: name.to_string(),
            check_in_date: "2024-01-10".to_string(),
            fees_due: fees,
        }
    }

    fn any_preferences() -> RoomPreferences {
        RoomPreferences {
            room_type: RoomType::TwoSeater,
            attached_washroom: false,
        }
    }

    fn request(id: u32, room: &str) -> AllocationRequest {
        AllocationRequest {
            student_id: id,
            desired_room: room.to_string(),
            preferences: any_preferences(),
        }
    }

    #[test]
    fn test_new_hostel_has_full_pool_and_empty_roster() {
        let hostel = Hostel::new();

        assert!(hostel.list_students().is_empty());
        assert_eq!(hostel.vacant_count(), 100);

        let rooms = hostel.available_rooms();
        assert_eq!(rooms.len(), 100);
        assert_eq!(rooms[0], "R1");
        assert_eq!(rooms[99], "R100");
    }

    #[test]
    fn test_register_defaults() {
        let mut hostel = Hostel::new();
        let student = hostel.register(new_student(1, "Alice", 0.0)).unwrap();

        assert_eq!(student.room_label, UNASSIGNED);
        assert_eq!(student.fees_due, 0.0);
        assert_eq!(hostel.list_students().len(), 1);
    }

    #[test]
    fn test_register_rejects_duplicate_id() {
        let mut hostel = Hostel::new();
        hostel.register(new_student(1, "Alice", 0.0)).unwrap();

        let err = hostel.register(new_student(1, "Bob", 0.0)).unwrap_err();
        assert_eq!(err, RegistrationError::DuplicateId(1));
        assert_eq!(hostel.list_students().len(), 1);
    }

    #[test]
    fn test_register_rejects_bad_names() {
        let mut hostel = Hostel::new();

        assert!(matches!(
            hostel.register(new_student(1, "Agent 47", 0.0)),
            Err(RegistrationError::InvalidName(_))
        ));
        assert!(matches!(
            hostel.register(new_student(1, "   ", 0.0)),
            Err(RegistrationError::InvalidName(_))
        ));
        assert!(hostel.list_students().is_empty());
    }

    #[test]
    fn test_register_rejects_negative_fees() {
        let mut hostel = Hostel::new();
        assert_eq!(
            hostel.register(new_student(1, "Alice", -5.0)).unwrap_err(),
            RegistrationError::NegativeFees
        );
    }

    #[test]
    fn test_allocation_is_atomic_on_success() {
        let mut hostel = Hostel::new();
        hostel.register(new_student(1, "Alice", 0.0)).unwrap();

        let allocation = hostel.allocate(request(1, "5")).unwrap();
        assert_eq!(allocation.room_label, "R5");
        assert_eq!(allocation.student_name, "Alice");

        let room = hostel.find_room("R5").unwrap();
        assert!(room.occupied);
        assert_eq!(room.occupant_id, Some(1));
        assert_eq!(hostel.find_student(1).unwrap().room_label, "R5");
        assert_eq!(hostel.vacant_count(), 99);
    }

    #[test]
    fn test_allocation_records_advisory_metadata() {
        let mut hostel = Hostel::new();
        hostel.register(new_student(1, "Alice", 0.0)).unwrap();

        hostel
            .allocate(AllocationRequest {
                student_id: 1,
                desired_room: "R9".to_string(),
                preferences: RoomPreferences {
                    room_type: RoomType::OneSeater,
                    attached_washroom: true,
                },
            })
            .unwrap();

        let room = hostel.find_room("R9").unwrap();
        assert_eq!(room.metadata["room_type"], "1-seater");
        assert_eq!(room.metadata["attached_washroom"], true);
    }

    #[test]
    fn test_allocation_to_occupied_room_changes_nothing() {
        let mut hostel = Hostel::new();
        hostel.register(new_student(1, "Alice", 0.0)).unwrap();
        hostel.register(new_student(2, "Bob", 0.0)).unwrap();
        hostel.allocate(request(1, "R1")).unwrap();

        let err = hostel.allocate(request(2, "R1")).unwrap_err();
        assert_eq!(err, AllocationError::Unavailable("R1".to_string()));

        let room = hostel.find_room("R1").unwrap();
        assert_eq!(room.occupant_id, Some(1));
        assert_eq!(hostel.find_student(2).unwrap().room_label, UNASSIGNED);
    }

    #[test]
    fn test_occupied_room_reported_before_unknown_student() {
        // An occupied room is reported even when the student id is unknown
        let mut hostel = Hostel::new();
        hostel.register(new_student(1, "Alice", 0.0)).unwrap();
        hostel.allocate(request(1, "R1")).unwrap();

        let err = hostel.allocate(request(99, "R1")).unwrap_err();
        assert_eq!(err, AllocationError::Unavailable("R1".to_string()));
        assert_eq!(hostel.find_room("R1").unwrap().occupant_id, Some(1));
    }

    #[test]
    fn test_allocation_unknown_student_on_vacant_room() {
        let mut hostel = Hostel::new();

        let err = hostel.allocate(request(99, "R1")).unwrap_err();
        assert_eq!(err, AllocationError::StudentNotFound(99));
        assert!(hostel.find_room("R1").unwrap().is_vacant());
        assert_eq!(hostel.vacant_count(), 100);
    }

    #[test]
    fn test_allocation_rejects_second_room_for_same_student() {
        let mut hostel = Hostel::new();
        hostel.register(new_student(1, "Alice", 0.0)).unwrap();
        hostel.allocate(request(1, "R1")).unwrap();

        let err = hostel.allocate(request(1, "R2")).unwrap_err();
        assert_eq!(
            err,
            AllocationError::AlreadyAssigned {
                student_id: 1,
                room: "R1".to_string()
            }
        );
        assert!(hostel.find_room("R2").unwrap().is_vacant());
        assert_eq!(hostel.find_student(1).unwrap().room_label, "R1");
    }

    #[test]
    fn test_allocation_rejects_bad_labels_without_mutation() {
        let mut hostel = Hostel::new();
        hostel.register(new_student(1, "Alice", 0.0)).unwrap();

        assert!(matches!(
            hostel.allocate(request(1, "Rx")),
            Err(AllocationError::InvalidFormat(_))
        ));
        assert!(matches!(
            hostel.allocate(request(1, "101")),
            Err(AllocationError::OutOfRange(101))
        ));
        assert_eq!(hostel.vacant_count(), 100);
        assert_eq!(hostel.find_student(1).unwrap().room_label, UNASSIGNED);
    }

    #[test]
    fn test_availability_shrinks_by_one_per_allocation() {
        let mut hostel = Hostel::new();
        for id in 1..=3 {
            hostel.register(new_student(id, "Resident", 0.0)).unwrap();
        }
        hostel.allocate(request(1, "R10")).unwrap();
        hostel.allocate(request(2, "R20")).unwrap();
        hostel.allocate(request(3, "R30")).unwrap();

        let available = hostel.available_rooms();
        assert_eq!(available.len(), 97);
        assert!(!available.contains(&"R10"));
        assert!(!available.contains(&"R20"));
        assert!(!available.contains(&"R30"));
        // Fixed pool order is preserved
        assert_eq!(available[0], "R1");
    }

    #[test]
    fn test_pay_fees_partial_then_overpay() {
        let mut hostel = Hostel::new();
        hostel.register(new_student(2, "Bob", 100.0)).unwrap();

        assert_eq!(
            hostel.pay_fees(2, 40.0).unwrap(),
            PaymentOutcome::Partial { remaining: 60.0 }
        );
        assert_eq!(
            hostel.pay_fees(2, 100.0).unwrap(),
            PaymentOutcome::Settled { change: 40.0 }
        );
        assert_eq!(hostel.find_student(2).unwrap().fees_due, 0.0);
    }

    #[test]
    fn test_pay_fees_exact_amount_yields_zero_change() {
        let mut hostel = Hostel::new();
        hostel.register(new_student(1, "Alice", 75.0)).unwrap();

        assert_eq!(
            hostel.pay_fees(1, 75.0).unwrap(),
            PaymentOutcome::Settled { change: 0.0 }
        );
        assert_eq!(hostel.find_student(1).unwrap().fees_due, 0.0);
    }

    #[test]
    fn test_pay_fees_never_goes_negative() {
        let mut hostel = Hostel::new();
        hostel.register(new_student(1, "Alice", 10.0)).unwrap();

        hostel.pay_fees(1, 9999.0).unwrap();
        assert_eq!(hostel.find_student(1).unwrap().fees_due, 0.0);

        // Further payments hit the informational outcome, not a debit
        assert_eq!(hostel.pay_fees(1, 50.0).unwrap(), PaymentOutcome::NoFeesDue);
        assert_eq!(hostel.find_student(1).unwrap().fees_due, 0.0);
    }

    #[test]
    fn test_pay_fees_zero_balance_reports_no_fees_due() {
        let mut hostel = Hostel::new();
        hostel.register(new_student(1, "Alice", 0.0)).unwrap();

        assert_eq!(hostel.pay_fees(1, 10.0).unwrap(), PaymentOutcome::NoFeesDue);
    }

    #[test]
    fn test_pay_fees_rejects_bad_inputs() {
        let mut hostel = Hostel::new();
        hostel.register(new_student(1, "Alice", 50.0)).unwrap();

        assert_eq!(
            hostel.pay_fees(9, 10.0).unwrap_err(),
            PaymentError::StudentNotFound(9)
        );
        assert!(matches!(
            hostel.pay_fees(1, 0.0),
            Err(PaymentError::InvalidAmount(_))
        ));
        assert!(matches!(
            hostel.pay_fees(1, -3.0),
            Err(PaymentError::InvalidAmount(_))
        ));
        assert_eq!(hostel.find_student(1).unwrap().fees_due, 50.0);
    }

    #[test]
    fn test_full_walkthrough_scenario() {
        // Register, allocate, then attempt a payment on a zero balance
        let mut hostel = Hostel::new();

        let alice = hostel.register(new_student(1, "Alice", 0.0)).unwrap();
        assert_eq!(alice.fees_due, 0.0);
        assert_eq!(alice.room_label, UNASSIGNED);

        let allocation = hostel.allocate(request(1, "5")).unwrap();
        assert_eq!(allocation.room_label, "R5");
        let room = hostel.find_room("R5").unwrap();
        assert!(room.occupied);
        assert_eq!(room.occupant_id, Some(1));
        assert_eq!(hostel.find_student(1).unwrap().room_label, "R5");

        assert_eq!(hostel.pay_fees(1, 25.0).unwrap(), PaymentOutcome::NoFeesDue);
    }
}

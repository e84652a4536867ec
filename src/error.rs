// ⚠️ Error Kinds - One discriminated enum per registry operation
//
// "Room is occupied" and "student not found" are distinct outcomes here and
// must stay distinct; the console loop reports whichever happened and the
// session continues. No registry error is ever fatal.

use thiserror::Error;

// ============================================================================
// REGISTRATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// The roster already holds a student with this id
    #[error("student id {0} is already registered")]
    DuplicateId(u32),

    /// Name was empty or contained digits
    #[error("invalid student name: {0:?}")]
    InvalidName(String),

    /// Fee balances start non-negative and stay that way
    #[error("fees due cannot be negative")]
    NegativeFees,
}

// ============================================================================
// ALLOCATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    /// Room label did not contain a parseable number
    #[error("invalid room format: {0:?}")]
    InvalidFormat(String),

    /// Room number parsed but falls outside the fixed pool
    #[error("room number {0} is outside 1..=100")]
    OutOfRange(u32),

    /// The requested room exists but is already occupied
    #[error("room {0} is not available")]
    Unavailable(String),

    /// No registered student carries this id
    #[error("student {0} not found")]
    StudentNotFound(u32),

    /// The student already holds a room; one student, one room
    #[error("student {student_id} already holds room {room}")]
    AlreadyAssigned { student_id: u32, room: String },
}

// ============================================================================
// PAYMENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    /// No registered student carries this id
    #[error("student {0} not found")]
    StudentNotFound(u32),

    /// Payments must be finite and strictly positive
    #[error("invalid payment amount: {0}")]
    InvalidAmount(f64),
}

// ============================================================================
// TESTS
// ============================================================================

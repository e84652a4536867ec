// Hostel Registry - Core Library
// Exposes the roster/room registry and the console front-end for the CLI
// binary and tests

pub mod console;
pub mod entities;
pub mod error;
pub mod registry;

// Re-export commonly used types
pub use console::{run, Console};
pub use entities::{
    normalize_room_label, NewStudent, Room, RoomPreferences, RoomType, Student, LABEL_PREFIX,
    ROOM_COUNT, UNASSIGNED,
};
pub use error::{AllocationError, PaymentError, RegistrationError};
pub use registry::{Allocation, AllocationRequest, Hostel, PaymentOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

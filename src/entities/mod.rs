// Entity Models - passive roster and inventory records
//
// Students and rooms hold no behavior beyond construction and display;
// every mutation goes through the Hostel registry.

pub mod room;
pub mod student;

pub use room::{normalize_room_label, Room, RoomPreferences, RoomType, LABEL_PREFIX, ROOM_COUNT};
pub use student::{NewStudent, Student, UNASSIGNED};

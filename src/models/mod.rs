pub mod enums;
pub mod interaction;
pub mod ordered_map;
pub mod patient;

pub use enums::{Feedback, ParseEnumError, Role};
pub use interaction::InteractionEntry;
pub use patient::PatientRecord;

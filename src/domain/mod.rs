mod email_address;
mod horse;

pub use email_address::EmailAddress;
pub use horse::{Horse, HorseCatalog, HorseStatus};

//! Turning a command token into the key used to search a week's menu.

mod lookup_key;
mod resolve;

pub use lookup_key::LookupKey;
pub use resolve::resolve;

/// Date format used by the menu site, e.g. `10.04.2024`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

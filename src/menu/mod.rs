mod week_menu;

pub use week_menu::{WeekMenu, DAYS_IN_WEEK};

#[cfg(test)]
pub(crate) use week_menu::tests::april_week;

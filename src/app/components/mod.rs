pub mod nav_entry;
pub mod user_card;

pub use nav_entry::{nav_icon_glyph, NavEntryItem};
pub use user_card::UserCard;

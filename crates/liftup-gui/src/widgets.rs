pub mod bottom_sheet;
pub mod setting_card;

pub use bottom_sheet::bottom_sheet;
pub use setting_card::setting_card;

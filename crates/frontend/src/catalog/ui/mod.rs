pub mod card;
pub mod category_bar;
pub mod list;
pub mod status_toggle;
pub mod vendor_banner;

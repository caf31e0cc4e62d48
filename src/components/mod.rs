mod account;
mod icons;
mod navigation;
mod profile;
mod result_card;
mod scan;

pub use account::AccountScreen;
pub use navigation::NavigationBar;
pub use profile::ProfileScreen;
pub use result_card::ResultCard;
pub use scan::ScanScreen;

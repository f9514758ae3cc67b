pub mod blocklist_refresh;

pub use blocklist_refresh::BlocklistRefreshJob;

mod file_source;

pub use file_source::FileBlocklistSource;

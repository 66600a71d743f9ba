mod directory;

pub use directory::read_directory;

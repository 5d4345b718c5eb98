mod loader;

pub use loader::{load_locations_from, LoadedLocation, LoaderError};

mod load_profile;

pub use load_profile::{LoadedProfile, load_builtin, load_from_file};

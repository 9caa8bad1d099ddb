use std::path::{Path, PathBuf};

lazy_static! {
    static ref ROOT: PathBuf = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
}

pub fn get_resource(name: impl AsRef<Path>) -> PathBuf {
    ROOT.join("resources").join(name)
}

pub mod draw;
pub mod sample;
pub mod status;

use std::path::{Path, PathBuf};

/// Resolve the state directory: the explicit flag wins, otherwise
/// `~/.omikuji` (or `./.omikuji` when HOME is unset).
pub fn state_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".omikuji"),
        None => PathBuf::from(".omikuji"),
    }
}

/// Path of the gate's state file inside a state directory.
pub fn state_file(dir: &Path) -> PathBuf {
    dir.join("state.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let dir = state_dir(Some(Path::new("/tmp/somewhere")));
        assert_eq!(dir, PathBuf::from("/tmp/somewhere"));
    }

    #[test]
    fn state_file_is_inside_the_dir() {
        let file = state_file(Path::new("/tmp/somewhere"));
        assert_eq!(file, PathBuf::from("/tmp/somewhere/state.json"));
    }
}

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::BEST_SCORE_FILE;

/// Persists the best score as a single decimal integer in a dotfile.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Dotfile in the home directory, or the working directory without one.
    pub fn default_path() -> PathBuf {
        match env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(BEST_SCORE_FILE),
            None => PathBuf::from(BEST_SCORE_FILE),
        }
    }

    /// Missing or malformed files read as 0.
    pub fn get(&self) -> u64 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn set(&self, value: u64) -> io::Result<()> {
        fs::write(&self.path, value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ScoreStore {
        let path = env::temp_dir().join(format!("serpent_test_{}_{}", std::process::id(), name));
        let _ = fs::remove_file(&path);
        ScoreStore::new(path)
    }

    #[test]
    fn missing_file_reads_zero() {
        let store = temp_store("missing");
        assert_eq!(store.get(), 0);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = temp_store("round_trip");
        store.set(42).unwrap();
        assert_eq!(store.get(), 42);
        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn garbage_reads_zero() {
        let store = temp_store("garbage");
        fs::write(&store.path, "not a number").unwrap();
        assert_eq!(store.get(), 0);
        let _ = fs::remove_file(&store.path);
    }
}

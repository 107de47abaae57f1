use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use cross_xdg::BaseDirs;

use crate::theme;

/// Canvas dimensions. Myrtle can never leave a `rows` x `cols` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
}

pub const DEFAULT_ROWS: usize = 50;
pub const DEFAULT_COLS: usize = 50;
/// Largest accepted value for either dimension.
pub const MAX_DIMENSION: usize = 1000;

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl Config {
    /// Resolve dimensions: defaults -> `myrtle.toml` -> `MYRTLE_ROWS`/`MYRTLE_COLS`.
    pub fn load() -> Self {
        let mut cfg = Config::default();
        if let Some(content) = config_path().and_then(|p| fs::read_to_string(p).ok()) {
            cfg = cfg.merge_toml(&content);
        }
        cfg.merge_env(|key| env::var(key).ok())
    }

    /// Apply the `[canvas]` section of a config file on top of `self`.
    ///
    /// Only `rows` and `cols` are recognized; anything that is not an
    /// integer in `1..=MAX_DIMENSION` is ignored.
    pub fn merge_toml(self, content: &str) -> Self {
        // Very small hand-rolled parser: look for [canvas] section and key = value pairs
        let mut in_canvas = false;
        let mut map: HashMap<String, String> = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            if line.starts_with('[') && line.ends_with(']') {
                in_canvas = &line[1..line.len()-1] == "canvas";
                continue;
            }
            if !in_canvas { continue; }
            if let Some(eq) = line.find('=') {
                let key = line[..eq].trim().to_string();
                let val_raw = line[eq+1..].trim();
                // Accept quoted or unquoted
                let val = if val_raw.starts_with('"') && val_raw.ends_with('"') && val_raw.len() >= 2 {
                    val_raw[1..val_raw.len()-1].to_string()
                } else { val_raw.to_string() };
                map.insert(key, val);
            }
        }

        let mut cfg = self;

        macro_rules! set {
            ($field:ident, $key:literal) => {
                if let Some(v) = map.get($key) {
                    match parse_dimension(v) {
                        Some(n) => cfg.$field = n,
                        None => ignored(concat!("canvas.", $key), v),
                    }
                }
            };
        }

        set!(rows, "rows");
        set!(cols, "cols");

        cfg
    }

    /// Apply environment overrides looked up through `var`.
    pub fn merge_env<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for (key, field) in [("MYRTLE_ROWS", &mut self.rows), ("MYRTLE_COLS", &mut self.cols)] {
            if let Some(v) = var(key) {
                match parse_dimension(&v) {
                    Some(n) => *field = n,
                    None => ignored(key, &v),
                }
            }
        }
        self
    }
}

fn parse_dimension(value: &str) -> Option<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_DIMENSION).contains(n))
}

fn ignored(key: &str, value: &str) {
    eprintln!("{}", theme::notice(&format!("myrtle: ignoring {key} = '{value}' (expected an integer from 1 to {MAX_DIMENSION})")));
}

/// `MYRTLE_CONFIG` if set, otherwise `myrtle.toml` in the XDG config home.
fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os("MYRTLE_CONFIG") {
        return Some(PathBuf::from(explicit));
    }

    // On Linux: resolves to /home/<user>/.config
    // On Windows: resolves to C:\Users\<user>\.config
    // On macOS: resolves to /Users/<user>/.config
    let base_dirs = BaseDirs::new().ok()?;
    let mut path = PathBuf::from(base_dirs.config_home());
    path.push("myrtle.toml");
    Some(path)
}

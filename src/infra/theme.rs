// ============================================================
// Layer 6 — Theme Store
// ============================================================
// Manages the chart theme files: fetched once from the
// rose-pine-matplotlib repository, cached in a style directory,
// and parsed into the palette the charts draw with.
//
// The store never fails the pipeline. Whatever goes wrong —
// offline machine, deleted cache, mangled theme file — it logs
// a warning and hands back the built-in dawn palette, and the
// charts render the same way they would have with a fresh
// download.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::viz::{parse_hex_color, Palette};

/// Where the theme files are published.
const THEME_BASE_URL: &str =
    "https://raw.githubusercontent.com/h4pZ/rose-pine-matplotlib/main/themes";

/// All theme variants kept in the cache.
const THEME_FILES: [&str; 3] = [
    "rose-pine-dawn.mplstyle",
    "rose-pine-moon.mplstyle",
    "rose-pine.mplstyle",
];

/// The variant the charts actually use.
const ACTIVE_THEME: &str = "rose-pine-dawn.mplstyle";

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

pub struct ThemeStore {
    dir: PathBuf,
}

impl ThemeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The palette for the charts: cached theme, freshly fetched
    /// theme, or the built-in fallback — in that order.
    pub fn load_or_fetch(&self) -> Palette {
        match self.try_load() {
            Ok(palette) => palette,
            Err(error) => {
                tracing::warn!("Using built-in chart theme: {error:#}");
                Palette::default()
            }
        }
    }

    fn try_load(&self) -> Result<Palette> {
        self.ensure_themes()?;

        let path = self.dir.join(ACTIVE_THEME);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Cannot read theme '{}'", path.display()))?;
        Ok(parse_palette(&content))
    }

    /// Download any theme file not yet in the cache. A variant that
    /// cannot be fetched is skipped — only the active one matters.
    fn ensure_themes(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create style directory '{}'", self.dir.display()))?;

        let missing: Vec<&str> = THEME_FILES
            .iter()
            .filter(|name| !self.dir.join(name).exists())
            .copied()
            .collect();
        if missing.is_empty() {
            return Ok(());
        }

        tracing::info!("Fetching {} theme file(s) into '{}'", missing.len(), self.dir.display());
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        for name in missing {
            match fetch_theme(&client, name) {
                Ok(content) => {
                    let path = self.dir.join(name);
                    std::fs::write(&path, content)
                        .with_context(|| format!("Cannot write theme '{}'", path.display()))?;
                }
                Err(error) => tracing::debug!("Could not fetch theme '{name}': {error:#}"),
            }
        }
        Ok(())
    }
}

fn fetch_theme(client: &reqwest::blocking::Client, name: &str) -> Result<String> {
    let url = format!("{THEME_BASE_URL}/{name}");
    let response = client
        .get(&url)
        .send()
        .with_context(|| format!("Request to '{url}' failed"))?;
    if !response.status().is_success() {
        bail!("'{url}' returned {}", response.status());
    }
    response.text().context("Failed to read theme body")
}

/// Parse the style keys the charts use out of an mplstyle file.
///
/// The format is `key : value` with `#` starting a comment, one
/// setting per line. Colors appear both bare (`faf4ed`) and
/// hash-prefixed; anything unparseable keeps its default.
fn parse_palette(content: &str) -> Palette {
    let mut palette = Palette::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let Some(value) = rest.split_whitespace().next() else {
            continue;
        };

        let slot = match key.trim() {
            "figure.facecolor" => &mut palette.background,
            "axes.facecolor" => &mut palette.axes_background,
            "text.color" => &mut palette.foreground,
            "axes.edgecolor" => &mut palette.axis,
            "grid.color" => &mut palette.grid,
            _ => continue,
        };
        if let Some(color) = parse_hex_color(value) {
            *slot = color;
        }
    }

    palette
}

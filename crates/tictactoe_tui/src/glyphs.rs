//! Glyph resolution: how each mark looks on screen.
//!
//! Glyphs come from, in order of precedence: inline config text, a file in
//! the configured assets directory, then the built-in art. A configured
//! assets directory must hold a glyph for both marks; startup fails
//! otherwise.

use derive_more::{Display, Error};
use std::path::{Path, PathBuf};
use tictactoe_engine::Player;
use tracing::{debug, info, instrument};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::Config;

/// Inner width of a board cell, in terminal columns.
pub const CELL_WIDTH: usize = 11;

/// Inner height of a board cell, in terminal rows.
pub const CELL_HEIGHT: usize = 5;

const DEFAULT_X: &str = "\\   /\n \\ / \n  X  \n / \\ \n/   \\";
const DEFAULT_O: &str = " .-. \n/   \\\n|   |\n\\   /\n '-' ";

/// Multi-line text drawn inside a cell, already fitted to the cell size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    lines: Vec<String>,
}

impl Glyph {
    /// Fits `text` into a `CELL_WIDTH` x `CELL_HEIGHT` box.
    ///
    /// Blank edge lines, trailing whitespace, and common indentation are
    /// dropped. Lines are cropped to the cell's display width and height,
    /// then padded to equal width so centering keeps the art aligned.
    pub fn fit(text: &str) -> Self {
        let trimmed: Vec<&str> = text.lines().map(str::trim_end).collect();
        let first = trimmed.iter().position(|l| !l.is_empty()).unwrap_or(trimmed.len());
        let last = trimmed.iter().rposition(|l| !l.is_empty()).map_or(first, |i| i + 1);
        let body = &trimmed[first..last];

        let indent = body
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
            .min()
            .unwrap_or(0);

        let mut lines: Vec<String> = body
            .iter()
            .take(CELL_HEIGHT)
            .map(|line| {
                let unindented: String = line.chars().skip(indent).collect();
                crop_to_width(&unindented, CELL_WIDTH)
            })
            .collect();

        let width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        for line in &mut lines {
            let pad = width - line.width();
            line.extend(std::iter::repeat_n(' ', pad));
        }

        Self { lines }
    }

    /// Lines of the glyph, top to bottom.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True if the glyph has no visible content.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

fn crop_to_width(line: &str, max: usize) -> String {
    let mut width = 0;
    line.chars()
        .take_while(|c| {
            width += c.width().unwrap_or(0);
            width <= max
        })
        .collect()
}

/// Glyphs for both players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    x: Glyph,
    o: Glyph,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self {
            x: Glyph::fit(DEFAULT_X),
            o: Glyph::fit(DEFAULT_O),
        }
    }
}

impl GlyphSet {
    /// Creates a glyph set from explicit glyphs.
    pub fn new(x: Glyph, o: Glyph) -> Self {
        Self { x, o }
    }

    /// Glyph for `player`.
    pub fn get(&self, player: Player) -> &Glyph {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Resolves glyphs for a session.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] if an assets directory is configured but
    /// unreadable or missing a glyph, or if a resolved glyph is blank.
    #[instrument(skip(config))]
    pub fn resolve(config: &Config) -> Result<Self, AssetError> {
        let mut set = match config.assets_dir() {
            Some(dir) => Self::from_dir(dir)?,
            None => Self::default(),
        };

        for player in Player::ALL {
            if let Some(text) = config.glyphs().for_player(player) {
                debug!(%player, "Using inline glyph");
                set.set(player, Glyph::fit(text));
            }
        }

        for player in Player::ALL {
            if set.get(player).is_blank() {
                return Err(AssetError::new(format!("Glyph for {} is blank", player)));
            }
        }

        Ok(set)
    }

    /// Loads both glyphs from files in `dir`.
    ///
    /// For each player the first file, in name order, whose name starts
    /// with the player's letter (either case) is used.
    #[instrument(skip(dir), fields(dir = %dir.display()))]
    pub fn from_dir(dir: &Path) -> Result<Self, AssetError> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| {
                AssetError::new(format!("Failed to read assets directory {}: {}", dir.display(), e))
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        let x = load_glyph(&files, Player::X, dir)?;
        let o = load_glyph(&files, Player::O, dir)?;
        Ok(Self { x, o })
    }

    fn set(&mut self, player: Player, glyph: Glyph) {
        match player {
            Player::X => self.x = glyph,
            Player::O => self.o = glyph,
        }
    }
}

fn load_glyph(files: &[PathBuf], player: Player, dir: &Path) -> Result<Glyph, AssetError> {
    let prefix = player.to_string().to_lowercase();
    let path = files
        .iter()
        .find(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.to_lowercase().starts_with(&prefix))
        })
        .ok_or_else(|| {
            AssetError::new(format!("No glyph file for {} in {}", player, dir.display()))
        })?;

    let text = std::fs::read_to_string(path)
        .map_err(|e| AssetError::new(format!("Failed to read glyph {}: {}", path.display(), e)))?;
    info!(%player, path = %path.display(), "Loaded glyph");
    Ok(Glyph::fit(&text))
}

/// Glyph asset error.
#[derive(Debug, Clone, Display, Error)]
#[display("Asset error: {} at {}:{}", message, file, line)]
pub struct AssetError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AssetError {
    /// Creates a new asset error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Car sprites loaded from plain-text art files.
//!
//! A sprite is a small block of characters, one text line per terminal row.
//! Spaces are transparent. Loading is the only fallible step of rendering; a
//! missing or empty file leaves the slot empty and the view draws a solid
//! placeholder block instead.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

pub const PLAYER_SPRITE_FILE: &str = "player_car.txt";
pub const ENEMY_SPRITE_FILE: &str = "enemy_car.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u16,
    rows: Vec<Vec<char>>,
}

impl Sprite {
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|l| l.trim_end().chars().collect())
            .collect();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        if width == 0 {
            bail!("sprite has no visible characters");
        }
        Ok(Self {
            width: width as u16,
            rows,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading sprite {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing sprite {}", path.display()))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.rows.len() as u16
    }

    /// Character at `(x, y)`, `None` where transparent or out of bounds.
    pub fn at(&self, x: u16, y: u16) -> Option<char> {
        self.rows
            .get(y as usize)
            .and_then(|r| r.get(x as usize))
            .copied()
            .filter(|&ch| ch != ' ')
    }
}

/// The player and enemy sprites; either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteSet {
    pub player: Option<Sprite>,
    pub enemy: Option<Sprite>,
}

impl SpriteSet {
    /// Load both sprites from `dir`, falling back per sprite on any error.
    pub fn load_dir(dir: &Path) -> Self {
        Self {
            player: load_or_warn(dir.join(PLAYER_SPRITE_FILE)),
            enemy: load_or_warn(dir.join(ENEMY_SPRITE_FILE)),
        }
    }
}

fn load_or_warn(path: PathBuf) -> Option<Sprite> {
    match Sprite::load(&path) {
        Ok(sprite) => {
            log::info!(
                "loaded sprite {} ({}x{})",
                path.display(),
                sprite.width(),
                sprite.height()
            );
            Some(sprite)
        }
        Err(e) => {
            log::warn!("could not load sprite: {:#} (fallback to block)", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_measures_widest_row() {
        let s = Sprite::parse(" ▄▄ \n█  █\n").unwrap();
        assert_eq!(s.width(), 4);
        assert_eq!(s.height(), 2);
        assert_eq!(s.at(1, 0), Some('▄'));
        assert_eq!(s.at(0, 0), None);
        assert_eq!(s.at(7, 7), None);
    }

    #[test]
    fn blank_sprite_is_rejected() {
        assert!(Sprite::parse("   \n\n").is_err());
        assert!(Sprite::parse("").is_err());
    }

    #[test]
    fn missing_files_fall_back_to_none() {
        let dir = std::env::temp_dir().join("lane-dodge-no-such-assets");
        let set = SpriteSet::load_dir(&dir);
        assert_eq!(set, SpriteSet::default());
    }

    #[test]
    fn load_dir_reads_existing_files() {
        let dir = std::env::temp_dir().join(format!("lane-dodge-sprites-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PLAYER_SPRITE_FILE), "/^\\\n").unwrap();

        let set = SpriteSet::load_dir(&dir);
        assert_eq!(set.player.as_ref().map(Sprite::width), Some(3));
        assert!(set.enemy.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}

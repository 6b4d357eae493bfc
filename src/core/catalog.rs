//=========================================================================
// Image Catalog
//=========================================================================
//
// Loads every asset the game needs once, at startup, and validates the
// shape of the per-level item sets before the window opens.
//
// Asset root layout:
// ```text
//   <root>/
//     fondo_memory.png   background
//     flecha.png         advance arrow
//     correct.png        answer feedback (scaled to 400×400)
//     incorrect.png
//     icon.png           window icon (optional)
//     font.ttf           label font
//     Img*/              one directory per level, sorted by name
//       *.png            level items, white is transparent
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::render::{Color, FontText, Image, ImageHandle, TextRenderer};

//=== Constants ===========================================================

const BACKGROUND_FILE: &str = "fondo_memory.png";
const ARROW_FILE: &str = "flecha.png";
const CORRECT_FILE: &str = "correct.png";
const INCORRECT_FILE: &str = "incorrect.png";
const ICON_FILE: &str = "icon.png";
const FONT_FILE: &str = "font.ttf";
const LEVEL_DIR_PREFIX: &str = "Img";

/// Side length of the square correct/incorrect feedback images.
pub const ANSWER_IMAGE_SIZE: u32 = 400;

/// Colour treated as transparent in level item images.
pub const ITEM_COLOR_KEY: Color = Color::WHITE;

//=== Item ================================================================

/// Stable identity of an item: its level and position within the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    pub level: usize,
    pub index: usize,
}

/// One memorisable picture.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub image: ImageHandle,
}

//=== ItemCatalog =========================================================

/// Immutable level → items mapping. Levels are 1-based.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    levels: Vec<Vec<Item>>,
}

impl ItemCatalog {
    /// Builds a catalog from per-level images (`levels[0]` is level 1).
    ///
    /// Fails if fewer than `max_level` levels are given or any required
    /// level holds fewer than two items.
    pub fn from_levels(levels: Vec<Vec<ImageHandle>>, max_level: usize) -> Result<Self> {
        if levels.len() < max_level {
            return Err(GameError::MissingLevel {
                level: levels.len() + 1,
            });
        }

        let levels: Vec<Vec<Item>> = levels
            .into_iter()
            .enumerate()
            .map(|(i, images)| {
                images
                    .into_iter()
                    .enumerate()
                    .map(|(index, image)| Item {
                        id: ItemId { level: i + 1, index },
                        image,
                    })
                    .collect()
            })
            .collect();

        for (i, items) in levels.iter().take(max_level).enumerate() {
            if items.len() < 2 {
                return Err(GameError::InsufficientItems {
                    level: i + 1,
                    found: items.len(),
                });
            }
        }

        Ok(Self { levels })
    }

    /// Scans `root` for `Img*` directories and loads each as a level.
    pub fn load(root: &Path, max_level: usize) -> Result<Self> {
        let dirs = level_directories(root)?;
        let mut levels = Vec::with_capacity(dirs.len());
        for (i, dir) in dirs.iter().enumerate() {
            let images = load_level_images(dir)?;
            info!(
                target: "catalog",
                "Level {} loaded from {} ({} items)",
                i + 1,
                dir.display(),
                images.len()
            );
            levels.push(images);
        }
        Self::from_levels(levels, max_level)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Items of `level` (1-based).
    ///
    /// # Panics
    ///
    /// Panics if the level does not exist; levels are validated at load.
    pub fn level(&self, level: usize) -> &[Item] {
        assert!(
            (1..=self.levels.len()).contains(&level),
            "level {} not in catalog (1..={})",
            level,
            self.levels.len()
        );
        &self.levels[level - 1]
    }
}

//=== Loading Helpers =====================================================

/// Lists `Img*` subdirectories of `root`, sorted by name.
fn level_directories(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in read_dir(root)? {
        let path = entry.path();
        let is_level = path.is_dir()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(LEVEL_DIR_PREFIX));
        if is_level {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Loads every file in `dir` (sorted by name) as an item image with the
/// white colour key applied.
pub fn load_level_images(dir: &Path) -> Result<Vec<ImageHandle>> {
    let mut files: Vec<PathBuf> = read_dir(dir)?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    files
        .iter()
        .map(|path| {
            debug!(target: "catalog", "Loading item {}", path.display());
            Image::open(path).map(|image| Arc::new(image.with_color_key(ITEM_COLOR_KEY)))
        })
        .collect()
}

fn read_dir(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let io_err = |source| GameError::AssetIo {
        path: dir.to_path_buf(),
        source,
    };
    fs::read_dir(dir)
        .map_err(io_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(io_err)
}

//=== GameAssets ==========================================================

/// Everything loaded at startup: fixed images, the item catalog and the
/// label renderer.
pub struct GameAssets {
    pub background: ImageHandle,
    pub arrow: ImageHandle,
    pub correct: ImageHandle,
    pub incorrect: ImageHandle,
    pub icon: Option<Image>,
    pub catalog: ItemCatalog,
    pub text: Box<dyn TextRenderer>,
}

impl GameAssets {
    /// Loads all assets from `config.asset_root`.
    pub fn load(config: &GameConfig) -> Result<Self> {
        let root = &config.asset_root;
        info!(target: "catalog", "Loading assets from {}", root.display());

        let background = Arc::new(Image::open(&root.join(BACKGROUND_FILE))?);
        let arrow = Arc::new(Image::open(&root.join(ARROW_FILE))?);
        let correct = Image::open(&root.join(CORRECT_FILE))?;
        let incorrect = Image::open(&root.join(INCORRECT_FILE))?;

        let icon_path = root.join(ICON_FILE);
        let icon = if icon_path.is_file() {
            Some(Image::open(&icon_path)?)
        } else {
            debug!(target: "catalog", "No window icon at {}", icon_path.display());
            None
        };

        let text = FontText::open(&root.join(FONT_FILE))?;
        let catalog = ItemCatalog::load(root, config.max_level)?;

        info!(
            target: "catalog",
            "Assets ready: {} levels",
            catalog.level_count()
        );

        Ok(Self::from_parts(
            background,
            arrow,
            correct,
            incorrect,
            icon,
            catalog,
            Box::new(text),
        ))
    }

    /// Assembles assets from already-decoded parts. Feedback images are
    /// scaled to `ANSWER_IMAGE_SIZE`.
    pub fn from_parts(
        background: ImageHandle,
        arrow: ImageHandle,
        correct: Image,
        incorrect: Image,
        icon: Option<Image>,
        catalog: ItemCatalog,
        text: Box<dyn TextRenderer>,
    ) -> Self {
        Self {
            background,
            arrow,
            correct: Arc::new(correct.scaled(ANSWER_IMAGE_SIZE, ANSWER_IMAGE_SIZE)),
            incorrect: Arc::new(incorrect.scaled(ANSWER_IMAGE_SIZE, ANSWER_IMAGE_SIZE)),
            icon,
            catalog,
            text,
        }
    }

    /// Rasterises a label into a shareable handle.
    pub fn label(&self, text: &str, size: f32, color: Color, background: Option<Color>) -> ImageHandle {
        Arc::new(self.text.render(text, size, color, background))
    }
}

impl fmt::Debug for GameAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameAssets")
            .field("levels", &self.catalog.level_count())
            .finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//! Photo fixtures used as upload payloads

use std::path::PathBuf;

use crate::error::{TesterError, TesterResult};

/// A small, valid JPEG
pub const VALID_PHOTO: &str = "cat1.jpg";
/// Plain text with a non-image extension
pub const WRONG_FORMAT_PHOTO: &str = "haha_image.txt";
/// Archive standing in for an oversized, non-image upload
pub const OVERSIZED_PHOTO: &str = "what_this.zip";

#[derive(Debug, Clone)]
pub struct Fixtures {
    images_dir: PathBuf,
}

impl Fixtures {
    pub fn new<P: Into<PathBuf>>(images_dir: P) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }

    /// Full path of a fixture, failing when it is not on disk
    pub fn resolve(&self, name: &str) -> TesterResult<PathBuf> {
        let path = self.images_dir.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(TesterError::FixtureMissing { path })
        }
    }

    pub fn valid_photo(&self) -> TesterResult<PathBuf> {
        self.resolve(VALID_PHOTO)
    }

    pub fn wrong_format_photo(&self) -> TesterResult<PathBuf> {
        self.resolve(WRONG_FORMAT_PHOTO)
    }

    pub fn oversized_photo(&self) -> TesterResult<PathBuf> {
        self.resolve(OVERSIZED_PHOTO)
    }

    /// Check every fixture up front so a run fails fast on a bad `--images-dir`
    pub fn verify_all(&self) -> TesterResult<()> {
        for name in [VALID_PHOTO, WRONG_FORMAT_PHOTO, OVERSIZED_PHOTO] {
            self.resolve(name)?;
        }
        Ok(())
    }
}

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui;

/// Text laid out once per listing generation and reused every frame.
#[derive(Clone)]
pub struct RowText {
    pub name: Arc<egui::Galley>,
    pub size: Arc<egui::Galley>,
}

/// One filesystem child shown in the listing.
#[derive(Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    /// Cached galleys, dropped whenever the listing changes.
    pub text: Option<RowText>,
}

impl Entry {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let metadata = fs::metadata(&path).ok()?;
        let name = path.file_name()?.to_string_lossy().to_string();

        Some(Self {
            path,
            name,
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            text: None,
        })
    }

    /// The `..` reference to the listing's parent directory.
    pub fn parent(path: PathBuf) -> Self {
        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        Self {
            path,
            name: "..".to_string(),
            is_dir: true,
            size,
            text: None,
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.is_dir {
            "\u{1F4C1}"
        } else {
            "\u{1F4C4}"
        }
    }

    pub fn size_label(&self) -> String {
        if self.is_dir {
            String::from("DIR")
        } else {
            bytesize::ByteSize::b(self.size).to_string()
        }
    }
}

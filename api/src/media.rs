use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::listing::ListingEntry;

// the extensions eligible for the gallery, compared lowercased
pub const SUPPORTED_FORMATS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "mp4", "webm"];

pub const VIDEO_FORMATS: [&str; 2] = ["mp4", "webm"];

// trailing extension: a final dot followed by anything but dots and slashes
static TRAILING_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[^/.]+$").expect("extension pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn for_extension(extension: &str) -> Self {
        if VIDEO_FORMATS.contains(&extension) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

// MediaFile
//
// a listing entry that passed the allow-list.  immutable once built, and only
// ever held for the lifetime of one gallery session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    pub name: String,
    pub download_url: String,
    pub extension: String,
}

impl MediaFile {
    // None if the entry has no direct url (folders) or an extension that is
    // not in the allow-list
    pub fn from_entry<S: AsRef<str>>(entry: &ListingEntry, formats: &[S]) -> Option<Self> {
        let download_url = entry.download_url.clone()?;
        let extension = extension_of(&entry.name);

        if !formats.iter().any(|f| f.as_ref().eq_ignore_ascii_case(&extension)) {
            return None;
        }

        Some(MediaFile {
            name: entry.name.clone(),
            download_url,
            extension,
        })
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::for_extension(&self.extension)
    }

    pub fn caption(&self) -> String {
        caption_for(&self.name)
    }
}

// everything after the final dot, lowercased.  a name without a dot is its own
// "extension", which then simply fails the allow-list
pub fn extension_of(name: &str) -> String {
    name.rsplit_once('.')
        .map_or(name, |(_, ext)| ext)
        .to_lowercase()
}

pub fn caption_for(name: &str) -> String {
    TRAILING_EXTENSION.replace(name, "").into_owned()
}

// keeps listing order; no sorting happens on the client
pub fn filter_listing<S: AsRef<str>>(entries: &[ListingEntry], formats: &[S]) -> Vec<MediaFile> {
    entries
        .iter()
        .filter_map(|entry| MediaFile::from_entry(entry, formats))
        .collect()
}

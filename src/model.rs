//! Gallery data shared between the app shell and the viewer.
//!
//! The viewer never mutates the collection. It reads through
//! [`GalleryProvider`] and indexes by position only.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::config::GALLERY_KEY;
use crate::storage;
use crate::util::cwarn;

/// Shown when an artwork was stored without image data.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;utf8,%3Csvg%20xmlns%3D%27http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg%27%20width%3D%27400%27%20height%3D%27300%27%3E%3Crect%20width%3D%27100%25%27%20height%3D%27100%25%27%20fill%3D%27%23efefef%27%2F%3E%3Ctext%20x%3D%2750%25%27%20y%3D%2750%25%27%20font-size%3D%2718%27%20text-anchor%3D%27middle%27%20fill%3D%27%23999%27%3ENo%20image%3C%2Ftext%3E%3C%2Fsvg%3E";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryItem {
    pub id: u64,
    #[serde(rename = "img")]
    pub image_data: String,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
}

impl GalleryItem {
    pub fn image_src(&self) -> &str {
        if self.image_data.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image_data
        }
    }

    pub fn alt_text(&self) -> &str {
        if self.title.is_empty() {
            "Artwork"
        } else {
            &self.title
        }
    }
}

/// Read-only, position-indexed view of an item collection.
pub trait GalleryProvider {
    fn len(&self) -> usize;
    fn item_at(&self, index: usize) -> Option<&GalleryItem>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GalleryProvider for [GalleryItem] {
    fn len(&self) -> usize {
        <[GalleryItem]>::len(self)
    }

    fn item_at(&self, index: usize) -> Option<&GalleryItem> {
        self.get(index)
    }
}

impl GalleryProvider for Vec<GalleryItem> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn item_at(&self, index: usize) -> Option<&GalleryItem> {
        self.get(index)
    }
}

impl<T: GalleryProvider + ?Sized> GalleryProvider for Rc<T> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn item_at(&self, index: usize) -> Option<&GalleryItem> {
        (**self).item_at(index)
    }
}

/// The artwork collection as persisted by the editing screens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gallery {
    items: Rc<Vec<GalleryItem>>,
}

pub enum GalleryAction {
    /// Re-read the collection from local storage.
    Reload,
}

impl Gallery {
    pub fn load() -> Self {
        match storage::load_raw(GALLERY_KEY) {
            Some(raw) => Self::from_json(&raw),
            None => Self::default(),
        }
    }

    /// Unparseable data yields an empty gallery rather than an error.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Vec<GalleryItem>>(raw) {
            Ok(items) => Self {
                items: Rc::new(items),
            },
            Err(e) => {
                cwarn(&format!("gallery parse failed: {e}"));
                Self::default()
            }
        }
    }

    /// Shared handle to the items; cheap to clone into the viewer.
    pub fn items(&self) -> Rc<Vec<GalleryItem>> {
        self.items.clone()
    }
}

impl Reducible for Gallery {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            GalleryAction::Reload => {
                let fresh = Gallery::load();
                if fresh == *self {
                    self
                } else {
                    Rc::new(fresh)
                }
            }
        }
    }
}

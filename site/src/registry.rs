use tracing::debug;

use crate::carousel::wrap_index;

// identity of a rendered slide image: which slider, which slide
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlideRef {
    pub slider: usize,
    pub slide: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryEntry {
    pub src: String,
    pub alt: String,
    pub source: SlideRef,
}

// ImageRegistry
//
// every slide image of every slider, flattened in encounter order.  built once
// and never updated incrementally; a rebuild means a new registry
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageRegistry {
    entries: Vec<RegistryEntry>,
}

impl ImageRegistry {
    pub fn build(entries: impl IntoIterator<Item = RegistryEntry>) -> Self {
        let entries: Vec<RegistryEntry> = entries.into_iter().collect();
        debug!("image registry built with {} entries", entries.len());

        ImageRegistry { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RegistryEntry> {
        self.entries.get(index)
    }

    // exact slide identity first, then the resolved url.  the same url on two
    // different slides is ambiguous; the first registered one wins
    pub fn locate(&self, source: SlideRef, src: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.source == source)
            .or_else(|| self.entries.iter().position(|entry| entry.src == src))
    }
}

// ImageModal
//
// the standalone viewer over the registry.  the index survives a close, but
// every open from a click repositions it on the clicked image
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageModal {
    registry: ImageRegistry,
    index: usize,
    open: bool,
}

impl ImageModal {
    pub fn new(registry: ImageRegistry) -> Self {
        ImageModal {
            registry,
            index: 0,
            open: false,
        }
    }

    pub fn registry(&self) -> &ImageRegistry {
        &self.registry
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&RegistryEntry> {
        self.registry.get(self.index)
    }

    pub fn open_for(&mut self, source: SlideRef, src: &str) -> bool {
        let Some(index) = self.registry.locate(source, src) else {
            debug!("clicked image {src} is not registered");
            return false;
        };

        self.open = true;
        self.show(index as isize);
        true
    }

    pub fn show(&mut self, index: isize) {
        if self.registry.is_empty() {
            return;
        }

        self.index = wrap_index(index, self.registry.len());
    }

    pub fn next(&mut self) {
        self.show(self.index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.show(self.index as isize - 1);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    // arrows and escape only mean something while the modal is showing
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.open {
            return false;
        }

        match key {
            "ArrowRight" => self.next(),
            "ArrowLeft" => self.prev(),
            "Escape" => self.close(),
            _ => return false,
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slider: usize, slide: usize, src: &str) -> RegistryEntry {
        RegistryEntry {
            src: src.to_owned(),
            alt: format!("slide {slider}/{slide}"),
            source: SlideRef { slider, slide },
        }
    }

    fn registry() -> ImageRegistry {
        ImageRegistry::build(vec![
            entry(0, 0, "https://shop.example/img/a.jpg"),
            entry(0, 1, "https://shop.example/img/b.jpg"),
            entry(1, 0, "https://shop.example/img/c.jpg"),
            entry(1, 1, "https://shop.example/img/a.jpg"),
        ])
    }

    #[test]
    fn identity_wins_over_url() {
        let registry = registry();

        let index = registry.locate(SlideRef { slider: 1, slide: 1 }, "https://shop.example/img/a.jpg");
        assert_eq!(index, Some(3));
    }

    #[test]
    fn url_fallback_takes_first_match() {
        let registry = registry();

        let index = registry.locate(SlideRef { slider: 9, slide: 0 }, "https://shop.example/img/a.jpg");
        assert_eq!(index, Some(0));
        assert_eq!(registry.locate(SlideRef { slider: 9, slide: 0 }, "nope"), None);
    }

    #[test]
    fn navigation_wraps_across_sliders() {
        let mut modal = ImageModal::new(registry());

        assert!(modal.open_for(SlideRef { slider: 0, slide: 0 }, ""));
        modal.prev();
        assert_eq!(modal.index(), 3);
        modal.next();
        modal.next();
        assert_eq!(modal.index(), 1);
        assert_eq!(modal.current().unwrap().alt, "slide 0/1");
    }

    #[test]
    fn keys_ignored_while_closed() {
        let mut modal = ImageModal::new(registry());

        assert!(!modal.handle_key("ArrowRight"));
        assert_eq!(modal.index(), 0);

        modal.open_for(SlideRef { slider: 1, slide: 0 }, "");
        assert!(modal.handle_key("ArrowRight"));
        assert_eq!(modal.index(), 3);
        assert!(modal.handle_key("Escape"));
        assert!(!modal.is_open());
    }

    #[test]
    fn close_keeps_index_but_click_resets_it() {
        let mut modal = ImageModal::new(registry());

        modal.open_for(SlideRef { slider: 0, slide: 1 }, "");
        modal.next();
        modal.close();
        assert_eq!(modal.index(), 2);

        modal.open_for(SlideRef { slider: 0, slide: 0 }, "");
        assert_eq!(modal.index(), 0);
    }

    #[test]
    fn empty_registry_is_inert() {
        let mut modal = ImageModal::default();

        assert!(!modal.open_for(SlideRef { slider: 0, slide: 0 }, "a.jpg"));
        modal.next();
        assert_eq!(modal.current(), None);
        assert!(!modal.is_open());
    }
}

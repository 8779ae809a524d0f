use async_trait::async_trait;
use thiserror::Error;
use tracing::{Level, debug, error, info, instrument, warn};

use api::{
    listing::{ListingEntry, ListingError, ListingSource, fetch_listing},
    media::{MediaFile, filter_listing},
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error(transparent)]
    Fetch(#[from] ListingError),
    #[error("No media found in gallery folder")]
    NoMedia,
}

// LoadTicket
//
// handed out by GalleryState::begin() and presented back on every later step
// of the same load.  a ticket from an older generation (i.e. issued before a
// retry) is stale, and anything it carries is discarded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub page: usize,
    pub needs_fetch: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    // another load was in flight, nothing happened
    Dropped,
    // a retry superseded this load while it was waiting on the network
    Stale,
    Rendered {
        page: usize,
        shown: usize,
        has_more: bool,
    },
    Failed(GalleryError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum GridView<'a> {
    Loading,
    Items(&'a [MediaFile]),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadMoreControl {
    pub visible: bool,
    pub enabled: bool,
    pub loading: bool,
}

// GalleryState
//
// the only mutable state of the gallery: page cursor, the cached and filtered
// listing, and the in-flight flag.  there is exactly one writer (the loader
// below), and the in-flight flag drops rather than queues overlapping loads
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    page_size: usize,
    formats: Vec<String>,
    current_page: usize,
    items: Vec<MediaFile>,
    is_loading: bool,
    spinner: bool,
    generation: u64,
    error: Option<GalleryError>,
}

impl GalleryState {
    pub fn new(page_size: usize, formats: Vec<String>) -> Self {
        GalleryState {
            page_size: page_size.max(1),
            formats,
            current_page: 1,
            items: Vec::new(),
            is_loading: false,
            spinner: false,
            generation: 0,
            error: None,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn error(&self) -> Option<&GalleryError> {
        self.error.as_ref()
    }

    pub fn has_more(&self) -> bool {
        self.current_page * self.page_size < self.items.len()
    }

    // the grid keeps every page up to the cursor, in listing order; a cursor
    // past the end clamps to the whole listing
    pub fn shown(&self) -> &[MediaFile] {
        let shown = self.items.len().min(self.current_page * self.page_size);
        &self.items[..shown]
    }

    pub fn view(&self) -> GridView<'_> {
        if let Some(err) = &self.error {
            GridView::Error(err.to_string())
        } else if self.spinner {
            GridView::Loading
        } else {
            GridView::Items(self.shown())
        }
    }

    pub fn load_more(&self) -> LoadMoreControl {
        let has_more = self.has_more();

        LoadMoreControl {
            visible: has_more && self.error.is_none(),
            enabled: has_more && !self.is_loading,
            loading: self.is_loading,
        }
    }

    pub fn begin(&mut self, page: usize) -> Option<LoadTicket> {
        if self.is_loading {
            debug!("gallery load for page {page} dropped, another load is in flight");
            return None;
        }

        let page = page.max(1);
        let first = page == 1 || self.items.is_empty();

        self.is_loading = true;
        self.current_page = page;
        self.spinner = first;
        self.error = None;

        Some(LoadTicket {
            generation: self.generation,
            page,
            needs_fetch: first,
        })
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn apply_listing(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Vec<ListingEntry>, ListingError>,
    ) {
        if !self.is_current(ticket) {
            warn!(
                "discarding listing from generation {}, now at {}",
                ticket.generation, self.generation
            );
            return;
        }

        match result {
            Ok(entries) => {
                self.items = filter_listing(&entries, &self.formats);
                info!(
                    "gallery listing has {} entries, {} usable",
                    entries.len(),
                    self.items.len()
                );

                if self.items.is_empty() {
                    error!("gallery folder has no usable media");
                    self.error = Some(GalleryError::NoMedia);
                }
            }
            Err(err) => {
                error!("gallery listing failed: {err}");
                self.error = Some(GalleryError::Fetch(err));
            }
        }
    }

    pub fn finish(&mut self, ticket: &LoadTicket) -> LoadOutcome {
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }

        self.is_loading = false;
        self.spinner = false;

        match &self.error {
            Some(err) => LoadOutcome::Failed(err.clone()),
            None => LoadOutcome::Rendered {
                page: self.current_page,
                shown: self.shown().len(),
                has_more: self.has_more(),
            },
        }
    }

    // back to page 1 under a new generation; any load still waiting on the
    // network becomes stale
    pub fn retry(&mut self) {
        self.generation += 1;
        self.is_loading = false;
        self.spinner = false;
        self.current_page = 1;
        self.error = None;
    }
}

// GalleryStore
//
// lets the loader borrow the state only between awaits, so the same driver
// runs against a plain struct in tests and a reactive signal in the webapp
pub trait GalleryStore {
    fn with_state<R>(&mut self, f: impl FnOnce(&mut GalleryState) -> R) -> R;
}

impl GalleryStore for GalleryState {
    fn with_state<R>(&mut self, f: impl FnOnce(&mut GalleryState) -> R) -> R {
        f(self)
    }
}

#[async_trait(?Send)]
pub trait ListingFetcher {
    async fn fetch(&self) -> Result<Vec<ListingEntry>, ListingError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpListing {
    source: ListingSource,
}

impl HttpListing {
    pub fn new(source: ListingSource) -> Self {
        HttpListing { source }
    }
}

#[async_trait(?Send)]
impl ListingFetcher for HttpListing {
    async fn fetch(&self) -> Result<Vec<ListingEntry>, ListingError> {
        fetch_listing(&self.source).await
    }
}

// load (or extend) the gallery up to the given page
//
// the listing is fetched on page 1 and whenever nothing is cached; later pages
// are sliced out of the cache
#[instrument(level = Level::DEBUG, skip(store, fetcher))]
pub async fn load_gallery<S, F>(store: &mut S, fetcher: &F, page: usize) -> LoadOutcome
where
    S: GalleryStore,
    F: ListingFetcher,
{
    let Some(ticket) = store.with_state(|state| state.begin(page)) else {
        return LoadOutcome::Dropped;
    };

    if ticket.needs_fetch {
        let result = fetcher.fetch().await;
        store.with_state(|state| state.apply_listing(&ticket, result));
    }

    let outcome = store.with_state(|state| state.finish(&ticket));
    debug!("gallery load finished: {outcome:?}");
    outcome
}

pub async fn retry_gallery<S, F>(store: &mut S, fetcher: &F) -> LoadOutcome
where
    S: GalleryStore,
    F: ListingFetcher,
{
    store.with_state(GalleryState::retry);
    load_gallery(store, fetcher, 1).await
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use api::media::{MediaKind, SUPPORTED_FORMATS};

    struct FakeListing {
        calls: Cell<usize>,
        response: RefCell<Result<Vec<ListingEntry>, ListingError>>,
    }

    impl FakeListing {
        fn returning(entries: Vec<ListingEntry>) -> Self {
            FakeListing {
                calls: Cell::new(0),
                response: RefCell::new(Ok(entries)),
            }
        }

        fn failing(status: u16, status_text: &str) -> Self {
            FakeListing {
                calls: Cell::new(0),
                response: RefCell::new(Err(ListingError::Status {
                    status,
                    status_text: status_text.to_owned(),
                })),
            }
        }
    }

    #[async_trait(?Send)]
    impl ListingFetcher for FakeListing {
        async fn fetch(&self) -> Result<Vec<ListingEntry>, ListingError> {
            self.calls.set(self.calls.get() + 1);
            self.response.borrow().clone()
        }
    }

    fn entry(name: &str, url: &str) -> ListingEntry {
        ListingEntry {
            name: name.to_owned(),
            download_url: Some(url.to_owned()),
            entry_type: Some("file".to_owned()),
        }
    }

    fn images(n: usize) -> Vec<ListingEntry> {
        (0..n)
            .map(|i| entry(&format!("img{i}.jpg"), &format!("u{i}")))
            .collect()
    }

    fn state() -> GalleryState {
        GalleryState::new(9, SUPPORTED_FORMATS.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn pages_cover_listing_exactly() {
        for n in 1..=40 {
            let fetcher = FakeListing::returning(images(n));
            let mut gallery = state();

            block_on(load_gallery(&mut gallery, &fetcher, 1));
            assert_eq!(gallery.shown().len(), n.min(9), "first page for {n} items");

            let mut pages = 1;
            while gallery.load_more().visible {
                let next = gallery.current_page() + 1;
                block_on(load_gallery(&mut gallery, &fetcher, next));
                pages += 1;
            }

            assert_eq!(pages, n.div_ceil(9), "pages for {n} items");
            assert_eq!(gallery.shown().len(), n);
            assert!(!gallery.has_more());
            assert_eq!(fetcher.calls.get(), 1, "later pages reuse the cached listing");
        }
    }

    #[test]
    fn empty_listing_is_no_media() {
        let fetcher = FakeListing::returning(Vec::new());
        let mut gallery = state();

        let outcome = block_on(load_gallery(&mut gallery, &fetcher, 1));

        assert_eq!(outcome, LoadOutcome::Failed(GalleryError::NoMedia));
        assert_eq!(
            gallery.view(),
            GridView::Error("No media found in gallery folder".to_owned())
        );
        assert!(!gallery.load_more().visible);
    }

    #[test]
    fn listing_with_one_supported_file() {
        let payload = r#"[
            {"name": "a.png", "download_url": "u1"},
            {"name": "b.mov", "download_url": "u2"}
        ]"#;
        let entries: Vec<ListingEntry> = serde_json::from_str(payload).unwrap();
        let fetcher = FakeListing::returning(entries);
        let mut gallery = state();

        let outcome = block_on(load_gallery(&mut gallery, &fetcher, 1));

        assert_eq!(
            outcome,
            LoadOutcome::Rendered {
                page: 1,
                shown: 1,
                has_more: false
            }
        );

        let GridView::Items(items) = gallery.view() else {
            panic!("expected items, got {:?}", gallery.view());
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].caption(), "a");
        assert_eq!(items[0].kind(), MediaKind::Image);
        assert_eq!(items[0].download_url, "u1");
        assert!(!gallery.load_more().visible);
    }

    #[test]
    fn not_found_shows_error_without_items() {
        let fetcher = FakeListing::failing(404, "Not Found");
        let mut gallery = state();

        let outcome = block_on(load_gallery(&mut gallery, &fetcher, 1));

        assert!(matches!(outcome, LoadOutcome::Failed(GalleryError::Fetch(_))));
        match gallery.view() {
            GridView::Error(message) => assert!(message.contains("404"), "{message}"),
            other => panic!("expected error view, got {other:?}"),
        }
        assert!(gallery.shown().is_empty());
        assert!(!gallery.load_more().visible);
        assert!(!gallery.is_loading());
    }

    #[test]
    fn retry_refetches_once_from_page_one() {
        let fetcher = FakeListing::failing(500, "Internal Server Error");
        let mut gallery = state();

        block_on(load_gallery(&mut gallery, &fetcher, 1));
        assert_eq!(fetcher.calls.get(), 1);

        *fetcher.response.borrow_mut() = Ok(images(20));
        let outcome = block_on(retry_gallery(&mut gallery, &fetcher));

        assert_eq!(fetcher.calls.get(), 2);
        assert_eq!(gallery.current_page(), 1);
        assert_eq!(
            outcome,
            LoadOutcome::Rendered {
                page: 1,
                shown: 9,
                has_more: true
            }
        );
    }

    #[test]
    fn overlapping_load_is_dropped() {
        let mut gallery = state();

        let first = gallery.begin(1);
        assert!(first.is_some());
        assert_eq!(gallery.begin(2), None);
        assert_eq!(gallery.view(), GridView::Loading);
        assert!(!gallery.load_more().enabled);
        assert!(gallery.load_more().loading);
    }

    #[test]
    fn load_more_does_not_show_spinner_or_fetch() {
        let mut gallery = state();

        let ticket = gallery.begin(1).unwrap();
        gallery.apply_listing(&ticket, Ok(images(12)));
        gallery.finish(&ticket);

        let ticket = gallery.begin(2).unwrap();
        assert!(!ticket.needs_fetch);
        assert!(matches!(gallery.view(), GridView::Items(_)));

        gallery.finish(&ticket);
        assert_eq!(gallery.shown().len(), 12);
    }

    #[test]
    fn stale_response_after_retry_is_discarded() {
        let mut gallery = state();

        let stale = gallery.begin(1).unwrap();
        gallery.retry();

        let fresh = gallery.begin(1).unwrap();
        gallery.apply_listing(&fresh, Ok(images(3)));
        assert!(matches!(gallery.finish(&fresh), LoadOutcome::Rendered { shown: 3, .. }));

        gallery.apply_listing(&stale, Ok(images(30)));
        assert_eq!(gallery.finish(&stale), LoadOutcome::Stale);
        assert_eq!(gallery.total(), 3);
        assert!(!gallery.is_loading());
    }

    #[test]
    fn cursor_past_the_end_clamps_to_listing() {
        let mut gallery = state();

        let ticket = gallery.begin(1).unwrap();
        gallery.apply_listing(&ticket, Ok(images(10)));
        gallery.finish(&ticket);
        assert_eq!(gallery.shown().len(), 9);

        let ticket = gallery.begin(5).unwrap();
        assert!(!ticket.needs_fetch);
        let outcome = gallery.finish(&ticket);

        assert_eq!(
            outcome,
            LoadOutcome::Rendered {
                page: 5,
                shown: 10,
                has_more: false
            }
        );
        assert_eq!(gallery.shown().len(), 10);
        match gallery.view() {
            GridView::Items(items) => assert_eq!(items.len(), 10),
            other => panic!("expected items, got {other:?}"),
        }
        assert!(!gallery.load_more().visible);
    }
}

use tracing::debug;

use api::media::{MediaFile, MediaKind};

// what the overlay shows for one gallery tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxItem {
    pub src: String,
    pub kind: MediaKind,
    pub caption: String,
}

impl From<&MediaFile> for LightboxItem {
    fn from(file: &MediaFile) -> Self {
        LightboxItem {
            src: file.download_url.clone(),
            kind: file.kind(),
            caption: file.caption(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    Backdrop,
    Escape,
}

// the page-level effects of the overlay.  the webapp implements this on top of
// the document body and the media container; tests record the calls
pub trait LightboxHost {
    fn lock_scroll(&mut self);
    fn unlock_scroll(&mut self);
    // must be a no-op when no video is mounted
    fn pause_video(&mut self);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lightbox {
    open: bool,
    item: Option<LightboxItem>,
    // bumped on every open so the media element is built fresh each time
    opens: u64,
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        self.open
    }

    // the last item stays mounted (hidden) after close, like the overlay does
    pub fn item(&self) -> Option<&LightboxItem> {
        self.item.as_ref()
    }

    pub fn opens(&self) -> u64 {
        self.opens
    }

    pub fn open<H: LightboxHost>(&mut self, item: LightboxItem, host: &mut H) {
        debug!("lightbox opening {} {}", item.kind.as_str(), item.src);

        self.item = Some(item);
        self.open = true;
        self.opens += 1;
        host.lock_scroll();
    }

    pub fn close<H: LightboxHost>(&mut self, trigger: CloseTrigger, host: &mut H) -> bool {
        if !self.open {
            return false;
        }

        debug!("lightbox closed by {trigger:?}");

        self.open = false;
        host.pause_video();
        host.unlock_scroll();
        true
    }

    pub fn handle_key<H: LightboxHost>(&mut self, key: &str, host: &mut H) -> bool {
        match key {
            "Escape" => self.close(CloseTrigger::Escape, host),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        scroll_locked: bool,
        video_playing: bool,
        pauses: usize,
    }

    impl LightboxHost for RecordingHost {
        fn lock_scroll(&mut self) {
            self.scroll_locked = true;
        }

        fn unlock_scroll(&mut self) {
            self.scroll_locked = false;
        }

        fn pause_video(&mut self) {
            self.pauses += 1;
            self.video_playing = false;
        }
    }

    fn video() -> LightboxItem {
        LightboxItem {
            src: "https://raw.example/clip.mp4".to_owned(),
            kind: MediaKind::Video,
            caption: "clip".to_owned(),
        }
    }

    #[test]
    fn every_trigger_restores_scroll_and_pauses() {
        for trigger in [CloseTrigger::Button, CloseTrigger::Backdrop, CloseTrigger::Escape] {
            let mut host = RecordingHost::default();
            let mut lightbox = Lightbox::default();

            lightbox.open(video(), &mut host);
            host.video_playing = true;
            assert!(host.scroll_locked);
            assert!(lightbox.is_open());

            assert!(lightbox.close(trigger, &mut host));
            assert!(!host.scroll_locked, "{trigger:?}");
            assert!(!host.video_playing, "{trigger:?}");
            assert!(!lightbox.is_open());
        }
    }

    #[test]
    fn escape_closes_other_keys_do_not() {
        let mut host = RecordingHost::default();
        let mut lightbox = Lightbox::default();

        lightbox.open(video(), &mut host);

        assert!(!lightbox.handle_key("Enter", &mut host));
        assert!(lightbox.is_open());
        assert!(lightbox.handle_key("Escape", &mut host));
        assert!(!host.scroll_locked);
    }

    #[test]
    fn closing_twice_is_harmless() {
        let mut host = RecordingHost::default();
        let mut lightbox = Lightbox::default();

        assert!(!lightbox.close(CloseTrigger::Escape, &mut host));

        lightbox.open(video(), &mut host);
        lightbox.close(CloseTrigger::Button, &mut host);
        assert!(!lightbox.close(CloseTrigger::Backdrop, &mut host));
        assert_eq!(host.pauses, 1);

        lightbox.open(video(), &mut host);
        assert_eq!(lightbox.opens(), 2);
        assert_eq!(lightbox.item(), Some(&video()));
    }

    #[test]
    fn item_comes_from_media_file() {
        let file = MediaFile {
            name: "Gudang Utama.JPG".to_owned(),
            download_url: "u1".to_owned(),
            extension: "jpg".to_owned(),
        };

        let item = LightboxItem::from(&file);

        assert_eq!(item.caption, "Gudang Utama");
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.src, "u1");
    }
}

//! Entry image classification and slot binding

use async_trait::async_trait;
use std::path::PathBuf;

/// Built-in demonstration images bundled with the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoImage {
    Family,
    Meditation,
    Lightbulb,
}

impl DemoImage {
    pub const ALL: [DemoImage; 3] = [
        DemoImage::Family,
        DemoImage::Meditation,
        DemoImage::Lightbulb,
    ];

    /// Identifier stored in an entry's `image_path`
    pub fn identifier(&self) -> &'static str {
        match self {
            DemoImage::Family => "demo_family",
            DemoImage::Meditation => "demo_meditation",
            DemoImage::Lightbulb => "demo_lightbulb",
        }
    }

    /// Name of the bundled asset
    pub fn asset_name(&self) -> &'static str {
        match self {
            DemoImage::Family => "family_sunset",
            DemoImage::Meditation => "meditation_sunrise",
            DemoImage::Lightbulb => "lightbulb",
        }
    }

    /// Exact, case-sensitive identifier match
    pub fn from_identifier(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|demo| demo.identifier() == path)
    }
}

/// Whether `path` names one of the bundled demo images
pub fn is_demo_image(path: &str) -> bool {
    DemoImage::from_identifier(path).is_some()
}

/// Where an entry's image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    None,
    Demo(DemoImage),
    /// Local path or remote URL, resolved by an `ImageLoader`
    External(String),
}

impl ImageSource {
    pub fn classify(image_path: &str) -> Self {
        if image_path.is_empty() {
            ImageSource::None
        } else if let Some(demo) = DemoImage::from_identifier(image_path) {
            ImageSource::Demo(demo)
        } else {
            ImageSource::External(image_path.to_string())
        }
    }
}

/// An externally loaded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedImage {
    LocalFile(PathBuf),
    Remote(String),
}

/// The display slot an entry's image is bound into
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageSlot {
    #[default]
    Hidden,
    Bundled(DemoImage),
    /// Shown, waiting on (or abandoned by) the loader
    Pending(String),
    Loaded(LoadedImage),
}

impl ImageSlot {
    pub fn is_visible(&self) -> bool {
        !matches!(self, ImageSlot::Hidden)
    }
}

/// Best-effort external image loader. Implementations never report failure;
/// they fill the slot when they can and leave it untouched otherwise.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, reference: &str, slot: &mut ImageSlot);
}

/// Bind `source` into `slot`, handing external references to `loader`
pub async fn bind_image(source: &ImageSource, slot: &mut ImageSlot, loader: &dyn ImageLoader) {
    match source {
        ImageSource::None => *slot = ImageSlot::Hidden,
        ImageSource::Demo(demo) => *slot = ImageSlot::Bundled(*demo),
        ImageSource::External(reference) => {
            *slot = ImageSlot::Pending(reference.clone());
            loader.load(reference, slot).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLoader {
        requests: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ImageLoader for RecordingLoader {
        async fn load(&self, reference: &str, slot: &mut ImageSlot) {
            self.requests.lock().unwrap().push(reference.to_string());
            *slot = ImageSlot::Loaded(LoadedImage::Remote(reference.to_string()));
        }
    }

    struct NoopLoader;

    #[async_trait]
    impl ImageLoader for NoopLoader {
        async fn load(&self, _reference: &str, _slot: &mut ImageSlot) {}
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(ImageSource::classify(""), ImageSource::None);
    }

    #[test]
    fn test_classify_demo_images() {
        for demo in DemoImage::ALL {
            assert_eq!(
                ImageSource::classify(demo.identifier()),
                ImageSource::Demo(demo)
            );
            assert!(is_demo_image(demo.identifier()));
        }
    }

    #[test]
    fn test_demo_match_is_exact() {
        for path in ["Demo_Family", "demo_family ", "demo_", "family_sunset"] {
            assert!(!is_demo_image(path), "{path} should not be a demo image");
            assert_eq!(
                ImageSource::classify(path),
                ImageSource::External(path.to_string())
            );
        }
    }

    #[test]
    fn test_asset_names() {
        assert_eq!(DemoImage::Family.asset_name(), "family_sunset");
        assert_eq!(DemoImage::Meditation.asset_name(), "meditation_sunrise");
        assert_eq!(DemoImage::Lightbulb.asset_name(), "lightbulb");
    }

    #[tokio::test]
    async fn test_bind_none_hides_slot() {
        let mut slot = ImageSlot::Bundled(DemoImage::Family);
        bind_image(&ImageSource::None, &mut slot, &NoopLoader).await;
        assert_eq!(slot, ImageSlot::Hidden);
        assert!(!slot.is_visible());
    }

    #[tokio::test]
    async fn test_bind_demo_skips_loader() {
        let loader = RecordingLoader::default();
        let mut slot = ImageSlot::default();
        bind_image(&ImageSource::Demo(DemoImage::Lightbulb), &mut slot, &loader).await;
        assert_eq!(slot, ImageSlot::Bundled(DemoImage::Lightbulb));
        assert!(loader.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unrecognized_path_routes_to_loader() {
        let loader = RecordingLoader::default();
        let mut slot = ImageSlot::default();
        let source = ImageSource::classify("https://example.com/p.jpg");
        bind_image(&source, &mut slot, &loader).await;

        assert_eq!(
            *loader.requests.lock().unwrap(),
            vec!["https://example.com/p.jpg".to_string()]
        );
        assert!(slot.is_visible());
    }

    #[tokio::test]
    async fn test_slot_stays_visible_when_loader_gives_up() {
        let mut slot = ImageSlot::default();
        bind_image(
            &ImageSource::External("photos/missing.jpg".to_string()),
            &mut slot,
            &NoopLoader,
        )
        .await;
        assert_eq!(slot, ImageSlot::Pending("photos/missing.jpg".to_string()));
        assert!(slot.is_visible());
    }
}

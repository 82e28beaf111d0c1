use crate::image::ResourceHandle;

/// Source of the images offered in the carousel.
pub trait ImageRepository {
    /// The catalog in display order. The controller reads it once.
    fn sample_images(&self) -> Vec<ResourceHandle>;

    /// Human readable label for a handle, if the repository knows it.
    fn label(&self, _resource: ResourceHandle) -> Option<String> {
        None
    }
}

const SAMPLE_COUNT: u32 = 8;

/// The built-in catalog of eight sample images.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleImageRepository;

impl ImageRepository for SampleImageRepository {
    fn sample_images(&self) -> Vec<ResourceHandle> {
        (1..=SAMPLE_COUNT).map(ResourceHandle).collect()
    }

    fn label(&self, resource: ResourceHandle) -> Option<String> {
        (1..=SAMPLE_COUNT)
            .contains(&resource.0)
            .then(|| format!("sample{}", resource.0))
    }
}

/// A fixed list of handles, for hosts that bring their own catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticImageRepository {
    images: Vec<ResourceHandle>,
}

impl StaticImageRepository {
    pub fn new(images: Vec<ResourceHandle>) -> Self {
        Self { images }
    }
}

impl ImageRepository for StaticImageRepository {
    fn sample_images(&self) -> Vec<ResourceHandle> {
        self.images.clone()
    }
}

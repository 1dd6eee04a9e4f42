//! Turns catalog entries into descriptors ready for application.

use std::collections::HashMap;

use cloudy_glass_core::logging::targets;
use cloudy_glass_core::{ImageRef, ImageSource, ImageStore, StyleDescriptor};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::id::{ColorMode, StyleId};

/// Looks up presets and registers their embedded images with the host.
///
/// The resolver holds no state between calls. Each call to
/// [`resolve`](Self::resolve) registers every distinct embedded image exactly
/// once, and nothing is cached across calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetResolver;

impl PresetResolver {
    /// Create a new resolver.
    pub fn new() -> Self {
        Self
    }

    /// Look up the descriptor for `(id, mode)` without touching the host.
    ///
    /// Image paints are left as [`ImageSource::Embedded`].
    pub fn template(&self, id: StyleId, mode: ColorMode) -> Result<StyleDescriptor> {
        let descriptor = Catalog::descriptor(id, mode)?;
        descriptor
            .validate()
            .map_err(|source| Error::InvalidDescriptor { id, mode, source })?;
        Ok(descriptor)
    }

    /// Resolve `(id, mode)` into a descriptor whose image paints all carry
    /// host handles.
    ///
    /// Fails with [`Error::UnknownStyle`] when the catalog has no entry for
    /// the pair. There is no fallback from dark to light.
    pub fn resolve(
        &self,
        id: StyleId,
        mode: ColorMode,
        images: &mut dyn ImageStore,
    ) -> Result<StyleDescriptor> {
        let mut descriptor = self.template(id, mode)?;

        let mut registered: HashMap<&'static str, ImageRef> = HashMap::new();
        for source in descriptor.image_sources_mut() {
            let ImageSource::Embedded(image) = *source else {
                continue;
            };

            let handle = match registered.get(image.name()) {
                Some(handle) => handle.clone(),
                None => {
                    let bytes = image.decode()?;
                    let handle = images.create_image(&bytes)?;
                    tracing::debug!(
                        target: targets::RESOLVE,
                        image = image.name(),
                        %handle,
                        "registered embedded image"
                    );
                    registered.insert(image.name(), handle.clone());
                    handle
                }
            };
            *source = ImageSource::Handle(handle);
        }

        tracing::trace!(
            target: targets::RESOLVE,
            %id,
            %mode,
            fills = descriptor.fills.len(),
            effects = descriptor.effects.len(),
            "resolved preset"
        );
        Ok(descriptor)
    }

    /// Resolve a preset by the name the UI uses for it.
    pub fn resolve_named(
        &self,
        name: &str,
        mode: ColorMode,
        images: &mut dyn ImageStore,
    ) -> Result<StyleDescriptor> {
        self.resolve(name.parse()?, mode, images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudy_glass_core::{HostError, HostResult};

    #[derive(Default)]
    struct CountingStore {
        uploads: usize,
    }

    impl ImageStore for CountingStore {
        fn create_image(&mut self, bytes: &[u8]) -> HostResult<ImageRef> {
            self.uploads += 1;
            Ok(ImageRef::new(format!("img-{}-{}", self.uploads, bytes.len())))
        }
    }

    struct RejectingStore;

    impl ImageStore for RejectingStore {
        fn create_image(&mut self, _: &[u8]) -> HostResult<ImageRef> {
            Err(HostError::invalid_image("upload", "quota exceeded"))
        }
    }

    #[test]
    fn acrylic_images_are_registered_once_per_resolve() {
        let resolver = PresetResolver::new();
        let mut store = CountingStore::default();

        let descriptor = resolver
            .resolve(StyleId::AcrylicThin, ColorMode::Light, &mut store)
            .unwrap();
        assert_eq!(store.uploads, 1);
        assert!(!descriptor.has_unresolved_images());

        resolver
            .resolve(StyleId::AcrylicBase, ColorMode::Light, &mut store)
            .unwrap();
        assert_eq!(store.uploads, 2);
    }

    #[test]
    fn presets_without_images_never_touch_the_store() {
        let mut store = RejectingStore;
        let descriptor = PresetResolver::new()
            .resolve(StyleId::Mica, ColorMode::Light, &mut store)
            .unwrap();
        assert_eq!(descriptor.fills.len(), 2);
    }

    #[test]
    fn store_failure_surfaces_as_image_error() {
        let err = PresetResolver::new()
            .resolve(StyleId::AcrylicBase, ColorMode::Light, &mut RejectingStore)
            .unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn no_fallback_to_light() {
        let err = PresetResolver::new()
            .resolve(StyleId::Aero, ColorMode::Dark, &mut CountingStore::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownStyle { id: StyleId::Aero, mode: ColorMode::Dark }
        ));
    }

    #[test]
    fn resolve_by_name() {
        let mut store = CountingStore::default();
        let resolver = PresetResolver::new();

        let mica = resolver.resolve_named("MICA", ColorMode::Light, &mut store).unwrap();
        assert_eq!(mica, resolver.template(StyleId::Mica, ColorMode::Light).unwrap());

        let err = resolver
            .resolve_named("Frosted", ColorMode::Light, &mut store)
            .unwrap_err();
        assert!(err.is_unknown_style());
    }
}

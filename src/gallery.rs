//! Gallery processing: fetch, decode, and hand off attribution for each
//! discovered image, skipping images already handled.
//!
//! The page integration (element discovery, markup insertion) stays behind
//! the [`ImageSource`] and [`InfoSink`] traits; this module only owns the
//! per-image fetch-decode-render unit and the de-duplication set.

use crate::camera::CameraInfo;
use crate::exif;
use crate::fetch::{fetch_with_fallback, BytesFetcher, DEFAULT_FALLBACK_SUFFIX};
use std::collections::HashSet;
use std::time::Duration;

/// One discovered gallery image: a stable identity plus the resource URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
}

/// Produces the current list of gallery images. A mutation-driven host calls
/// [`GalleryProcessor::process`] again whenever this list may have grown.
pub trait ImageSource {
    fn discover(&self) -> Vec<GalleryImage>;
}

/// Consumes attribution for one image (e.g. renders a fragment next to it).
pub trait InfoSink {
    fn render(&mut self, image: &GalleryImage, info: &CameraInfo);
}

/// Outcome of one scan pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Images the source reported, before de-duplication.
    pub found: usize,
    /// Images rendered in this pass.
    pub rendered: usize,
}

/// Drives per-image units over an [`ImageSource`]. The processed set is
/// append-only and keyed by image identity, so repeated scans after content
/// mutations never re-render an image.
pub struct GalleryProcessor<F> {
    fetcher: F,
    fallback_suffix: String,
    seen: HashSet<String>,
}

impl<F: BytesFetcher> GalleryProcessor<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            fallback_suffix: DEFAULT_FALLBACK_SUFFIX.to_string(),
            seen: HashSet::new(),
        }
    }

    pub fn with_fallback_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.fallback_suffix = suffix.into();
        self
    }

    pub fn is_processed(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Run one scan pass: fetch and decode every not-yet-seen image, render
    /// those with attribution. A failure on one image is logged and never
    /// aborts the rest. Images without attribution are left unmarked, as a
    /// later variant of the image may carry metadata.
    pub async fn process<S, K>(&mut self, source: &S, sink: &mut K) -> ScanReport
    where
        S: ImageSource,
        K: InfoSink,
    {
        let discovered = source.discover();
        let mut report = ScanReport {
            found: discovered.len(),
            rendered: 0,
        };
        if report.found > 0 {
            log::debug!("gallery scan found {} image(s)", report.found);
        }

        for image in discovered {
            if self.seen.contains(&image.id) {
                continue;
            }
            let bytes =
                match fetch_with_fallback(&self.fetcher, &image.url, &self.fallback_suffix).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        log::warn!("skipping {}: {err}", image.id);
                        continue;
                    }
                };
            let Some(fields) = exif::extract(&bytes) else {
                log::debug!("no exif data in {}", image.id);
                continue;
            };
            let info = CameraInfo::from_fields(&fields);
            if info.has_attribution() {
                sink.render(&image, &info);
                self.seen.insert(image.id.clone());
                report.rendered += 1;
            }
        }
        report
    }

    /// One scan pass, with a single delayed rescan when the first pass found
    /// no images at all (gallery content may still be loading).
    pub async fn run_with_rescan<S, K>(
        &mut self,
        source: &S,
        sink: &mut K,
        delay: Duration,
    ) -> ScanReport
    where
        S: ImageSource,
        K: InfoSink,
    {
        let report = self.process(source, sink).await;
        if report.found > 0 {
            return report;
        }
        log::debug!("no gallery found, rescanning in {:?}", delay);
        tokio::time::sleep(delay).await;
        self.process(source, sink).await
    }
}

//! Views of the media utility application and their canonical routes.
//!
//! The list in [`media_routes`] is the route configuration the application
//! boots with. New geotagger revisions are added here as new entries, and
//! [`RouteTable::build`] rejects an entry that reuses a path or name.
//!
//! With the `config` feature the same list is also shipped as JSON
//! (`config/routes.json`) and can be loaded through [`media_manifest`].

use crate::error::ValidationError;
use crate::route::RouteRecordInput;
use crate::table::RouteTable;

/// A displayable page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaView {
    Dashboard,
    VideoFrames,
    ReadMetadataImage,
    WriteMetadataImage,
    VideoGeotagger,
    VideoGeotaggerV2,
    VideoGeotaggerV3,
    /// Shown for paths with no route.
    NotFound,
}

impl MediaView {
    /// Every view, the not-found page last.
    pub const ALL: [MediaView; 8] = [
        MediaView::Dashboard,
        MediaView::VideoFrames,
        MediaView::ReadMetadataImage,
        MediaView::WriteMetadataImage,
        MediaView::VideoGeotagger,
        MediaView::VideoGeotaggerV2,
        MediaView::VideoGeotaggerV3,
        MediaView::NotFound,
    ];

    /// Key used for the view in route manifests.
    pub fn key(self) -> &'static str {
        match self {
            MediaView::Dashboard => "dashboard",
            MediaView::VideoFrames => "video-frames",
            MediaView::ReadMetadataImage => "read-metadata-image",
            MediaView::WriteMetadataImage => "write-metadata-image",
            MediaView::VideoGeotagger => "video-geotagger",
            MediaView::VideoGeotaggerV2 => "video-geotagger-v2",
            MediaView::VideoGeotaggerV3 => "video-geotagger-v3",
            MediaView::NotFound => "not-found",
        }
    }

    /// Look a view up by its manifest key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.key() == key)
    }
}

impl std::fmt::Display for MediaView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The application's route list, in registration order.
pub fn media_routes() -> Vec<RouteRecordInput<MediaView>> {
    vec![
        RouteRecordInput::new("/", "Dashboard", MediaView::Dashboard),
        RouteRecordInput::new("/video-frames", "VideoFrames", MediaView::VideoFrames),
        RouteRecordInput::new(
            "/read-metadata",
            "ReadMetadataImage",
            MediaView::ReadMetadataImage,
        ),
        RouteRecordInput::new(
            "/write-metadata",
            "WriteMetadataImage",
            MediaView::WriteMetadataImage,
        ),
        RouteRecordInput::new("/video-geotagger", "VideoGeotagger", MediaView::VideoGeotagger),
        RouteRecordInput::new(
            "/video-geotagger-v2",
            "VideoGeotaggerV2",
            MediaView::VideoGeotaggerV2,
        ),
        RouteRecordInput::new(
            "/video-geotagger-v3",
            "VideoGeotaggerV3",
            MediaView::VideoGeotaggerV3,
        ),
    ]
}

/// Build the table from [`media_routes`].
pub fn media_table() -> Result<RouteTable<MediaView>, ValidationError> {
    RouteTable::from_records(media_routes())
}

/// The bundled JSON route manifest.
#[cfg(feature = "config")]
pub const MEDIA_ROUTES_JSON: &str = include_str!("../config/routes.json");

/// Parse the bundled JSON route manifest.
#[cfg(feature = "config")]
pub fn media_manifest() -> Result<crate::config::RouteManifest, crate::config::ConfigError> {
    crate::config::RouteManifest::from_json(MEDIA_ROUTES_JSON)
}

//! Seams to the outside world: the presentation layer and the 3D avatar viewer.

use crate::view::{HeaderView, ProfileView};

/// Receives the view model. Rendering is up to the implementor.
pub trait PresentationSink {
    /// Player identity and the profile picker.
    fn header(&mut self, header: &HeaderView);
    /// Summary and skills of the selected profile.
    fn profile(&mut self, profile: &ProfileView);
    /// The player could not be loaded. Everything shown before is stale.
    fn not_found(&mut self, identifier: &str);
}

/// A live avatar viewer. Must be disposed before another one is created.
pub trait AvatarViewer {
    /// Releases whatever the viewer holds on screen.
    fn dispose(&mut self);
}

/// Builds avatar viewers from a skin image reference.
pub trait AvatarRenderer {
    type Viewer: AvatarViewer;

    /// A new viewer showing the skin at `image_ref`.
    fn create(&mut self, image_ref: &str) -> Self::Viewer;
}

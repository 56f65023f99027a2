pub mod context;
pub mod error;
pub mod label;
pub mod loader;
pub mod navigation;
pub mod viewport;

pub use context::{BasicNavigationContext, GridLine, NavigationContext};
pub use error::{LabelStoreError, LoaderError, NavigationError};
pub use label::{LabelMapping, LabelNameResolver, LabelStore, DEFAULT_MAX_LABEL_HOPS};
pub use loader::{EmptyReferenceLoader, LabelStoreReferenceLoader, ReferenceLoader};
pub use navigation::{Direction, Navigation, NavigationList};
pub use viewport::{Viewport, ViewportRectangle};

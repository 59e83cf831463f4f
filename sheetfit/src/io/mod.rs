/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting raw user input and external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Persistence of custom sheet formats and settings
pub mod store;

/// Text formatting of layout results for display
pub mod text;

/// Display theme shared by all renderers
pub mod theme;

/// All logic for drawing a single layout as SVG
#[cfg(feature = "svg-preview")]
pub mod svg;

mod catalog;
mod layout_result;
mod margins;
mod orientation;
mod product;
mod sheet;

#[doc(inline)]
pub use catalog::BUILTIN_FORMATS;

#[doc(inline)]
pub use catalog::Catalog;

#[doc(inline)]
pub use layout_result::LayoutResult;

#[doc(inline)]
pub use layout_result::LayoutStatus;

#[doc(inline)]
pub use margins::GripperSide;

#[doc(inline)]
pub use margins::MarginConfig;

#[doc(inline)]
pub use orientation::Orientation;

#[doc(inline)]
pub use product::Product;

#[doc(inline)]
pub use sheet::SheetFormat;

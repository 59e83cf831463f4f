mod rect;

#[doc(inline)]
pub use rect::Rect;

use log::debug;

use crate::entities::SheetFormat;

/// Built-in sheet sizes in mm, `(width, height)`
pub const BUILTIN_FORMATS: [(f64, f64); 8] = [
    (1030.0, 540.0),
    (930.0, 630.0),
    (1000.0, 700.0),
    (700.0, 500.0),
    (540.0, 515.0),
    (540.0, 343.0),
    (630.0, 465.0),
    (630.0, 310.0),
];

/// Ordered list of sheet formats: the built-in formats followed by the custom ones,
/// in the order they were added.
#[derive(Clone, Debug)]
pub struct Catalog {
    formats: Vec<SheetFormat>,
    n_builtin: usize,
}

impl Catalog {
    pub fn builtin() -> Self {
        let formats = BUILTIN_FORMATS
            .iter()
            .map(|&(w, h)| {
                SheetFormat::try_new(format!("{w} × {h} mm"), w, h)
                    .expect("built-in formats have positive dimensions")
            })
            .collect::<Vec<_>>();
        let n_builtin = formats.len();
        Catalog { formats, n_builtin }
    }

    /// Built-in formats extended with `custom`
    pub fn with_custom(custom: impl IntoIterator<Item = SheetFormat>) -> Self {
        let mut catalog = Catalog::builtin();
        custom.into_iter().for_each(|f| catalog.push_custom(f));
        catalog
    }

    pub fn push_custom(&mut self, format: SheetFormat) {
        debug!("[CATALOG] adding custom format: {}", format.name());
        self.formats.push(format);
    }

    pub fn formats(&self) -> &[SheetFormat] {
        &self.formats
    }

    pub fn builtin_formats(&self) -> &[SheetFormat] {
        &self.formats[..self.n_builtin]
    }

    pub fn custom_formats(&self) -> &[SheetFormat] {
        &self.formats[self.n_builtin..]
    }

    pub fn is_custom(&self, index: usize) -> bool {
        index >= self.n_builtin && index < self.formats.len()
    }

    pub fn get(&self, index: usize) -> Option<&SheetFormat> {
        self.formats.get(index)
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.formats()[0].name(), "1030 × 540 mm");
        assert_eq!(catalog.formats()[2].width(), 1000.0);
        assert_eq!(catalog.formats()[2].height(), 700.0);
        assert!(catalog.custom_formats().is_empty());
    }

    #[test]
    fn custom_formats_are_appended_in_order() {
        let a = SheetFormat::custom(500.0, 800.0).unwrap();
        let b = SheetFormat::custom(320.0, 450.0).unwrap();
        let catalog = Catalog::with_custom([a.clone(), b.clone()]);
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.custom_formats(), &[a, b]);
        assert!(!catalog.is_custom(7));
        assert!(catalog.is_custom(8));
        assert!(!catalog.is_custom(10));
    }
}

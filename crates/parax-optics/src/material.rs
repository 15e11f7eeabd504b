/// An optical material.
///
/// Only the data the aiming engine needs: a name for lookup and the
/// refractive index at the design wavelength.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name, e.g. `"vacuum"` or a glass catalog entry.
    pub name: String,
    /// Refractive index at the design wavelength.
    pub refractive_index: f64,
}

impl Material {
    /// Create a material from a name and refractive index.
    pub fn new(name: impl Into<String>, refractive_index: f64) -> Self {
        Self {
            name: name.into(),
            refractive_index,
        }
    }

    /// The vacuum background material (n = 1).
    pub fn vacuum() -> Self {
        Self::new("vacuum", 1.0)
    }
}

/// Reference to one surface inside a trace sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceRef {
    /// Surface name within its element.
    pub name: String,
    /// Whether this surface is the aperture stop.
    pub is_stop: bool,
}

impl SurfaceRef {
    /// A plain surface reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_stop: false,
        }
    }

    /// A surface reference flagged as the aperture stop.
    pub fn stop(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_stop: true,
        }
    }
}

/// One element of a trace sequence with its ordered surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceElement {
    /// Element name, resolvable through the optical system.
    pub element: String,
    /// Ordered surfaces of the element hit during the trace.
    pub surfaces: Vec<SurfaceRef>,
}

impl SequenceElement {
    /// Create a sequence element from its name and surface references.
    pub fn new(element: impl Into<String>, surfaces: Vec<SurfaceRef>) -> Self {
        Self {
            element: element.into(),
            surfaces,
        }
    }
}

/// An ordered trace path through an optical system.
///
/// The object surface is by convention the first surface of the first
/// element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    /// Ordered elements of the trace.
    pub elements: Vec<SequenceElement>,
}

impl Sequence {
    /// Create a sequence from its elements.
    pub fn new(elements: Vec<SequenceElement>) -> Self {
        Self { elements }
    }

    /// Resolve the object surface: the first surface of the first
    /// element, or `None` for an empty sequence.
    pub fn first_surface(&self) -> Option<(&str, &str)> {
        let element = self.elements.first()?;
        let surface = element.surfaces.first()?;
        Some((element.element.as_str(), surface.name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_surface() {
        let seq = Sequence::new(vec![SequenceElement::new(
            "lens",
            vec![SurfaceRef::new("object"), SurfaceRef::stop("stop")],
        )]);
        assert_eq!(seq.first_surface(), Some(("lens", "object")));
    }

    #[test]
    fn test_first_surface_empty() {
        assert_eq!(Sequence::default().first_surface(), None);
        let no_surfaces = Sequence::new(vec![SequenceElement::new("lens", vec![])]);
        assert_eq!(no_surfaces.first_surface(), None);
    }
}

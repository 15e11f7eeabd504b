//! Field specifications and chief-ray slope mapping.
//!
//! A field specification names one imaged point, either as a chief-ray
//! angle or as an object height. The pure functions here convert field
//! values into the nominal chief-ray slope used by paraxial layout code.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use parax_optics::{OpticalSystem, RayBundle};

use crate::error::AimError;

/// The interpretation of a 2-D field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Chief-ray angle at the object, radians per component.
    Angle,
    /// Transverse object height.
    ObjectHeight,
    /// Object-side wavevector. Declared but not yet implemented; the
    /// aimer refuses it with [`AimError::UnsupportedFieldKind`].
    Wavevector,
}

impl FieldKind {
    /// The string tag of this field kind.
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::Angle => "angle",
            FieldKind::ObjectHeight => "objectheight",
            FieldKind::Wavevector => "kvector",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FieldKind {
    type Err = AimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "angle" => Ok(FieldKind::Angle),
            "objectheight" => Ok(FieldKind::ObjectHeight),
            "kvector" => Ok(FieldKind::Wavevector),
            other => Err(AimError::UnsupportedFieldKind(other.to_string())),
        }
    }
}

/// Chief-ray slope from a transverse object height.
///
/// # Arguments
///
/// * `system` - Optical system answering the paraxial pupil query.
/// * `ray` - Reference ray bundle the pupil data refers to.
/// * `field_xy` - Object field height in x and y.
///
/// # Errors
///
/// [`AimError::DivideByZero`] when the entrance pupil distance is zero.
pub fn chief_slope_by_object_height<S: OpticalSystem>(
    system: &S,
    ray: &RayBundle,
    field_xy: DVec2,
) -> Result<DVec2, AimError> {
    let pupil = system.paraxial_pupil(ray)?;
    if pupil.entrance_pupil_z == 0.0 {
        return Err(AimError::DivideByZero {
            quantity: "entrance pupil distance",
        });
    }
    Ok(-field_xy / pupil.entrance_pupil_z)
}

/// Chief-ray slope from an object-sided chief-ray angle in degrees.
pub fn chief_slope_by_chief_angle(angle_deg_xy: DVec2) -> DVec2 {
    DVec2::new(
        angle_deg_xy.x.to_radians().tan(),
        angle_deg_xy.y.to_radians().tan(),
    )
}

/// Chief-ray slope from a paraxial image height.
///
/// # Errors
///
/// [`AimError::DivideByZero`] when the entrance pupil distance or the
/// paraxial magnification is zero.
pub fn chief_slope_by_image_height<S: OpticalSystem>(
    system: &S,
    ray: &RayBundle,
    image_xy: DVec2,
) -> Result<DVec2, AimError> {
    let pupil = system.paraxial_pupil(ray)?;
    if pupil.entrance_pupil_z == 0.0 {
        return Err(AimError::DivideByZero {
            quantity: "entrance pupil distance",
        });
    }
    let magnification = system.paraxial_magnification(ray)?;
    if magnification == 0.0 {
        return Err(AimError::DivideByZero {
            quantity: "paraxial magnification",
        });
    }
    Ok(-image_xy / (pupil.entrance_pupil_z * magnification))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;
    use nalgebra::{DMatrix, Matrix2};
    use parax_optics::{
        CoreError, Material, ParaxialPupil, PilotBundle, Sequence, Surface,
    };

    struct PupilStub {
        entrance_pupil_z: f64,
        magnification: f64,
        material: Material,
    }

    impl OpticalSystem for PupilStub {
        fn paraxial_pupil(&self, _ray: &RayBundle) -> Result<ParaxialPupil, CoreError> {
            Ok(ParaxialPupil {
                entrance_pupil_z: self.entrance_pupil_z,
                entrance_magnification: 1.0,
                exit_pupil_z: -self.entrance_pupil_z,
                exit_magnification: 1.0,
                obj_stop: Matrix2::identity(),
                stop_img: Matrix2::identity(),
            })
        }

        fn paraxial_magnification(&self, _ray: &RayBundle) -> Result<f64, CoreError> {
            Ok(self.magnification)
        }

        fn extract_linear(
            &self,
            _pilot: &PilotBundle,
            _sequence: &Sequence,
        ) -> Result<(DMatrix<f64>, DMatrix<f64>), CoreError> {
            Ok((DMatrix::identity(4, 4), DMatrix::identity(4, 4)))
        }

        fn surface(&self, _element: &str, _name: &str) -> Option<&Surface> {
            None
        }

        fn background_material(&self) -> &Material {
            &self.material
        }
    }

    fn axial_ray() -> RayBundle {
        RayBundle::new(vec![DVec3::ZERO], vec![DVec3::Z], vec![DVec3::Y], 550.0e-6).unwrap()
    }

    #[test]
    fn test_chief_slope_by_chief_angle() {
        let zero = chief_slope_by_chief_angle(DVec2::ZERO);
        assert_eq!(zero, DVec2::ZERO);

        let slope = chief_slope_by_chief_angle(DVec2::new(45.0, 0.0));
        assert_relative_eq!(slope.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(slope.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_chief_slope_by_object_height() {
        let system = PupilStub {
            entrance_pupil_z: 100.0,
            magnification: 2.0,
            material: Material::vacuum(),
        };
        let slope =
            chief_slope_by_object_height(&system, &axial_ray(), DVec2::new(5.0, -10.0)).unwrap();
        assert_relative_eq!(slope.x, -0.05, epsilon = 1e-12);
        assert_relative_eq!(slope.y, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_chief_slope_by_image_height() {
        let system = PupilStub {
            entrance_pupil_z: 100.0,
            magnification: 2.0,
            material: Material::vacuum(),
        };
        let slope =
            chief_slope_by_image_height(&system, &axial_ray(), DVec2::new(10.0, 0.0)).unwrap();
        assert_relative_eq!(slope.x, -0.05, epsilon = 1e-12);
        assert_relative_eq!(slope.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_pupil_distance_fails() {
        let system = PupilStub {
            entrance_pupil_z: 0.0,
            magnification: 2.0,
            material: Material::vacuum(),
        };
        let err = chief_slope_by_object_height(&system, &axial_ray(), DVec2::new(1.0, 0.0));
        assert!(matches!(err, Err(AimError::DivideByZero { .. })));
    }

    #[test]
    fn test_zero_magnification_fails() {
        let system = PupilStub {
            entrance_pupil_z: 100.0,
            magnification: 0.0,
            material: Material::vacuum(),
        };
        let err = chief_slope_by_image_height(&system, &axial_ray(), DVec2::new(1.0, 0.0));
        assert!(matches!(err, Err(AimError::DivideByZero { .. })));
    }

    #[test]
    fn test_field_kind_tags_roundtrip() {
        for kind in [FieldKind::Angle, FieldKind::ObjectHeight, FieldKind::Wavevector] {
            assert_eq!(kind.tag().parse::<FieldKind>().unwrap(), kind);
        }
        let err = "bogus".parse::<FieldKind>();
        assert!(matches!(err, Err(AimError::UnsupportedFieldKind(tag)) if tag == "bogus"));
    }
}

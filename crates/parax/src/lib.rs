#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use parax_optics as optics;

#[doc(inline)]
pub use parax_sampling as sampling;

#[doc(inline)]
pub use parax_aim as aim;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_PER_RAD: f64 = 206264.8062470963551564734;

pub const DEGREES_PER_HOUR: f64 = 15.0;

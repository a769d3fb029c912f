pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Julian Date of the Besselian epoch B1900.0.
pub const B1900_JD: f64 = 2415020.31352;

/// Length of the tropical year (days) used by the Besselian epoch scale.
pub const DAYS_PER_TROPICAL_YEAR: f64 = 365.242198781;

pub const B1900_EPOCH: f64 = 1900.0;

/// Default source equinox of the IAU constellation boundaries (Delporte 1930).
pub const B1875_EPOCH: f64 = 1875.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const HALF_DAY_HOURS: f64 = 12.0;

pub const DEGREES_PER_HOUR: f64 = 15.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Radians per hour of right ascension (pi / 12).
#[allow(clippy::excessive_precision)]
pub const HOURS_TO_RAD: f64 = 0.2617993877991494365385536;

/// Hours of right ascension per radian (12 / pi).
#[allow(clippy::excessive_precision)]
pub const RAD_TO_HOURS: f64 = 3.819718634205488058453210;

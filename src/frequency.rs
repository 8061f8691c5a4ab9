//! Frequency value with platform-independent precision and range.
//!
//! The frequency is measured in Hertz and stored as a binary64 double, which
//! gives the same precision and range on every supported platform. The value
//! is signed so negative frequencies (mirrored spectrum) are representable.
//!
//! Construction from the primitive numeric types is implicit (`From`), since
//! the stored precision is at least as good as any of them. Conversion back
//! is explicit: it may lose precision, and silent lossy casts would behave
//! differently across call sites.
//!
//! The intended use is bookkeeping over a wide range of frequencies, from
//! near DC up to tens of gigahertz, not heavy per-sample arithmetic.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Frequency in Hertz.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Debug)]
pub struct Frequency(f64);

impl Frequency {
    /// Frequency of the given number of Hertz.
    #[inline]
    pub const fn hertz(hz: f64) -> Frequency {
        Frequency(hz)
    }

    /// Frequency of the given number of kilohertz.
    #[inline]
    pub const fn kilohertz(khz: f64) -> Frequency {
        Frequency(khz * 1e3)
    }

    /// Frequency of the given number of megahertz.
    #[inline]
    pub const fn megahertz(mhz: f64) -> Frequency {
        Frequency(mhz * 1e6)
    }

    /// Frequency of the given number of gigahertz.
    #[inline]
    pub const fn gigahertz(ghz: f64) -> Frequency {
        Frequency(ghz * 1e9)
    }

    /// The value in Hertz as a double.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.0
    }

    /// The value in Hertz as a single precision float. May lose precision.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// The value in Hertz truncated to an integer.
    #[inline]
    pub fn to_i64(self) -> i64 {
        self.0 as i64
    }

    /// The value rounded to the nearest integral number of Hertz.
    #[inline]
    pub fn round(self) -> Frequency {
        Frequency(self.0.round())
    }

    /// Floating-point remainder of the division `self / rhs`.
    #[inline]
    pub fn modulo(self, rhs: Frequency) -> Frequency {
        Frequency(self.0 % rhs.0)
    }
}

macro_rules! frequency_from {
    ($($from:ty),*) => {
        $(
            impl From<$from> for Frequency {
                #[inline]
                fn from(value: $from) -> Frequency {
                    Frequency(value as f64)
                }
            }

            impl PartialEq<$from> for Frequency {
                #[inline]
                fn eq(&self, other: &$from) -> bool {
                    self.0 == *other as f64
                }
            }

            impl PartialOrd<$from> for Frequency {
                #[inline]
                fn partial_cmp(&self, other: &$from) -> Option<std::cmp::Ordering> {
                    self.0.partial_cmp(&(*other as f64))
                }
            }
        )*
    };
}

frequency_from!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl Neg for Frequency {
    type Output = Frequency;

    #[inline]
    fn neg(self) -> Frequency {
        Frequency(-self.0)
    }
}

macro_rules! frequency_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait for Frequency {
            type Output = Frequency;

            #[inline]
            fn $method(self, rhs: Frequency) -> Frequency {
                Frequency(self.0 $op rhs.0)
            }
        }

        impl $trait<f64> for Frequency {
            type Output = Frequency;

            #[inline]
            fn $method(self, rhs: f64) -> Frequency {
                Frequency(self.0 $op rhs)
            }
        }

        impl $assign_trait for Frequency {
            #[inline]
            fn $assign_method(&mut self, rhs: Frequency) {
                self.0 = self.0 $op rhs.0;
            }
        }

        impl $assign_trait<f64> for Frequency {
            #[inline]
            fn $assign_method(&mut self, rhs: f64) {
                self.0 = self.0 $op rhs;
            }
        }
    };
}

frequency_binary_op!(Add, add, AddAssign, add_assign, +);
frequency_binary_op!(Sub, sub, SubAssign, sub_assign, -);
frequency_binary_op!(Mul, mul, MulAssign, mul_assign, *);
frequency_binary_op!(Div, div, DivAssign, div_assign, /);

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

use super::Angle;
use core::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! angle_op {
    ($trait:ident, $method:ident, $rhs:ty, |$a:ident, $b:ident| $body:expr) => {
        impl $trait<$rhs> for Angle {
            type Output = Angle;
            #[inline]
            fn $method(self, rhs: $rhs) -> Angle {
                let ($a, $b) = (self.rad, rhs);
                Angle { rad: $body }
            }
        }
    };
}

angle_op!(Add, add, Angle, |a, b| a + b.rad);
angle_op!(Sub, sub, Angle, |a, b| a - b.rad);
angle_op!(Mul, mul, f64, |a, k| a * k);
angle_op!(Div, div, f64, |a, k| a / k);

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        Angle { rad: -self.rad }
    }
}

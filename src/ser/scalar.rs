use std::borrow::Cow;

use super::{escape::encode_str, Encode};

use crate::shape::Shaped;

impl Encode for bool {
    #[inline]
    fn encode(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

macro_rules! encode_int {
    ($($ty:ty),+) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode(&self, out: &mut String) {
                    out.push_str(itoa::Buffer::new().format(*self));
                }
            }
        )+
    };
}

encode_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! encode_float {
    ($($ty:ty),+) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode(&self, out: &mut String) {
                    // JSON has no representation for NaN or the infinities
                    if self.is_finite() {
                        out.push_str(ryu::Buffer::new().format_finite(*self));
                    } else {
                        out.push_str("null");
                    }
                }
            }
        )+
    };
}

encode_float!(f32, f64);

impl Encode for char {
    #[inline]
    fn encode(&self, out: &mut String) {
        let mut buf = [0; 4];
        encode_str(self.encode_utf8(&mut buf), out)
    }
}

impl Encode for str {
    #[inline]
    fn encode(&self, out: &mut String) {
        encode_str(self, out)
    }
}

impl Encode for String {
    #[inline]
    fn encode(&self, out: &mut String) {
        encode_str(self, out)
    }
}

impl<'a> Encode for &'a str {
    #[inline]
    fn encode(&self, out: &mut String) {
        encode_str(self, out)
    }
}

impl<'a> Encode for Cow<'a, str> {
    #[inline]
    fn encode(&self, out: &mut String) {
        encode_str(self, out)
    }
}

impl<T: Encode + Shaped + ?Sized> Encode for Box<T> {
    #[inline]
    fn encode(&self, out: &mut String) {
        (**self).encode(out)
    }
}

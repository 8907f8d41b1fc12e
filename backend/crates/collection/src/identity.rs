//! Item identity
//!
//! `remove` and `contains` look items up by identity rather than deep
//! equality. Shared pointers are identical when they point at the same
//! allocation; plain values are identical when they are equal.

use std::rc::Rc;
use std::sync::Arc;

pub trait Identical {
    fn is_identical(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identical for Arc<T> {
    fn is_identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identical for Rc<T> {
    fn is_identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl Identical for &str {
    fn is_identical(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! identical_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identical for $ty {
                fn is_identical(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

identical_by_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

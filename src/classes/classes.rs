use std::any::{type_name, Any, TypeId};

use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("value cannot be cast to {expected}")]
pub struct ClassCastError {
    pub expected: &'static str,
}

impl ClassCastError {
    pub fn to<T: Any + ?Sized>() -> ClassCastError {
        ClassCastError {
            expected: primitive_name::<T>().unwrap_or_else(type_name::<T>),
        }
    }
}

/// Clones `value` out as a `T`.
///
/// # Errors
/// Returns [`ClassCastError`] if `value` doesn't hold a `T`. No numeric widening is performed, an
/// `i32` can't be cast to an `i64`.
pub fn cast<T: Any + Clone>(value: &dyn Any) -> Result<T, ClassCastError> {
    value.downcast_ref::<T>().cloned().ok_or_else(ClassCastError::to::<T>)
}

pub fn is_instance<T: Any>(value: &dyn Any) -> bool {
    value.is::<T>()
}

/// Returns the name of `T` if it is one of Rust's primitive scalar types.
pub fn primitive_name<T: Any + ?Sized>() -> Option<&'static str> {
    let id = TypeId::of::<T>();
    macro_rules! primitives {
        ($($ty:ty),*) => {
            $(if id == TypeId::of::<$ty>() {
                return Some(stringify!($ty));
            })*
        };
    }
    primitives!(
        bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, ()
    );
    None
}

pub fn is_primitive<T: Any + ?Sized>() -> bool {
    primitive_name::<T>().is_some()
}

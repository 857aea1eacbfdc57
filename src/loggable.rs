// std imports
use std::{borrow::Cow, fmt, rc::Rc, sync::Arc};

// ---

/// Loggable is implemented by values that can be passed as log arguments.
///
/// Primitive types render with their natural textual form. User types
/// opt in by implementing [`render`](Loggable::render), or by wrapping
/// a [`Display`](fmt::Display) value into [`AsDisplay`].
///
/// Rendering must not fail and must not block.
pub trait Loggable {
    fn render(&self) -> String;
}

// ---

macro_rules! impl_loggable_via_to_string {
    ($($t:ty),* $(,)?) => {
        $(
            impl Loggable for $t {
                #[inline]
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_loggable_via_to_string!(
    str, String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl Loggable for Cow<'_, str> {
    #[inline]
    fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: ?Sized> Loggable for *const T {
    fn render(&self) -> String {
        format!("{:p}", *self)
    }
}

impl<T: ?Sized> Loggable for *mut T {
    fn render(&self) -> String {
        format!("{:p}", *self)
    }
}

impl<T: Loggable + ?Sized> Loggable for &T {
    #[inline]
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Loggable + ?Sized> Loggable for &mut T {
    #[inline]
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Loggable + ?Sized> Loggable for Box<T> {
    #[inline]
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Loggable + ?Sized> Loggable for Rc<T> {
    #[inline]
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Loggable + ?Sized> Loggable for Arc<T> {
    #[inline]
    fn render(&self) -> String {
        (**self).render()
    }
}

// ---

/// AsDisplay lets any [`Display`](fmt::Display) value be logged
/// without implementing [`Loggable`] for it.
#[derive(Clone, Copy, Debug)]
pub struct AsDisplay<T>(pub T);

impl<T: fmt::Display> Loggable for AsDisplay<T> {
    #[inline]
    fn render(&self) -> String {
        self.0.to_string()
    }
}

// ---

/// Renders every argument up front, in order.
pub fn render_all(args: &[&dyn Loggable]) -> Vec<String> {
    args.iter().map(|arg| arg.render()).collect()
}

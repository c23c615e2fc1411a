// https://en.cppreference.com/w/cpp/utility/optional.html
// Like Option<T> in Rust, but with the value slot and the discriminant managed by hand

use std::{
    fmt::{ Debug, Display },
    mem::{ self, MaybeUninit },
    ops::{ Deref, DerefMut }
};
use crate::{
    error::EmptyAccess,
    init_list::FromList,
    tag::{ InPlace, NullOpt, IN_PLACE }
};

/// A value that may or may not be present, stored inline.
///
/// `on` is the only record of presence: while it is set, `value` holds exactly one live `T`,
/// otherwise the slot is uninitialized. Moving out of a borrowed optional (see [`Optional::take`],
/// [`Optional::move_from`], [`Optional::take_value`]) always leaves the source empty.
#[repr(C)]
pub struct Optional<T> {
    value: MaybeUninit<T>,
    on: bool
}

impl<T> Optional<T> {

    pub fn new(value: Option<T>) -> Self { value.into() }

    pub const fn none() -> Self {
        Self { value: MaybeUninit::uninit(), on: false }
    }

    pub const fn null(_: NullOpt) -> Self { Self::none() }

    pub const fn some(value: T) -> Self {
        Self { value: MaybeUninit::new(value), on: true }
    }

    /// Builds the contained value from `args` through `T::from`.
    pub fn in_place<A>(_: InPlace, args: A) -> Self
    where T: From<A>
    {
        Self::in_place_with(IN_PLACE, || T::from(args))
    }

    pub fn in_place_with<F>(_: InPlace, f: F) -> Self
    where F: FnOnce() -> T
    {
        let mut out = Self::none();
        out.construct(f());
        out
    }

    /// Builds the contained value from a list followed by trailing arguments.
    pub fn in_place_list<U, A>(_: InPlace, list: &[U], args: A) -> Self
    where T: FromList<U, A>
    {
        Self::in_place_with(IN_PLACE, || T::from_list(list, args))
    }

    // Storage must be empty. The discriminant is only set once the value is live.
    fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.on, "Tried to construct over a live value");
        let slot = self.value.write(value);
        self.on = true;
        slot
    }

    // Cleared before dropping so a panicking destructor can't cause a second drop
    fn destruct(&mut self) {
        if self.on {
            self.on = false;
            if mem::needs_drop::<T>() {
                unsafe { self.value.assume_init_drop() };
            }
        }
    }

    // Storage must be live. Leaves it empty.
    unsafe fn release(&mut self) -> T {
        self.on = false;
        unsafe { self.value.assume_init_read() }
    }
}

impl<T> Optional<T> {
    pub fn has_value(&self) -> bool { self.on }

    /// # Safety
    /// The optional must hold a value.
    pub unsafe fn get_unchecked(&self) -> &T {
        unsafe { self.value.assume_init_ref() }
    }

    /// # Safety
    /// The optional must hold a value.
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        unsafe { self.value.assume_init_mut() }
    }

    /// # Safety
    /// The optional must hold a value.
    pub unsafe fn into_inner_unchecked(mut self) -> T {
        unsafe { self.release() }
    }

    /// Returns the contained value, or [`EmptyAccess`] if there is none.
    pub fn value(&self) -> Result<&T, EmptyAccess> {
        match self.on {
            true => Ok(unsafe { self.get_unchecked() }),
            false => Err(EmptyAccess::raised_by("value"))
        }
    }

    pub fn value_mut(&mut self) -> Result<&mut T, EmptyAccess> {
        match self.on {
            true => Ok(unsafe { self.get_unchecked_mut() }),
            false => Err(EmptyAccess::raised_by("value_mut"))
        }
    }

    pub fn into_value(self) -> Result<T, EmptyAccess> {
        self.into_option().ok_or_else(|| EmptyAccess::raised_by("into_value"))
    }

    /// Moves the contained value out, leaving this optional empty.
    pub fn take_value(&mut self) -> Result<T, EmptyAccess> {
        match self.on {
            true => Ok(unsafe { self.release() }),
            false => Err(EmptyAccess::raised_by("take_value"))
        }
    }

    /// Returns a copy of the contained value if there is one, otherwise `default`.
    pub fn value_or<U>(&self, default: U) -> T
    where T: Clone,
          U: Into<T>
    {
        match self.as_option() {
            Some(v) => v.clone(),
            None => default.into()
        }
    }

    pub fn into_value_or<U>(self, default: U) -> T
    where U: Into<T>
    {
        match self.into_option() {
            Some(v) => v,
            None => default.into()
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self.on {
            true => Some(unsafe { self.get_unchecked() }),
            false => None
        }
    }

    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        match self.on {
            true => Some(unsafe { self.get_unchecked_mut() }),
            false => None
        }
    }

    pub fn into_option(mut self) -> Option<T> {
        match self.on {
            true => Some(unsafe { self.release() }),
            false => None
        }
    }
}

impl<T> Optional<T> {
    /// Drops the contained value, if any.
    pub fn reset(&mut self) -> &mut Self {
        self.destruct();
        self
    }

    pub fn assign_null(&mut self, _: NullOpt) -> &mut Self { self.reset() }

    /// Assigns into the contained value if there is one, otherwise constructs it.
    pub fn assign(&mut self, value: T) -> &mut Self {
        match self.on {
            true => *unsafe { self.get_unchecked_mut() } = value,
            false => { self.construct(value); }
        }
        self
    }

    /// Copy assignment. A held value is assigned through [`Clone::clone_from`] rather than
    /// being dropped and rebuilt.
    pub fn assign_clone(&mut self, other: &Self) -> &mut Self
    where T: Clone
    {
        match (self.on, other.on) {
            (true, true) => unsafe { self.get_unchecked_mut().clone_from(other.get_unchecked()) },
            (true, false) => self.destruct(),
            (false, true) => { self.construct(unsafe { other.get_unchecked() }.clone()); },
            (false, false) => {}
        }
        self
    }

    /// Move assignment. `other` is left empty.
    pub fn move_from(&mut self, other: &mut Self) -> &mut Self {
        match other.on {
            true => {
                let value = unsafe { other.release() };
                self.assign(value)
            },
            false => self.reset()
        }
    }

    pub fn assign_from(&mut self, mut other: Self) -> &mut Self {
        self.move_from(&mut other)
    }

    /// Moves the contents into a new optional, leaving this one empty.
    pub fn take(&mut self) -> Self {
        let mut out = Self::none();
        out.move_from(self);
        out
    }

    /// Exchanges contents with `other`. When only one side holds a value it is moved across and
    /// the side it came from ends up empty.
    pub fn swap(&mut self, other: &mut Self) {
        match (self.on, other.on) {
            (true, true) => unsafe { mem::swap(self.get_unchecked_mut(), other.get_unchecked_mut()) },
            (true, false) => { other.move_from(self); },
            (false, true) => { self.move_from(other); },
            (false, false) => {}
        }
    }

    /// Drops the contained value, if any, then builds a new one from `args`.
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where T: From<A>
    {
        self.emplace_with(|| T::from(args))
    }

    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
    where F: FnOnce() -> T
    {
        self.destruct();
        self.construct(f())
    }

    pub fn emplace_list<U, A>(&mut self, list: &[U], args: A) -> &mut T
    where T: FromList<U, A>
    {
        self.emplace_with(|| T::from_list(list, args))
    }
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.destruct();
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self { Self::none() }
}

impl<T> Clone for Optional<T>
where T: Clone
{
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(v) => Self::some(v.clone()),
            None => Self::none()
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_clone(source);
    }
}

impl<T> Deref for Optional<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        assert!(self.on, "Tried to dereference an empty optional");
        unsafe { self.get_unchecked() }
    }
}

impl<T> DerefMut for Optional<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        assert!(self.on, "Tried to dereference an empty optional");
        unsafe { self.get_unchecked_mut() }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self { Self::some(value) }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(p) => Self::some(p),
            None => Self::none()
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self { value.into_option() }
}

impl<T> From<&Optional<T>> for bool {
    fn from(value: &Optional<T>) -> Self { value.has_value() }
}

impl<T> Debug for Optional<T>
where T: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_option() {
            Some(v) => write!(f, "Some({:?})", v),
            None => write!(f, "None"),
        }
    }
}

impl<T> Display for Optional<T>
where T: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_option() {
            Some(v) => write!(f, "Some({})", v),
            None => write!(f, "None"),
        }
    }
}

// Stands in for constructors taking an std::initializer_list followed by more arguments,
// e.g. std::vector(std::initializer_list<T>, const Allocator&)
use allocator_api2::{
    alloc::Allocator,
    vec::Vec as AllocVec
};

/// Types that can be built from a list of `U` followed by trailing arguments `A`.
///
/// Used by [`Optional::in_place_list`](crate::Optional::in_place_list) and
/// [`Optional::emplace_list`](crate::Optional::emplace_list). Trailing arguments are passed as a
/// single value, use a tuple when a constructor needs several.
pub trait FromList<U, A = ()>: Sized {
    fn from_list(list: &[U], args: A) -> Self;
}

impl<U> FromList<U> for Vec<U>
where U: Clone
{
    fn from_list(list: &[U], _: ()) -> Self { list.to_vec() }
}

impl FromList<char> for String {
    fn from_list(list: &[char], _: ()) -> Self { list.iter().collect() }
}

impl<U, A> FromList<U, A> for AllocVec<U, A>
where U: Clone,
      A: Allocator
{
    fn from_list(list: &[U], alloc: A) -> Self {
        let mut out = AllocVec::with_capacity_in(list.len(), alloc);
        out.extend_from_slice(list);
        out
    }
}

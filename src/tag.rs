// https://en.cppreference.com/w/cpp/utility/optional/nullopt_t.html

/// Marker for an optional holding no value. See [`NULLOPT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullOpt;

/// Marker asking an optional to build its value from forwarded arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InPlace;

pub const NULLOPT: NullOpt = NullOpt;
pub const IN_PLACE: InPlace = InPlace;

/// Returned by the checked accessors of [`Optional`](crate::Optional) when no value is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("bad optional access")]
pub struct EmptyAccess;

impl EmptyAccess {
    pub(crate) fn raised_by(accessor: &'static str) -> Self {
        log::trace!(target: "bpstd::optional", "{} called on an empty optional", accessor);
        Self
    }
}

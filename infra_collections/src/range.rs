use crate::error::Error;
use crate::unique::UniqueSequence;
use num_traits::ToPrimitive;
use strum::{Display, EnumString};
use tracing::{debug, trace};
use utils::integer::assert_integer;

/// Whether [`range`] includes its upper bound.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RangeMode {
    Inclusive,
    Exclusive,
}

/// Consecutive integers from `n` up to `m`.
///
/// Both bounds must hold whole numbers; `2.0` is accepted, `0.5` is an
/// [`Error::InvalidArgument`]. An empty range is not an error.
pub fn range<N, M>(n: N, m: M, mode: RangeMode) -> Result<UniqueSequence<i64>, Error>
where
    N: ToPrimitive + std::fmt::Display,
    M: ToPrimitive + std::fmt::Display,
{
    let start = assert_integer("n", n).inspect_err(|err| debug!(%err, "rejected range bound"))?;
    let end = assert_integer("m", m).inspect_err(|err| debug!(%err, "rejected range bound"))?;

    let items: Vec<i64> = match mode {
        RangeMode::Inclusive => (start..=end).collect(),
        RangeMode::Exclusive => (start..end).collect(),
    };
    trace!(start, end, %mode, len = items.len(), "generated range");

    Ok(UniqueSequence::from_unique_vec(items))
}

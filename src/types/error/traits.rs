use super::{AggregateError, Error};
use core::fmt::{self, Display};

impl Display for Error {
    /// `"<VariantName>: <Message>"`; the alternate form also lists the
    /// children of an aggregate, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.variant_name(), self.message())?;
        if let (true, Error::Aggregate(aggregate)) = (f.alternate(), self) {
            write_children(f, aggregate, 1)?;
        }
        Ok(())
    }
}

fn write_children(
    f: &mut fmt::Formatter<'_>,
    aggregate: &AggregateError,
    depth: usize,
) -> fmt::Result {
    for child in aggregate {
        f.write_str("\n")?;
        for _ in 0..depth {
            f.write_str("  ")?;
        }
        write!(f, "- {}: {}", child.variant_name(), child.message())?;
        if let Error::Aggregate(nested) = child {
            write_children(f, nested, depth + 1)?;
        }
    }
    Ok(())
}

impl Display for AggregateError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AggregateError: {}", self.message())
    }
}

impl core::error::Error for Error {}

impl core::error::Error for AggregateError {}

//! Conversion of caller-supplied index and length arguments.
//!
//! Sequence positions are `usize` internally, but callers may hold signed
//! integers. [`Position`] converts any primitive integer to a position and,
//! when that is impossible, hands back the original value widened to `i128`
//! so it can be reported in a [`SequenceError`](crate::SequenceError).

/// An integer that can be used as a sequence index or length.
///
/// # Examples
///
/// ```rust
/// use parseq::Position;
///
/// assert_eq!(3_i32.to_position(), Ok(3));
/// assert_eq!((-1_i64).to_position(), Err(-1));
/// assert_eq!(7_usize.to_position(), Ok(7));
/// ```
pub trait Position: Copy {
    /// Converts to a `usize` position, or returns the original value.
    ///
    /// # Errors
    ///
    /// Returns the value widened to `i128` when it is negative or does not
    /// fit in `usize`.
    fn to_position(self) -> Result<usize, i128>;
}

macro_rules! impl_position {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Position for $integer {
                #[inline]
                fn to_position(self) -> Result<usize, i128> {
                    usize::try_from(self).map_err(|_| i128::from(self))
                }
            }
        )*
    };
}

impl_position!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Position for usize {
    #[inline]
    fn to_position(self) -> Result<usize, i128> {
        Ok(self)
    }
}

impl Position for isize {
    #[inline]
    fn to_position(self) -> Result<usize, i128> {
        // isize always fits in i128 on every supported target.
        usize::try_from(self).map_err(|_| self as i128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0_i32, Ok(0))]
    #[case(5_i32, Ok(5))]
    #[case(-1_i32, Err(-1))]
    #[case(i32::MIN, Err(i128::from(i32::MIN)))]
    fn signed_conversion(#[case] value: i32, #[case] expected: Result<usize, i128>) {
        assert_eq!(value.to_position(), expected);
    }

    #[rstest]
    fn isize_negative_is_rejected() {
        assert_eq!((-7_isize).to_position(), Err(-7));
        assert_eq!(7_isize.to_position(), Ok(7));
    }

    #[rstest]
    fn unsigned_always_converts() {
        assert_eq!(u8::MAX.to_position(), Ok(255));
        assert_eq!(usize::MAX.to_position(), Ok(usize::MAX));
    }
}

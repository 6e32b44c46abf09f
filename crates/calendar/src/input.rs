//! Numeric-like inputs accepted by the validation gate.

/// A value that may denote an integer date component.
///
/// Integers convert directly. Floats are accepted only when finite and
/// integral (`2000.0` but not `2000.5`). Strings are trimmed, then parsed as
/// an integer or, failing that, as an integral float, so `" 29 "`, `"+3"`
/// and `"1.9e3"` are all accepted while `""`, `"NaN"` and `"Monday"` are not.
pub trait DatePart {
    /// Returns the integer this value denotes, or `None` if it does not
    /// denote one that fits in an `i64`.
    fn as_integer(&self) -> Option<i64>;
}

macro_rules! impl_date_part_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl DatePart for $t {
                fn as_integer(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_date_part_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn integral_float(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Some(value as i64)
    } else {
        None
    }
}

impl DatePart for f64 {
    fn as_integer(&self) -> Option<i64> {
        integral_float(*self)
    }
}

impl DatePart for f32 {
    fn as_integer(&self) -> Option<i64> {
        integral_float(f64::from(*self))
    }
}

impl DatePart for str {
    fn as_integer(&self) -> Option<i64> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed
            .parse::<i64>()
            .ok()
            .or_else(|| trimmed.parse::<f64>().ok().and_then(integral_float))
    }
}

impl DatePart for String {
    fn as_integer(&self) -> Option<i64> {
        self.as_str().as_integer()
    }
}

impl<T: DatePart + ?Sized> DatePart for &T {
    fn as_integer(&self) -> Option<i64> {
        (**self).as_integer()
    }
}

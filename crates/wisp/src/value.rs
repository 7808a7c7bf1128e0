// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Types that can be rendered as text content of the tree.
///
/// Integers go through [`itoa`] rather than the `Display` machinery.
pub trait IntoText {
    fn into_text(self) -> String;
}

impl IntoText for String {
    fn into_text(self) -> String {
        self
    }
}

impl IntoText for &str {
    fn into_text(self) -> String {
        self.into()
    }
}

impl IntoText for &String {
    fn into_text(self) -> String {
        self.clone()
    }
}

impl IntoText for bool {
    fn into_text(self) -> String {
        if self { "true" } else { "false" }.into()
    }
}

macro_rules! impl_int {
    ($($t:ty),*) => {
        $(
            impl IntoText for $t {
                fn into_text(self) -> String {
                    itoa::Buffer::new().format(self).into()
                }
            }
        )*
    };
}

impl_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(0_u32.into_text(), "0");
        assert_eq!((-42_i64).into_text(), "-42");
        assert_eq!(u64::MAX.into_text(), "18446744073709551615");
    }

    #[test]
    fn strings() {
        assert_eq!("foo".into_text(), "foo");
        assert_eq!(String::from("bar").into_text(), "bar");
        assert_eq!(true.into_text(), "true");
    }
}

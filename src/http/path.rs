//! API path composition
//!
//! Builds request paths from a `{}` template, percent-escaping every string
//! argument so a label like `a/b c` cannot inject extra path segments.

use std::borrow::Cow;

/// A value that can be substituted into an API path template
pub trait PathArg {
    /// Render this value as a path segment
    fn to_path_segment(&self) -> Cow<'_, str>;
}

impl PathArg for str {
    fn to_path_segment(&self) -> Cow<'_, str> {
        urlencoding::encode(self)
    }
}

impl PathArg for String {
    fn to_path_segment(&self) -> Cow<'_, str> {
        urlencoding::encode(self)
    }
}

impl<T: PathArg + ?Sized> PathArg for &T {
    fn to_path_segment(&self) -> Cow<'_, str> {
        (**self).to_path_segment()
    }
}

macro_rules! impl_path_arg_display {
    ($($ty:ty),*) => {
        $(
            impl PathArg for $ty {
                fn to_path_segment(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_path_arg_display!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Substitute `args` into the `{}` placeholders of `template`, in order.
///
/// Placeholders without a matching argument are left verbatim and surplus
/// arguments are ignored.
pub fn format_api_path(template: &str, args: &[&dyn PathArg]) -> String {
    let mut path = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(idx) = rest.find("{}") {
        path.push_str(&rest[..idx]);
        match args.next() {
            Some(arg) => path.push_str(&arg.to_path_segment()),
            None => path.push_str("{}"),
        }
        rest = &rest[idx + 2..];
    }
    path.push_str(rest);

    path
}

/// Build an API path from a `{}` template, escaping string arguments.
///
/// ```
/// use linode_api::api_path;
///
/// let path = api_path!("object-storage/buckets/{}/{}", "us-east-1", "a/b c");
/// assert_eq!(path, "object-storage/buckets/us-east-1/a%2Fb%20c");
///
/// let path = api_path!("support/tickets/{}", 42);
/// assert_eq!(path, "support/tickets/42");
/// ```
#[macro_export]
macro_rules! api_path {
    ($template:expr $(,)?) => {
        $crate::http::format_api_path($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::http::format_api_path(
            $template,
            &[$(&$arg as &dyn $crate::http::PathArg),+],
        )
    };
}

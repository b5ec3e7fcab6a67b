//! Macros for declaring closed label enumerations.

/// Declare a closed enumeration whose variants are displayed and parsed by
/// their own names.
///
/// Generates the enum with the usual derives, an `ALL` constant listing the
/// variants in declaration order, a `name()` accessor, `Display`, and a
/// `FromStr` that rejects anything other than an exact variant name.
///
/// # Example
///
/// ```
/// use velodesk::label_enum;
///
/// label_enum! {
///     pub enum Size {
///         Small,
///         Large,
///     }
///     kind: "size"
/// }
///
/// assert_eq!(Size::ALL.len(), 2);
/// assert_eq!("Large".parse::<Size>().unwrap(), Size::Large);
/// assert!("large".parse::<Size>().is_err());
/// ```
#[macro_export]
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        kind: $kind:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::model::ParseLabelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $(stringify!($variant) => Ok(Self::$variant),)*
                    _ => Err($crate::model::ParseLabelError {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }
    };
}

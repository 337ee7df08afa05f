// Declare an open enumeration over a numeric wire field.
//
// Every arm becomes an associated constant together with a human readable
// name. Values without an arm are still representable and display as
// `Reserved(<value>)`.
macro_rules! enum_sim {
    (
        $(#[$enum_attr: meta])*
        pub struct $tname:ident ($size_t:ty) {
            $(
                $(#[$arm_attr: meta])*
                $enum_arm:ident = $num_exp:expr => $arm_name:literal
            ),+ $(,)?
        }
    ) => {
        #[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
        $(#[$enum_attr])*
        pub struct $tname($size_t);

        impl $tname {
            $(
                $(#[$arm_attr])*
                pub const $enum_arm: Self = Self($num_exp);
            )+

            /// Get the raw value.
            #[inline]
            pub fn raw(&self) -> $size_t {
                self.0
            }

            /// Get the registered name, `None` for reserved values.
            pub fn name(&self) -> Option<&'static str> {
                match *self {
                    $(
                        Self::$enum_arm => Some($arm_name),
                    )+
                    _ => None,
                }
            }
        }

        impl ::core::convert::From<$size_t> for $tname {
            #[inline]
            fn from(value: $size_t) -> $tname {
                $tname(value)
            }
        }

        impl ::core::convert::From<$tname> for $size_t {
            #[inline]
            fn from(value: $tname) -> $size_t {
                value.0
            }
        }

        impl ::core::fmt::Display for $tname {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "Reserved({})", self.0),
                }
            }
        }
    };
}

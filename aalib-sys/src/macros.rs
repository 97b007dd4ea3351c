/// Declares a fieldless enum mirroring a C enum or a family of C `#define`
/// constants, along with conversions to and from the C `int` value.
macro_rules! c_enum {
    (
        $(#[$enum_meta:meta])*
        $vis:vis enum $EnumName:ident: $Primitive:ident {
            $(
                $(#[$variant_meta:meta])*
                $Variant:ident $(= $Value:expr)?
            ),*
            $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[repr($Primitive)]
        $vis enum $EnumName {
            $(
                $(#[$variant_meta])*
                $Variant $(= $Value)?
            ),*
        }

        impl $EnumName {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$EnumName] = &[$($EnumName::$Variant),*];

            /// Converts this enum to its primitive value.
            pub fn to_primitive(self) -> $Primitive {
                self as $Primitive
            }

            /// Converts a primitive value to this enum.
            pub fn from_primitive(primitive: $Primitive) -> Option<Self> {
                match primitive {
                    $( _ if primitive == Self::$Variant as $Primitive => Some(Self::$Variant) ,)*
                    _ => None,
                }
            }

            /// Converts this to its C value.
            pub fn to_c(self) -> libc::c_int {
                self as $Primitive as libc::c_int
            }

            /// Converts from a C value into this.
            pub fn from_c(c: libc::c_int) -> Option<Self> {
                if let Ok(v) = <libc::c_int as core::convert::TryInto<$Primitive>>::try_into(c) {
                    Self::from_primitive(v)
                } else {
                    None
                }
            }
        }
    };
}

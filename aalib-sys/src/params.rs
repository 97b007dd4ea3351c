use libc::{c_double, c_float, c_int};

/// Opaque `struct aa_font`.
#[repr(C)]
pub struct Font {
    _private: [u8; 0],
}

/// Opaque `struct aa_driver`.
#[repr(C)]
pub struct Driver {
    _private: [u8; 0],
}

/// Opaque `aa_context`.
#[repr(C)]
pub struct Context {
    _private: [u8; 0],
}

/// Mirror of `struct aa_hardware_params`.
///
/// Field names are kept exactly as the header spells them so that any
/// rename upstream shows up as a compile error in the layout report.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct HardwareParams {
    pub font: *const Font,
    /// Bitmask of [`Supported`](crate::Supported) modes.
    pub supported: c_int,
    pub minwidth: c_int,
    pub minheight: c_int,
    pub maxwidth: c_int,
    pub maxheight: c_int,
    pub recwidth: c_int,
    pub recheight: c_int,
    /// Physical width in millimetres.
    pub mmwidth: c_int,
    /// Physical height in millimetres.
    pub mmheight: c_int,
    pub width: c_int,
    pub height: c_int,
    pub dimmul: c_double,
    pub boldmul: c_double,
}

/// Mirror of `struct aa_renderparams`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParams {
    pub bright: c_int,
    pub contrast: c_int,
    pub gamma: c_float,
    /// An `aa_dithering_mode`, see [`Dithering`](crate::Dithering).
    pub dither: c_int,
    pub inversion: c_int,
    pub randomval: c_int,
}

#[cfg(test)]
mod test {
    use super::*;
    use core::mem::{align_of, offset_of, size_of};

    #[test]
    fn render_params_are_packed_ints() {
        assert_eq!(size_of::<c_int>(), 4);
        assert_eq!(offset_of!(RenderParams, bright), 0);
        assert_eq!(offset_of!(RenderParams, contrast), 4);
        assert_eq!(offset_of!(RenderParams, gamma), 8);
        assert_eq!(offset_of!(RenderParams, dither), 12);
        assert_eq!(offset_of!(RenderParams, inversion), 16);
        assert_eq!(offset_of!(RenderParams, randomval), 20);
        assert_eq!(size_of::<RenderParams>(), 24);
    }

    #[test]
    fn hardware_params_ints_follow_font_pointer() {
        let ptr = size_of::<*const Font>();
        let int = size_of::<c_int>();
        assert_eq!(offset_of!(HardwareParams, font), 0);
        assert_eq!(offset_of!(HardwareParams, supported), ptr);
        assert_eq!(offset_of!(HardwareParams, minwidth), ptr + int);
        assert_eq!(offset_of!(HardwareParams, height), ptr + 10 * int);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn hardware_params_64bit_layout() {
        assert_eq!(offset_of!(HardwareParams, dimmul), 56);
        assert_eq!(offset_of!(HardwareParams, boldmul), 64);
        assert_eq!(size_of::<HardwareParams>(), 72);
        assert_eq!(align_of::<HardwareParams>(), 8);
    }

    #[cfg(feature = "header-check")]
    mod header {
        use super::*;
        use crate::helper::get_test_val;

        macro_rules! assert_matches_header {
            ($Record:ty, $cname:literal { $($field:ident),+ $(,)? }) => {
                assert_eq!(
                    size_of::<$Record>(),
                    get_test_val(concat!("sizeof(", $cname, ")"))
                );
                assert_eq!(
                    align_of::<$Record>(),
                    get_test_val(concat!("alignof(", $cname, ")"))
                );
                $(
                    assert_eq!(
                        offset_of!($Record, $field),
                        get_test_val(concat!("offsetof(", $cname, ", ", stringify!($field), ")")),
                        "offset of `{}`",
                        stringify!($field)
                    );
                )+
            };
        }

        #[test]
        fn hardware_params_match_header() {
            assert_matches_header!(HardwareParams, "aa_hardware_params" {
                font, supported, minwidth, minheight, maxwidth, maxheight,
                recwidth, recheight, mmwidth, mmheight, width, height,
                dimmul, boldmul,
            });
        }

        #[test]
        fn render_params_match_header() {
            assert_matches_header!(RenderParams, "aa_renderparams" {
                bright, contrast, gamma, dither, inversion, randomval,
            });
        }
    }
}

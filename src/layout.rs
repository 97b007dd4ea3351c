//! Byte layout of the AAlib records, as the compiler lays out their
//! `#[repr(C)]` mirrors.
//!
//! Every number here comes from [`core::mem::offset_of!`] and
//! [`core::mem::size_of`]. Renaming or removing a field in the mirror is a
//! compile error at the [`record_layout!`] call site.

use aalib_sys::{HardwareParams, RenderParams};
use std::io::{self, Write};

/// Offset of a single named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOffset {
    pub name: &'static str,
    pub offset: usize,
}

/// Offsets of a record's fields in declaration order, plus its total size
/// including trailing padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    /// The C name of the record.
    pub name: &'static str,
    pub fields: &'static [FieldOffset],
    pub size: usize,
}

/// Builds a [`RecordLayout`] for a `#[repr(C)]` type from its C name and an
/// ordered list of fields. Use it to initialize a `const`.
#[macro_export]
macro_rules! record_layout {
    ($cname:expr, $Record:ty { $($field:ident),+ $(,)? }) => {
        $crate::layout::RecordLayout {
            name: $cname,
            fields: &[
                $(
                    $crate::layout::FieldOffset {
                        name: stringify!($field),
                        offset: ::core::mem::offset_of!($Record, $field),
                    }
                ),+
            ],
            size: ::core::mem::size_of::<$Record>(),
        }
    };
}

/// `struct aa_hardware_params`.
pub const HARDWARE_PARAMS: RecordLayout = record_layout!("aa_hardware_params", HardwareParams {
    font,
    supported,
    minwidth,
    minheight,
    maxwidth,
    maxheight,
    recwidth,
    recheight,
    mmwidth,
    mmheight,
    width,
    height,
    dimmul,
    boldmul,
});

/// `struct aa_renderparams`.
pub const RENDER_PARAMS: RecordLayout = record_layout!("aa_renderparams", RenderParams {
    bright,
    contrast,
    gamma,
    dither,
    inversion,
    randomval,
});

/// The records in the order they are reported.
pub const RECORDS: &[RecordLayout] = &[HARDWARE_PARAMS, RENDER_PARAMS];

impl RecordLayout {
    pub fn field(&self, name: &str) -> Option<&FieldOffset> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Writes one decimal offset per line, then `=` and the size.
    pub fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for field in self.fields {
            writeln!(out, "{}", field.offset)?;
        }
        writeln!(out, "={}", self.size)
    }
}

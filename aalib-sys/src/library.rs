use crate::params::{Context, Driver, HardwareParams, RenderParams};
use core::ptr::NonNull;
use libc::{c_char, c_int, c_uchar, c_void};
use std::ffi::{CStr, CString};
use std::fmt;

/// The shared object name the library is opened under by default.
pub const LIBAA_SONAME: &str = "libaa.so.1";

pub type InitFn = unsafe extern "C" fn(
    driver: *const Driver,
    defparams: *const HardwareParams,
    driverdata: *const c_void,
) -> *mut Context;
pub type CloseFn = unsafe extern "C" fn(context: *mut Context);
pub type BufferFn = unsafe extern "C" fn(context: *mut Context) -> *mut c_uchar;
pub type DimensionFn = unsafe extern "C" fn(context: *mut Context) -> c_int;
pub type RenderFn = unsafe extern "C" fn(
    context: *mut Context,
    params: *const RenderParams,
    x1: c_int,
    y1: c_int,
    x2: c_int,
    y2: c_int,
);

/// An opened `libaa` with every symbol the bindings use already resolved.
///
/// The handle is closed when this is dropped, so none of the pointers taken
/// from it may outlive it.
pub struct Library {
    handle: NonNull<c_void>,

    pub aa_init: InitFn,
    pub aa_close: CloseFn,
    pub aa_image: BufferFn,
    pub aa_text: BufferFn,
    pub aa_attrs: BufferFn,
    pub aa_imgwidth: DimensionFn,
    pub aa_imgheight: DimensionFn,
    pub aa_scrwidth: DimensionFn,
    pub aa_scrheight: DimensionFn,
    pub aa_render: RenderFn,

    /// `aa_defparams`
    pub aa_defparams: *const HardwareParams,
    /// `aa_defrenderparams`
    pub aa_defrenderparams: *const RenderParams,
    /// `mem_d`, the in-memory driver.
    pub mem_d: *const Driver,
}

// SAFETY: the symbol table is read-only once resolved, and libaa's exported
// defaults are only ever copied out of.
unsafe impl Send for Library {}
unsafe impl Sync for Library {}

macro_rules! resolve {
    ($handle:expr, $name:literal) => {{
        let ptr = libc::dlsym(
            $handle.as_ptr(),
            concat!($name, "\0").as_ptr() as *const c_char,
        );
        if ptr.is_null() {
            libc::dlclose($handle.as_ptr());
            return Err(LoadError::Symbol($name));
        }
        core::mem::transmute::<*mut c_void, _>(ptr)
    }};
}

impl Library {
    /// Opens [`LIBAA_SONAME`].
    pub fn open() -> Result<Self, LoadError> {
        Self::open_path(LIBAA_SONAME)
    }

    /// Opens the library under an explicit file name or path.
    pub fn open_path(name: &str) -> Result<Self, LoadError> {
        let c_name = CString::new(name).map_err(|_| LoadError::Open {
            name: name.to_owned(),
            reason: "name contains a NUL byte".to_owned(),
        })?;

        let handle = unsafe { libc::dlopen(c_name.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL) };
        let handle = match NonNull::new(handle) {
            Some(handle) => handle,
            None => {
                return Err(LoadError::Open {
                    name: name.to_owned(),
                    reason: last_dl_error(),
                })
            }
        };

        unsafe {
            Ok(Library {
                handle,
                aa_init: resolve!(handle, "aa_init"),
                aa_close: resolve!(handle, "aa_close"),
                aa_image: resolve!(handle, "aa_image"),
                aa_text: resolve!(handle, "aa_text"),
                aa_attrs: resolve!(handle, "aa_attrs"),
                aa_imgwidth: resolve!(handle, "aa_imgwidth"),
                aa_imgheight: resolve!(handle, "aa_imgheight"),
                aa_scrwidth: resolve!(handle, "aa_scrwidth"),
                aa_scrheight: resolve!(handle, "aa_scrheight"),
                aa_render: resolve!(handle, "aa_render"),
                aa_defparams: resolve!(handle, "aa_defparams"),
                aa_defrenderparams: resolve!(handle, "aa_defrenderparams"),
                mem_d: resolve!(handle, "mem_d"),
            })
        }
    }

    /// A copy of the library's default hardware parameters.
    pub fn default_hardware_params(&self) -> HardwareParams {
        unsafe { *self.aa_defparams }
    }

    /// A copy of the library's default render parameters.
    pub fn default_render_params(&self) -> RenderParams {
        unsafe { *self.aa_defrenderparams }
    }
}

impl Drop for Library {
    fn drop(&mut self) {
        unsafe { libc::dlclose(self.handle.as_ptr()) };
    }
}

fn last_dl_error() -> String {
    let err = unsafe { libc::dlerror() };
    if err.is_null() {
        String::from("unknown dlopen error")
    } else {
        unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned()
    }
}

/// Failure to open `libaa` or to find one of its symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    Open { name: String, reason: String },
    Symbol(&'static str),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Open { name, reason } => write!(f, "cannot open `{}`: {}", name, reason),
            LoadError::Symbol(name) => write!(f, "symbol `{}` not found", name),
        }
    }
}

impl std::error::Error for LoadError {}

use aalib_sys::{Dithering, HardwareParams, RenderParams, Supported};
use libc::c_int;

/// Overrides for the library's default hardware parameters. Fields left as
/// `None` keep whatever `aa_defparams` holds.
/// The physical size is in millimetres.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HardwareSettings {
    pub options: Option<Supported>,
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub recommended_width: Option<u32>,
    pub recommended_height: Option<u32>,
    pub physical_width: Option<u32>,
    pub physical_height: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub dim_value: Option<f64>,
    pub bold_value: Option<f64>,
}

impl HardwareSettings {
    /// Shorthand for settings that only fix the screen size.
    pub fn with_size(width: u32, height: u32) -> Self {
        HardwareSettings {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    pub fn apply(&self, params: &mut HardwareParams) {
        if let Some(options) = self.options {
            params.supported = options.bits();
        }
        set_int(&mut params.minwidth, self.min_width);
        set_int(&mut params.minheight, self.min_height);
        set_int(&mut params.maxwidth, self.max_width);
        set_int(&mut params.maxheight, self.max_height);
        set_int(&mut params.recwidth, self.recommended_width);
        set_int(&mut params.recheight, self.recommended_height);
        set_int(&mut params.mmwidth, self.physical_width);
        set_int(&mut params.mmheight, self.physical_height);
        set_int(&mut params.width, self.width);
        set_int(&mut params.height, self.height);
        if let Some(dim) = self.dim_value {
            params.dimmul = dim;
        }
        if let Some(bold) = self.bold_value {
            params.boldmul = bold;
        }
    }
}

/// Overrides for the library's default render parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSettings {
    pub brightness: Option<i32>,
    pub contrast: Option<i32>,
    pub gamma: Option<f32>,
    pub dithering_mode: Option<Dithering>,
    pub inversion: Option<bool>,
    pub random: Option<i32>,
}

impl RenderSettings {
    pub fn apply(&self, params: &mut RenderParams) {
        if let Some(brightness) = self.brightness {
            params.bright = brightness;
        }
        if let Some(contrast) = self.contrast {
            params.contrast = contrast;
        }
        if let Some(gamma) = self.gamma {
            params.gamma = gamma;
        }
        if let Some(mode) = self.dithering_mode {
            params.dither = mode.to_c();
        }
        if let Some(inversion) = self.inversion {
            params.inversion = inversion as c_int;
        }
        if let Some(random) = self.random {
            params.randomval = random;
        }
    }
}

fn set_int(field: &mut c_int, value: Option<u32>) {
    if let Some(value) = value {
        *field = c_int::try_from(value).unwrap_or(c_int::MAX);
    }
}

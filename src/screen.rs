use crate::error::{Error, ErrorKind};
use crate::format;
use crate::settings::{HardwareSettings, RenderSettings};
use aalib_sys::{Attribute, Context, Library, Supported};
use core::marker::PhantomData;
use core::ops::Range;
use core::ptr::NonNull;
use image::GrayImage;
use libc::c_int;
use once_cell::sync::OnceCell;

static LIBAA: OnceCell<Library> = OnceCell::new();

/// The process-wide `libaa`, opened on first use.
pub fn library() -> Result<&'static Library, Error> {
    LIBAA
        .get_or_try_init(|| {
            log::debug!("opening {}", aalib_sys::LIBAA_SONAME);
            Library::open()
        })
        .map_err(Error::from)
}

/// Which terminal features a screen renders for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    /// Pure ASCII, no attributes.
    Ascii,
    /// ANSI escape sequences (bright only).
    Ansi,
    /// Linux console escape sequences (bold, dim, reverse).
    Linux,
}

impl ScreenKind {
    /// Output modes requested from the driver for this kind.
    pub fn options(self) -> Supported {
        match self {
            ScreenKind::Ascii => Supported::NORMAL,
            ScreenKind::Ansi => Supported::NORMAL | Supported::BRIGHT,
            ScreenKind::Linux => {
                Supported::NORMAL | Supported::BOLD | Supported::DIM | Supported::REVERSE
            }
        }
    }
}

/// This is just used to make the Screen !Send and !Sync
#[allow(dead_code)]
struct NotSend(*mut u8);

/// An AAlib context backed by the in-memory driver.
///
/// Images are drawn onto the virtual screen, whose resolution is a multiple
/// of the rendered text resolution, and turned into characters by
/// [`Screen::render`].
pub struct Screen {
    lib: &'static Library,
    context: Option<NonNull<Context>>,
    kind: ScreenKind,
    render_width: usize,
    render_height: usize,
    virtual_width: usize,
    virtual_height: usize,
    framebuffer: *mut u8,
    disable_send: PhantomData<NotSend>,
}

impl Screen {
    /// Initializes a screen from the library defaults, the options for
    /// `kind`, and then `settings`, in that order of precedence.
    pub fn new(kind: ScreenKind, settings: &HardwareSettings) -> Result<Self, Error> {
        let lib = library()?;

        let mut params = lib.default_hardware_params();
        params.supported = kind.options().bits();
        settings.apply(&mut params);

        let context =
            unsafe { (lib.aa_init)(lib.mem_d, &params, core::ptr::null()) };
        let context = NonNull::new(context).ok_or_else(|| {
            Error::msg(
                ErrorKind::ScreenInitializationFailed,
                "failed to initialize the AAlib screen",
            )
        })?;

        let ctx = context.as_ptr();
        let screen = unsafe {
            Screen {
                lib,
                context: Some(context),
                kind,
                render_width: dimension((lib.aa_scrwidth)(ctx)),
                render_height: dimension((lib.aa_scrheight)(ctx)),
                virtual_width: dimension((lib.aa_imgwidth)(ctx)),
                virtual_height: dimension((lib.aa_imgheight)(ctx)),
                framebuffer: (lib.aa_image)(ctx),
                disable_send: PhantomData,
            }
        };

        log::debug!(
            "initialized {:?} screen: render {}x{}, virtual {}x{}",
            kind,
            screen.render_width,
            screen.render_height,
            screen.virtual_width,
            screen.virtual_height
        );

        Ok(screen)
    }

    pub fn kind(&self) -> ScreenKind {
        self.kind
    }

    /// Width of the rendered text, in characters.
    pub fn render_width(&self) -> usize {
        self.render_width
    }

    /// Height of the rendered text, in characters.
    pub fn render_height(&self) -> usize {
        self.render_height
    }

    pub fn render_size(&self) -> (usize, usize) {
        (self.render_width, self.render_height)
    }

    /// Width of the virtual screen, in pixels.
    pub fn virtual_width(&self) -> usize {
        self.virtual_width
    }

    /// Height of the virtual screen, in pixels.
    pub fn virtual_height(&self) -> usize {
        self.virtual_height
    }

    pub fn virtual_size(&self) -> (usize, usize) {
        (self.virtual_width, self.virtual_height)
    }

    /// Reads a pixel of the virtual screen. `Ok(None)` means the coordinate
    /// is outside the screen; a closed screen is an error.
    pub fn get(&self, x: usize, y: usize) -> Result<Option<u8>, Error> {
        let fb = self.framebuffer()?;
        Ok(self.index(x, y).map(|idx| unsafe { *fb.add(idx) }))
    }

    /// Writes a pixel of the virtual screen.
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> Result<(), Error> {
        let idx = self.index(x, y).ok_or_else(|| {
            Error::msg(
                ErrorKind::OutOfBounds,
                format!(
                    "pixel ({}, {}) is outside the {}x{} virtual screen",
                    x, y, self.virtual_width, self.virtual_height
                ),
            )
        })?;
        let fb = self.framebuffer()?;
        unsafe { *fb.add(idx) = value };
        Ok(())
    }

    /// Copies `image` onto the virtual screen with its top-left corner at
    /// `origin`. Parts that fall outside the screen are dropped.
    pub fn put_image(&mut self, origin: (i64, i64), image: &GrayImage) -> Result<(), Error> {
        let fb = self.framebuffer()?;
        let (x0, y0) = origin;
        let rows = clip(y0, image.height(), self.virtual_height);
        let cols = clip(x0, image.width(), self.virtual_width);

        log::trace!("put_image at ({}, {}): rows {:?}, cols {:?}", x0, y0, rows, cols);

        for y in rows {
            let line = y * self.virtual_width;
            for x in cols.clone() {
                let pixel = image.get_pixel((x as i64 - x0) as u32, (y as i64 - y0) as u32);
                unsafe { *fb.add(line + x) = pixel.0[0] };
            }
        }
        Ok(())
    }

    /// Renders the virtual screen and returns the characters with their
    /// attributes, one row per line of text.
    pub fn render(&self, settings: &RenderSettings) -> Result<Vec<Vec<(char, Attribute)>>, Error> {
        let ctx = self.context()?.as_ptr();
        let lib = self.lib;

        if unsafe { (lib.aa_image)(ctx) }.is_null() {
            return Err(Error::msg(ErrorKind::NoImageBuffer, "screen has no image buffer"));
        }

        let mut params = lib.default_render_params();
        settings.apply(&mut params);

        let (width, height) = self.render_size();
        unsafe { (lib.aa_render)(ctx, &params, 0, 0, width as c_int, height as c_int) };

        let (text, attrs) = unsafe {
            let text = (lib.aa_text)(ctx);
            let attrs = (lib.aa_attrs)(ctx);
            if text.is_null() || attrs.is_null() {
                return Err(Error::msg(ErrorKind::NoImageBuffer, "screen has no text buffer"));
            }
            (
                core::slice::from_raw_parts(text as *const u8, width * height),
                core::slice::from_raw_parts(attrs as *const u8, width * height),
            )
        };

        Ok(cells(text, attrs, width, height))
    }

    /// Renders and formats the result for this screen's [`ScreenKind`].
    pub fn render_text(&self, settings: &RenderSettings) -> Result<String, Error> {
        let rows = self.render(settings)?;
        Ok(format::format_rows(self.kind, &rows))
    }

    /// Releases the AAlib context. Closing twice does nothing.
    pub fn close(&mut self) {
        if let Some(context) = self.context.take() {
            log::trace!("closing {:?} screen", self.kind);
            unsafe { (self.lib.aa_close)(context.as_ptr()) };
            self.framebuffer = core::ptr::null_mut();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.context.is_none()
    }

    fn context(&self) -> Result<NonNull<Context>, Error> {
        self.context
            .ok_or_else(|| Error::msg(ErrorKind::Closed, "screen is closed"))
    }

    fn framebuffer(&self) -> Result<*mut u8, Error> {
        self.context()?;
        if self.framebuffer.is_null() {
            Err(Error::msg(ErrorKind::NoImageBuffer, "screen has no image buffer"))
        } else {
            Ok(self.framebuffer)
        }
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.virtual_width && y < self.virtual_height {
            Some(y * self.virtual_width + x)
        } else {
            None
        }
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        self.close();
    }
}

fn dimension(value: c_int) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// Pairs the text and attribute buffers into `height` rows of `width`
/// cells. Attribute bytes AAlib does not define read as `Normal`.
fn cells(text: &[u8], attrs: &[u8], width: usize, height: usize) -> Vec<Vec<(char, Attribute)>> {
    text.chunks(width.max(1))
        .zip(attrs.chunks(width.max(1)))
        .take(height)
        .map(|(text, attrs)| {
            text.iter()
                .zip(attrs)
                .map(|(&ch, &attr)| {
                    let attr = Attribute::from_primitive(attr).unwrap_or(Attribute::Normal);
                    (char::from(ch), attr)
                })
                .collect()
        })
        .collect()
}

/// Screen coordinates covered by a span of `len` pixels starting at `start`,
/// on a screen `limit` pixels long.
fn clip(start: i64, len: u32, limit: usize) -> Range<usize> {
    let lo = start.max(0);
    let hi = start
        .saturating_add(i64::from(len))
        .min(i64::try_from(limit).unwrap_or(i64::MAX));
    if hi <= lo {
        0..0
    } else {
        lo as usize..hi as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use image::Luma;
    use std::sync::{Mutex, MutexGuard};

    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn clip_inside() {
        assert_eq!(clip(2, 3, 10), 2..5);
    }

    #[test]
    fn clip_negative_origin() {
        assert_eq!(clip(-2, 5, 10), 0..3);
    }

    #[test]
    fn clip_overhang() {
        assert_eq!(clip(8, 5, 10), 8..10);
    }

    #[test]
    fn clip_outside() {
        assert_eq!(clip(12, 5, 10), 0..0);
        assert_eq!(clip(-6, 5, 10), 0..0);
    }

    #[test]
    fn clip_far_origin() {
        assert_eq!(clip(i64::MAX - 1, 4, 10), 0..0);
        assert_eq!(clip(i64::MIN, u32::MAX, 10), 0..0);
    }

    #[test]
    fn cells_split_into_rows() {
        let rows = cells(b"abcdef", &[0, 2, 0, 3, 4, 1], 3, 2);
        assert_eq!(
            rows,
            vec![
                vec![('a', Attribute::Normal), ('b', Attribute::Bright), ('c', Attribute::Normal)],
                vec![('d', Attribute::Bold), ('e', Attribute::Reverse), ('f', Attribute::Dim)],
            ]
        );
    }

    #[test]
    fn cells_unknown_attribute_is_normal() {
        let rows = cells(&[b'x', 0xE9], &[5, 200], 2, 1);
        assert_eq!(rows, vec![vec![('x', Attribute::Normal), ('\u{e9}', Attribute::Normal)]]);
    }

    #[test]
    fn cells_empty_screen() {
        assert!(cells(&[], &[], 0, 0).is_empty());
    }

    #[test]
    fn kind_options() {
        assert_eq!(ScreenKind::Ascii.options(), Supported::NORMAL);
        assert_eq!(ScreenKind::Ansi.options().bits(), 1 | 4);
        assert_eq!(ScreenKind::Linux.options().bits(), 1 | 2 | 8 | 16);
    }

    /// Opens a screen, or returns `None` when libaa is not installed.
    fn open(kind: ScreenKind, width: u32, height: u32) -> Option<Screen> {
        match Screen::new(kind, &HardwareSettings::with_size(width, height)) {
            Ok(screen) => Some(screen),
            Err(err) if err.kind() == ErrorKind::Load => {
                eprintln!("skipping, {}", err);
                None
            }
            Err(err) => panic!("failed to open screen: {}", err),
        }
    }

    #[test]
    fn screen_sizes() {
        let _guard = serial();
        let screen = match open(ScreenKind::Ascii, 60, 30) {
            Some(screen) => screen,
            None => return,
        };
        assert_eq!(screen.render_size(), (60, 30));
        assert_eq!(screen.virtual_size(), (120, 60));
    }

    #[test]
    fn pixels_and_images() {
        let _guard = serial();
        let mut screen = match open(ScreenKind::Ansi, 10, 5) {
            Some(screen) => screen,
            None => return,
        };
        let (vw, vh) = screen.virtual_size();

        screen.set(1, 2, 200).unwrap();
        assert_eq!(screen.get(1, 2).unwrap(), Some(200));
        assert_eq!(screen.get(vw, 0).unwrap(), None);
        assert_eq!(screen.set(0, vh, 1).unwrap_err().kind(), ErrorKind::OutOfBounds);

        let image = GrayImage::from_pixel(4, 4, Luma([90]));
        screen.put_image((-2, -2), &image).unwrap();
        assert_eq!(screen.get(0, 0).unwrap(), Some(90));
        assert_eq!(screen.get(1, 1).unwrap(), Some(90));
        assert_eq!(screen.get(1, 2).unwrap(), Some(200));
    }

    #[test]
    fn render_dimensions() {
        let _guard = serial();
        let mut screen = match open(ScreenKind::Ascii, 12, 4) {
            Some(screen) => screen,
            None => return,
        };
        let rows = screen.render(&RenderSettings::default()).unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 12));

        let text = screen.render_text(&RenderSettings::default()).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(!text.contains('\x1B'));

        screen.close();
        screen.close();
        assert!(screen.is_closed());
        assert_eq!(screen.get(0, 0).unwrap_err().kind(), ErrorKind::Closed);
        assert_eq!(
            screen.render(&RenderSettings::default()).unwrap_err().kind(),
            ErrorKind::Closed
        );
    }
}

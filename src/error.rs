use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// What went wrong, independent of the message attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// `libaa` could not be opened or is missing a symbol.
    Load,
    /// `aa_init` returned a null context.
    ScreenInitializationFailed,
    /// The context has no image buffer.
    NoImageBuffer,
    /// A pixel coordinate outside the virtual screen.
    OutOfBounds,
    /// The screen was already closed.
    Closed,
}

pub struct Error(Box<ErrorInner>);

impl Error {
    pub fn new<M>(kind: ErrorKind, message: M, cause: Box<dyn StdError + Send + Sync>) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Error(Box::new(ErrorInner {
            kind,
            message: message.into(),
            cause: Some(cause),
        }))
    }

    pub fn msg<M>(kind: ErrorKind, message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Error(Box::new(ErrorInner {
            kind,
            message: message.into(),
            cause: None,
        }))
    }

    pub fn kind(&self) -> ErrorKind {
        self.0.kind
    }
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    message: Cow<'static, str>,
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <ErrorInner as fmt::Debug>::fmt(&self.0, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.cause.as_deref().map(|e| e as &dyn StdError)
    }
}

impl From<aalib_sys::LoadError> for Error {
    fn from(err: aalib_sys::LoadError) -> Self {
        Error::new(ErrorKind::Load, "failed to load AAlib", Box::new(err))
    }
}

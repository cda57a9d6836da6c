use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn unsorted(side: impl Into<String>) -> Error {
        Error(ErrorKind::UnsortedInput { side: side.into() }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("{side} input is not sorted under the supplied ordering")]
    UnsortedInput { side: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

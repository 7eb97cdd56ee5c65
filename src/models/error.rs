use {
    derive_more::Display,
    serde_repr::Serialize_repr,
    diesel::result::Error as QueryError
};

#[derive(Debug, Display)]
pub enum Error {
    #[display(fmt = "invalid argument: {}", _0)]
    InvalidArgument(&'static str),
    #[display(fmt = "not found")]
    NotFound,
    #[display(fmt = "store failure: {}", _0)]
    Unprocessable(QueryError)
}

impl std::error::Error for Error {}

impl From<QueryError> for Error {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::NotFound => Error::NotFound,
            e => Error::Unprocessable(e)
        }
    }
}

impl Error {
    pub fn code(&self) -> Code {
        match self {
            Error::InvalidArgument(_) => Code::BadRequest,
            Error::NotFound => Code::NotFound,
            Error::Unprocessable(_) => Code::Unprocessable
        }
    }
}

/// What a client sees of an [`Error`].
#[derive(Serialize_repr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum Code {
    BadRequest = 400,
    NotFound = 404,
    Unprocessable = 422
}

impl Code {
    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn message(self) -> &'static str {
        match self {
            Code::BadRequest => "bad request",
            Code::NotFound => "resource not found",
            Code::Unprocessable => "unprocessable"
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_rows_become_not_found() {
        assert!(matches!(Error::from(QueryError::NotFound), Error::NotFound));
        assert!(matches!(
            Error::from(QueryError::RollbackTransaction),
            Error::Unprocessable(QueryError::RollbackTransaction)
        ));
    }

    #[test]
    fn codes() {
        assert_eq!(Error::InvalidArgument("page").code().id(), 400);
        assert_eq!(Error::NotFound.code().id(), 404);
        assert_eq!(Error::Unprocessable(QueryError::RollbackTransaction).code().id(), 422);
    }
}

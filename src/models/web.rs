mod misc;
mod cors;

use {
    serde::Serialize,
    rocket::{
        Request,
        serde::json::Json,
        response::{self, Responder}
    },
    crate::models::error::{Error, Code}
};

pub use {
    misc::*,
    cors::Cors
};

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    success: bool,
    error: Code,
    message: &'static str
}

impl From<Code> for ErrorBody {
    fn from(code: Code) -> Self {
        ErrorBody {
            success: false,
            error: code,
            message: code.message()
        }
    }
}

impl Code {
    pub fn status(self) -> rocket::http::Status {
        rocket::http::Status::new(self.id())
    }
}

impl <'r> Responder<'r, 'static> for Code {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status(), Json(ErrorBody::from(self)))
            .respond_to(request)
    }
}

impl <'r> Responder<'r, 'static> for Error {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        match &self {
            Error::Unprocessable(e) => log::error!("{} {}: {}", request.method(), request.uri(), e),
            Error::InvalidArgument(what) => log::warn!("{} {}: {}", request.method(), request.uri(), what),
            Error::NotFound => {}
        }

        self.code()
            .respond_to(request)
    }
}

use {
    rocket::{
        catch,
        Request,
        http::Status
    },
    crate::models::error::Code
};

#[catch(400)]
pub fn bad_request() -> Code {
    Code::BadRequest
}

#[catch(404)]
pub fn not_found() -> Code {
    Code::NotFound
}

#[catch(422)]
pub fn unprocessable() -> Code {
    Code::Unprocessable
}

/// Everything else, server errors included, is reported as unprocessable.
#[catch(default)]
pub fn unhandled(status: Status, request: &Request<'_>) -> Code {
    log::error!("{} {} ended with {}", request.method(), request.uri(), status);
    Code::Unprocessable
}

use rocket::{
    options,
    http::Status
};

/// CORS preflight; the headers themselves come from the `Cors` fairing.
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

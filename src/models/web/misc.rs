use {
    rocket::serde::json::{self, Json},
    crate::models::error::Error
};

pub trait OrInvalid<T> {
    fn or_invalid(self, what: &'static str) -> Result<T, Error>;
}

impl <T> OrInvalid<T> for Option<T> {
    fn or_invalid(self, what: &'static str) -> Result<T, Error> {
        self.ok_or(Error::InvalidArgument(what))
    }
}

impl <'a, T> OrInvalid<T> for Result<Json<T>, json::Error<'a>> {
    fn or_invalid(self, what: &'static str) -> Result<T, Error> {
        self.map(Json::into_inner)
            .map_err(|e| {
                log::warn!("rejecting request body: {:?}", e);
                Error::InvalidArgument(what)
            })
    }
}

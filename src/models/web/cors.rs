use rocket::{
    Request,
    Response,
    http::Header,
    fairing::{Fairing, Info, Kind}
};

pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type,Authorization,true"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "GET,PUT,POST,DELETE,OPTIONS"));
    }
}

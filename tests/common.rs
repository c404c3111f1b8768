#![allow(dead_code)]

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpResponse, HttpServer};
use std::io::{Cursor, Read};

/// Local HTTP server serving a logo at `/Resimix.png`.
pub struct LogoServer {
    pub base_url: String,
    handle: ServerHandle,
}

impl LogoServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn serve_logo(body: web::Data<Vec<u8>>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("image/png")
        .body(body.get_ref().clone())
}

async fn moved() -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", "/Resimix.png"))
        .finish()
}

async fn broken() -> HttpResponse {
    HttpResponse::InternalServerError().body("storage offline")
}

/// Start the server on an ephemeral port. Must run inside an actix runtime.
pub async fn start_logo_server(body: Vec<u8>) -> LogoServer {
    let body = web::Data::new(body);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(body.clone())
            .route("/Resimix.png", web::get().to(serve_logo))
            .route("/moved.png", web::get().to(moved))
            .route("/broken.png", web::get().to(broken))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test logo server");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    LogoServer {
        base_url: format!("http://{}", addr),
        handle,
    }
}

/// A URL on a port nothing listens on.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/Resimix.png", port)
}

/// Contents of `word/document.xml`.
pub fn document_xml(docx: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(docx)).expect("valid .docx archive");
    let mut part = archive
        .by_name("word/document.xml")
        .expect("document part present");
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

/// Bytes of every part under `word/media/`.
pub fn media_parts(docx: &[u8]) -> Vec<Vec<u8>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(docx)).expect("valid .docx archive");
    let mut parts = Vec::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        if file.name().starts_with("word/media/") {
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes).unwrap();
            parts.push(bytes);
        }
    }
    parts
}

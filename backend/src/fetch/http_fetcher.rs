use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client as HttpClient;

use super::{FetchError, ImageSource};
use crate::config::BodyEncoding;

#[derive(Clone)]
pub struct HttpImageFetcher {
    http_client: HttpClient,
    body_encoding: BodyEncoding,
}

impl HttpImageFetcher {
    pub fn new(http_client: HttpClient, body_encoding: BodyEncoding) -> Self {
        Self {
            http_client,
            body_encoding,
        }
    }

    pub fn decode_body(body: &[u8], encoding: BodyEncoding) -> Result<Vec<u8>, FetchError> {
        match encoding {
            BodyEncoding::Raw => Ok(body.to_vec()),
            BodyEncoding::Base64 => Ok(STANDARD.decode(body.trim_ascii())?),
        }
    }
}

#[async_trait]
impl ImageSource for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        log::debug!("Downloaded {} bytes from {}", body.len(), url);
        Self::decode_body(&body, self.body_encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::ServerHandle;
    use actix_web::{App, HttpResponse, HttpServer, web};
    use std::net::{SocketAddr, TcpListener};

    async fn start_image_server() -> (SocketAddr, ServerHandle) {
        let server = HttpServer::new(|| {
            App::new()
                .route(
                    "/cat.b64",
                    web::get().to(|| async { HttpResponse::Ok().body("aGVsbG8=\n") }),
                )
                .route(
                    "/cat.png",
                    web::get().to(|| async { HttpResponse::Ok().body(vec![0xffu8, 0xd8, 0xff]) }),
                )
                .route(
                    "/missing.png",
                    web::get().to(|| async { HttpResponse::NotFound().body("no such image") }),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        (addr, handle)
    }

    fn fetcher(encoding: BodyEncoding) -> HttpImageFetcher {
        HttpImageFetcher::new(HttpClient::new(), encoding)
    }

    #[actix_web::test]
    async fn fetch_decodes_base64_body() {
        let (addr, handle) = start_image_server().await;

        let image = fetcher(BodyEncoding::Base64)
            .fetch(&format!("http://{}/cat.b64", addr))
            .await
            .unwrap();

        assert_eq!(image, b"hello".to_vec());
        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn fetch_returns_raw_body_unchanged() {
        let (addr, handle) = start_image_server().await;

        let image = fetcher(BodyEncoding::Raw)
            .fetch(&format!("http://{}/cat.png", addr))
            .await
            .unwrap();

        assert_eq!(image, vec![0xff, 0xd8, 0xff]);
        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn fetch_rejects_non_success_status() {
        let (addr, handle) = start_image_server().await;

        let result = fetcher(BodyEncoding::Base64)
            .fetch(&format!("http://{}/missing.png", addr))
            .await;

        assert!(matches!(result, Err(FetchError::Status(404))));
        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn fetch_rejects_body_that_is_not_base64() {
        let (addr, handle) = start_image_server().await;

        let result = fetcher(BodyEncoding::Base64)
            .fetch(&format!("http://{}/cat.png", addr))
            .await;

        assert!(matches!(result, Err(FetchError::Decode(_))));
        handle.stop(false).await;
    }

    #[actix_web::test]
    async fn fetch_reports_connection_failure_as_request_error() {
        // Nothing listens on a port that was just released.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let result = fetcher(BodyEncoding::Base64)
            .fetch(&format!("http://127.0.0.1:{}/cat.png", port))
            .await;

        assert!(matches!(result, Err(FetchError::Request(_))));
    }

    #[actix_web::test]
    async fn fetch_reports_malformed_url_as_request_error() {
        let result = fetcher(BodyEncoding::Base64).fetch("not a url").await;
        assert!(matches!(result, Err(FetchError::Request(_))));
    }

    #[test]
    fn base64_body_is_decoded() {
        let decoded = HttpImageFetcher::decode_body(b"iVBORw0KGgo=", BodyEncoding::Base64).unwrap();
        assert_eq!(decoded, vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let decoded = HttpImageFetcher::decode_body(b"  aGVsbG8=\n", BodyEncoding::Base64).unwrap();
        assert_eq!(decoded, b"hello".to_vec());
    }

    #[test]
    fn invalid_base64_is_a_decode_error() {
        let result = HttpImageFetcher::decode_body(&[0xff, 0xd8, 0xff, 0xe0], BodyEncoding::Base64);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn raw_body_is_passed_through() {
        let body = [0xff, 0xd8, 0xff, 0xe0];
        let decoded = HttpImageFetcher::decode_body(&body, BodyEncoding::Raw).unwrap();
        assert_eq!(decoded, body.to_vec());
    }
}

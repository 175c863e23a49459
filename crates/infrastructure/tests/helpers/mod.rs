mod http_server_mock;

pub use http_server_mock::{MockHttpServer, MockResponse};

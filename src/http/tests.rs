use crate::cli::tests::fake_args;
use crate::http::router;
use axum_test::TestServer;

pub fn test_server() -> TestServer {
    let args = fake_args();
    let router = router::new(&args);
    TestServer::new(router).expect("Failed to run test server.")
}

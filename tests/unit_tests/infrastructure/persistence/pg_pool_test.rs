use std::time::Duration;

use tokio::net::TcpListener;
use tokio::time::Instant;

use medmentor::application::ports::RepositoryError;
use medmentor::infrastructure::persistence::connect_once;

#[tokio::test]
async fn given_nothing_listening_when_connecting_once_then_fails_fast_without_retrying() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let url = format!("postgres://test:test@{}/testdb", addr);

    let started = Instant::now();
    let result = connect_once(&url, 1).await;

    assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
    assert!(started.elapsed() < Duration::from_secs(10));
}

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

use mergington_activities::registry::ActivityRegistry;
use mergington_activities::web::build_router;

#[tokio::main]
async fn main() {
    // Load .env file
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Build the in-memory registry with the seed activities
    let registry = ActivityRegistry::seeded().into_shared();

    // 3. Build the application
    let app = build_router(registry);

    // 4. Start the server (with fallback port)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "⚠️  Could not bind {}: {}. Trying fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("invalid fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("could not bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("🚀 Server running on http://{}", bound_addr);
    println!("📍 Activity listing at http://{}/activities", bound_addr);

    axum::serve(listener, app).await.unwrap();
}

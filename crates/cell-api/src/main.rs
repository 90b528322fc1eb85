use cell_api::{run, HttpServerConfig};

#[tokio::main]
async fn main() {
    let bind_addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:8080".to_string());
    println!("listening on {bind_addr}");
    if let Err(err) = run(HttpServerConfig { bind_addr }).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use registration_server::config::AppConfig;
use registration_server::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "registration-server")]
#[command(about = "Registration form validation and collection service")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt::init();

    let mut app_config =
        if args.config == "config.yaml" && !std::path::Path::new("config.yaml").exists() {
            println!("⚠️  No config.yaml found, using default configuration:");
            println!("   - In-memory user list, no size limit");
            println!("   - Listening on 127.0.0.1:3000\n");
            AppConfig::default_config()
        } else {
            AppConfig::load_from_file(&args.config)?
        };

    if let Some(port) = args.port {
        app_config.server.port = port;
    }
    if let Some(host) = args.host {
        app_config.server.host = host;
    }

    let host: std::net::IpAddr = app_config.server.host.parse().unwrap_or_else(|_| {
        eprintln!(
            "Invalid host address: {}, using 127.0.0.1",
            app_config.server.host
        );
        [127, 0, 0, 1].into()
    });
    let addr = SocketAddr::from((host, app_config.server.port));

    match app_config.storage.max_users {
        0 => println!("🗂️  User list: unbounded"),
        max => println!("🗂️  User list: up to {} registrations", max),
    }

    let app = build_router(AppState::from_config(app_config));

    println!("🚀 Registration server listening on {}", addr);
    println!("    📝 Register:       POST http://{}/users", addr);
    println!("    👥 Users:          GET  http://{}/users", addr);
    println!("    ✅ Field check:    POST http://{}/validate/{{field}}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

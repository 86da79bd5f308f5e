use todo_server_lib::ServerConfig;

#[tokio::main]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    todo_server_lib::init_tracing(&config);

    if let Err(e) = todo_server_lib::run(config).await {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}

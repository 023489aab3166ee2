use crate::{config, error, server, spotify::SpotifyCatalog};

pub async fn serve(addr: Option<String>, token: Option<String>) {
    let token = match token.map(Ok).unwrap_or_else(config::spotify_access_token) {
        Ok(token) => token,
        Err(e) => error!("Cannot read access token. Err: {}", e),
    };

    let catalog = SpotifyCatalog::new(config::spotify_apiurl(), token);
    let addr = addr.unwrap_or_else(config::server_addr);

    if let Err(e) = server::start_api_server(&addr, catalog).await {
        error!("Web server stopped. Err: {}", e);
    }
}

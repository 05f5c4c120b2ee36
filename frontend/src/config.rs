pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Relative URLs work in both environments: Trunk proxies
        // /search and /players to the backend in development, nginx
        // does the same in production.
        "".to_string()
    }
}

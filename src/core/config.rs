use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub listings: ListingsConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Remote agency listings endpoint and the on-disk page cache
#[derive(Debug, Clone)]
pub struct ListingsConfig {
    /// Listing endpoint URL, paginated via a `skip` query parameter
    pub base_url: String,
    /// Number of agencies the endpoint returns per page
    pub page_size: usize,
    /// Working-directory-relative directory holding cached pages
    pub cache_dir: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            listings: ListingsConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ListingsConfig {
    const DEFAULT_BASE_URL: &'static str =
        "https://api.app.studiospace.com/listings/list-agencies";
    const DEFAULT_PAGE_SIZE: usize = 12;
    const DEFAULT_CACHE_DIR: &'static str = "data";

    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("LISTINGS_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());

        let page_size = env::var("LISTINGS_PAGE_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_PAGE_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "LISTINGS_PAGE_SIZE must be a valid number".to_string())?;

        if page_size == 0 {
            return Err("LISTINGS_PAGE_SIZE must be greater than zero".to_string());
        }

        let cache_dir =
            env::var("LISTINGS_CACHE_DIR").unwrap_or_else(|_| Self::DEFAULT_CACHE_DIR.to_string());

        Ok(Self {
            base_url,
            page_size,
            cache_dir,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Agency Insights API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Agency listings report API".to_string());

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

use clap::Parser;
use std::time::Duration;
use crate::ollama::Timeouts;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "title-fixer")]
#[command(about = "Rewrites and classifies YouTube titles through a local Ollama server")]
pub struct Args {
    // Address to bind the server on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    // Ollama server url
    // Example: "localhost:11434" or "http://gpu-box:11434"
    #[arg(short, long, default_value = "http://localhost:11434")]
    pub ollama_url: String,

    // Cache TTL in seconds
    #[arg(short, long, default_value_t = 86400)]
    pub cache_ttl: u64,

    // Ollama timeouts in seconds: generate, model listing, health probe
    #[arg(long, default_value_t = 10)]
    pub generate_timeout: u64,

    #[arg(long, default_value_t = 5)]
    pub list_timeout: u64,

    #[arg(long, default_value_t = 2)]
    pub health_timeout: u64,

    // Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    // add http:// if not present
    pub fn upstream_url(&self) -> String {
        let url = self.ollama_url.trim().trim_end_matches('/');
        if url.starts_with("http") {
            url.to_string()
        } else {
            format!("http://{}", url)
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            generate: Duration::from_secs(self.generate_timeout),
            list: Duration::from_secs(self.list_timeout),
            health: Duration::from_secs(self.health_timeout),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

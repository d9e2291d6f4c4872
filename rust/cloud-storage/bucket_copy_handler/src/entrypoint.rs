//! Standardized initialization for the lambda binary, this configures tracing based on the environment we are running in.

use tracing_subscriber::EnvFilter;

/// Selects the log format. Read from `ENVIRONMENT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Develop,
    /// e.g. cargo lambda watch
    Local,
}

impl Environment {
    /// maps `prod`, `dev` and `local` onto an [Environment]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "prod" => Some(Environment::Production),
            "dev" => Some(Environment::Develop),
            "local" => Some(Environment::Local),
            _ => None,
        }
    }

    /// falls back to production if `ENVIRONMENT` is missing or unrecognised
    pub fn new_or_prod() -> Self {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|v| Self::from_name(&v))
            .unwrap_or(Environment::Production)
    }
}

/// sentinel struct which guarantees that we called [init]
#[derive(Debug)]
pub struct Initialized(Environment);

impl Initialized {
    pub fn environment(&self) -> Environment {
        self.0
    }
}

/// Load `.env`, route panics through tracing, and install the global subscriber.
/// Must be called once, before anything logs.
pub fn init() -> Initialized {
    dotenv::dotenv().ok();
    let env = Environment::new_or_prod();
    std::panic::set_hook(Box::new(tracing_panic::panic_hook));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true);

    match env {
        Environment::Local => builder.with_ansi(true).pretty().init(),
        Environment::Production | Environment::Develop => builder
            .with_ansi(false)
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .flatten_event(true)
            .init(),
    }

    Initialized(env)
}

use serde::{Deserialize, Serialize};

use crate::errors::ShortenitError;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - server: 服务器地址、端口、CPU 数量、CORS
/// - shortener: 短码生成、有效期、批量上限
/// - telemetry: 远程日志上报
/// - logging: 本地日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub shortener: ShortenerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：SHORTENIT，分隔符：__
    /// 示例：SHORTENIT__SERVER__PORT=9999
    pub fn load(path: Option<&str>) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// 加载配置，失败时返回错误而不是回退到默认值
    pub fn try_load(path: Option<&str>) -> Result<Self, ShortenitError> {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖，前缀 SHORTENIT，分隔符 __
            .add_source(
                Environment::with_prefix("SHORTENIT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<StaticConfig>()?;
        if std::path::Path::new(path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ShortenitError> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
    /// 允许跨域访问的来源；为空时仅同源
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

/// 短链生成配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    /// 展示短链时使用的前缀，例如 http://localhost:3000/{shortcode}
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    #[serde(default = "default_validity_minutes")]
    pub default_validity_minutes: i64,
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
    /// 短码冲突时的重新生成次数，最后一次结果不再检查
    #[serde(default = "default_regenerate_attempts")]
    pub regenerate_attempts: u32,
}

/// 远程日志上报配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_telemetry_enabled")]
    pub enabled: bool,
    #[serde(default = "default_telemetry_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_telemetry_stack")]
    pub stack: String,
    #[serde(default = "default_telemetry_package")]
    pub package: String,
    #[serde(default = "default_telemetry_timeout_secs")]
    pub timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_public_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_validity_minutes() -> i64 {
    30
}

fn default_code_length() -> usize {
    6
}

fn default_max_batch_size() -> usize {
    5
}

fn default_regenerate_attempts() -> u32 {
    1
}

fn default_telemetry_enabled() -> bool {
    true
}

fn default_telemetry_endpoint() -> String {
    "https://test.affordmed.com/api/log".to_string()
}

fn default_telemetry_stack() -> String {
    "frontend".to_string()
}

fn default_telemetry_package() -> String {
    "shortener".to_string()
}

fn default_telemetry_timeout_secs() -> u64 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
            default_validity_minutes: default_validity_minutes(),
            code_length: default_code_length(),
            max_batch_size: default_max_batch_size(),
            regenerate_attempts: default_regenerate_attempts(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_telemetry_enabled(),
            endpoint: default_telemetry_endpoint(),
            stack: default_telemetry_stack(),
            package: default_telemetry_package(),
            timeout_secs: default_telemetry_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

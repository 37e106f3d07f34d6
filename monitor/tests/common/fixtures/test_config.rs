//! Test configuration builder for creating test configs programmatically

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for creating test configurations
pub struct TestConfigBuilder {
    temp_dir: TempDir,
    main_config: MainConfigBuilder,
    node_configs: HashMap<String, NodeConfigBuilder>,
    raw_files: Vec<(String, String)>,
}

impl TestConfigBuilder {
    /// Create a new test config builder
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            main_config: MainConfigBuilder::default(),
            node_configs: HashMap::new(),
            raw_files: Vec::new(),
        }
    }

    /// Configure main settings
    pub fn with_main_config<F>(mut self, f: F) -> Self
    where
        F: FnOnce(MainConfigBuilder) -> MainConfigBuilder,
    {
        self.main_config = f(self.main_config);
        self
    }

    /// Add a node configuration, written to `<file_stem>.toml`
    pub fn with_node<F>(mut self, file_stem: &str, f: F) -> Self
    where
        F: FnOnce(NodeConfigBuilder) -> NodeConfigBuilder,
    {
        let builder = f(NodeConfigBuilder::default());
        self.node_configs.insert(file_stem.to_string(), builder);
        self
    }

    /// Write a file verbatim, for malformed-config cases
    pub fn with_raw_file(mut self, file_name: &str, content: &str) -> Self {
        self.raw_files
            .push((file_name.to_string(), content.to_string()));
        self
    }

    /// Build and write config files to temp directory
    pub fn build(self) -> TestConfig {
        let config_dir = self.temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        fs::write(config_dir.join("main.toml"), self.main_config.to_toml())
            .expect("Failed to write main.toml");

        for (name, builder) in self.node_configs {
            fs::write(config_dir.join(format!("{}.toml", name)), builder.to_toml())
                .expect("Failed to write node config");
        }

        for (name, content) in self.raw_files {
            fs::write(config_dir.join(name), content).expect("Failed to write raw config");
        }

        TestConfig {
            _temp_dir: self.temp_dir,
            config_dir,
        }
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main configuration builder
#[derive(Clone)]
pub struct MainConfigBuilder {
    host: String,
    port: u16,
    alarm_webhook_url: Option<String>,
    monitored_host: String,
    time_span: Option<u64>,
    time_interval: Option<u64>,
}

impl MainConfigBuilder {
    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn alarm_webhook(mut self, url: &str) -> Self {
        self.alarm_webhook_url = Some(url.to_string());
        self
    }

    pub fn monitored_host(mut self, host: &str) -> Self {
        self.monitored_host = host.to_string();
        self
    }

    pub fn time_span(mut self, seconds: u64) -> Self {
        self.time_span = Some(seconds);
        self
    }

    pub fn time_interval(mut self, seconds: u64) -> Self {
        self.time_interval = Some(seconds);
        self
    }

    fn to_toml(&self) -> String {
        let mut toml = format!(
            r#"
host = "{}"
port = {}
"#,
            self.host, self.port
        );

        if let Some(url) = &self.alarm_webhook_url {
            toml.push_str(&format!("alarm_webhook_url = \"{}\"\n", url));
        }

        toml.push_str(&format!("\n[monitoring]\nhost = \"{}\"\n", self.monitored_host));
        if let Some(span) = self.time_span {
            toml.push_str(&format!("time_span = {}\n", span));
        }
        if let Some(interval) = self.time_interval {
            toml.push_str(&format!("time_interval = {}\n", interval));
        }

        toml
    }
}

impl Default for MainConfigBuilder {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            alarm_webhook_url: None,
            monitored_host: "localhost".to_string(),
            time_span: None,
            time_interval: None,
        }
    }
}

/// Node configuration builder
#[derive(Clone)]
pub struct NodeConfigBuilder {
    host: Option<String>,
    rpc_url: String,
    rpc_user: Option<String>,
    rpc_password: Option<String>,
    delegate_name: String,
    enabled: bool,
}

impl NodeConfigBuilder {
    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    pub fn rpc_url(mut self, url: &str) -> Self {
        self.rpc_url = url.to_string();
        self
    }

    pub fn credentials(mut self, user: &str, password: &str) -> Self {
        self.rpc_user = Some(user.to_string());
        self.rpc_password = Some(password.to_string());
        self
    }

    pub fn delegate_name(mut self, name: &str) -> Self {
        self.delegate_name = name.to_string();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    fn to_toml(&self) -> String {
        let mut toml = String::from("[node]\n");
        if let Some(host) = &self.host {
            toml.push_str(&format!("host = \"{}\"\n", host));
        }
        toml.push_str(&format!("rpc_url = \"{}\"\n", self.rpc_url));
        if let Some(user) = &self.rpc_user {
            toml.push_str(&format!("rpc_user = \"{}\"\n", user));
        }
        if let Some(password) = &self.rpc_password {
            toml.push_str(&format!("rpc_password = \"{}\"\n", password));
        }
        toml.push_str(&format!("delegate_name = \"{}\"\n", self.delegate_name));
        if !self.enabled {
            toml.push_str("enabled = false\n");
        }
        toml
    }
}

impl Default for NodeConfigBuilder {
    fn default() -> Self {
        Self {
            host: None,
            rpc_url: "http://localhost:5678/rpc".to_string(),
            rpc_user: None,
            rpc_password: None,
            delegate_name: "init0".to_string(),
            enabled: true,
        }
    }
}

/// Built test configuration with temp directory
pub struct TestConfig {
    _temp_dir: TempDir,
    pub config_dir: PathBuf,
}

impl TestConfig {
    /// Get the config directory path
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Config directory as the string `ConfigManager::new` expects
    pub fn config_dir_string(&self) -> String {
        self.config_dir.display().to_string()
    }
}

use serde::Deserialize;
use std::io::ErrorKind;
use std::marker::PhantomData;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigSerializer<TConfig> {
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// Where configuration text comes from. `Ok(None)` means there is none.
pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de>,
{
    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read config file {}: {}", self.file_path, err)),
        }
    }
}

/// Reads, deserializes and validates a config, falling back to
/// `TConfig::default()` when the provider has nothing.
pub struct ConfigLoader<TProvider, TConfig, TSerializer = YamlConfigSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    provider: TProvider,
    serializer: TSerializer,
    _config: PhantomData<TConfig>,
}

impl<TConfig> ConfigLoader<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: for<'de> Deserialize<'de> + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer,
        )
    }
}

impl<TProvider, TConfig, TSerializer> ConfigLoader<TProvider, TConfig, TSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            _config: PhantomData,
        }
    }

    pub fn load(&self) -> Result<TConfig, String> {
        Ok(self.load_existing()?.unwrap_or_default())
    }

    /// Like `load`, but `Ok(None)` when there is no config to read.
    pub fn load_existing(&self) -> Result<Option<TConfig>, String> {
        let Some(content) = self.provider.get_config_content()? else {
            return Ok(None);
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(Some(config))
    }
}

use common::config::{ConfigLoader, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::Mark;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_loader(
    file_path: &str,
) -> ConfigLoader<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigLoader::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub first_player: FirstPlayer,
    pub symbols: Symbols,
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.symbols.validate()
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    #[default]
    Human,
    Computer,
}

impl FirstPlayer {
    pub fn mark(&self) -> Mark {
        match self {
            FirstPlayer::Human => Mark::Human,
            FirstPlayer::Computer => Mark::Computer,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Symbols {
    pub human: char,
    pub computer: char,
    pub empty: char,
}

impl Symbols {
    pub fn for_mark(&self, mark: Mark) -> char {
        match mark {
            Mark::Human => self.human,
            Mark::Computer => self.computer,
            Mark::Empty => self.empty,
        }
    }
}

impl Validate for Symbols {
    fn validate(&self) -> Result<(), String> {
        let all = [self.human, self.computer, self.empty];
        if all.iter().any(|c| c.is_whitespace() || c.is_control()) {
            return Err("symbols must be visible characters".to_string());
        }
        if self.human == self.computer || self.human == self.empty || self.computer == self.empty {
            return Err("symbols must be distinct".to_string());
        }
        Ok(())
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            human: 'X',
            computer: 'O',
            empty: '-',
        }
    }
}

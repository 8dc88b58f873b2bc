use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use config::{Config, File, FileFormat};
use directories::BaseDirs;
use nebula_sso::ResolutionConfig;
use serde::Deserialize;

use crate::Args;

fn default_config_path() -> anyhow::Result<PathBuf> {
    let base_dirs = BaseDirs::new().context("failed to get base directories")?;
    let nebula_config_dir = base_dirs.config_dir().join("nebula");
    if !nebula_config_dir.exists() {
        std::fs::create_dir_all(&nebula_config_dir)?;
    }
    Ok(nebula_config_dir.join("sso_config.toml"))
}

#[derive(Deserialize)]
struct GroupMappingFile {
    #[serde(default)]
    group_mapping: HashMap<String, String>,
}

/// `config` folds table keys to lowercase, but group names are matched verbatim.
fn load_group_mapping(path: &Path) -> anyhow::Result<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read config file {}", path.display()))?;
    let file: GroupMappingFile = toml::from_str(&content)?;
    Ok(file.group_mapping)
}

/// An explicitly passed config file must exist, the default one is optional.
pub(super) fn load_config(args: &Args) -> anyhow::Result<ResolutionConfig> {
    let (config_file_path, required) = match args.config {
        Some(ref path_override) => (path_override.clone(), true),
        None => (default_config_path()?, false),
    };

    let mut config: ResolutionConfig = Config::builder()
        .add_source(File::from(config_file_path.clone()).format(FileFormat::Toml).required(required))
        .set_override_option("custom_email_field", args.email_field.clone())?
        .set_override_option("custom_id_field", args.id_field.clone())?
        .set_override_option("custom_group_field", args.group_field.clone())?
        .set_override_option("default_group_id", args.default_group.clone())?
        .set_override_option("group_separator", args.group_separator.clone())?
        .build()?
        .try_deserialize()?;
    config.group_mapping = load_group_mapping(&config_file_path)?;

    Ok(config)
}

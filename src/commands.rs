//! Offline commands: form listing, schema and template generation.

use std::path::{Path, PathBuf};

use formpilot_config::{Config, ConfigLoader};
use formpilot_filler::{empty_form_data, generate_schema, FormStore};

/// The form store both the offline commands and the server read from.
pub fn store_from(config: &Config) -> FormStore {
    FormStore::new(forms_dir(config))
}

pub fn forms_dir(config: &Config) -> PathBuf {
    let raw = config.forms.dir.to_string_lossy();
    PathBuf::from(ConfigLoader::expand_path(&raw))
}

pub fn list_forms(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let names = store_from(config).list()?;
    for name in names {
        println!("{name}");
    }
    Ok(())
}

pub fn print_schema(
    config: &Config,
    form: &str,
    require_all: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let definition = store_from(config).load(form)?;
    emit(&generate_schema(&definition, require_all), output)
}

pub fn print_template(
    config: &Config,
    form: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let definition = store_from(config).load(form)?;
    emit(&empty_form_data(&definition), output)
}

fn emit(
    value: &serde_json::Value,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pretty = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, pretty)?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{pretty}"),
    }
    Ok(())
}

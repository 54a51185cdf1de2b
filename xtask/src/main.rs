//! Developer tasks (schema generation, config fixture validation).
//!
//! Keeping this separate keeps the library crates free of tooling dependencies.

use anyhow::{Context, bail};
use orgguard_types::{CatalogDetails, PolicyResult};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn config_fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures").join("configs")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_org_config_schema() -> schemars::Schema {
    schema_for!(orgguard_settings::OrgConfig)
}

fn generate_repo_config_schema() -> schemars::Schema {
    schema_for!(orgguard_settings::RepoConfig)
}

fn generate_catalog_result_schema() -> schemars::Schema {
    schema_for!(PolicyResult<CatalogDetails>)
}

const ORG_CONFIG_SCHEMA: &str = "orgguard.org-config.v1.json";
const REPO_CONFIG_SCHEMA: &str = "orgguard.repo-config.v1.json";

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: ORG_CONFIG_SCHEMA,
            generate: generate_org_config_schema,
        },
        SchemaSpec {
            filename: REPO_CONFIG_SCHEMA,
            generate: generate_repo_config_schema,
        },
        SchemaSpec {
            filename: "orgguard.catalog-result.v1.json",
            generate: generate_catalog_result_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Org-level fixtures live in directories whose name ends with `org`.
fn is_org_fixture(dir_name: &str) -> bool {
    dir_name.ends_with("org")
}

fn fixture_schema_for(dir_name: &str) -> fn() -> schemars::Schema {
    if is_org_fixture(dir_name) {
        generate_org_config_schema
    } else {
        generate_repo_config_schema
    }
}

/// Validate every `tests/fixtures/configs/<layer>/catalog.toml`:
/// 1. it decodes with the settings crate
/// 2. its TOML, viewed as JSON, validates against the generated schema
fn check_fixtures() -> anyhow::Result<()> {
    let fixtures_dir = config_fixtures_dir();
    let mut fixture_count = 0;
    let mut errors = Vec::new();

    let mut dirs: Vec<PathBuf> = fs::read_dir(&fixtures_dir)
        .with_context(|| format!("Failed to read {}", fixtures_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    for dir in dirs {
        let dir_name = dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let path = dir.join(orgguard_types::ids::CONFIG_FILE_CATALOG);
        if !path.exists() {
            continue;
        }
        let label = format!("{}/{}", dir_name, orgguard_types::ids::CONFIG_FILE_CATALOG);

        let text =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", label))?;

        let decoded = if is_org_fixture(&dir_name) {
            orgguard_settings::parse_org_config_toml(&text).map(|_| ())
        } else {
            orgguard_settings::parse_repo_config_toml(&text).map(|_| ())
        };
        if let Err(err) = decoded {
            errors.push(format!("{}: decode: {:#}", label, err));
        }

        let value: serde_json::Value =
            toml::from_str(&text).with_context(|| format!("Failed to parse {} as TOML", label))?;
        let schema = serde_json::to_value((fixture_schema_for(&dir_name))())
            .context("Failed to convert schema to JSON")?;
        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;
        for err in validator.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", label, err));
        }

        fixture_count += 1;
        println!("  ✓ {} validates", label);
    }

    if fixture_count == 0 {
        bail!("No config fixtures found in {}", fixtures_dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nFixture errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Fixture validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} config fixtures validate!", fixture_count);
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  check-fixtures    Validate tests/fixtures/configs against the config schemas");
    eprintln!("  print-schema-ids  Print known schema IDs");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "check-fixtures" => check_fixtures(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}

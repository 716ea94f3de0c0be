//! generate command - Generate or regenerate the project's package.json

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::config::{Config, ProjectConfig};
use crate::core::context::GenContext;
use crate::core::manifest::Manifest;
use crate::core::registry::VersionRegistry;
use crate::core::types::PluginName;
use crate::merge;
use crate::project;
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts;

/// Options gathered from the command line for one generate run.
///
/// `None` means "not given on the command line"; the handler falls back
/// to saved project options, global config, the existing manifest, and
/// finally the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
    pub docs: Option<bool>,
    pub css: Option<bool>,
    pub lang: Option<bool>,
    pub precommit: Option<bool>,
    pub prepush: Option<bool>,
    pub dry_run: bool,
    pub save: bool,
}

/// Generate or regenerate `package.json` in the target directory.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `options` - Command-line options for this run
pub fn generate(ctx: &Context, options: &GenerateOptions) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);

    let dir = match &ctx.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to determine current directory")?,
    };

    let config = Config::load(Some(&dir)).context("failed to load configuration")?;
    let current = project::read_manifest(&dir).context("failed to read existing manifest")?;

    let resolved = resolve_options(ctx, options, &config, &current)?;
    output::debug(
        format!("generating manifest for {}", resolved.plugin_name),
        verbosity,
    );

    let registry = VersionRegistry::packaged();
    let manifest = merge::generate(&current, &resolved, &registry)
        .context("failed to generate the manifest")?;

    if options.dry_run {
        print!("{}", manifest.to_json_string());
        return Ok(());
    }

    if ctx.interactive && !current.is_empty() {
        let ok = prompts::confirm("package.json exists; regenerate it?", true, true)?;
        if !ok {
            output::print("Aborted.", verbosity);
            return Ok(());
        }
    }

    project::write_manifest(&dir, &manifest).context("failed to write manifest")?;
    output::print(
        format!("Wrote {}", project::manifest_path(&dir).display()),
        verbosity,
    );

    if options.save {
        let saved = ProjectConfig {
            name: Some(resolved.plugin_name.package_name()),
            description: Some(resolved.description.clone()),
            author: Some(resolved.author.clone()),
            license: Some(resolved.license_name.clone()),
            docs: Some(resolved.docs),
            css: Some(resolved.css),
            lang: Some(resolved.lang),
            precommit: Some(resolved.precommit),
            prepush: Some(resolved.prepush),
        };
        let path = Config::write_project(&dir, &saved).context("failed to save run options")?;
        output::debug(format!("saved options to {}", path.display()), verbosity);
    }

    Ok(())
}

/// Resolve every generation option through the precedence chain:
/// CLI flag > saved project option > global config > existing manifest >
/// built-in default. Prompts fill the gaps on a first interactive run.
fn resolve_options(
    ctx: &Context,
    options: &GenerateOptions,
    config: &Config,
    current: &Manifest,
) -> Result<GenContext> {
    let saved = config.project.as_ref();
    let first_run = saved.is_none();

    let plugin_name = resolve_name(ctx, options, saved, current)?;
    let mut resolved = GenContext::new(plugin_name);

    if let Some(version) = options
        .version
        .as_deref()
        .or_else(|| current.string("version"))
    {
        resolved.version = version.to_string();
    }

    resolved.description = match options
        .description
        .as_deref()
        .or_else(|| saved.and_then(|p| p.description.as_deref()))
        .or_else(|| current.string("description"))
    {
        Some(description) => description.to_string(),
        None if ctx.interactive && first_run => {
            prompts::input("Description", Some(""), true)?
        }
        None => String::new(),
    };

    resolved.author = match options
        .author
        .as_deref()
        .or(config.author())
        .or_else(|| current.string("author"))
    {
        Some(author) => author.to_string(),
        None if ctx.interactive && first_run => prompts::input("Author", Some(""), true)?,
        None => String::new(),
    };

    if let Some(license) = options
        .license
        .as_deref()
        .or(config.license())
        .or_else(|| current.string("license"))
    {
        resolved.license_name = license.to_string();
    }

    resolved.docs = options
        .docs
        .or(config.feature(|d| d.docs))
        .unwrap_or(resolved.docs);
    resolved.css = options
        .css
        .or(config.feature(|d| d.css))
        .unwrap_or(resolved.css);
    resolved.lang = options
        .lang
        .or(config.feature(|d| d.lang))
        .unwrap_or(resolved.lang);
    resolved.precommit = options
        .precommit
        .or(config.feature(|d| d.precommit))
        .unwrap_or(resolved.precommit);
    resolved.prepush = options
        .prepush
        .or(config.feature(|d| d.prepush))
        .unwrap_or(resolved.prepush);

    Ok(resolved)
}

/// Resolve the plugin name, prompting on an interactive first run.
fn resolve_name(
    ctx: &Context,
    options: &GenerateOptions,
    saved: Option<&ProjectConfig>,
    current: &Manifest,
) -> Result<PluginName> {
    let candidate = options
        .name
        .as_deref()
        .or_else(|| saved.and_then(|p| p.name.as_deref()))
        .or_else(|| current.string("name"));

    if let Some(name) = candidate {
        return PluginName::new(name).with_context(|| format!("invalid plugin name '{}'", name));
    }

    if ctx.interactive {
        let entered = prompts::input("Plugin name (e.g. hls-quality)", None, true)?;
        return PluginName::new(entered.trim())
            .with_context(|| format!("invalid plugin name '{}'", entered.trim()));
    }

    bail!("no plugin name available; pass --name or run interactively");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GlobalConfig;

    fn non_interactive() -> Context {
        Context {
            quiet: true,
            ..Default::default()
        }
    }

    fn with_name(name: &str) -> GenerateOptions {
        GenerateOptions {
            name: Some(name.to_string()),
            save: true,
            ..Default::default()
        }
    }

    #[test]
    fn name_required_without_prompt() {
        let result = resolve_options(
            &non_interactive(),
            &GenerateOptions::default(),
            &Config::default(),
            &Manifest::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn name_from_existing_manifest() {
        let current = Manifest::parse(r#"{"name": "videojs-wombat"}"#).unwrap();
        let resolved = resolve_options(
            &non_interactive(),
            &GenerateOptions::default(),
            &Config::default(),
            &current,
        )
        .unwrap();
        assert_eq!(resolved.plugin_name.package_name(), "videojs-wombat");
    }

    #[test]
    fn cli_name_wins_over_manifest() {
        let current = Manifest::parse(r#"{"name": "videojs-old"}"#).unwrap();
        let resolved = resolve_options(
            &non_interactive(),
            &with_name("fresh"),
            &Config::default(),
            &current,
        )
        .unwrap();
        assert_eq!(resolved.plugin_name.package_name(), "videojs-fresh");
    }

    #[test]
    fn version_carried_from_manifest() {
        let current =
            Manifest::parse(r#"{"name": "videojs-wombat", "version": "2.4.1"}"#).unwrap();
        let resolved = resolve_options(
            &non_interactive(),
            &GenerateOptions::default(),
            &Config::default(),
            &current,
        )
        .unwrap();
        assert_eq!(resolved.version, "2.4.1");
    }

    #[test]
    fn global_config_supplies_author_and_flags() {
        let config = Config {
            global: GlobalConfig {
                author: Some("Jane Doe".to_string()),
                license: None,
                defaults: Some(crate::core::config::FeatureDefaults {
                    docs: Some(true),
                    ..Default::default()
                }),
            },
            project: None,
        };

        let resolved =
            resolve_options(&non_interactive(), &with_name("wombat"), &config, &Manifest::new())
                .unwrap();
        assert_eq!(resolved.author, "Jane Doe");
        assert!(resolved.docs);
        // Untouched flags keep their defaults.
        assert!(resolved.precommit);
    }

    #[test]
    fn cli_flags_win_over_config() {
        let config = Config {
            global: GlobalConfig {
                defaults: Some(crate::core::config::FeatureDefaults {
                    docs: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            },
            project: None,
        };

        let mut options = with_name("wombat");
        options.docs = Some(false);

        let resolved =
            resolve_options(&non_interactive(), &options, &config, &Manifest::new()).unwrap();
        assert!(!resolved.docs);
    }

    #[test]
    fn saved_options_win_over_global() {
        let config = Config {
            global: GlobalConfig {
                author: Some("Global".to_string()),
                ..Default::default()
            },
            project: Some(ProjectConfig {
                name: Some("wombat".to_string()),
                author: Some("Saved".to_string()),
                docs: Some(true),
                ..Default::default()
            }),
        };

        let resolved = resolve_options(
            &non_interactive(),
            &GenerateOptions::default(),
            &config,
            &Manifest::new(),
        )
        .unwrap();
        assert_eq!(resolved.author, "Saved");
        assert!(resolved.docs);
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap_complete::Shell;
use indexmap::IndexMap;
use log::info;

use rcf_core::GeneratedFile;
use rcf_core::config::{self, CONFIG_FILE_NAME, ConfigValue, GeneratorConfig};
use rcf_core::emitters::index::create_index_for_folders;
use rcf_core::generator::FolderGenerator;
use rcf_core::name::ComponentName;
use rcf_core::templates::TemplateLocator;

#[derive(Parser)]
#[command(name = "rcf", about = "React component folder scaffolder", version)]
struct Cli {
    /// Component names to generate folders for
    names: Vec<String>,

    /// Creates Typescript component and files
    #[arg(long)]
    typescript: bool,

    /// No css file
    #[arg(long)]
    nocss: bool,

    /// Adds Component.style.(js|ts) file
    #[arg(long)]
    stylesext: bool,

    /// Adds the Graphql pattern: index, apollo, controller and view files
    #[arg(long)]
    graphql: bool,

    /// No test file
    #[arg(long)]
    notest: bool,

    /// Creates css/less/scss file with .module extension
    #[arg(long)]
    cssmodules: bool,

    /// Creates React Native components
    #[arg(long)]
    reactnative: bool,

    /// Creates an index file importing every component folder
    #[arg(long)]
    createindex: bool,

    /// Creates files using named exports
    #[arg(short = 'x', long)]
    namedexports: bool,

    /// Creates a stateless functional component
    #[arg(short = 'f', long)]
    functional: bool,

    /// Creates the component file with .jsx extension
    #[arg(short = 'j', long)]
    jsx: bool,

    /// Adds .less file to the component
    #[arg(short = 'l', long)]
    less: bool,

    /// Adds .scss file to the component
    #[arg(short = 's', long)]
    scss: bool,

    /// Adds prop-types to the component
    #[arg(short = 'p', long)]
    proptypes: bool,

    /// Component files start with an uppercase letter
    #[arg(short = 'u', long)]
    uppercase: bool,

    /// Uses the project configuration if available
    #[arg(short = 'd', long = "default")]
    use_default: bool,

    /// Adds a story file to the component
    #[arg(long)]
    stories: bool,

    /// Context path prepended to the story title
    #[arg(long, value_name = "DIRECTORY")]
    storiescontext: Option<String>,

    /// No semicolons
    #[arg(long)]
    nosemi: bool,

    /// The root directory to create components in
    #[arg(short, long, value_name = "DIRECTORY")]
    output: Option<PathBuf>,

    /// Path to the graphql types definition (used with typescript)
    #[arg(long, value_name = "DIRECTORY")]
    graphqldefs: Option<String>,

    /// Apollo link definition used by generated mocks
    #[arg(long, value_name = "OBJECT")]
    apollolink: Option<String>,

    /// Paths to scss files included in generated scss components
    #[arg(long, value_name = "DIRECTORY")]
    scssinclude: Vec<String>,

    /// Hyphenated css class names, e.g. .my-class
    #[arg(long)]
    hyphenatedcss: bool,

    /// Stateful pattern: controller, view and index file (needs --namedexports)
    #[arg(long)]
    controller: bool,

    /// Index re-exports from './<name>' without a pattern suffix
    #[arg(long)]
    flatindex: bool,

    /// Directory with project template overrides
    #[arg(long, value_name = "DIRECTORY")]
    templates: Option<PathBuf>,

    /// Write a starter .rcf.yaml and exit
    #[arg(long)]
    init: bool,

    /// Overwrite existing files (with --init)
    #[arg(long)]
    force: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "rcf", &mut std::io::stdout());
        return Ok(());
    }

    if cli.init {
        return cmd_init(cli.force);
    }

    if cli.names.is_empty() {
        anyhow::bail!("no component names given; run `rcf --help` for usage");
    }

    let file_config = config::load_config(Path::new(CONFIG_FILE_NAME))?;
    if file_config.is_some() {
        info!("merged project config from {CONFIG_FILE_NAME}");
    }
    let cfg = build_config(&cli, file_config);

    let locator = TemplateLocator::new(cfg.get_opt("templates").map(PathBuf::from));
    let generator = FolderGenerator::new(&cfg, &locator);
    let output_root = PathBuf::from(cfg.get_value("output", "."));

    for raw in &cli.names {
        let name = ComponentName::parse(raw)?;
        let files = generator.generate(raw)?;

        let folder = output_root.join(generator.folder_name(&name));
        fs::create_dir_all(&folder)
            .with_context(|| format!("failed to create directory {}", folder.display()))?;
        write_files(&folder, &files)?;

        eprintln!("Generated {} files in {}", files.len(), folder.display());
    }

    if cfg.has_flag("createindex") {
        write_root_index(&cfg, &output_root)?;
    }

    Ok(())
}

/// Merge the parsed CLI surface over the optional project config file into
/// the immutable flag/value sets the generators consume.
fn build_config(cli: &Cli, file: Option<config::ProjectConfig>) -> GeneratorConfig {
    let flags = IndexMap::from([
        ("typescript".to_string(), cli.typescript),
        ("nocss".to_string(), cli.nocss),
        ("stylesext".to_string(), cli.stylesext),
        ("graphql".to_string(), cli.graphql),
        ("notest".to_string(), cli.notest),
        ("cssmodules".to_string(), cli.cssmodules),
        ("reactnative".to_string(), cli.reactnative),
        ("createindex".to_string(), cli.createindex),
        ("namedexports".to_string(), cli.namedexports),
        ("functional".to_string(), cli.functional),
        ("jsx".to_string(), cli.jsx),
        ("less".to_string(), cli.less),
        ("scss".to_string(), cli.scss),
        ("proptypes".to_string(), cli.proptypes),
        ("uppercase".to_string(), cli.uppercase),
        ("default".to_string(), cli.use_default),
        ("stories".to_string(), cli.stories),
        ("nosemi".to_string(), cli.nosemi),
        ("hyphenatedcss".to_string(), cli.hyphenatedcss),
        ("controller".to_string(), cli.controller),
        ("flatindex".to_string(), cli.flatindex),
    ]);

    let mut values = IndexMap::new();
    if let Some(ref defs) = cli.graphqldefs {
        values.insert("graphqldefs".to_string(), ConfigValue::Str(defs.clone()));
    }
    if let Some(ref ctx) = cli.storiescontext {
        values.insert("storiescontext".to_string(), ConfigValue::Str(ctx.clone()));
    }
    if let Some(ref out) = cli.output {
        values.insert(
            "output".to_string(),
            ConfigValue::Str(out.display().to_string()),
        );
    }
    if let Some(ref link) = cli.apollolink {
        values.insert("apollolink".to_string(), ConfigValue::Str(link.clone()));
    }
    if !cli.scssinclude.is_empty() {
        values.insert(
            "scssinclude".to_string(),
            ConfigValue::List(cli.scssinclude.clone()),
        );
    }
    if let Some(ref dir) = cli.templates {
        values.insert(
            "templates".to_string(),
            ConfigValue::Str(dir.display().to_string()),
        );
    }

    GeneratorConfig::from_layers(file, flags, values)
}

/// Write generated files into the component folder.
fn write_files(folder: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = folder.join(&file.path);
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

/// List component folders under the output root and write the multi-folder
/// index re-exporting them.
fn write_root_index(cfg: &GeneratorConfig, output_root: &Path) -> Result<()> {
    let folders = list_component_folders(output_root)?;
    let content = create_index_for_folders(&folders);

    let ext = if cfg.has_flag("typescript") { "ts" } else { "js" };
    let path = output_root.join(format!("index.{ext}"));
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("  wrote {}", path.display());
    Ok(())
}

/// Existing component folders, sorted for a stable index.
fn list_component_folders(root: &Path) -> Result<Vec<String>> {
    let mut folders = Vec::new();
    let entries =
        fs::read_dir(root).with_context(|| format!("failed to read {}", root.display()))?;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with('.') {
                    folders.push(name.to_string());
                }
            }
        }
    }
    folders.sort();
    Ok(folders)
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

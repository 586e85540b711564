mod cli;

use indexmap::IndexMap;
use schemamd::schema::{ProviderSchema, ProviderSchemas, Schema};

fn main() {
    use clap::Parser;
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("SCHEMAMD_LOG"))
        .with_writer(std::io::stderr)
        .init();

    for new_path in cli.directory.iter() {
        match new_path.canonicalize() {
            Err(e) => {
                eprintln!(
                    "Failed to resolve path for -C/--directory {}\n{}",
                    new_path.display(),
                    e
                );
                std::process::exit(1);
            }
            Ok(cwd) => {
                if let Err(err) = std::env::set_current_dir(&cwd) {
                    eprintln!("Failed to set work directory to {}\n{}", cwd.display(), err,);
                    std::process::exit(1);
                }

                tracing::info!(directory=%cwd.display(), "Changed working directory");
            }
        }
    }

    let command_result = match cli.command {
        cli::Command::Render(render_cli) => render(render_cli),
        cli::Command::Function(function_cli) => function(function_cli),
        cli::Command::List(list_cli) => list(list_cli),
    };

    if let Err(e) = command_result {
        for error in e.chain() {
            eprintln!("{error}")
        }
        std::process::exit(1);
    }
}

pub fn render(cli: cli::RenderCommand) -> anyhow::Result<()> {
    let input = read_input(&cli.input)?;

    let mut options = schemamd::RenderOptions::default().with_status_qualifiers(cli.status_qualifiers);
    if cli.default_hidden {
        options = options.with_default_hidden_fields();
    }
    for path in cli.hide {
        options = options.hide(path);
    }

    let markdown = if cli.bare {
        let schema = Schema::from_json(&input)?;
        schemamd::render_with_options(&schema, &options)?
    } else {
        let document = ProviderSchemas::from_json(&input)?;
        let provider = select_provider(&document, cli.input.provider.as_deref())?;
        let schema = select_schema(provider, cli.kind, cli.name.as_deref())?;
        schemamd::render_with_options(schema, &options)?
    };

    print!("{markdown}");
    Ok(())
}

pub fn function(cli: cli::FunctionCommand) -> anyhow::Result<()> {
    let document = ProviderSchemas::from_json(&read_input(&cli.input)?)?;
    let provider = select_provider(&document, cli.input.provider.as_deref())?;

    let Some(signature) = provider.functions.get(&cli.name) else {
        anyhow::bail!("Function {:?} not found", cli.name);
    };

    let mut markdown = schemamd::function::render_signature(&cli.name, signature);
    markdown.push_str("\n\n## Arguments\n\n");
    markdown.push_str(&schemamd::function::render_arguments(signature)?);

    let variadic = schemamd::function::render_variadic_arg(signature)?;
    if !variadic.is_empty() {
        markdown.push_str(&variadic);
        markdown.push('\n');
    }

    print!("{markdown}");
    Ok(())
}

#[derive(serde::Serialize, Debug)]
struct ProviderListing<'a> {
    provider: bool,
    resources: Vec<&'a str>,
    data_sources: Vec<&'a str>,
    functions: Vec<&'a str>,
}

pub fn list(cli: cli::ListCommand) -> anyhow::Result<()> {
    let document = ProviderSchemas::from_json(&read_input(&cli.input)?)?;
    let listing = listing(&document, cli.input.provider.as_deref())?;

    match cli.output.format {
        cli::OutputFormat::Yaml => serde_yaml::to_writer(std::io::stdout(), &listing)?,
        cli::OutputFormat::Json => serde_json::to_writer_pretty(std::io::stdout(), &listing)?,
    };

    Ok(())
}

/// All providers of the document, or only the one at `address`
fn listing<'d>(
    document: &'d ProviderSchemas,
    address: Option<&str>,
) -> anyhow::Result<IndexMap<&'d str, ProviderListing<'d>>> {
    let describe = |(address, provider): (&'d String, &'d ProviderSchema)| {
        (
            address.as_str(),
            ProviderListing {
                provider: provider.provider.is_some(),
                resources: sorted_names(&provider.resource_schemas),
                data_sources: sorted_names(&provider.data_source_schemas),
                functions: sorted_names(&provider.functions),
            },
        )
    };

    match address {
        Some(address) => {
            let entry = document
                .provider_schemas
                .get_key_value(address)
                .ok_or_else(|| anyhow::anyhow!("Provider {address:?} not found"))?;
            Ok(IndexMap::from([describe(entry)]))
        }
        None => Ok(document.provider_schemas.iter().map(describe).collect()),
    }
}

fn sorted_names<V>(schemas: &IndexMap<String, V>) -> Vec<&str> {
    let mut names: Vec<&str> = schemas.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

fn read_input(input: &cli::InputArgs) -> anyhow::Result<String> {
    match &input.file {
        Some(path) => {
            let path = path.canonicalize()?;
            tracing::info!(path=%path.display(), "loading schema document");
            Ok(std::fs::read_to_string(&path)?)
        }
        None => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}

fn select_provider<'d>(
    document: &'d ProviderSchemas,
    address: Option<&str>,
) -> anyhow::Result<&'d ProviderSchema> {
    if let Some(address) = address {
        return document
            .provider_schemas
            .get(address)
            .ok_or_else(|| anyhow::anyhow!("Provider {address:?} not found"));
    }

    anyhow::ensure!(
        document.provider_schemas.len() == 1,
        "Document describes {} providers, select one with --provider",
        document.provider_schemas.len()
    );

    document
        .provider_schemas
        .values()
        .next()
        .ok_or_else(|| anyhow::anyhow!("No provider found"))
}

fn select_schema<'d>(
    provider: &'d ProviderSchema,
    kind: cli::SchemaKind,
    name: Option<&str>,
) -> anyhow::Result<&'d Schema> {
    let schemas = match kind {
        cli::SchemaKind::Provider => {
            return provider
                .provider
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("Document has no provider schema"));
        }
        cli::SchemaKind::Resource => &provider.resource_schemas,
        cli::SchemaKind::DataSource => &provider.data_source_schemas,
    };

    let Some(name) = name else {
        anyhow::bail!("A {kind} name is required");
    };

    schemas
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("No {kind} named {name:?}"))
}

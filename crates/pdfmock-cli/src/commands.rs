use anyhow::Context;
use colored::Colorize;
use pdfmock_fetch::{
    CMapProvider, Provider, ProviderConfig, ResourceDescriptor, ResourceProvider,
};
use pdfmock_harness::{create_id_factory, HarnessConfig, IdFactory};
use pdfmock_types::Ref;
use pdfmock_xref::{XRef, XRefMock};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => {
            let config = HarnessConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded harness config");
            config
        }
        None => HarnessConfig::default(),
    };

    match cli.command {
        Command::Fetch(args) => cmd_fetch(args).await,
        Command::Cmap(args) => cmd_cmap(&config, args).await,
        Command::Resolve(args) => cmd_resolve(args),
        Command::Ids(args) => cmd_ids(args),
        Command::Config => cmd_config(&config),
    }
}

async fn cmd_fetch(args: FetchArgs) -> anyhow::Result<()> {
    let provider_config = if args.location.starts_with("http://")
        || args.location.starts_with("https://")
    {
        ProviderConfig::Network { base_url: None }
    } else {
        ProviderConfig::File { root: None }
    };
    let provider = Provider::from_config(&provider_config)?;
    let resource = provider
        .fetch(&ResourceDescriptor::new(args.location.as_str()))
        .await?;

    println!(
        "{} {} ({} bytes, {})",
        "✓".green().bold(),
        args.location.bold(),
        resource.len(),
        provider.kind().cyan()
    );
    if let Some(out) = args.output {
        std::fs::write(&out, resource.data())
            .with_context(|| format!("writing {}", out.display()))?;
        println!("  Written to {}", out.display());
    }
    Ok(())
}

async fn cmd_cmap(config: &HarnessConfig, args: CmapArgs) -> anyhow::Result<()> {
    let provider = CMapProvider::new(
        args.base_url.or_else(|| config.cmap_url.clone()),
        args.packed.unwrap_or(config.cmap_packed),
    );
    let resource = provider.fetch(&ResourceDescriptor::cmap(args.name.as_str())).await?;
    let cmap = resource
        .as_cmap()
        .context("CMap backend returned plain bytes")?;
    println!(
        "{} CMap {} ({} bytes, compression {})",
        "✓".green().bold(),
        args.name.yellow(),
        cmap.data.len(),
        cmap.compression.to_string().cyan()
    );
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let xref = XRefMock::load(&args.fixture)?;
    let reference: Ref = args.reference.parse()?;
    match xref.fetch(reference) {
        Some(value) => {
            println!("{} {}", reference.to_string().yellow().bold(), value.kind_name().dimmed());
            println!("{}", serde_json::to_string_pretty(value.as_ref())?);
        }
        None => println!(
            "{} {} not in fixture ({} objects)",
            "∅".dimmed(),
            reference.to_string().yellow(),
            xref.len()
        ),
    }
    Ok(())
}

fn cmd_ids(args: IdsArgs) -> anyhow::Result<()> {
    let factory = create_id_factory(args.page_index);
    println!("Document: {}", factory.doc_id().cyan());
    println!("Font:     {}", factory.create_font_id());
    for _ in 0..args.count {
        println!("Object:   {}", factory.create_obj_id());
    }
    Ok(())
}

fn cmd_config(config: &HarnessConfig) -> anyhow::Result<()> {
    println!("pdfs_path              = {}", config.pdfs_path.bold());
    println!("cmap_url               = {}", show(config.cmap_url.as_deref()));
    println!("cmap_packed            = {}", config.cmap_packed);
    println!(
        "standard_font_data_url = {}",
        show(config.standard_font_data_url.as_deref())
    );
    Ok(())
}

fn show(value: Option<&str>) -> String {
    value.map_or_else(|| "(not set)".dimmed().to_string(), str::to_string)
}

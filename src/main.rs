//! Main entry point for the zipmeta CLI application.
//!
//! This binary scans a local ZIP archive for plugin or theme metadata and
//! prints what it finds as plain text.

use anyhow::Result;
use clap::Parser;

use zipmeta::{Cli, MarkupTransform, PackageHeaders, PackageResult, PlainText, parse_package};

/// Application entry point.
///
/// Parses command-line arguments, runs the package scan and dispatches to
/// the requested report format. Exits with status 1 when the file is not a
/// recognizable package archive.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let markup: Option<&dyn MarkupTransform> = if cli.markup { Some(&PlainText) } else { None };

    let Some(package) = parse_package(&cli.file, markup) else {
        eprintln!("{}: no plugin or theme package found", cli.file.display());
        std::process::exit(1);
    };

    if cli.summary {
        print_summary(&package);
    } else {
        print_package(&package, &cli);
    }

    Ok(())
}

/// Print the full package report: typed header fields, then the readme
/// overview unless quiet flags suppress it.
fn print_package(package: &PackageResult, cli: &Cli) {
    println!("Package type: {}", package.package_type.as_str());

    match &package.headers {
        PackageHeaders::Plugin(h) => {
            print_field("Plugin file", package.plugin_file.as_deref().unwrap_or(""));
            print_field("Name", &h.name);
            print_field("Plugin URI", &h.plugin_uri);
            print_field("Version", &h.version);
            print_field("Description", &h.description);
            print_field("Author", &h.author);
            print_field("Author URI", &h.author_uri);
            print_field("Text domain", &h.text_domain);
            if h.network {
                print_field("Network", "true");
            }
        }
        PackageHeaders::Theme(h) => {
            print_field("Stylesheet", package.stylesheet.as_deref().unwrap_or(""));
            print_field("Name", &h.name);
            print_field("Theme URI", &h.theme_uri);
            print_field("Version", &h.version);
            print_field("Description", &h.description);
            print_field("Author", &h.author);
            print_field("Author URI", &h.author_uri);
            print_field("Template", &h.template);
            print_field("Tags", &h.tags.join(", "));
        }
    }

    if !cli.show_readme() {
        return;
    }

    match &package.readme {
        None => println!("\nNo readme found"),
        Some(readme) => {
            println!("\nReadme: {}", readme.name);
            print_field("Contributors", &readme.contributors.join(", "));
            print_field("Tags", &readme.tags.join(", "));
            print_field("Requires", &readme.requires);
            print_field("Tested up to", &readme.tested);
            print_field("Stable tag", &readme.stable_tag);
            if !readme.short_description.is_empty() {
                println!("\n{}", readme.short_description);
            }

            for (title, body) in &readme.sections {
                println!("\n== {} ==", title);
                if cli.show_sections() {
                    println!("{}", body);
                }
            }
        }
    }
}

/// Print the flattened legacy record, one `key: value` line per field.
fn print_summary(package: &PackageResult) {
    #[allow(deprecated)]
    let summary = zipmeta::summarize(package);

    println!("type: {}", summary.package_type.as_str());
    print_opt_field("name", &summary.name);
    print_opt_field("version", &summary.version);
    print_opt_field("homepage", &summary.homepage);
    print_opt_field("author", &summary.author);
    print_opt_field("author_homepage", &summary.author_homepage);
    print_opt_field("requires", &summary.requires);
    print_opt_field("tested", &summary.tested);
    print_opt_field("upgrade_notice", &summary.upgrade_notice);
    print_opt_field("slug", &summary.slug);
    for (key, _) in &summary.sections {
        println!("section: {}", key);
    }
}

/// Print an aligned `label: value` line, skipping empty values.
fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("{:>14}: {}", label, value);
    }
}

fn print_opt_field(label: &str, value: &Option<String>) {
    if let Some(value) = value {
        println!("{}: {}", label, value);
    }
}

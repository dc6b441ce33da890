//! TDL Forge CLI
//!
//! Usage:
//!   tdl-forge [OPTIONS]
//!
//! Options:
//!   -n, --name <NAME>        Object name for the generated definition
//!   -k, --kind <KIND>        Object kind (default: Report)
//!   -u, --use-clause <TEXT>  Inheritance clause, emitted as a `Use :` line
//!   -a, --attributes <FILE>  File with attribute lines ("-" reads stdin)
//!   -t, --template <NAME>    Load a catalog template as the document
//!   -l, --list               List catalog templates
//!   -o, --output [FILE]      Write the document to a file (default: custom.tdl)
//!   -r, --reference          Show the TDL quick reference
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use tdl_forge::{export, generate, Catalog, GenerationRequest, ObjectKind};

#[derive(Parser)]
#[command(name = "tdl-forge")]
#[command(about = "Form-to-text authoring tool for Tally TDL snippets")]
struct Cli {
    /// Object name for the generated definition
    #[arg(short, long)]
    name: Option<String>,

    /// Object kind (any label is accepted)
    #[arg(short, long, default_value = "Report")]
    kind: String,

    /// Inheritance clause, emitted as a `Use :` line
    #[arg(short, long)]
    use_clause: Option<String>,

    /// File with attribute lines, one per line ("-" reads stdin)
    #[arg(short, long)]
    attributes: Option<PathBuf>,

    /// Load a catalog template as the document
    #[arg(short, long)]
    template: Option<String>,

    /// Extend the built-in catalog from a TOML file
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// List catalog templates
    #[arg(short, long)]
    list: bool,

    /// Write the document to a file instead of stdout
    #[arg(short, long, num_args = 0..=1, default_missing_value = export::SUGGESTED_FILENAME)]
    output: Option<PathBuf>,

    /// Show the TDL quick reference
    #[arg(short, long)]
    reference: bool,
}

fn main() {
    let cli = Cli::parse();

    // Handle documentation flags first
    if cli.reference {
        print_reference();
        return;
    }

    // Assemble the catalog
    let mut catalog = Catalog::builtin();
    if let Some(path) = &cli.catalog {
        if let Err(e) = catalog.extend_from_file(path) {
            eprintln!("Error loading catalog '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }

    if cli.list {
        for entry in catalog.entries() {
            println!("{:<20} {}", entry.name, entry.description);
        }
        return;
    }

    // Build the current document: a loaded template, or a generated snippet
    let document = if let Some(name) = &cli.template {
        match catalog.find(name) {
            Some(entry) => entry.body.clone(),
            None => {
                eprintln!("Error: no template named '{}'", name);
                eprintln!(
                    "Available templates: {}",
                    catalog.names().collect::<Vec<_>>().join(", ")
                );
                std::process::exit(1);
            }
        }
    } else if let Some(name) = &cli.name {
        let attributes = match &cli.attributes {
            Some(path) if path.as_os_str() == "-" => {
                let mut buffer = String::new();
                match io::stdin().read_to_string(&mut buffer) {
                    Ok(_) => Some(buffer),
                    Err(e) => {
                        eprintln!("Error reading from stdin: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            Some(path) => match fs::read_to_string(path) {
                Ok(content) => Some(content),
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            },
            None => None,
        };

        let mut request = GenerationRequest::new(ObjectKind::from(cli.kind.as_str()), name);
        if let Some(clause) = &cli.use_clause {
            request = request.with_use_clause(clause);
        }
        if let Some(attributes) = attributes {
            request = request.with_attributes(attributes);
        }

        match generate(&request) {
            Ok(document) => document,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        // Nothing requested: show intro help when interactive
        if io::stdin().is_terminal() {
            print_intro();
            return;
        }
        eprintln!("Error: object name is required (pass --name or --template)");
        std::process::exit(1);
    };

    // Hand the document off verbatim
    match &cli.output {
        Some(path) => {
            if let Err(e) = export::write_to_file(&document, path) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => {
            let stdout = io::stdout();
            if let Err(e) = export::copy_to(&document, &mut stdout.lock()) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_intro() {
    println!(
        r#"TDL Forge - Form-to-text authoring for Tally TDL snippets

USAGE:
    tdl-forge [OPTIONS]
    tdl-forge -n "My Report" -u "DSP Report" > custom.tdl

OPTIONS:
    -l, --list         List catalog templates
    -t, --template     Load a catalog template by name
    -k, --kind         Object kind (default: Report)
    -n, --name         Object name
    -u, --use-clause   Inheritance clause (emitted as a Use : line)
    -a, --attributes   File with attribute lines ("-" reads stdin)
    -c, --catalog      Extend the catalog from a TOML file
    -o, --output       Write to a file (default name: custom.tdl)
    -r, --reference    Show the TDL quick reference
    -h, --help         Print help

QUICK START:
    tdl-forge -n "My Custom Report" -u "DSP Report"
    echo 'Form : F1' | tdl-forge -n "My Report" -a -
    tdl-forge -t "Custom Report" -o

The document goes to stdout unless an output file is picked.
Run --list for the template catalog or --reference for TDL basics."#
    );
}

fn print_reference() {
    println!(
        r#"TDL QUICK REFERENCE
===================

COMMON OBJECTS
--------------
Report       Main reporting structure
Form         Defines form layout and structure
Part         Container for lines and fields
Line         Single line in a form or report
Field        Data input/display element
Collection   Data set from Tally objects
Menu         Menu items and navigation
Button       Action triggers with key bindings

COMMON ATTRIBUTES
-----------------
Use          Inherit from existing definition
Form         Specify form to display
Parts        List of parts in a form
Lines        List of lines in a part
Fields       List of fields in a line
Collection   Data source
Filter       Filter criteria
Set          Set value or expression

USING A GENERATED FILE
----------------------
1. Generate a snippet with the builder options or a template
2. Save it as a .tdl file
3. Copy it to the Tally installation folder
4. Restart Tally Prime
5. The customizations load at startup

INSTALLATION PATHS
------------------
Windows    C:\Program Files\Tally.ERP9\
Linux      /opt/tallyprime/"#
    );
}

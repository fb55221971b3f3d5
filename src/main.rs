//! Rich Interp CLI
//!
//! Usage:
//!   rich-interp [OPTIONS] [TEMPLATE]
//!
//! Options:
//!   -f, --file <FILE>        Read the template from a file
//!   -v, --value <NAME=TEXT>  Bind NAME to a pre-built value
//!   -w, --wrap <NAME>        Bind NAME as a wrapper around its enclosed text
//!       --voids <FILE>       Void-name file (TOML) replacing the HTML default
//!   -g, --grammar            Show template grammar reference
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use rich_interp::{
    interpolate_with, Bindings, Collector, InterpolateConfig, Segment, VoidSet,
};

#[derive(Parser)]
#[command(name = "rich-interp")]
#[command(about = "Segment localized templates with tag and placeholder markup")]
struct Cli {
    /// Template string (reads from stdin if not provided)
    template: Option<String>,

    /// Read the template from a file instead of the command line
    #[arg(short, long, conflicts_with = "template")]
    file: Option<PathBuf>,

    /// Bind NAME to a pre-built value, e.g. --value name=Ada
    #[arg(short, long, value_name = "NAME=TEXT")]
    value: Vec<String>,

    /// Bind NAME as a wrapper that annotates its enclosed text, e.g. --wrap strong
    #[arg(short, long, value_name = "NAME")]
    wrap: Vec<String>,

    /// Void-name file (TOML) replacing the built-in HTML void list
    #[arg(long)]
    voids: Option<PathBuf>,

    /// Show template grammar reference
    #[arg(short, long)]
    grammar: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.grammar {
        print_grammar();
        return;
    }

    // If no input and stdin is a terminal (interactive), show intro help
    if cli.template.is_none() && cli.file.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let template = match read_template(&cli) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading template: {}", e);
            std::process::exit(1);
        }
    };

    let voids = match &cli.voids {
        Some(path) => match VoidSet::from_file(path) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("Error loading void-name file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => VoidSet::default(),
    };

    let mut bindings: Bindings<String> = Bindings::new();
    for pair in &cli.value {
        match pair.split_once('=') {
            Some((name, text)) => {
                bindings = bindings.value(name.to_string(), text.to_string());
            }
            None => {
                eprintln!("Invalid --value '{}': expected NAME=TEXT", pair);
                std::process::exit(1);
            }
        }
    }
    for name in &cli.wrap {
        let tag = name.clone();
        bindings = bindings.wrapper(name.clone(), move |inner: &str| format!("{tag}({inner})"));
    }

    let config = InterpolateConfig::new().with_voids(voids);
    let mut collector = Collector::new();
    let segments = interpolate_with(&template, &bindings, &config, &mut collector);

    for segment in &segments {
        match segment {
            Segment::Text(text) => println!("text {:?}", text),
            Segment::Node(node) => println!("rich {}", node),
        }
    }

    for diagnostic in collector.diagnostics() {
        eprintln!("{}", diagnostic.format(&template, "<template>"));
    }
}

fn read_template(cli: &Cli) -> io::Result<String> {
    if let Some(template) = &cli.template {
        return Ok(template.clone());
    }
    if let Some(path) = &cli.file {
        return fs::read_to_string(path);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn print_intro() {
    println!(
        r#"rich-interp - segment localized templates with tag and placeholder markup

Pass a template as an argument, with --file, or on stdin:

  rich-interp --wrap b --value name=Ada 'Hi <b>there</b>, {{{{name}}}}!'

Each output line is one segment, in template order:

  text "Hi "
  rich b(there)
  text ", "
  rich Ada
  text "!"

Names matched in the template but not bound with --value/--wrap are dropped
from the output and reported on stderr.

See --grammar for the template grammar, --help for all options."#
    );
}

fn print_grammar() {
    println!(
        r#"TEMPLATE GRAMMAR

Paired tag       <name>enclosed text</name>
                 The closing name must be identical to the opening name.
                 A wrapper binding receives the enclosed text; a value
                 binding replaces the whole pair, text included.

Bare placeholder {{{{name}}}}
                 Replaced by a value binding. A wrapper binding is invoked
                 with an empty string (there is no enclosed text).

Names            Word characters only: A-Z a-z 0-9 _

Void names       Names in the void set (HTML void elements by default, see
                 --voids) never forward enclosed text, even when the
                 template authors them as a pair.

Fallthrough      Anything else is literal text. Mismatched closing names
                 (<b>x</c>), unterminated tags, stray closers, and names
                 with other characters are never matched and pass through
                 verbatim. Inner text of a matched pair is opaque: it is
                 handed to the binding as-is, never re-scanned.

There is no escaping syntax: template text that matches the grammar is
always treated as markup."#
    );
}

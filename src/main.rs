use g2m::{generate, BuilderOptions, DatasetInput, DiagramKind};
use std::io::{self, Read};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("g2m - Render entity/relationship datasets as Mermaid diagram text");
        println!();
        println!("Usage: g2m [OPTIONS] [FILE]");
        println!();
        println!("Reads a dataset as JSON from FILE or stdin and prints Mermaid source.");
        println!();
        println!("Options:");
        println!("  -h, --help         Show this help message");
        println!("  -t, --type <NAME>  Diagram type: erd, class, flowchart (default: erd)");
        println!("      --json         Print the full result envelope as JSON");
        println!("      --list         List available diagram types");
        println!();
        println!("Example:");
        println!("  g2m -t erd dataset.json");
        println!("  cat dataset.json | g2m -t flowchart");
        return;
    }

    if args.iter().any(|a| a == "--list") {
        for kind in DiagramKind::ALL {
            let meta = kind.metadata();
            println!("{:<14} {} - {}", meta.mermaid_type, meta.name, meta.description);
        }
        return;
    }

    let as_json = args.iter().any(|a| a == "--json");

    let mut type_name = "erd".to_string();
    let mut input_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-t" | "--type" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: {} requires a value", args[i]);
                    std::process::exit(1);
                }
                type_name = args[i + 1].clone();
                i += 1;
            }
            "--json" => {}
            arg if !arg.starts_with('-') => input_path = Some(arg.to_string()),
            other => {
                eprintln!("Error: Unknown option: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let kind = match DiagramKind::from_name(&type_name) {
        Some(kind) => kind,
        None => {
            eprintln!("Error: Unknown diagram type: {}", type_name);
            std::process::exit(1);
        }
    };

    // Get input from file argument or stdin
    let raw = match input_path {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: Failed to read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .expect("Failed to read from stdin");
            buf
        }
    };

    let input: DatasetInput = match serde_json::from_str(&raw) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: Invalid dataset JSON: {}", e);
            std::process::exit(1);
        }
    };

    let result = generate(kind, &input.into_dataset(), BuilderOptions::default());

    if as_json {
        match serde_json::to_string_pretty(&result) {
            Ok(envelope) => println!("{}", envelope),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else if result.success {
        println!("{}", result.content.unwrap_or_default());
    } else {
        eprintln!(
            "Error: {}",
            result.error.unwrap_or_else(|| "generation failed".to_string())
        );
        std::process::exit(1);
    }
}

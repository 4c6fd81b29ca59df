#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = quickjournal::run_from_env() {
        eprintln!("quickjournal: {error}");
        if let Some(entry) = error.unsaved_entry() {
            let _ = quickjournal::cli::report_unsaved(&mut std::io::stderr(), &entry.text);
        }
        std::process::exit(error.exit_code());
    }
}

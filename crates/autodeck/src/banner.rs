use colored::Colorize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_banner_with_version() {
    println!();
    println!("  {}", "autodeck".red().bold());
    println!("  {}", "a self-running, narrated presentation".dimmed());
    println!();
    println!("  version {}", VERSION.bold());
    println!();
}

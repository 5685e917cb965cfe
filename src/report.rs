use supportkit::{Instruction, PackageDescriptor, Resolution, ScanReport};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(package: &PackageDescriptor, resolution: &Resolution<'_>, scan: &ScanReport, color: bool) {
    let palette = ansi::Palette::new(color);

    let heading = if package.name.is_empty() {
        format!("⚙  Support rules for {}", package.identifier)
    } else {
        format!("⚙  Support rules for \"{}\" ({})", package.name, package.identifier)
    };
    println!("\n{}", palette.bold(palette.paint(heading, ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Contact ━━━", ansi::GRAY));
    print_slot("store", resolution.store_link, &palette);
    print_slot("support", resolution.support_link, &palette);

    println!("\n{}", palette.paint("━━━ Other links ━━━", ansi::GRAY));
    if resolution.other_links.is_empty() {
        println!("{}", palette.dim("  none"));
    }
    for link in &resolution.other_links {
        println!("  {}", fmt_link(link, &palette));
    }

    println!("\n{}", palette.paint("━━━ Attachments ━━━", ansi::GRAY));
    if resolution.support_attachments.is_empty() {
        println!("{}", palette.dim("  none"));
    }
    for attachment in &resolution.support_attachments {
        if let Some((kind, source)) = attachment.as_include() {
            println!(
                "  {} {}{}",
                palette.paint(format!("[{}]", kind.keyword()), ansi::BLUE),
                palette.paint(source, ansi::GREEN),
                fmt_title(attachment, &palette),
            );
        }
    }

    println!("\n{}", palette.paint("━━━ Scan ━━━", ansi::GRAY));
    println!(
        "  {} applied  {} {} skipped",
        palette.paint(format!("{} rules", scan.appended), ansi::GREEN),
        palette.dim("│"),
        if scan.skipped.is_empty() {
            palette.dim("0 lines".to_string())
        } else {
            palette.paint(format!("{} lines", scan.skipped.len()), ansi::YELLOW)
        },
    );
    for skipped in &scan.skipped {
        println!(
            "    {} {}",
            palette.paint(format!("line {}:", skipped.line_number), ansi::YELLOW),
            palette.dim(skipped.error.to_string()),
        );
    }
    println!();
}

fn print_slot(label: &str, link: Option<&Instruction>, palette: &ansi::Palette) {
    let rendered = match link {
        Some(link) => fmt_link(link, palette),
        None => palette.dim("none"),
    };
    println!("  {} {}", palette.paint(format!("{label}:"), ansi::BLUE), rendered);
}

fn fmt_link(link: &Instruction, palette: &ansi::Palette) -> String {
    match link.as_link() {
        Some((_, target)) => format!("{}{}", palette.paint(target, ansi::GREEN), fmt_title(link, palette)),
        None => palette.dim("none"),
    }
}

fn fmt_title(instruction: &Instruction, palette: &ansi::Palette) -> String {
    match instruction.title() {
        Some(title) => format!("  {}", palette.dim(format!("\"{title}\""))),
        None => String::new(),
    }
}

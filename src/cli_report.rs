use adlint::{Report, RuleResult, Severity};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
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

pub fn print_report(report: &Report, color: bool) {
    let palette = ansi::Palette::new(color);

    let failures: Vec<&RuleResult> = report.failures().collect();
    println!("\n{}", palette.paint("━━━ Hard failures ━━━", ansi::GRAY));
    if failures.is_empty() {
        println!("{}", palette.dim("  none"));
    } else {
        for r in failures {
            print_violation(r, "✗", ansi::RED, &palette);
        }
    }

    let warnings: Vec<&RuleResult> = report
        .results()
        .iter()
        .filter(|r| r.severity == Severity::Warning && (!r.passed || r.requires_confirmation))
        .collect();
    if !warnings.is_empty() {
        println!("\n{}", palette.paint("━━━ Warnings ━━━", ansi::GRAY));
        for r in &warnings {
            print_violation(r, "⚠", ansi::YELLOW, &palette);
            if r.requires_confirmation {
                println!("      {}", palette.dim("requires explicit confirmation before publish"));
            }
        }
    }

    println!("\n{}", palette.paint("━━━ Passed ━━━", ansi::GRAY));
    for r in report.results().iter().filter(|r| r.passed && !r.requires_confirmation) {
        println!("  {} {}", palette.paint("✓", ansi::GREEN), palette.dim(r.rule));
    }

    let summary = report.summary();
    println!("\n{}", palette.paint("━━━ Summary ━━━", ansi::GRAY));
    println!(
        "  {}  │  Passed: {}  Failed: {}  Warnings: {}  │  Score: {}",
        if report.is_compliant() {
            palette.bold(palette.paint("COMPLIANT", ansi::GREEN))
        } else {
            palette.bold(palette.paint("NOT COMPLIANT", ansi::RED))
        },
        palette.paint(summary.passed.to_string(), ansi::GREEN),
        palette.paint(summary.failed.to_string(), ansi::RED),
        palette.paint(summary.warnings.to_string(), ansi::YELLOW),
        palette.paint(format!("{:.0}%", summary.score), ansi::CYAN),
    );
    println!();
}

fn print_violation(r: &RuleResult, mark: &str, color: &'static str, palette: &ansi::Palette) {
    let element = match &r.element {
        Some(id) => palette.dim(format!("  (element '{id}')")),
        None => String::new(),
    };
    println!(
        "  {} {} {} {}{}",
        palette.paint(mark, color),
        palette.bold(r.rule),
        palette.dim("│"),
        r.message,
        element
    );
    if !r.suggestion.is_empty() {
        println!("      {} {}", palette.dim("try:"), palette.paint(r.suggestion.join(" · "), ansi::CYAN));
    }
}

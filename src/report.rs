use gradesize::{Document, ExtractionResultVerbose, PriorAnnotation, StageMetrics};

/// What a piece of report text is, mapped to an ANSI SGR code.
#[derive(Clone, Copy)]
enum Style {
    Title,
    Rule,
    Label,
    Covered,
    Offsets,
    Concept,
    Found,
    Muted,
}

impl Style {
    fn sgr(self) -> &'static str {
        match self {
            Style::Title => "1;36",
            Style::Rule => "90",
            Style::Label => "34",
            Style::Covered => "1;32",
            Style::Offsets => "33",
            Style::Concept => "36",
            Style::Found => "32",
            Style::Muted => "2",
        }
    }
}

struct Palette {
    enabled: bool,
}

impl Palette {
    fn apply(&self, style: Style, s: impl AsRef<str>) -> String {
        if self.enabled { format!("\x1b[{}m{}\x1b[0m", style.sgr(), s.as_ref()) } else { s.as_ref().to_string() }
    }

    fn rule(&self, title: &str) -> String {
        self.apply(Style::Rule, format!("━━━ {title} ━━━"))
    }
}

pub fn print_run(document: &Document, run: &ExtractionResultVerbose, color: bool) {
    let palette = Palette { enabled: color };
    let preview: String = document.text().chars().take(60).collect::<String>().replace('\n', " ");
    println!("\n{}", palette.apply(Style::Title, format!("⚙  Extracting: \"{}\"", preview)));

    println!("\n{}", palette.rule("Stages"));
    print_stage("grade", &run.details.metrics.grade, &palette);
    print_stage("size", &run.details.metrics.size, &palette);

    println!("\n{}", palette.rule("Annotations"));
    if run.result.annotations.is_empty() {
        println!("{}", palette.apply(Style::Muted, "  No attributes found"));
        println!("\n{}", palette.apply(Style::Muted, "  Tip: set RUST_LOG=gradesize=debug to trace the stages"));
    } else {
        for (idx, ann) in run.result.annotations.iter().enumerate() {
            println!(
                "  {} {} {} {}",
                palette.apply(Style::Rule, format!("[{}]", idx)),
                palette.apply(Style::Covered, &ann.covered_text),
                palette.apply(Style::Muted, "│"),
                palette.apply(Style::Offsets, format!("span {}..{}", ann.start, ann.end)),
            );
            println!(
                "      {} {}  {} {}",
                palette.apply(Style::Muted, "category:"),
                palette.apply(Style::Label, ann.category.name()),
                palette.apply(Style::Muted, "│ concept:"),
                palette.apply(Style::Concept, &ann.concept_id)
            );
        }
    }

    if !run.result.suppressed.is_empty() || !run.details.cleared.is_empty() {
        println!("\n{}", palette.rule("Removed priors"));
        print_priors("suppressed", &run.result.suppressed, &palette);
        print_priors("cleared", &run.details.cleared, &palette);
    }

    println!("\n{}", palette.rule("Timing"));
    println!(
        "  Total: {}  │  Grade: {}  │  Size: {}",
        palette.apply(Style::Found, format!("{:?}", run.details.metrics.total)),
        palette.apply(Style::Concept, format!("{:?}", run.details.metrics.grade.duration)),
        palette.apply(Style::Concept, format!("{:?}", run.details.metrics.size.duration)),
    );
    println!();
}

fn print_stage(name: &str, metrics: &StageMetrics, palette: &Palette) {
    let label = palette.apply(Style::Label, format!("{name}:"));
    let found = if metrics.annotations > 0 {
        palette.apply(Style::Found, format!("✓ {} annotations", metrics.annotations))
    } else {
        palette.apply(Style::Muted, format!("✗ {} annotations", metrics.annotations))
    };
    println!(
        "  {} {} {}",
        label,
        found,
        palette.apply(
            Style::Muted,
            format!(
                "({} windows, {} candidates, {} suppressed, {} skipped)",
                metrics.windows, metrics.candidates, metrics.suppressed, metrics.skipped
            )
        )
    );
}

fn print_priors(label: &str, priors: &[PriorAnnotation], palette: &Palette) {
    for prior in priors {
        println!(
            "  {} {} {} {}",
            palette.apply(Style::Offsets, label),
            palette.apply(Style::Offsets, format!("{}..{}", prior.start, prior.end)),
            palette.apply(Style::Label, &prior.branch),
            palette.apply(Style::Muted, &prior.concept_id)
        );
    }
}
